//! Summary statistics for the Biomappings website.
//!
//! Loads the curated TSV collections, counts mappings per prefix pair and
//! per contributor, and writes the summary data file consumed by the site.

pub mod aggregator;
pub mod reader;
pub mod summary;
