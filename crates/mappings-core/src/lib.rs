//! Shared building blocks for the Biomappings export tools.
//!
//! Holds the mapping record schema, the error type and the command-line
//! settings used by the summary and network exporters.

pub mod error;
pub mod models;
pub mod settings;
