//! Network export of the Biomappings collection.
//!
//! Turns the positive mappings into a node/edge model keyed by normalized
//! CURIEs, renders it as CX and hands it to a [`upload::NetworkUploader`].

pub mod curie;
pub mod cx;
pub mod graph;
pub mod upload;
