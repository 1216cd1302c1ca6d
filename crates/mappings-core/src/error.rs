use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the Biomappings export tooling.
#[derive(Error, Debug)]
pub enum MappingsError {
    /// A resource file could not be opened or read from disk.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An output file could not be written.
    #[error("Failed to write file {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A TSV resource lacks one of the required record columns.
    #[error("Missing column '{column}' in {path}")]
    MissingColumn { path: PathBuf, column: String },

    /// A TSV row could not be decoded into a mapping record.
    #[error("Failed to parse TSV: {0}")]
    Tsv(#[from] csv::Error),

    /// The summary document could not be rendered as YAML.
    #[error("Failed to serialize YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Convenience alias used throughout the mappings crates.
pub type Result<T> = std::result::Result<T, MappingsError>;
