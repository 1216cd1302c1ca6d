//! TSV loading for the curated mapping collections.
//!
//! Each resource is a tab-separated file whose header row names the record
//! columns (`source prefix`, `source identifier`, ...). Extra columns such as
//! the `confidence` of predictions are ignored.

use std::path::Path;

use csv::ReaderBuilder;
use mappings_core::error::{MappingsError, Result};
use mappings_core::models::MappingRecord;
use mappings_core::settings::ResourcePaths;
use tracing::{debug, info};

/// Columns every resource must provide.
pub const REQUIRED_COLUMNS: [&str; 9] = [
    "source prefix",
    "source identifier",
    "source name",
    "relation",
    "target prefix",
    "target identifier",
    "target name",
    "type",
    "source",
];

// ── Public API ────────────────────────────────────────────────────────────────

/// Load the curated true mappings.
pub fn load_mappings(paths: &ResourcePaths) -> Result<Vec<MappingRecord>> {
    load_records(&paths.positive)
}

/// Load the curated false mappings.
pub fn load_false_mappings(paths: &ResourcePaths) -> Result<Vec<MappingRecord>> {
    load_records(&paths.negative)
}

/// Load the predicted mappings.
pub fn load_predictions(paths: &ResourcePaths) -> Result<Vec<MappingRecord>> {
    load_records(&paths.predictions)
}

/// Read every record of the TSV file at `path`, in file order.
pub fn load_records(path: &Path) -> Result<Vec<MappingRecord>> {
    let file = std::fs::File::open(path).map_err(|source| MappingsError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .quoting(false)
        .from_reader(file);

    let headers = reader.headers()?.clone();
    if let Some(column) = REQUIRED_COLUMNS
        .iter()
        .find(|column| !headers.iter().any(|h| h == **column))
    {
        return Err(MappingsError::MissingColumn {
            path: path.to_path_buf(),
            column: column.to_string(),
        });
    }

    let records = reader
        .deserialize::<MappingRecord>()
        .collect::<std::result::Result<Vec<_>, csv::Error>>()?;

    debug!("Columns in {}: {}", path.display(), headers.len());
    info!("Loaded {} records from {}", records.len(), path.display());

    Ok(records)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
