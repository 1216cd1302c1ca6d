use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::error::{MappingsError, Result};

/// Default location of the curated TSV resources, relative to the repository root.
pub const DEFAULT_RESOURCES_DIR: &str = "src/biomappings/resources";

/// Default location of the static-site summary data file.
pub const DEFAULT_SUMMARY_PATH: &str = "docs/_data/summary.yml";

/// Default location of the rendered CX network.
pub const DEFAULT_CX_PATH: &str = "biomappings.cx.json";

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Summaries and network exports for the Biomappings collection
#[derive(Parser, Debug, Clone)]
#[command(
    name = "biomappings",
    about = "Summaries and network exports for the Biomappings collection",
    version
)]
pub struct Settings {
    #[command(subcommand)]
    pub command: Command,

    /// Directory holding mappings.tsv, incorrect.tsv and predictions.tsv
    #[arg(long, global = true, env = "BIOMAPPINGS_RESOURCES", default_value = DEFAULT_RESOURCES_DIR)]
    pub resources: PathBuf,

    /// Logging level
    #[arg(long, global = true, default_value = "INFO", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"])]
    pub log_level: String,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,
}

/// Export to run.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Create the summary data file for the website
    Summary {
        /// Where to write the YAML summary
        #[arg(long, default_value = DEFAULT_SUMMARY_PATH)]
        output: PathBuf,
    },
    /// Build the NDEx network from the positive mappings
    Ndex {
        /// Where to write the CX document
        #[arg(long, default_value = DEFAULT_CX_PATH)]
        output: PathBuf,

        /// Content version recorded on the network (usually a git hash)
        #[arg(long, env = "BIOMAPPINGS_VERSION", default_value = "unknown")]
        version_stamp: String,
    },
}

impl Settings {
    /// Parse the process arguments.
    pub fn load() -> Self {
        Self::parse()
    }

    /// The level to log at once `--debug` has been taken into account.
    pub fn effective_log_level(&self) -> &str {
        if self.debug {
            "DEBUG"
        } else {
            &self.log_level
        }
    }

    /// Resolve the three resource files under `--resources`.
    pub fn resource_paths(&self) -> Result<ResourcePaths> {
        ResourcePaths::in_dir(&self.resources)
    }
}

// ── ResourcePaths ──────────────────────────────────────────────────────────────

/// Locations of the three curated record collections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourcePaths {
    /// Curated true mappings.
    pub positive: PathBuf,
    /// Curated false mappings.
    pub negative: PathBuf,
    /// Predicted mappings awaiting curation.
    pub predictions: PathBuf,
}

impl ResourcePaths {
    /// Standard file names rooted at `dir`.
    pub fn in_dir(dir: &Path) -> Result<Self> {
        if dir.as_os_str().is_empty() {
            return Err(MappingsError::Config(
                "resources directory must not be empty".to_string(),
            ));
        }
        Ok(Self {
            positive: dir.join("mappings.tsv"),
            negative: dir.join("incorrect.tsv"),
            predictions: dir.join("predictions.tsv"),
        })
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
