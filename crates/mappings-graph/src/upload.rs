//! Hand-off point between the exporter and a network host.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::cx::to_cx;
use crate::graph::GraphModel;

/// Identifier of the Biomappings network on the public NDEx server.
pub const NDEX_NETWORK_UUID: &str = "402d1fd6-49d6-11eb-9e72-0ac135e8bacf";

/// Failures reported by a [`NetworkUploader`].
#[derive(Error, Debug)]
pub enum UploadError {
    /// The host refused the supplied credentials.
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// The host could not be reached or dropped the request.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The network could not be rendered as CX.
    #[error("Failed to encode network: {0}")]
    Encode(#[from] serde_json::Error),

    /// The rendered network could not be written locally.
    #[error("Failed to write network to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Something that accepts a finished network, such as an NDEx client.
///
/// Failures are surfaced to the caller as-is; nothing is retried here.
pub trait NetworkUploader {
    fn upload(&self, model: &GraphModel) -> Result<(), UploadError>;
}

/// Writes the CX rendering of the network to a local file.
#[derive(Debug, Clone)]
pub struct CxFileUploader {
    path: PathBuf,
}

impl CxFileUploader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling of the output named `<file name>.tmp`, e.g. `net.cx.json.tmp`.
    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl NetworkUploader for CxFileUploader {
    fn upload(&self, model: &GraphModel) -> Result<(), UploadError> {
        let json = serde_json::to_string_pretty(&to_cx(model))?;

        let write_err = |source: std::io::Error| UploadError::Write {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }

        // Write to a temp file then rename for atomicity.
        let tmp = self.temp_path();
        std::fs::write(&tmp, json).map_err(write_err)?;
        std::fs::rename(&tmp, &self.path).map_err(write_err)?;

        info!(
            "Wrote network {} ({} nodes, {} edges) to {}",
            NDEX_NETWORK_UUID,
            model.nodes().len(),
            model.edges().len(),
            self.path.display()
        );
        Ok(())
    }
}
