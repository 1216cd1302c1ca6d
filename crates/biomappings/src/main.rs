mod bootstrap;
mod commands;

use anyhow::Result;
use mappings_core::settings::{Command, Settings};

fn main() -> Result<()> {
    let settings = Settings::load();

    bootstrap::setup_logging(settings.effective_log_level())?;

    tracing::info!("Biomappings export v{} starting", env!("CARGO_PKG_VERSION"));

    let paths = settings.resource_paths()?;
    tracing::debug!("Reading resources from {}", settings.resources.display());

    match &settings.command {
        Command::Summary { output } => {
            commands::export_summary(&paths, output)?;
        }
        Command::Ndex {
            output,
            version_stamp,
        } => {
            tracing::info!("Exporting network version {}", version_stamp);
            commands::export_network_file(&paths, version_stamp, output)?;
        }
    }

    Ok(())
}
