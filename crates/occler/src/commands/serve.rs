//! Download server command.

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use occler_delivery::{DownloadServer, DownloadServerConfig};

use crate::config::load_config;

/// Run the download server.
pub async fn run(config_path: &Path, port: Option<u16>, open: bool) -> Result<()> {
    let config = load_config(config_path)?;
    let builder = Arc::new(config.archive_builder()?);

    let previews_dir = config.server.previews.clone();
    if let Some(dir) = &previews_dir {
        if !dir.exists() {
            tracing::warn!("Preview directory {} does not exist", dir.display());
        }
    }

    let server_config = DownloadServerConfig {
        host: config.server.host.clone(),
        port: port.unwrap_or(config.server.port),
        open,
        previews_dir,
    };

    tracing::info!(
        "Serving {} components on port {}",
        builder.catalog().len(),
        server_config.port
    );

    DownloadServer::new(server_config, builder).start().await?;

    Ok(())
}
