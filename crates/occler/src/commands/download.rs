//! Download command: build an archive and write it to disk.

use std::path::{Path, PathBuf};

use anyhow::Result;
use occler_delivery::{download, FileDelivery, LogNotifier};
use occler_package::ArchiveRequest;

use crate::config::load_config;

/// What to download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Component(String),
    All,
}

impl From<Target> for ArchiveRequest {
    fn from(target: Target) -> Self {
        match target {
            Target::Component(id) => ArchiveRequest::single(id),
            Target::All => ArchiveRequest::All,
        }
    }
}

/// Run the download command. Returns the written archive path.
pub async fn run(config_path: &Path, target: Target, output: Option<PathBuf>) -> Result<PathBuf> {
    let config = load_config(config_path)?;
    let builder = config.archive_builder()?;
    let delivery = FileDelivery::new(output.unwrap_or_else(|| config.output_dir()));

    let path = download(&builder, &target.into(), &delivery, &LogNotifier).await?;

    tracing::info!("Output: {}", path.display());

    Ok(path)
}
