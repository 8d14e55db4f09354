//! Delivery to a directory on disk.

use std::fs;
use std::path::{Path, PathBuf};

use occler_package::Archive;

use crate::traits::{Delivery, DeliveryError};

/// Writes archives into a directory under their suggested filename.
#[derive(Debug, Clone)]
pub struct FileDelivery {
    dir: PathBuf,
}

impl FileDelivery {
    /// Deliver into `dir`, created on first use.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The output directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl Delivery for FileDelivery {
    type Output = PathBuf;

    fn deliver(&self, archive: Archive) -> Result<PathBuf, DeliveryError> {
        fs::create_dir_all(&self.dir).map_err(|e| {
            DeliveryError::Unavailable(format!("{}: {}", self.dir.display(), e))
        })?;

        let path = self.dir.join(&archive.filename);
        fs::write(&path, &archive.bytes)
            .map_err(|e| DeliveryError::Unavailable(format!("{}: {}", path.display(), e)))?;

        tracing::debug!("Wrote {} bytes to {}", archive.bytes.len(), path.display());

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn archive() -> Archive {
        Archive {
            bytes: b"PK-test".to_vec(),
            filename: "occler-toggles-component.zip".to_string(),
            label: "Toggle Switches".to_string(),
            entries: vec![],
        }
    }

    #[test]
    fn writes_archive_under_suggested_name() {
        let temp = tempdir().unwrap();
        let delivery = FileDelivery::new(temp.path().join("downloads"));

        let path = delivery.deliver(archive()).unwrap();

        assert_eq!(path, temp.path().join("downloads/occler-toggles-component.zip"));
        assert_eq!(fs::read(&path).unwrap(), b"PK-test");
    }

    #[test]
    fn unwritable_target_is_unavailable() {
        let temp = tempdir().unwrap();
        let blocker = temp.path().join("not-a-dir");
        fs::write(&blocker, "file").unwrap();

        let result = FileDelivery::new(&blocker).deliver(archive());

        assert!(matches!(result, Err(DeliveryError::Unavailable(_))));
    }
}
