//! Virtual directory tree and ZIP serialization.

use std::io::{Cursor, Write};

use zip::result::ZipResult;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

/// A file inside an archive being assembled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    /// Slash-separated path from the archive root
    pub path: String,

    /// File contents
    pub contents: Vec<u8>,
}

/// Errors raised while laying out an archive.
#[derive(Debug, thiserror::Error)]
pub enum ArchiveError {
    #[error("Duplicate archive entry: {0}")]
    DuplicatePath(String),
}

/// An in-memory directory tree, written out as a ZIP archive.
///
/// Entries keep their insertion order. Folders are implied by entry paths;
/// no directory entries are written. Each path holds exactly one file.
#[derive(Debug, Clone, Default)]
pub struct ArchiveTree {
    entries: Vec<ArchiveEntry>,
}

impl ArchiveTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file at the archive root. Fails if the path is already taken.
    pub fn file(
        &mut self,
        path: impl Into<String>,
        contents: impl Into<Vec<u8>>,
    ) -> Result<&mut Self, ArchiveError> {
        let path = path.into();
        if self.entries.iter().any(|e| e.path == path) {
            return Err(ArchiveError::DuplicatePath(path));
        }

        self.entries.push(ArchiveEntry {
            path,
            contents: contents.into(),
        });
        Ok(self)
    }

    /// Open a folder at the archive root.
    pub fn folder(&mut self, name: &str) -> Folder<'_> {
        Folder {
            tree: self,
            prefix: format!("{}/", name),
        }
    }

    /// All entries in insertion order.
    pub fn entries(&self) -> &[ArchiveEntry] {
        &self.entries
    }

    /// Entry paths in insertion order.
    pub fn paths(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.path.clone()).collect()
    }

    /// Number of files.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the tree has no files.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialize the tree to a DEFLATE-compressed ZIP archive.
    ///
    /// Timestamps are pinned to the ZIP epoch, so the same tree always
    /// produces the same bytes.
    pub fn serialize(&self) -> ZipResult<Vec<u8>> {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .last_modified_time(DateTime::default());

        for entry in &self.entries {
            zip.start_file(entry.path.as_str(), options)?;
            zip.write_all(&entry.contents)?;
        }

        Ok(zip.finish()?.into_inner())
    }
}

/// A folder handle inside an [`ArchiveTree`].
pub struct Folder<'a> {
    tree: &'a mut ArchiveTree,
    prefix: String,
}

impl Folder<'_> {
    /// Add a file to this folder.
    pub fn file(
        &mut self,
        name: &str,
        contents: impl Into<Vec<u8>>,
    ) -> Result<&mut Self, ArchiveError> {
        self.tree.file(format!("{}{}", self.prefix, name), contents)?;
        Ok(self)
    }

    /// Open a nested folder.
    pub fn folder(&mut self, name: &str) -> Folder<'_> {
        Folder {
            prefix: format!("{}{}/", self.prefix, name),
            tree: &mut *self.tree,
        }
    }

    /// Path of this folder, with a trailing slash.
    pub fn path(&self) -> &str {
        &self.prefix
    }
}
