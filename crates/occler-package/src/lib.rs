//! Document generation and ZIP packaging for OCCLER components.
//!
//! Renders the per-component documents designers receive and assembles them,
//! together with the shared Linear stylesheets, into downloadable archives.

pub mod archive;
pub mod assets;
pub mod builder;
pub mod classes;
pub mod templates;

pub use archive::{ArchiveEntry, ArchiveError, ArchiveTree, Folder};
pub use assets::{AssetPipeline, ThemeAssets};
pub use builder::{
    Archive, ArchiveBuilder, ArchiveRequest, BuildError, PackageOptions, COMPLETE_ARCHIVE_LABEL,
    COMPLETE_ARCHIVE_NAME,
};
pub use classes::extract_css_classes;
pub use templates::Documents;
