//! Component catalog for the OCCLER design-system packager.
//!
//! Holds the read-only set of component descriptors that archives are built
//! from, either the built-in Linear components or ones loaded from a
//! components directory at startup.

pub mod builtin;
pub mod descriptor;
pub mod loader;
pub mod registry;

pub use descriptor::{Category, ComponentDescriptor, SHARED_FILES};
pub use loader::ComponentManifest;
pub use registry::{Catalog, CatalogError};
