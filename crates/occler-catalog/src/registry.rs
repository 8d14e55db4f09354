//! The component catalog.
//!
//! Built once at startup and shared read-only afterwards. Lookup is by id;
//! enumeration follows insertion order so archive layouts are reproducible.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use crate::descriptor::{Category, ComponentDescriptor, SHARED_FILES};
use crate::loader;

/// A read-only set of component descriptors.
#[derive(Debug, Default, Clone)]
pub struct Catalog {
    /// Descriptors in insertion order
    components: Vec<ComponentDescriptor>,

    /// Position of each id in `components`
    index: HashMap<String, usize>,

    /// Archive folders in use, one per component
    folders: HashSet<(Category, String)>,
}

impl Catalog {
    /// Create a catalog, rejecting duplicate ids and duplicate display
    /// names within a category.
    pub fn new(
        descriptors: impl IntoIterator<Item = ComponentDescriptor>,
    ) -> Result<Self, CatalogError> {
        let mut catalog = Self::default();
        for descriptor in descriptors {
            catalog.insert(descriptor)?;
        }
        Ok(catalog)
    }

    /// The built-in Linear components.
    pub fn builtin() -> Self {
        Self::new(crate::builtin::components()).expect("built-in component ids are unique")
    }

    /// Load every component manifest found under `dir` into a new catalog.
    pub fn load_dir(dir: &Path) -> Result<Self, CatalogError> {
        Self::new(loader::scan(dir)?)
    }

    /// Add the components found under `dir` to this catalog.
    ///
    /// Returns the number of components added. On error the catalog is left
    /// unchanged. Intended for startup, before the catalog is shared.
    pub fn extend_from_dir(&mut self, dir: &Path) -> Result<usize, CatalogError> {
        let mut extended = self.clone();
        for descriptor in loader::scan(dir)? {
            extended.insert(descriptor)?;
        }

        let count = extended.len() - self.len();
        *self = extended;
        Ok(count)
    }

    fn insert(&mut self, descriptor: ComponentDescriptor) -> Result<(), CatalogError> {
        // `{id}.css` shares a folder with the shared stylesheets
        if SHARED_FILES
            .iter()
            .any(|file| file.strip_suffix(".css") == Some(descriptor.id.as_str()))
        {
            return Err(CatalogError::ReservedId(descriptor.id));
        }
        if self.index.contains_key(&descriptor.id) {
            return Err(CatalogError::DuplicateId(descriptor.id));
        }

        let folder = (descriptor.category, descriptor.name.clone());
        if self.folders.contains(&folder) {
            return Err(CatalogError::DuplicateName {
                category: descriptor.category,
                name: descriptor.name,
            });
        }

        self.folders.insert(folder);
        self.index
            .insert(descriptor.id.clone(), self.components.len());
        self.components.push(descriptor);
        Ok(())
    }

    /// Look up a component by id.
    pub fn lookup(&self, id: &str) -> Result<&ComponentDescriptor, CatalogError> {
        self.index
            .get(id)
            .map(|&i| &self.components[i])
            .ok_or_else(|| CatalogError::ComponentNotFound(id.to_string()))
    }

    /// Check if a component exists.
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Iterate over all components in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ComponentDescriptor> {
        self.components.iter()
    }

    /// Components of one category, in insertion order.
    pub fn in_category(&self, category: Category) -> impl Iterator<Item = &ComponentDescriptor> {
        self.components
            .iter()
            .filter(move |c| c.category == category)
    }

    /// Number of components.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Whether the catalog has no components.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

/// Errors that can occur with the catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Component not found: {0}")]
    ComponentNotFound(String),

    #[error("Duplicate component id: {0}")]
    DuplicateId(String),

    #[error("Component id '{0}' is reserved for a shared stylesheet")]
    ReservedId(String),

    #[error("Duplicate component name '{name}' in {category}")]
    DuplicateName { category: Category, name: String },

    #[error("Components directory not found: {0}")]
    DirectoryNotFound(String),

    #[error("Invalid component manifest {path}: {message}")]
    InvalidManifest { path: String, message: String },
}
