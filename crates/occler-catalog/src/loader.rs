//! Loads component definitions from a components directory.
//!
//! Each component lives in its own folder with a `component.toml` manifest
//! next to its markup and stylesheet:
//!
//! ```text
//! components/
//! └── outline-buttons/
//!     ├── component.toml
//!     ├── markup.html
//!     └── style.css
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;
use walkdir::WalkDir;

use crate::descriptor::{Category, ComponentDescriptor, SHARED_FILES};
use crate::registry::CatalogError;

/// File name of a component manifest.
pub const MANIFEST_FILE: &str = "component.toml";

/// Contents of a `component.toml` file.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ComponentManifest {
    /// Unique component id
    pub id: String,

    /// Display name
    pub name: String,

    /// Category folder
    pub category: Category,

    /// One-line summary
    #[serde(default)]
    pub description: String,

    /// Shared stylesheet files
    #[serde(default = "default_files")]
    pub files: Vec<String>,

    /// Preview image filename (defaults to `{id}-preview.png`)
    #[serde(default)]
    pub preview: Option<String>,

    /// Markup file, relative to the manifest
    #[serde(default = "default_markup")]
    pub markup: String,

    /// Stylesheet file, relative to the manifest
    #[serde(default = "default_stylesheet")]
    pub stylesheet: String,
}

fn default_files() -> Vec<String> {
    SHARED_FILES.iter().map(|f| f.to_string()).collect()
}
fn default_markup() -> String {
    "markup.html".to_string()
}
fn default_stylesheet() -> String {
    "style.css".to_string()
}

/// Scan a directory for component manifests.
///
/// Results are sorted by manifest path so repeated scans give the same order.
pub fn scan(dir: &Path) -> Result<Vec<ComponentDescriptor>, CatalogError> {
    if !dir.exists() {
        return Err(CatalogError::DirectoryNotFound(dir.display().to_string()));
    }

    let mut manifests: Vec<_> = WalkDir::new(dir)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file() && e.file_name() == MANIFEST_FILE)
        .map(|e| e.into_path())
        .collect();
    manifests.sort();

    let mut descriptors = Vec::with_capacity(manifests.len());
    for path in manifests {
        let descriptor = load_component(&path)?;
        tracing::debug!("Loaded component '{}' from {}", descriptor.id, path.display());
        descriptors.push(descriptor);
    }

    Ok(descriptors)
}

/// Load one component from its manifest path.
pub fn load_component(manifest_path: &Path) -> Result<ComponentDescriptor, CatalogError> {
    let invalid = |message: String| CatalogError::InvalidManifest {
        path: manifest_path.display().to_string(),
        message,
    };

    let content = fs::read_to_string(manifest_path).map_err(|e| invalid(e.to_string()))?;
    let manifest: ComponentManifest = toml::from_str(&content).map_err(|e| invalid(e.to_string()))?;

    let base = manifest_path.parent().unwrap_or(Path::new(""));
    let markup = fs::read_to_string(base.join(&manifest.markup))
        .map_err(|e| invalid(format!("{}: {}", manifest.markup, e)))?;
    let stylesheet = fs::read_to_string(base.join(&manifest.stylesheet))
        .map_err(|e| invalid(format!("{}: {}", manifest.stylesheet, e)))?;

    let preview = manifest
        .preview
        .unwrap_or_else(|| format!("{}-preview.png", manifest.id));

    Ok(ComponentDescriptor {
        id: manifest.id,
        name: manifest.name,
        category: manifest.category,
        description: manifest.description,
        files: manifest.files,
        markup,
        stylesheet,
        preview,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Catalog;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn write_component(dir: &Path, id: &str, category: &str) {
        let comp = dir.join(id);
        fs::create_dir_all(&comp).unwrap();
        fs::write(
            comp.join(MANIFEST_FILE),
            format!("id = \"{id}\"\nname = \"Outline Buttons\"\ncategory = \"{category}\"\n"),
        )
        .unwrap();
        fs::write(comp.join("markup.html"), "<button class=\"btn-outline\">Go</button>").unwrap();
        fs::write(comp.join("style.css"), ".btn-outline { border: 1px solid; }").unwrap();
    }

    #[test]
    fn loads_components_from_directory() {
        let temp = tempdir().unwrap();
        write_component(temp.path(), "outline-buttons", "buttons");

        let catalog = Catalog::load_dir(temp.path()).unwrap();
        let desc = catalog.lookup("outline-buttons").unwrap();

        assert_eq!(desc.name, "Outline Buttons");
        assert_eq!(desc.category, Category::Buttons);
        assert_eq!(desc.stylesheet, ".btn-outline { border: 1px solid; }");
        assert_eq!(desc.files, vec!["linear-theme.css", "linear-components.css"]);
        assert_eq!(desc.preview, "outline-buttons-preview.png");
    }

    #[test]
    fn rejects_unknown_category() {
        let temp = tempdir().unwrap();
        write_component(temp.path(), "modal", "modals");

        let result = scan(temp.path());

        assert!(matches!(result, Err(CatalogError::InvalidManifest { .. })));
    }

    #[test]
    fn rejects_missing_stylesheet() {
        let temp = tempdir().unwrap();
        write_component(temp.path(), "outline-buttons", "buttons");
        fs::remove_file(temp.path().join("outline-buttons/style.css")).unwrap();

        let result = scan(temp.path());

        assert!(matches!(result, Err(CatalogError::InvalidManifest { .. })));
    }

    #[test]
    fn missing_directory_is_an_error() {
        let temp = tempdir().unwrap();

        let result = scan(&temp.path().join("nope"));

        assert!(matches!(result, Err(CatalogError::DirectoryNotFound(_))));
    }

    #[test]
    fn extending_builtin_rejects_collisions() {
        let temp = tempdir().unwrap();
        write_component(temp.path(), "primary-buttons", "buttons");

        let mut catalog = Catalog::builtin();
        let result = catalog.extend_from_dir(temp.path());

        assert!(matches!(result, Err(CatalogError::DuplicateId(id)) if id == "primary-buttons"));
    }
}
