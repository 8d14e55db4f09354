//! Archive builder.
//!
//! Resolves a request against the catalog, renders the documents, lays them
//! out in a virtual tree and serializes the tree to a ZIP archive. Nothing is
//! returned unless the whole archive serialized.

use std::sync::Arc;
use std::time::Instant;

use rayon::prelude::*;

use occler_catalog::{Catalog, Category, ComponentDescriptor};

use crate::archive::{ArchiveError, ArchiveTree, Folder};
use crate::assets::{AssetPipeline, ThemeAssets};
use crate::templates::Documents;

/// Prefix of every suggested archive filename.
pub const FILENAME_PREFIX: &str = "occler";

/// Suggested filename of the complete archive.
pub const COMPLETE_ARCHIVE_NAME: &str = "occler-linear-design-system-complete.zip";

/// Label used when announcing the complete archive.
pub const COMPLETE_ARCHIVE_LABEL: &str = "Linear Design System";

/// What to package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArchiveRequest {
    /// One component with its docs and the shared stylesheets
    Single { component_id: String },

    /// Every catalog component, grouped by category
    All,
}

impl ArchiveRequest {
    /// Request a single component.
    pub fn single(component_id: impl Into<String>) -> Self {
        Self::Single {
            component_id: component_id.into(),
        }
    }
}

/// Packaging options.
#[derive(Debug, Clone, Default)]
pub struct PackageOptions {
    /// Minify stylesheet files written into archives
    pub minify: bool,
}

/// A serialized archive ready for delivery.
#[derive(Debug, Clone)]
pub struct Archive {
    /// ZIP bytes
    pub bytes: Vec<u8>,

    /// Suggested download filename
    pub filename: String,

    /// What the archive contains, for user-facing messages
    pub label: String,

    /// Entry paths in archive order
    pub entries: Vec<String>,
}

/// Errors that can occur during a build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Component not found: {0}")]
    ComponentNotFound(String),

    #[error("Failed to render {document}: {message}")]
    Render { document: String, message: String },

    #[error(transparent)]
    Layout(#[from] ArchiveError),

    #[error("Failed to serialize archive: {0}")]
    SerializationFailure(String),
}

/// Documents rendered for one component.
struct RenderedComponent<'a> {
    component: &'a ComponentDescriptor,
    html: String,
    css: String,
    readme: String,
    usage_guide: Option<String>,
}

impl RenderedComponent<'_> {
    /// Write the component files into `folder`.
    fn write_to(&self, folder: &mut Folder<'_>) -> Result<(), ArchiveError> {
        let id = &self.component.id;
        folder
            .file(&format!("{}.html", id), self.html.as_bytes())?
            .file(&format!("{}.css", id), self.css.as_bytes())?
            .file("README.md", self.readme.as_bytes())?;

        if let Some(guide) = &self.usage_guide {
            folder.file("usage-guide.md", guide.as_bytes())?;
        }
        Ok(())
    }
}

/// A laid-out archive, not yet serialized.
struct Assembled {
    tree: ArchiveTree,
    filename: String,
    label: String,
}

/// Builds component archives from a shared catalog.
pub struct ArchiveBuilder {
    catalog: Arc<Catalog>,
    documents: Documents,
    assets: ThemeAssets,
    options: PackageOptions,
}

impl ArchiveBuilder {
    /// Create a builder with the built-in stylesheets and default options.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            documents: Documents::new(),
            assets: ThemeAssets::builtin(),
            options: PackageOptions::default(),
        }
    }

    /// Use different shared stylesheets.
    pub fn with_assets(mut self, assets: ThemeAssets) -> Self {
        self.assets = assets;
        self
    }

    /// Set packaging options.
    pub fn with_options(mut self, options: PackageOptions) -> Self {
        self.options = options;
        self
    }

    /// The catalog archives are built from.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The document generators.
    pub fn documents(&self) -> &Documents {
        &self.documents
    }

    /// Build the archive for `request`.
    ///
    /// Serialization runs on the blocking pool; the returned future resolves
    /// once the archive is complete or the build has failed.
    pub async fn build(&self, request: &ArchiveRequest) -> Result<Archive, BuildError> {
        let start = Instant::now();

        let Assembled {
            tree,
            filename,
            label,
        } = match request {
            ArchiveRequest::Single { component_id } => self.assemble_single(component_id)?,
            ArchiveRequest::All => self.assemble_complete()?,
        };

        let entries = tree.paths();
        let bytes = tokio::task::spawn_blocking(move || tree.serialize())
            .await
            .map_err(|e| BuildError::SerializationFailure(e.to_string()))?
            .map_err(|e| BuildError::SerializationFailure(e.to_string()))?;

        tracing::debug!(
            "Built {} ({} entries, {} bytes) in {}ms",
            filename,
            entries.len(),
            bytes.len(),
            start.elapsed().as_millis()
        );

        Ok(Archive {
            bytes,
            filename,
            label,
            entries,
        })
    }

    /// Lay out a single-component archive.
    fn assemble_single(&self, component_id: &str) -> Result<Assembled, BuildError> {
        let component = self
            .catalog
            .lookup(component_id)
            .map_err(|_| BuildError::ComponentNotFound(component_id.to_string()))?;

        let rendered = self.render_component(component, true)?;

        let mut tree = ArchiveTree::new();
        let mut folder = tree.folder(&component.name);
        rendered.write_to(&mut folder)?;
        self.write_shared(&mut folder)?;

        Ok(Assembled {
            tree,
            filename: format!("{}-{}-component.zip", FILENAME_PREFIX, component.id),
            label: component.name.clone(),
        })
    }

    /// Lay out the complete archive. Usage guides are only shipped with
    /// single-component archives.
    fn assemble_complete(&self) -> Result<Assembled, BuildError> {
        let components: Vec<&ComponentDescriptor> = self.catalog.iter().collect();

        let rendered: Vec<RenderedComponent<'_>> = components
            .par_iter()
            .map(|component| self.render_component(*component, false))
            .collect::<Result<Vec<_>, _>>()?;

        let mut tree = ArchiveTree::new();
        tree.file(ThemeAssets::THEME_FILE, self.stylesheet(&self.assets.theme_css))?
            .file(
                ThemeAssets::COMPONENTS_FILE,
                self.stylesheet(&self.assets.components_css),
            )?;

        for category in Category::ALL {
            let mut category_folder = tree.folder(category.as_str());
            for entry in rendered.iter().filter(|r| r.component.category == category) {
                entry.write_to(&mut category_folder.folder(&entry.component.name))?;
            }
        }

        let readme = self
            .documents
            .main_readme(&self.catalog)
            .map_err(|e| render_error("README.md", e))?;

        tree.file("README.md", readme)?
            .file(
                "design-tokens.css",
                self.stylesheet(AssetPipeline::design_tokens_css()),
            )?
            .file("usage-examples.html", AssetPipeline::usage_examples_html())?;

        Ok(Assembled {
            tree,
            filename: COMPLETE_ARCHIVE_NAME.to_string(),
            label: COMPLETE_ARCHIVE_LABEL.to_string(),
        })
    }

    /// Render the documents of one component.
    fn render_component<'a>(
        &self,
        component: &'a ComponentDescriptor,
        with_usage_guide: bool,
    ) -> Result<RenderedComponent<'a>, BuildError> {
        let html = self
            .documents
            .standalone_html(component, &self.assets.theme_css)
            .map_err(|e| render_error(&format!("{}.html", component.id), e))?;

        let readme = self
            .documents
            .readme(component)
            .map_err(|e| render_error(&format!("{}/README.md", component.id), e))?;

        let usage_guide = if with_usage_guide {
            Some(
                self.documents
                    .usage_guide(component)
                    .map_err(|e| render_error(&format!("{}/usage-guide.md", component.id), e))?,
            )
        } else {
            None
        };

        Ok(RenderedComponent {
            component,
            html,
            css: self.stylesheet(&component.stylesheet),
            readme,
            usage_guide,
        })
    }

    /// Write the two shared stylesheets into `folder`.
    fn write_shared(&self, folder: &mut Folder<'_>) -> Result<(), ArchiveError> {
        folder
            .file(ThemeAssets::THEME_FILE, self.stylesheet(&self.assets.theme_css))?
            .file(
                ThemeAssets::COMPONENTS_FILE,
                self.stylesheet(&self.assets.components_css),
            )?;
        Ok(())
    }

    /// Stylesheet text as written into archives.
    fn stylesheet(&self, css: &str) -> String {
        if !self.options.minify {
            return css.to_string();
        }

        AssetPipeline::minify_css(css).unwrap_or_else(|e| {
            tracing::warn!("Keeping unminified stylesheet: {}", e);
            css.to_string()
        })
    }
}

fn render_error(document: &str, e: minijinja::Error) -> BuildError {
    BuildError::Render {
        document: document.to_string(),
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::{BTreeSet, HashMap};
    use std::io::{Cursor, Read};
    use zip::ZipArchive;

    fn builder() -> ArchiveBuilder {
        ArchiveBuilder::new(Arc::new(Catalog::builtin()))
    }

    /// Read every file of a ZIP archive, in archive order.
    fn unzip(bytes: &[u8]) -> Vec<(String, String)> {
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        (0..archive.len())
            .map(|i| {
                let mut file = archive.by_index(i).unwrap();
                let mut contents = String::new();
                file.read_to_string(&mut contents).unwrap();
                (file.name().to_string(), contents)
            })
            .collect()
    }

    #[tokio::test]
    async fn single_archive_has_six_entries_for_every_component() {
        let builder = builder();

        for component in builder.catalog().iter() {
            let archive = builder
                .build(&ArchiveRequest::single(&component.id))
                .await
                .unwrap();

            let names: Vec<String> = unzip(&archive.bytes).into_iter().map(|(n, _)| n).collect();
            let folder = &component.name;
            assert_eq!(
                names,
                vec![
                    format!("{}/{}.html", folder, component.id),
                    format!("{}/{}.css", folder, component.id),
                    format!("{}/README.md", folder),
                    format!("{}/usage-guide.md", folder),
                    format!("{}/linear-theme.css", folder),
                    format!("{}/linear-components.css", folder),
                ]
            );
            assert_eq!(archive.entries, names);
        }
    }

    #[tokio::test]
    async fn primary_buttons_end_to_end() {
        let component = ComponentDescriptor::new(
            "primary-buttons",
            "Primary Buttons",
            Category::Buttons,
            r#"<button class="linear-btn linear-btn-primary">Go</button>"#,
            ".linear-btn-primary { color: red; }",
        );
        let builder = ArchiveBuilder::new(Arc::new(Catalog::new([component]).unwrap()));

        let archive = builder
            .build(&ArchiveRequest::single("primary-buttons"))
            .await
            .unwrap();

        assert_eq!(archive.filename, "occler-primary-buttons-component.zip");
        assert_eq!(archive.label, "Primary Buttons");

        let files: HashMap<String, String> = unzip(&archive.bytes).into_iter().collect();
        let top: BTreeSet<&str> = files.keys().filter_map(|n| n.split('/').next()).collect();
        assert_eq!(top, BTreeSet::from(["Primary Buttons"]));
        assert_eq!(
            files["Primary Buttons/primary-buttons.css"],
            ".linear-btn-primary { color: red; }"
        );
        assert!(files["Primary Buttons/primary-buttons.html"].contains("<title>Primary Buttons"));
        assert_eq!(
            files["Primary Buttons/linear-theme.css"],
            ThemeAssets::builtin().theme_css
        );
    }

    #[tokio::test]
    async fn unknown_component_fails_without_archive() {
        let result = builder()
            .build(&ArchiveRequest::single("nonexistent-id"))
            .await;

        assert!(matches!(result, Err(BuildError::ComponentNotFound(id)) if id == "nonexistent-id"));
    }

    #[tokio::test]
    async fn complete_archive_groups_components_by_category() {
        let builder = builder();

        let archive = builder.build(&ArchiveRequest::All).await.unwrap();
        let names: Vec<String> = unzip(&archive.bytes).into_iter().map(|(n, _)| n).collect();

        assert_eq!(archive.filename, COMPLETE_ARCHIVE_NAME);

        for component in builder.catalog().iter() {
            let prefix = format!("{}/{}/", component.category, component.name);
            let html = format!("{}{}.html", prefix, component.id);
            assert_eq!(names.iter().filter(|n| **n == html).count(), 1, "{}", html);

            // Never filed under another category
            let elsewhere = names
                .iter()
                .filter(|n| n.ends_with(&format!("/{}/{}.html", component.name, component.id)))
                .count();
            assert_eq!(elsewhere, 1);
        }

        let folders: BTreeSet<&str> = names
            .iter()
            .filter(|n| n.contains('/'))
            .filter_map(|n| n.split('/').next())
            .collect();
        let expected: BTreeSet<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
        assert_eq!(folders, expected);

        let root: Vec<&str> = names
            .iter()
            .filter(|n| !n.contains('/'))
            .map(|n| n.as_str())
            .collect();
        assert_eq!(
            root,
            vec![
                "linear-theme.css",
                "linear-components.css",
                "README.md",
                "design-tokens.css",
                "usage-examples.html",
            ]
        );

        // 3 files per component plus 5 root files
        assert_eq!(names.len(), builder.catalog().len() * 3 + 5);
    }

    #[tokio::test]
    async fn complete_archive_omits_usage_guides() {
        let archive = builder().build(&ArchiveRequest::All).await.unwrap();

        assert!(archive
            .entries
            .iter()
            .all(|n| !n.ends_with("usage-guide.md")));
    }

    #[test]
    fn builds_are_reproducible() {
        let builder = builder();

        let first = tokio_test::block_on(builder.build(&ArchiveRequest::All));
        let second = tokio_test::block_on(builder.build(&ArchiveRequest::All));

        assert_eq!(first.unwrap().bytes, second.unwrap().bytes);
    }

    #[tokio::test]
    async fn minified_archives_keep_their_layout() {
        let plain = builder();
        let minified = builder().with_options(PackageOptions { minify: true });
        let request = ArchiveRequest::single("ghost-buttons");

        let plain = plain.build(&request).await.unwrap();
        let minified = minified.build(&request).await.unwrap();

        assert_eq!(plain.entries, minified.entries);

        let files: HashMap<String, String> = unzip(&minified.bytes).into_iter().collect();
        let css = &files["Ghost Buttons/ghost-buttons.css"];
        assert!(!css.contains('\n'));
        assert!(css.contains(".linear-btn-ghost"));
    }

    #[tokio::test]
    async fn custom_theme_is_shipped() {
        let builder = builder().with_assets(ThemeAssets::builtin().with_theme_css("/* brand */"));

        let archive = builder
            .build(&ArchiveRequest::single("toggles"))
            .await
            .unwrap();
        let files: HashMap<String, String> = unzip(&archive.bytes).into_iter().collect();

        assert_eq!(files["Toggle Switches/linear-theme.css"], "/* brand */");
        assert!(files["Toggle Switches/toggles.html"].contains("/* brand */"));
    }
}
