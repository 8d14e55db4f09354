//! Configuration file (occler.toml).

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use occler_catalog::Catalog;
use occler_package::{ArchiveBuilder, PackageOptions, ThemeAssets};
use serde::Deserialize;

/// Configuration file structure.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub package: PackageSettings,
    #[serde(default)]
    pub server: ServerSettings,
}

#[derive(Debug, Deserialize, Default)]
pub struct CatalogConfig {
    /// Directory of extra components added to the built-in catalog
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Default)]
pub struct ThemeConfig {
    /// Replacement for linear-theme.css
    pub theme_css: Option<PathBuf>,
    /// Replacement for linear-components.css
    pub components_css: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
pub struct PackageSettings {
    #[serde(default = "default_output")]
    pub output: PathBuf,
    #[serde(default)]
    pub minify: bool,
}

impl Default for PackageSettings {
    fn default() -> Self {
        Self {
            output: default_output(),
            minify: false,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub previews: Option<PathBuf>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            previews: None,
        }
    }
}

fn default_output() -> PathBuf {
    PathBuf::from("downloads")
}
fn default_host() -> String {
    "127.0.0.1".to_string()
}
fn default_port() -> u16 {
    4000
}

/// Load configuration from `path` if it exists.
/// Returns an error if the config file exists but is malformed.
///
/// Relative paths are resolved against the directory holding the config file.
pub fn load_config(path: &Path) -> Result<ConfigFile> {
    let mut config = if path.exists() {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: ConfigFile = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        tracing::debug!("Loaded config from {}", path.display());
        config
    } else {
        ConfigFile::default()
    };

    config.resolve_paths(path.parent().unwrap_or_else(|| Path::new("")));
    Ok(config)
}

impl ConfigFile {
    /// Make every configured path relative to `base`. Absolute paths are kept.
    fn resolve_paths(&mut self, base: &Path) {
        let optional = [
            &mut self.catalog.dir,
            &mut self.theme.theme_css,
            &mut self.theme.components_css,
            &mut self.server.previews,
        ];
        for path in optional.into_iter().flatten() {
            *path = base.join(&*path);
        }
        self.package.output = base.join(&self.package.output);
    }

    /// The built-in catalog plus any components from `[catalog] dir`.
    pub fn catalog(&self) -> Result<Catalog> {
        let mut catalog = Catalog::builtin();

        if let Some(dir) = &self.catalog.dir {
            let added = catalog
                .extend_from_dir(dir)
                .with_context(|| format!("Failed to load components from {}", dir.display()))?;
            tracing::debug!("Loaded {} custom components from {}", added, dir.display());
        }

        Ok(catalog)
    }

    /// Shared stylesheets, with any configured overrides read from disk.
    pub fn theme_assets(&self) -> Result<ThemeAssets> {
        let mut assets = ThemeAssets::builtin();

        if let Some(path) = &self.theme.theme_css {
            let css = fs::read_to_string(path)
                .with_context(|| format!("Failed to read theme stylesheet {}", path.display()))?;
            assets = assets.with_theme_css(css);
        }
        if let Some(path) = &self.theme.components_css {
            let css = fs::read_to_string(path)
                .with_context(|| {
                    format!("Failed to read components stylesheet {}", path.display())
                })?;
            assets = assets.with_components_css(css);
        }

        Ok(assets)
    }

    /// An archive builder over the configured catalog and stylesheets.
    pub fn archive_builder(&self) -> Result<ArchiveBuilder> {
        Ok(ArchiveBuilder::new(Arc::new(self.catalog()?))
            .with_assets(self.theme_assets()?)
            .with_options(PackageOptions {
                minify: self.package.minify,
            }))
    }

    /// Output directory for downloaded archives.
    pub fn output_dir(&self) -> PathBuf {
        self.package.output.clone()
    }
}
