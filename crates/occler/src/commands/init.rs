//! Initialize an OCCLER project.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Run the init command.
///
/// Writes the config file at `config_path` and a sample component in a
/// `components/` directory next to it. Existing files are kept unless `yes`.
pub async fn run(config_path: &Path, yes: bool) -> Result<()> {
    tracing::info!("Initializing occler...");

    let root = config_path.parent().unwrap_or_else(|| Path::new(""));

    if !config_path.exists() || yes {
        fs::write(config_path, DEFAULT_CONFIG)
            .with_context(|| format!("Failed to write {}", config_path.display()))?;
        tracing::info!("Created {}", config_path.display());
    } else {
        tracing::warn!(
            "{} already exists. Use --yes to overwrite.",
            config_path.display()
        );
    }

    let sample_dir = root.join("components").join("outline-buttons");
    fs::create_dir_all(&sample_dir).context("Failed to create components directory")?;

    for (name, contents) in [
        ("component.toml", SAMPLE_MANIFEST),
        ("markup.html", SAMPLE_MARKUP),
        ("style.css", SAMPLE_STYLE),
    ] {
        let path = sample_dir.join(name);
        if !path.exists() || yes {
            fs::write(&path, contents)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Created {}", path.display());
        }
    }

    tracing::info!("Initialization complete!");
    tracing::info!("Run 'occler list' to see the catalog or 'occler serve' to browse it.");

    Ok(())
}

const DEFAULT_CONFIG: &str = r#"# OCCLER Configuration

[catalog]
# Extra components, one folder with a component.toml each
dir = "components"

[theme]
# Replace the bundled stylesheets
# theme_css = "css/linear-theme.css"
# components_css = "css/linear-components.css"

[package]
# Where `occler download` writes archives
output = "downloads"

# Minify stylesheets inside archives
minify = false

[server]
host = "127.0.0.1"
port = 4000

# Directory of component preview images
# previews = "previews"
"#;

const SAMPLE_MANIFEST: &str = r#"id = "outline-buttons"
name = "Outline Buttons"
category = "buttons"
description = "Transparent buttons with a brand-colored border."
"#;

const SAMPLE_MARKUP: &str = r#"<div class="button-group">
    <button class="linear-btn linear-btn-outline">Outline</button>
    <button class="linear-btn linear-btn-outline linear-btn-sm">Small</button>
    <button class="linear-btn linear-btn-outline" disabled>Disabled</button>
</div>
"#;

const SAMPLE_STYLE: &str = r#".linear-btn-outline {
  background-color: transparent;
  color: var(--color-brand-primary);
  border-color: var(--color-brand-primary);
}

.linear-btn-outline:hover:not(:disabled) {
  background-color: rgba(94, 106, 210, 0.1);
}
"#;
