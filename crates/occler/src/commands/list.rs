//! Print the component catalog.

use std::fmt::Write;
use std::path::Path;

use anyhow::Result;
use occler_catalog::{Catalog, Category};

use crate::config::load_config;

/// Run the list command.
pub async fn run(config_path: &Path) -> Result<()> {
    let catalog = load_config(config_path)?.catalog()?;
    print!("{}", format_catalog(&catalog));
    Ok(())
}

/// Catalog listing grouped by category, one component per line.
fn format_catalog(catalog: &Catalog) -> String {
    let mut out = String::new();

    for category in Category::ALL {
        let _ = writeln!(out, "{}", category.label());
        for component in catalog.in_category(category) {
            let _ = writeln!(out, "  {:<20} {}", component.id, component.name);
        }
    }

    let _ = writeln!(out, "\n{} components", catalog.len());
    out
}
