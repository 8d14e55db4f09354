//! Component descriptors and categories.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Shared stylesheets every component depends on.
pub const SHARED_FILES: [&str; 2] = ["linear-theme.css", "linear-components.css"];

/// Component category. The set is fixed; archive folders follow this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Buttons,
    Inputs,
    Cards,
    Navigation,
}

impl Category {
    /// All categories in archive order.
    pub const ALL: [Category; 4] = [
        Category::Buttons,
        Category::Inputs,
        Category::Cards,
        Category::Navigation,
    ];

    /// Folder name used inside archives.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Buttons => "buttons",
            Self::Inputs => "inputs",
            Self::Cards => "cards",
            Self::Navigation => "navigation",
        }
    }

    /// Human-readable heading.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Buttons => "Buttons",
            Self::Inputs => "Inputs",
            Self::Cards => "Cards",
            Self::Navigation => "Navigation",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("unknown category '{}'", s))
    }
}

/// A single UI component as shipped to designers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentDescriptor {
    /// Unique key, also used for file names (e.g. "primary-buttons")
    pub id: String,

    /// Display name, used as the archive folder name
    pub name: String,

    /// Category folder in the complete archive
    pub category: Category,

    /// One-line summary for manifests
    pub description: String,

    /// Shared stylesheet files the component needs
    pub files: Vec<String>,

    /// Example markup
    pub markup: String,

    /// Component stylesheet
    pub stylesheet: String,

    /// Preview image filename
    pub preview: String,
}

impl ComponentDescriptor {
    /// Create a descriptor that depends on the shared Linear stylesheets.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: Category,
        markup: impl Into<String>,
        stylesheet: impl Into<String>,
    ) -> Self {
        let id = id.into();
        let preview = format!("{}-preview.png", id);

        Self {
            id,
            name: name.into(),
            category,
            description: String::new(),
            files: SHARED_FILES.iter().map(|f| f.to_string()).collect(),
            markup: markup.into(),
            stylesheet: stylesheet.into(),
            preview,
        }
    }

    /// Set the one-line summary.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}
