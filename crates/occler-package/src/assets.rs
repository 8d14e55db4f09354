//! Shared stylesheets and static documents shipped in every archive.

/// The two shared stylesheets every component depends on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeAssets {
    /// Contents of `linear-theme.css`
    pub theme_css: String,

    /// Contents of `linear-components.css`
    pub components_css: String,
}

impl ThemeAssets {
    /// File name of the theme stylesheet inside archives.
    pub const THEME_FILE: &'static str = "linear-theme.css";

    /// File name of the base components stylesheet inside archives.
    pub const COMPONENTS_FILE: &'static str = "linear-components.css";

    /// The stylesheets bundled with the packager.
    pub fn builtin() -> Self {
        Self {
            theme_css: THEME_CSS.to_string(),
            components_css: COMPONENTS_CSS.to_string(),
        }
    }

    /// Replace the theme stylesheet.
    pub fn with_theme_css(mut self, css: impl Into<String>) -> Self {
        self.theme_css = css.into();
        self
    }

    /// Replace the base components stylesheet.
    pub fn with_components_css(mut self, css: impl Into<String>) -> Self {
        self.components_css = css.into();
        self
    }
}

impl Default for ThemeAssets {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Asset pipeline utilities.
pub struct AssetPipeline;

impl AssetPipeline {
    /// The design token reference stylesheet.
    pub fn design_tokens_css() -> &'static str {
        DESIGN_TOKENS_CSS
    }

    /// The combined usage examples page of the complete archive.
    pub fn usage_examples_html() -> &'static str {
        USAGE_EXAMPLES_HTML
    }

    /// Minify CSS using lightningcss.
    pub fn minify_css(css: &str) -> Result<String, String> {
        use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};

        let stylesheet = StyleSheet::parse(css, ParserOptions::default())
            .map_err(|e| format!("CSS parse error: {}", e))?;

        let minified = stylesheet
            .to_css(PrinterOptions {
                minify: true,
                ..Default::default()
            })
            .map_err(|e| format!("CSS minify error: {}", e))?;

        Ok(minified.code)
    }
}

// Linear theme: design tokens consumed by every component stylesheet
const THEME_CSS: &str = r#"/* Linear Theme */
:root {
  /* Colors */
  --color-bg-primary: #0f0f0f;
  --color-bg-secondary: #1a1a1a;
  --color-bg-tertiary: #262626;
  --color-text-primary: #ffffff;
  --color-text-secondary: #b3b3b3;
  --color-text-tertiary: #808080;
  --color-text-disabled: #4d4d4d;
  --color-border: #2e2e2e;
  --color-border-hover: #404040;
  --color-brand-primary: #5e6ad2;
  --color-error: #ef4444;
  --color-success: #10b981;
  --gradient-brand: linear-gradient(135deg, #5e6ad2 0%, #7c3aed 100%);
  --gradient-text: linear-gradient(135deg, #ffffff 0%, #b3b3b3 100%);

  /* Typography */
  --font-sans: 'Inter', -apple-system, BlinkMacSystemFont, sans-serif;
  --font-regular: 400;
  --font-medium: 500;
  --font-semibold: 600;
  --font-bold: 700;
  --text-xs: 12px;
  --text-sm: 13px;
  --text-base: 15px;
  --text-lg: 17px;
  --text-2xl: 24px;
  --text-3xl: 30px;
  --text-4xl: 36px;
  --leading-normal: 1.5;

  /* Spacing */
  --spacing-1: 4px;
  --spacing-2: 8px;
  --spacing-3: 12px;
  --spacing-4: 16px;
  --spacing-6: 24px;
  --spacing-8: 32px;
  --spacing-12: 48px;

  /* Border radius */
  --radius-sm: 4px;
  --radius-md: 8px;
  --radius-lg: 12px;
  --radius-full: 9999px;

  /* Shadows */
  --shadow-sm: 0 1px 2px 0 rgba(0, 0, 0, 0.3);
  --shadow-md: 0 4px 6px -1px rgba(0, 0, 0, 0.4);
  --shadow-lg: 0 10px 15px -3px rgba(0, 0, 0, 0.4);

  /* Transitions */
  --transition-fast: 150ms ease;
}

* {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: var(--font-sans);
  font-size: var(--text-base);
  line-height: var(--leading-normal);
  background-color: var(--color-bg-primary);
  color: var(--color-text-primary);
}
"#;

// Base component styles shared by the button and card variants
const COMPONENTS_CSS: &str = r#"/* Linear Components */
.linear-btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: var(--spacing-2);
  padding: var(--spacing-2) var(--spacing-4);
  font-family: var(--font-sans);
  font-size: var(--text-sm);
  font-weight: var(--font-medium);
  border: 1px solid transparent;
  border-radius: var(--radius-md);
  cursor: pointer;
  transition: all var(--transition-fast);
}

.linear-btn:disabled {
  opacity: 0.5;
  cursor: not-allowed;
}

.linear-btn-sm {
  padding: var(--spacing-1) var(--spacing-3);
  font-size: var(--text-xs);
}

.linear-btn-lg {
  padding: var(--spacing-3) var(--spacing-6);
  font-size: var(--text-base);
}

.linear-card {
  padding: var(--spacing-6);
  background-color: var(--color-bg-secondary);
  border: 1px solid var(--color-border);
  border-radius: var(--radius-lg);
}
"#;

const DESIGN_TOKENS_CSS: &str = r#"/* Design Tokens - CSS Custom Properties */
:root {
  /* Colors */
  --color-bg-primary: #0f0f0f;
  --color-bg-secondary: #1a1a1a;
  --color-text-primary: #ffffff;
  --color-text-secondary: #b3b3b3;
  --color-brand-primary: #5e6ad2;

  /* Typography */
  --font-sans: 'Inter Variable', sans-serif;
  --text-sm: 13px;
  --text-base: 15px;
  --text-lg: 17px;

  /* Spacing */
  --spacing-1: 4px;
  --spacing-2: 8px;
  --spacing-3: 12px;
  --spacing-4: 16px;
  --spacing-6: 24px;
  --spacing-8: 32px;

  /* Border Radius */
  --radius-sm: 4px;
  --radius-md: 8px;
  --radius-lg: 12px;

  /* Shadows */
  --shadow-sm: 0 1px 2px 0 rgba(0, 0, 0, 0.3);
  --shadow-md: 0 4px 6px -1px rgba(0, 0, 0, 0.4);
  --shadow-lg: 0 10px 15px -3px rgba(0, 0, 0, 0.4);
}
"#;

const USAGE_EXAMPLES_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Linear Design System - Usage Examples</title>
    <link rel="stylesheet" href="linear-theme.css">
    <link rel="stylesheet" href="linear-components.css">
    <link href="https://fonts.googleapis.com/css2?family=Inter:wght@300;400;500;600;700&display=swap" rel="stylesheet">
    <style>
        body { padding: 40px; }
        .example-section { margin: 40px 0; padding: 40px; background: var(--color-bg-secondary); border-radius: var(--radius-lg); }
        .example-title { font-size: var(--text-2xl); font-weight: var(--font-bold); margin-bottom: var(--spacing-6); }
    </style>
</head>
<body>
    <h1 style="text-align: center; font-size: var(--text-4xl); margin-bottom: 60px; background: var(--gradient-text); -webkit-background-clip: text; -webkit-text-fill-color: transparent;">
        Linear Design System Usage Examples
    </h1>

    <div class="example-section">
        <h2 class="example-title">Buttons</h2>
        <div style="display: flex; gap: var(--spacing-4); flex-wrap: wrap;">
            <button class="linear-btn linear-btn-primary">Primary Button</button>
            <button class="linear-btn linear-btn-secondary">Secondary Button</button>
            <button class="linear-btn linear-btn-ghost">Ghost Button</button>
            <button class="linear-btn linear-btn-danger">Danger Button</button>
        </div>
    </div>

    <div class="example-section">
        <h2 class="example-title">Inputs</h2>
        <div style="display: flex; flex-direction: column; gap: var(--spacing-4); max-width: 400px;">
            <input type="text" class="linear-input" placeholder="Your name">
            <input type="email" class="linear-input" placeholder="Your email">
            <div style="position: relative;">
                <input type="text" class="linear-input" placeholder="Search..." style="padding-left: 40px;">
                <svg width="16" height="16" viewBox="0 0 24 24" fill="var(--color-text-tertiary)" style="position: absolute; left: 12px; top: 50%; transform: translateY(-50%);">
                    <path d="M15.5 14h-.79l-.28-.27C15.41 12.59 16 11.11 16 9.5 16 5.91 13.09 3 9.5 3S3 5.91 3 9.5 5.91 16 9.5 16c1.61 0 3.09-.59 4.23-1.57l.27.28v.79l5 4.99L20.49 19l-4.99-5zm-6 0C7.01 14 5 11.99 5 9.5S7.01 5 9.5 5 14 7.01 14 9.5 11.99 14 9.5 14z"/>
                </svg>
            </div>
        </div>
    </div>

    <div class="example-section">
        <h2 class="example-title">Cards</h2>
        <div style="display: grid; grid-template-columns: repeat(auto-fit, minmax(300px, 1fr)); gap: var(--spacing-6);">
            <div class="linear-card">
                <div class="linear-card-header">
                    <div>
                        <h4 class="linear-card-title">Basic Card</h4>
                        <p class="linear-card-subtitle">Card description</p>
                    </div>
                </div>
                <p class="linear-card-content">Card content goes here.</p>
                <div class="linear-card-actions">
                    <button class="linear-btn linear-btn-primary linear-btn-sm">Edit</button>
                    <button class="linear-btn linear-btn-ghost linear-btn-sm">View</button>
                </div>
            </div>

            <div class="linear-card linear-glass">
                <div class="linear-card-header">
                    <div>
                        <h4 class="linear-card-title">Glass Card</h4>
                        <p class="linear-card-subtitle">Translucent surface</p>
                    </div>
                </div>
                <p class="linear-card-content">A card with a glassmorphism effect.</p>
            </div>
        </div>
    </div>
</body>
</html>
"#;
