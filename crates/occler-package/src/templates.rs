//! Document generators for packaged components.
//!
//! Every document is a pure function of its inputs: no timestamps or random
//! identifiers, so identical input renders byte-identical output.

use minijinja::{context, Environment};
use serde::Serialize;

use occler_catalog::{Catalog, Category, ComponentDescriptor};

use crate::classes::extract_css_classes;

/// One category section of the manifest README.
#[derive(Debug, Clone, Serialize)]
struct CategorySection {
    /// Heading text
    label: &'static str,
    /// Folder name
    folder: &'static str,
    /// Components in catalog order
    components: Vec<ComponentSummary>,
}

/// A component line in the manifest README.
#[derive(Debug, Clone, Serialize)]
struct ComponentSummary {
    name: String,
    description: String,
}

/// Template engine rendering the packaged documents.
pub struct Documents {
    env: Environment<'static>,
}

impl Documents {
    /// Create the engine with the built-in templates.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);

        env.add_template_owned("standalone.html".to_string(), STANDALONE_TEMPLATE.to_string())
            .expect("Failed to add standalone template");

        env.add_template_owned("readme.md".to_string(), README_TEMPLATE.to_string())
            .expect("Failed to add readme template");

        env.add_template_owned("usage-guide.md".to_string(), USAGE_GUIDE_TEMPLATE.to_string())
            .expect("Failed to add usage guide template");

        env.add_template_owned("main-readme.md".to_string(), MAIN_README_TEMPLATE.to_string())
            .expect("Failed to add main readme template");

        Self { env }
    }

    /// Render a complete demo page embedding the theme, the component
    /// stylesheet and its markup.
    pub fn standalone_html(
        &self,
        component: &ComponentDescriptor,
        theme_css: &str,
    ) -> Result<String, minijinja::Error> {
        self.env.get_template("standalone.html")?.render(context! {
            name => &component.name,
            theme_css => theme_css,
            stylesheet => &component.stylesheet,
            markup => &component.markup,
        })
    }

    /// Render the per-component README.
    pub fn readme(&self, component: &ComponentDescriptor) -> Result<String, minijinja::Error> {
        let classes = extract_css_classes(&component.stylesheet);

        self.env.get_template("readme.md")?.render(context! {
            name => &component.name,
            markup => &component.markup,
            classes => classes,
            files => &component.files,
        })
    }

    /// Render the customization and accessibility guide.
    pub fn usage_guide(&self, component: &ComponentDescriptor) -> Result<String, minijinja::Error> {
        self.env
            .get_template("usage-guide.md")?
            .render(context! { name => &component.name })
    }

    /// Render the top-level manifest listing every category and component.
    pub fn main_readme(&self, catalog: &Catalog) -> Result<String, minijinja::Error> {
        let sections: Vec<CategorySection> = Category::ALL
            .iter()
            .map(|category| CategorySection {
                label: category.label(),
                folder: category.as_str(),
                components: catalog
                    .in_category(*category)
                    .map(|c| ComponentSummary {
                        name: c.name.clone(),
                        description: c.description.clone(),
                    })
                    .collect(),
            })
            .collect();

        self.env
            .get_template("main-readme.md")?
            .render(context! { sections => sections })
    }
}

impl Default for Documents {
    fn default() -> Self {
        Self::new()
    }
}

const STANDALONE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{{ name }} - Linear Design System</title>
    <link href="https://fonts.googleapis.com/css2?family=Inter:wght@300;400;500;600;700&display=swap" rel="stylesheet">
    <style>
{{ theme_css | safe }}
{{ stylesheet | safe }}

        body {
            padding: 40px;
            background-color: var(--color-bg-primary);
            color: var(--color-text-primary);
        }

        .demo-container {
            max-width: 800px;
            margin: 0 auto;
        }

        .demo-title {
            font-size: var(--text-3xl);
            font-weight: var(--font-bold);
            margin-bottom: var(--spacing-8);
            background: var(--gradient-text);
            -webkit-background-clip: text;
            -webkit-text-fill-color: transparent;
            background-clip: text;
        }

        .demo-section {
            margin-bottom: var(--spacing-12);
            padding: var(--spacing-8);
            background-color: var(--color-bg-secondary);
            border: 1px solid var(--color-border);
            border-radius: var(--radius-lg);
        }
    </style>
</head>
<body>
    <div class="demo-container">
        <h1 class="demo-title">{{ name }}</h1>
        <div class="demo-section">
{{ markup | safe }}
        </div>
    </div>
</body>
</html>
"##;

const README_TEMPLATE: &str = r##"# {{ name }}

The {{ name }} component from the Linear Design System.

## Usage

1. Include `linear-theme.css` and `linear-components.css` in your HTML document.
2. Load the Inter font.
3. Use the HTML structure below.

## HTML Structure

```html
{{ markup }}
```

## CSS Classes

This component uses the following CSS classes:

{% for class in classes %}
- `.{{ class }}`
{% endfor %}

## Required Files

{% for file in files %}
- {{ file }}
{% endfor %}

## Browser Support

- Chrome 90+
- Firefox 88+
- Safari 14+
- Edge 90+

## License

This component is part of the OCCLER project.
"##;

const USAGE_GUIDE_TEMPLATE: &str = r##"# {{ name }} Usage Guide

## Overview

{{ name }} is part of the Linear Design System and follows its modern, minimal look.

## Basic Usage

1. Include the required CSS files.
2. Copy the HTML structure.
3. Adjust CSS variables to customize it as needed.

## Customization

Colors and sizes are driven by CSS variables:

```css
:root {
  --color-brand-primary: #your-color;
  --spacing-4: 20px;
}
```

## Accessibility

This component targets WCAG 2.1 AA:

- Keyboard navigation support
- Sufficient contrast ratios
- Screen reader compatibility
"##;

const MAIN_README_TEMPLATE: &str = r##"# Linear Design System

A modern, minimal design system inspired by Linear.app.

## Included Components

{% for section in sections %}
### {{ section.label }} (`{{ section.folder }}/`)

{% for component in section.components %}
- {{ component.name }}{% if component.description %} - {{ component.description }}{% endif %}

{% else %}
_No components in this category._
{% endfor %}

{% endfor %}
## Installation

1. Include every CSS file in your project:
   ```html
   <link rel="stylesheet" href="linear-theme.css">
   <link rel="stylesheet" href="linear-components.css">
   <link href="https://fonts.googleapis.com/css2?family=Inter:wght@300;400;500;600;700&display=swap" rel="stylesheet">
   ```

2. Use the HTML examples in each component folder as a reference.

## Design Tokens

The system exposes design tokens as CSS custom properties:

- Colors
- Typography
- Spacing
- Border radius
- Shadows
- Transitions

See `design-tokens.css` for details.

## Browser Support

- Chrome 90+
- Firefox 88+
- Safari 14+
- Edge 90+

## License

Design system for the OCCLER project.
"##;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn primary_buttons() -> ComponentDescriptor {
        ComponentDescriptor::new(
            "primary-buttons",
            "Primary Buttons",
            Category::Buttons,
            r#"<button class="linear-btn linear-btn-primary">Go</button>"#,
            ".linear-btn-primary { color: red; } .linear-btn-primary:hover { color: blue; }",
        )
        .with_description("Gradient buttons for primary actions")
    }

    #[test]
    fn standalone_html_embeds_styles_and_markup() {
        let docs = Documents::new();

        let html = docs
            .standalone_html(&primary_buttons(), ":root { --color-bg-primary: #0f0f0f; }")
            .unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Primary Buttons - Linear Design System</title>"));
        assert!(html.contains("--color-bg-primary: #0f0f0f;"));
        assert!(html.contains(".linear-btn-primary:hover { color: blue; }"));
        assert!(html.contains(r#"<button class="linear-btn linear-btn-primary">Go</button>"#));
    }

    #[test]
    fn standalone_html_is_deterministic() {
        let docs = Documents::new();
        let component = primary_buttons();

        let first = docs.standalone_html(&component, "/* theme */").unwrap();
        let second = docs.standalone_html(&component, "/* theme */").unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn readme_lists_classes_and_files() {
        let docs = Documents::new();

        let readme = docs.readme(&primary_buttons()).unwrap();

        assert!(readme.starts_with("# Primary Buttons\n"));
        assert!(readme.contains("```html\n<button class=\"linear-btn linear-btn-primary\">Go</button>\n```"));
        assert!(readme.contains("- `.linear-btn-primary`\n"));
        assert_eq!(readme.matches("- `.linear-btn-primary`").count(), 1);
        assert!(readme.contains("- linear-theme.css\n- linear-components.css\n"));
    }

    #[test]
    fn usage_guide_uses_display_name() {
        let docs = Documents::new();

        let guide = docs.usage_guide(&primary_buttons()).unwrap();

        assert!(guide.starts_with("# Primary Buttons Usage Guide"));
        assert!(guide.contains("WCAG 2.1 AA"));
    }

    #[test]
    fn main_readme_lists_every_category_and_component() {
        let docs = Documents::new();
        let catalog = Catalog::builtin();

        let readme = docs.main_readme(&catalog).unwrap();

        for category in Category::ALL {
            assert!(readme.contains(&format!("### {}", category.label())));
        }
        for component in catalog.iter() {
            assert!(readme.contains(&component.name), "missing {}", component.name);
        }
        assert!(readme.contains("- Primary Buttons - Gradient buttons for primary actions"));
    }

    #[test]
    fn main_readme_marks_empty_categories() {
        let docs = Documents::new();
        let catalog = Catalog::new([primary_buttons()]).unwrap();

        let readme = docs.main_readme(&catalog).unwrap();

        assert_eq!(readme.matches("_No components in this category._").count(), 3);
    }
}
