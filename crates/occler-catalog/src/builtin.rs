//! The built-in Linear components.

use crate::descriptor::{Category, ComponentDescriptor};

/// Built-in components, in catalog order.
pub fn components() -> Vec<ComponentDescriptor> {
    vec![
        // Buttons
        ComponentDescriptor::new(
            "primary-buttons",
            "Primary Buttons",
            Category::Buttons,
            PRIMARY_BUTTONS_HTML,
            PRIMARY_BUTTONS_CSS,
        )
        .with_description("Gradient buttons for primary actions"),
        ComponentDescriptor::new(
            "secondary-buttons",
            "Secondary Buttons",
            Category::Buttons,
            SECONDARY_BUTTONS_HTML,
            SECONDARY_BUTTONS_CSS,
        )
        .with_description("Subtle buttons for secondary actions"),
        ComponentDescriptor::new(
            "ghost-buttons",
            "Ghost Buttons",
            Category::Buttons,
            GHOST_BUTTONS_HTML,
            GHOST_BUTTONS_CSS,
        )
        .with_description("Transparent buttons with minimal styling"),
        ComponentDescriptor::new(
            "danger-buttons",
            "Danger Buttons",
            Category::Buttons,
            DANGER_BUTTONS_HTML,
            DANGER_BUTTONS_CSS,
        )
        .with_description("Warning buttons for destructive actions"),
        // Inputs
        ComponentDescriptor::new(
            "text-inputs",
            "Text Inputs",
            Category::Inputs,
            TEXT_INPUTS_HTML,
            TEXT_INPUTS_CSS,
        )
        .with_description("Basic text input fields"),
        ComponentDescriptor::new(
            "input-states",
            "Input States",
            Category::Inputs,
            INPUT_STATES_HTML,
            INPUT_STATES_CSS,
        )
        .with_description("Input fields in error and success states"),
        ComponentDescriptor::new(
            "toggles",
            "Toggle Switches",
            Category::Inputs,
            TOGGLES_HTML,
            TOGGLES_CSS,
        )
        .with_description("On/off toggle switches"),
        ComponentDescriptor::new(
            "search-input",
            "Search Input",
            Category::Inputs,
            SEARCH_INPUT_HTML,
            SEARCH_INPUT_CSS,
        )
        .with_description("Input specialised for search"),
        // Cards
        ComponentDescriptor::new(
            "basic-cards",
            "Basic Cards",
            Category::Cards,
            BASIC_CARDS_HTML,
            BASIC_CARDS_CSS,
        )
        .with_description("Simple cards for displaying information"),
        ComponentDescriptor::new(
            "glass-cards",
            "Glass Cards",
            Category::Cards,
            GLASS_CARDS_HTML,
            GLASS_CARDS_CSS,
        )
        .with_description("Cards with a glassmorphism effect"),
        ComponentDescriptor::new(
            "feature-cards",
            "Feature Cards",
            Category::Cards,
            FEATURE_CARDS_HTML,
            FEATURE_CARDS_CSS,
        )
        .with_description("Feature highlights with an icon"),
        ComponentDescriptor::new(
            "metric-cards",
            "Metric Cards",
            Category::Cards,
            METRIC_CARDS_HTML,
            METRIC_CARDS_CSS,
        )
        .with_description("Cards showing numbers and statistics"),
        // Navigation
        ComponentDescriptor::new(
            "sidebar-nav",
            "Sidebar Navigation",
            Category::Navigation,
            SIDEBAR_NAV_HTML,
            SIDEBAR_NAV_CSS,
        )
        .with_description("Vertical navigation menu"),
    ]
}

const PRIMARY_BUTTONS_HTML: &str = r#"<div style="display: flex; gap: var(--spacing-4); flex-wrap: wrap;">
    <button class="linear-btn linear-btn-primary linear-btn-sm">Small</button>
    <button class="linear-btn linear-btn-primary">Default</button>
    <button class="linear-btn linear-btn-primary linear-btn-lg">Large</button>
    <button class="linear-btn linear-btn-primary" disabled>Disabled</button>
</div>"#;

const PRIMARY_BUTTONS_CSS: &str = r#".linear-btn-primary {
    background: linear-gradient(135deg, #5e6ad2 0%, #7c3aed 100%);
    color: var(--color-text-primary);
    box-shadow: var(--shadow-sm);
}

.linear-btn-primary:hover:not(:disabled) {
    box-shadow: var(--shadow-md);
    transform: translateY(-1px);
}"#;

const SECONDARY_BUTTONS_HTML: &str = r#"<div style="display: flex; gap: var(--spacing-4); flex-wrap: wrap;">
    <button class="linear-btn linear-btn-secondary linear-btn-sm">Small</button>
    <button class="linear-btn linear-btn-secondary">Default</button>
    <button class="linear-btn linear-btn-secondary linear-btn-lg">Large</button>
    <button class="linear-btn linear-btn-secondary" disabled>Disabled</button>
</div>"#;

const SECONDARY_BUTTONS_CSS: &str = r#".linear-btn-secondary {
    background-color: var(--color-bg-tertiary);
    color: var(--color-text-primary);
    border-color: var(--color-border);
}"#;

const GHOST_BUTTONS_HTML: &str = r#"<div style="display: flex; gap: var(--spacing-4); flex-wrap: wrap;">
    <button class="linear-btn linear-btn-ghost linear-btn-sm">Small Ghost</button>
    <button class="linear-btn linear-btn-ghost">Default Ghost</button>
    <button class="linear-btn linear-btn-ghost linear-btn-lg">Large Ghost</button>
    <button class="linear-btn linear-btn-ghost" disabled>Disabled</button>
    <button class="linear-btn linear-btn-ghost">
        <svg width="16" height="16" viewBox="0 0 24 24" fill="currentColor">
            <path d="M12 2l3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01L12 2z"/>
        </svg>
        With Icon
    </button>
</div>"#;

const GHOST_BUTTONS_CSS: &str = r#".linear-btn-ghost {
    background-color: transparent;
    color: var(--color-text-secondary);
    border: 1px solid transparent;
}

.linear-btn-ghost:hover:not(:disabled) {
    background-color: var(--color-bg-tertiary);
    color: var(--color-text-primary);
    border-color: var(--color-border);
}

.linear-btn-ghost:active:not(:disabled) {
    background-color: var(--color-bg-secondary);
}"#;

const DANGER_BUTTONS_HTML: &str = r#"<div style="display: flex; gap: var(--spacing-4); flex-wrap: wrap;">
    <button class="linear-btn linear-btn-danger linear-btn-sm">Small Danger</button>
    <button class="linear-btn linear-btn-danger">Delete Item</button>
    <button class="linear-btn linear-btn-danger linear-btn-lg">Large Danger</button>
    <button class="linear-btn linear-btn-danger" disabled>Disabled</button>
    <button class="linear-btn linear-btn-danger">
        <svg width="16" height="16" viewBox="0 0 24 24" fill="currentColor">
            <path d="M6 19c0 1.1.9 2 2 2h8c1.1 0 2-.9 2-2V7H6v12zM19 4h-3.5l-1-1h-5l-1 1H5v2h14V4z"/>
        </svg>
        Delete
    </button>
</div>"#;

const DANGER_BUTTONS_CSS: &str = r#".linear-btn-danger {
    background-color: var(--color-error);
    color: var(--color-text-primary);
    border-color: var(--color-error);
}

.linear-btn-danger:hover:not(:disabled) {
    background-color: #dc2626;
    transform: translateY(-1px);
    box-shadow: var(--shadow-md);
}

.linear-btn-danger:active:not(:disabled) {
    transform: translateY(0);
    background-color: #b91c1c;
}"#;

const TEXT_INPUTS_HTML: &str = r#"<div style="display: flex; flex-direction: column; gap: var(--spacing-4); max-width: 400px;">
    <input type="text" class="linear-input" placeholder="Your name">
    <input type="email" class="linear-input" placeholder="Email address">
    <input type="password" class="linear-input" placeholder="Password">
    <input type="text" class="linear-input" value="Read-only value" readonly>
    <input type="text" class="linear-input" placeholder="Disabled input" disabled>
    <textarea class="linear-input" rows="3" placeholder="Multi-line text"></textarea>
</div>"#;

const TEXT_INPUTS_CSS: &str = r#".linear-input {
    display: block;
    width: 100%;
    padding: var(--spacing-3) var(--spacing-4);
    font-size: var(--text-sm);
    font-weight: var(--font-regular);
    line-height: var(--leading-normal);
    color: var(--color-text-primary);
    background-color: var(--color-bg-secondary);
    border: 1px solid var(--color-border);
    border-radius: var(--radius-md);
    transition: all var(--transition-fast);
    outline: none;
    font-family: var(--font-sans);
}

.linear-input::placeholder {
    color: var(--color-text-tertiary);
}

.linear-input:hover:not(:disabled) {
    border-color: var(--color-border-hover);
}

.linear-input:focus:not(:disabled) {
    border-color: var(--color-brand-primary);
    box-shadow: 0 0 0 3px rgba(94, 106, 210, 0.1);
    background-color: var(--color-bg-tertiary);
}

.linear-input:disabled {
    background-color: var(--color-bg-primary);
    color: var(--color-text-disabled);
    cursor: not-allowed;
    opacity: 0.6;
}"#;

const INPUT_STATES_HTML: &str = r#"<div style="display: flex; flex-direction: column; gap: var(--spacing-4); max-width: 400px;">
    <div>
        <label style="display: block; margin-bottom: var(--spacing-2); font-size: var(--text-sm); color: var(--color-text-primary);">Default</label>
        <input type="text" class="linear-input" placeholder="Regular input">
    </div>
    <div>
        <label style="display: block; margin-bottom: var(--spacing-2); font-size: var(--text-sm); color: var(--color-text-primary);">Error</label>
        <input type="text" class="linear-input linear-input-error" value="Invalid value">
        <span style="font-size: var(--text-xs); color: var(--color-error); margin-top: var(--spacing-1); display: block;">This field is required</span>
    </div>
    <div>
        <label style="display: block; margin-bottom: var(--spacing-2); font-size: var(--text-sm); color: var(--color-text-primary);">Success</label>
        <input type="text" class="linear-input linear-input-success" value="Valid value">
        <span style="font-size: var(--text-xs); color: var(--color-success); margin-top: var(--spacing-1); display: block;">&#10003; Verified</span>
    </div>
</div>"#;

const INPUT_STATES_CSS: &str = r#".linear-input-error {
    border-color: var(--color-error);
}

.linear-input-error:focus {
    border-color: var(--color-error);
    box-shadow: 0 0 0 3px rgba(239, 68, 68, 0.1);
}

.linear-input-success {
    border-color: var(--color-success);
}

.linear-input-success:focus {
    border-color: var(--color-success);
    box-shadow: 0 0 0 3px rgba(16, 185, 129, 0.1);
}"#;

const TOGGLES_HTML: &str = r#"<div style="display: flex; flex-direction: column; gap: var(--spacing-4);">
    <div style="display: flex; align-items: center; gap: var(--spacing-3);">
        <label class="linear-toggle">
            <input type="checkbox" class="linear-toggle-input">
            <span class="linear-toggle-slider"></span>
        </label>
        <span style="font-size: var(--text-sm); color: var(--color-text-primary);">Default toggle</span>
    </div>
    <div style="display: flex; align-items: center; gap: var(--spacing-3);">
        <label class="linear-toggle">
            <input type="checkbox" class="linear-toggle-input" checked>
            <span class="linear-toggle-slider"></span>
        </label>
        <span style="font-size: var(--text-sm); color: var(--color-text-primary);">Checked toggle</span>
    </div>
    <div style="display: flex; align-items: center; gap: var(--spacing-3);">
        <label class="linear-toggle">
            <input type="checkbox" class="linear-toggle-input" disabled>
            <span class="linear-toggle-slider"></span>
        </label>
        <span style="font-size: var(--text-sm); color: var(--color-text-disabled);">Disabled toggle</span>
    </div>
</div>"#;

const TOGGLES_CSS: &str = r#".linear-toggle {
    position: relative;
    display: inline-block;
    width: 44px;
    height: 24px;
}

.linear-toggle-input {
    opacity: 0;
    width: 0;
    height: 0;
}

.linear-toggle-slider {
    position: absolute;
    cursor: pointer;
    top: 0;
    left: 0;
    right: 0;
    bottom: 0;
    background-color: var(--color-bg-tertiary);
    border: 1px solid var(--color-border);
    transition: var(--transition-fast);
    border-radius: var(--radius-full);
}

.linear-toggle-slider:before {
    position: absolute;
    content: "";
    height: 16px;
    width: 16px;
    left: 3px;
    bottom: 3px;
    background-color: var(--color-text-primary);
    transition: var(--transition-fast);
    border-radius: 50%;
}

.linear-toggle-input:checked + .linear-toggle-slider {
    background: var(--gradient-brand);
    border-color: var(--color-brand-primary);
}

.linear-toggle-input:checked + .linear-toggle-slider:before {
    transform: translateX(20px);
}

.linear-toggle-input:disabled + .linear-toggle-slider {
    opacity: 0.4;
    cursor: not-allowed;
}"#;

const SEARCH_INPUT_HTML: &str = r#"<div style="display: flex; flex-direction: column; gap: var(--spacing-4); max-width: 400px;">
    <div style="position: relative;">
        <input type="text" class="linear-input linear-search-input" placeholder="Search...">
        <svg class="linear-search-icon" width="16" height="16" viewBox="0 0 24 24" fill="currentColor">
            <path d="M15.5 14h-.79l-.28-.27C15.41 12.59 16 11.11 16 9.5 16 5.91 13.09 3 9.5 3S3 5.91 3 9.5 5.91 16 9.5 16c1.61 0 3.09-.59 4.23-1.57l.27.28v.79l5 4.99L20.49 19l-4.99-5zm-6 0C7.01 14 5 11.99 5 9.5S7.01 5 9.5 5 14 7.01 14 9.5 11.99 14 9.5 14z"/>
        </svg>
    </div>
    <div style="position: relative;">
        <input type="text" class="linear-input linear-search-input" placeholder="Search with filters..." value="Projects">
        <svg class="linear-search-icon" width="16" height="16" viewBox="0 0 24 24" fill="currentColor">
            <path d="M15.5 14h-.79l-.28-.27C15.41 12.59 16 11.11 16 9.5 16 5.91 13.09 3 9.5 3S3 5.91 3 9.5 5.91 16 9.5 16c1.61 0 3.09-.59 4.23-1.57l.27.28v.79l5 4.99L20.49 19l-4.99-5zm-6 0C7.01 14 5 11.99 5 9.5S7.01 5 9.5 5 14 7.01 14 9.5 11.99 14 9.5 14z"/>
        </svg>
        <button class="linear-search-clear">
            <svg width="12" height="12" viewBox="0 0 24 24" fill="currentColor">
                <path d="M19 6.41L17.59 5 12 10.59 6.41 5 5 6.41 10.59 12 5 17.59 6.41 19 12 13.41 17.59 19 19 17.59 13.41 12z"/>
            </svg>
        </button>
    </div>
</div>"#;

const SEARCH_INPUT_CSS: &str = r#".linear-search-input {
    padding-left: 40px;
    padding-right: 40px;
}

.linear-search-icon {
    position: absolute;
    left: 12px;
    top: 50%;
    transform: translateY(-50%);
    color: var(--color-text-tertiary);
    pointer-events: none;
}

.linear-search-clear {
    position: absolute;
    right: 12px;
    top: 50%;
    transform: translateY(-50%);
    background: none;
    border: none;
    color: var(--color-text-tertiary);
    cursor: pointer;
    padding: 2px;
    border-radius: var(--radius-sm);
    transition: all var(--transition-fast);
}

.linear-search-clear:hover {
    color: var(--color-text-primary);
    background-color: var(--color-bg-tertiary);
}"#;

const BASIC_CARDS_HTML: &str = r#"<div style="display: grid; grid-template-columns: repeat(auto-fit, minmax(300px, 1fr)); gap: var(--spacing-6);">
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
</div>"#;

const BASIC_CARDS_CSS: &str = r#".linear-card {
    padding: var(--spacing-6);
    background-color: var(--color-bg-secondary);
    border: 1px solid var(--color-border);
    border-radius: var(--radius-lg);
    transition: border-color var(--transition-fast);
}

.linear-card:hover {
    border-color: var(--color-border-hover);
}

.linear-card-header {
    display: flex;
    align-items: flex-start;
    justify-content: space-between;
    margin-bottom: var(--spacing-4);
}

.linear-card-title {
    font-size: var(--text-lg);
    font-weight: var(--font-semibold);
    color: var(--color-text-primary);
}

.linear-card-subtitle {
    font-size: var(--text-sm);
    color: var(--color-text-secondary);
}

.linear-card-content {
    font-size: var(--text-sm);
    color: var(--color-text-secondary);
    margin-bottom: var(--spacing-4);
}

.linear-card-actions {
    display: flex;
    gap: var(--spacing-2);
}"#;

const GLASS_CARDS_HTML: &str = r#"<div class="linear-card linear-glass">
    <div class="linear-card-header">
        <div>
            <h4 class="linear-card-title">Glass Card</h4>
            <p class="linear-card-subtitle">Translucent surface</p>
        </div>
    </div>
    <p class="linear-card-content">A card with a glassmorphism effect.</p>
</div>"#;

const GLASS_CARDS_CSS: &str = r#".linear-glass {
    background: rgba(255, 255, 255, 0.04);
    backdrop-filter: blur(12px);
    -webkit-backdrop-filter: blur(12px);
    border: 1px solid rgba(255, 255, 255, 0.08);
    box-shadow: var(--shadow-lg);
}"#;

const FEATURE_CARDS_HTML: &str = r#"<div class="linear-card linear-feature-card">
    <div class="linear-feature-icon">
        <svg width="20" height="20" viewBox="0 0 24 24" fill="currentColor">
            <path d="M7 2v11h3v9l7-12h-4l4-8z"/>
        </svg>
    </div>
    <h4 class="linear-card-title">Fast by default</h4>
    <p class="linear-card-content">Built for speed with optimistic updates.</p>
</div>"#;

const FEATURE_CARDS_CSS: &str = r#".linear-feature-card {
    display: flex;
    flex-direction: column;
    gap: var(--spacing-3);
}

.linear-feature-icon {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    width: 40px;
    height: 40px;
    border-radius: var(--radius-md);
    background: var(--gradient-brand);
    color: var(--color-text-primary);
}"#;

const METRIC_CARDS_HTML: &str = r#"<div style="display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: var(--spacing-4);">
    <div class="linear-card linear-metric-card">
        <span class="linear-metric-label">Active users</span>
        <span class="linear-metric-value">12,480</span>
        <span class="linear-metric-delta linear-metric-up">+8.2%</span>
    </div>
    <div class="linear-card linear-metric-card">
        <span class="linear-metric-label">Churn</span>
        <span class="linear-metric-value">1.9%</span>
        <span class="linear-metric-delta linear-metric-down">-0.4%</span>
    </div>
</div>"#;

const METRIC_CARDS_CSS: &str = r#".linear-metric-card {
    display: flex;
    flex-direction: column;
    gap: var(--spacing-1);
}

.linear-metric-label {
    font-size: var(--text-xs);
    color: var(--color-text-tertiary);
    text-transform: uppercase;
}

.linear-metric-value {
    font-size: var(--text-3xl);
    font-weight: var(--font-bold);
    color: var(--color-text-primary);
}

.linear-metric-delta {
    font-size: var(--text-sm);
}

.linear-metric-up {
    color: var(--color-success);
}

.linear-metric-down {
    color: var(--color-error);
}"#;

const SIDEBAR_NAV_HTML: &str = r##"<nav class="linear-sidebar">
    <div class="linear-sidebar-header">OCCLER</div>
    <ul class="linear-sidebar-list">
        <li><a href="#" class="linear-sidebar-item linear-sidebar-item-active">Inbox</a></li>
        <li><a href="#" class="linear-sidebar-item">My Issues</a></li>
        <li><a href="#" class="linear-sidebar-item">Projects</a></li>
        <li><a href="#" class="linear-sidebar-item">Settings</a></li>
    </ul>
</nav>"##;

const SIDEBAR_NAV_CSS: &str = r#".linear-sidebar {
    width: 240px;
    padding: var(--spacing-4);
    background-color: var(--color-bg-secondary);
    border-right: 1px solid var(--color-border);
}

.linear-sidebar-header {
    font-weight: var(--font-semibold);
    color: var(--color-text-primary);
    margin-bottom: var(--spacing-4);
}

.linear-sidebar-list {
    list-style: none;
    display: flex;
    flex-direction: column;
    gap: var(--spacing-1);
}

.linear-sidebar-item {
    display: block;
    padding: var(--spacing-2) var(--spacing-3);
    font-size: var(--text-sm);
    color: var(--color-text-secondary);
    text-decoration: none;
    border-radius: var(--radius-md);
    transition: all var(--transition-fast);
}

.linear-sidebar-item:hover {
    background-color: var(--color-bg-tertiary);
    color: var(--color-text-primary);
}

.linear-sidebar-item-active {
    background-color: var(--color-bg-tertiary);
    color: var(--color-text-primary);
}"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_component_has_markup_and_styles() {
        for component in components() {
            assert!(!component.markup.is_empty(), "{} has no markup", component.id);
            assert!(!component.stylesheet.is_empty(), "{} has no stylesheet", component.id);
            assert!(!component.description.is_empty(), "{} has no description", component.id);
        }
    }
}
