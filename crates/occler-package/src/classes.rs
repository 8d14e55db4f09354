//! CSS class name extraction.
//!
//! A textual scan, not a CSS parser: anything that looks like `.name` is a
//! class. Decimals such as `0.1` produce a bogus `1` entry and attribute or
//! escaped selectors are not understood.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

static CLASS_SELECTOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.([A-Za-z0-9_-]+)").expect("Invalid class selector regex"));

/// Extract the class names referenced by a stylesheet.
///
/// Names are de-duplicated and returned in first-seen order.
pub fn extract_css_classes(css: &str) -> Vec<String> {
    let mut seen = HashSet::new();

    CLASS_SELECTOR
        .captures_iter(css)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|name| seen.insert(*name))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn deduplicates_and_drops_pseudo_classes() {
        let css = ".linear-btn-primary { color: red; } .linear-btn-primary:hover { color: blue; }";

        assert_eq!(extract_css_classes(css), vec!["linear-btn-primary"]);
    }

    #[test]
    fn keeps_first_seen_order() {
        let css = ".b {} .a {} .b .c {} .a:focus + .d {}";

        assert_eq!(extract_css_classes(css), vec!["b", "a", "c", "d"]);
    }

    #[test]
    fn matches_decimals_as_classes() {
        let css = ".linear-input:focus { box-shadow: 0 0 0 3px rgba(94, 106, 210, 0.1); }";

        assert_eq!(extract_css_classes(css), vec!["linear-input", "1"]);
    }

    #[test]
    fn empty_stylesheet_has_no_classes() {
        assert!(extract_css_classes("").is_empty());
        assert!(extract_css_classes("body { margin: 0; }").is_empty());
    }
}
