//! Selectors and compiled patterns used by the extraction passes.
//!
//! Regexes are compiled once at first use via `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Element Selectors
// =============================================================================

/// Headings kept by the heading pass (levels 1-3).
pub const HEADING_SELECTOR: &str = "h1, h2, h3";

/// Tables kept by the table pass.
pub const TABLE_SELECTOR: &str = "table";

/// Cells translated one by one inside a kept table.
pub const CELL_SELECTOR: &str = "th, td";

/// Script blocks inspected by the sanitizer.
pub const SCRIPT_SELECTOR: &str = "script";

/// Marker class of chart widgets on the market pages.
pub const DEFAULT_CHART_CLASS: &str = "index-chart";

/// Class given to cells that hold a negative change value.
pub const NEGATIVE_CHANGE_CLASS: &str = "negative-change";

// =============================================================================
// Text Patterns
// =============================================================================

/// Cell text that is a negative number or percentage, e.g. `-0.35` or `-2%`.
pub static NEGATIVE_CHANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^-\d+(\.\d+)?%?$").expect("NEGATIVE_CHANGE regex")
});

/// A bare CSS class name safe to turn into a `.class` selector.
pub static CLASS_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^-?[A-Za-z_][A-Za-z0-9_-]*$").expect("CLASS_NAME regex")
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_change_values() {
        for value in ["-1", "-0.35", "-12.5%", "-3%"] {
            assert!(NEGATIVE_CHANGE.is_match(value), "{value}");
        }
        for value in ["1.2", "+0.5", "-", "-1,5", "- 2", "Зміна"] {
            assert!(!NEGATIVE_CHANGE.is_match(value), "{value}");
        }
    }

    #[test]
    fn class_names() {
        assert!(CLASS_NAME.is_match(DEFAULT_CHART_CLASS));
        assert!(CLASS_NAME.is_match("_chart2"));
        assert!(!CLASS_NAME.is_match("index chart"));
        assert!(!CLASS_NAME.is_match("a>b"));
        assert!(!CLASS_NAME.is_match(""));
    }
}
