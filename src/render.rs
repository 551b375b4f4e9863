//! Presentation fragments handed to the display layer.
//!
//! The panel carries its own stylesheet and a `backButton` control; clearing
//! the container the panel is inserted into returns the display to its
//! collapsed state.

use crate::patterns::{DEFAULT_CHART_CLASS, NEGATIVE_CHANGE_CLASS};
use crate::result::ExtractionResult;

/// Id of the control that collapses the panel.
pub const BACK_BUTTON_ID: &str = "backButton";

/// Message shown when the upstream page cannot be loaded.
pub const UNAVAILABLE_MESSAGE: &str = "Failed to load content.";

/// Placeholder shown while a page is being fetched.
pub const LOADING_MESSAGE: &str = "Loading...";

/// Table styling shared by the digest panel and the operator ranking.
const TABLE_STYLE: &str = "\
table { width: 100%; border-collapse: collapse; margin-top: 1rem; }
table, th, td { border: 1px solid #ccc; }
th, td { padding: 8px; text-align: left; }
th { background-color: #f2f2f2; }";

const BACK_BUTTON_STYLE: &str = "margin-bottom: 1rem; background-color: #00d1b2; color: white; \
border: none; padding: 0.5rem 1rem; border-radius: 5px; cursor: pointer;";

/// Stylesheet for the digest panel: tables, chart widgets, negative changes.
#[must_use]
pub fn stylesheet() -> String {
    format!(
        "<style>\n{TABLE_STYLE}\n\
         .{DEFAULT_CHART_CLASS} {{ max-width: 100%; height: auto; margin: 10px 0; \
         border: 1px solid #ddd; border-radius: 5px; }}\n\
         td.{NEGATIVE_CHANGE_CLASS} {{ color: #d32f2f; }}\n</style>"
    )
}

/// Stylesheet with table rules only.
#[must_use]
pub fn table_stylesheet() -> String {
    format!("<style>\n{TABLE_STYLE}\n</style>")
}

/// Wrap an extraction result into a self-contained, collapsible panel.
#[must_use]
pub fn panel(result: &ExtractionResult) -> String {
    format!(
        "{}\n<button id=\"{BACK_BUTTON_ID}\" style=\"{BACK_BUTTON_STYLE}\">\u{2b05} Back</button>\n\
         <div style=\"margin-top: 1rem;\">{}</div>",
        stylesheet(),
        result.html
    )
}

/// Panel body for a page that could not be loaded.
#[must_use]
pub fn unavailable() -> &'static str {
    UNAVAILABLE_MESSAGE
}

/// Panel body while loading.
#[must_use]
pub fn loading() -> &'static str {
    LOADING_MESSAGE
}
