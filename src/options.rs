//! Configuration options for content extraction.
//!
//! The `Options` struct controls which elements are kept and how the output
//! fragment is assembled.

use crate::dictionary::Direction;
use crate::patterns::DEFAULT_CHART_CLASS;
use crate::sanitizer::DEFAULT_TRACKER_SIGNATURES;

/// Markup placed between retained sections.
pub const DEFAULT_SEPARATOR: &str = "<br><br>";

/// Configuration options for content extraction.
///
/// Use `Default::default()` for the market-page settings.
///
/// # Example
///
/// ```rust
/// use fuel_digest::{Direction, Options};
///
/// let options = Options {
///     direction: Direction::ToSource,
///     mark_negative_changes: false,
///     ..Options::default()
/// };
/// assert_eq!(options.chart_class, "index-chart");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Translation direction used by the convenience entry points.
    ///
    /// Default: `Direction::ToTarget`
    pub direction: Direction,

    /// Marker class identifying chart widgets.
    ///
    /// Must be a bare class name; anything else disables the chart pass.
    ///
    /// Default: `"index-chart"`
    pub chart_class: String,

    /// Markup joining the retained sections.
    ///
    /// Default: `"<br><br>"`
    pub separator: String,

    /// Substrings identifying tracker scripts to strip.
    ///
    /// Default: the ad-loader signatures seen on the market pages
    pub tracker_signatures: Vec<String>,

    /// Add the `negative-change` class to table cells holding a negative value.
    ///
    /// Default: `true`
    pub mark_negative_changes: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            direction: Direction::ToTarget,
            chart_class: DEFAULT_CHART_CLASS.to_string(),
            separator: DEFAULT_SEPARATOR.to_string(),
            tracker_signatures: DEFAULT_TRACKER_SIGNATURES
                .iter()
                .map(ToString::to_string)
                .collect(),
            mark_negative_changes: true,
        }
    }
}
