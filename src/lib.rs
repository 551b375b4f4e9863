//! # fuel-digest
//!
//! Condenses Ukrainian fuel market pages into a small translated fragment.
//!
//! A page is parsed, stripped of known tracker scripts, and reduced to three
//! kinds of element: headings, tables and chart widgets. Heading text and
//! table cells are rewritten through a fixed bidirectional phrase dictionary
//! (Ukrainian market terms and their English equivalents); charts pass
//! through untouched.
//!
//! ## Quick Start
//!
//! ```rust
//! use fuel_digest::extract;
//!
//! let html = r#"<html><body>
//!     <h1>Ціна на газ</h1>
//!     <table><tr><th>Дата</th><td>-1.5%</td></tr></table>
//! </body></html>"#;
//!
//! let result = extract(html);
//! assert!(result.html.starts_with("<h3>Price as of Gas</h3><br><br><table>"));
//! assert_eq!(result.counts.tables, 1);
//! ```
//!
//! ## Features
//!
//! - **Phrase translation**: longest-match, case-preserving, whole-word
//! - **Sanitization**: removes ad/tracker scripts by signature
//! - **Grouped extraction**: headings, then tables, then charts
//! - **Refresh daemon**: daily fetch gated by a persisted run/stop status

mod error;
mod options;
mod patterns;
mod result;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Character encoding detection and decoding.
pub mod encoding;

/// Bidirectional phrase dictionary.
pub mod dictionary;

/// Dictionary-driven text translation.
pub mod translator;

/// Tracker script removal.
pub mod sanitizer;

/// Heading, table and chart extraction.
pub mod extractor;

/// Display panel markup.
pub mod render;

/// Fuel retail operator ranking.
pub mod operators;

/// Catalogue of market pages.
pub mod sources;

/// Upstream page retrieval.
pub mod fetch;

/// Fetch-then-extract orchestration.
pub mod pipeline;

/// Run/stop status store and protocol.
pub mod status;

/// Daily refresh timer.
pub mod scheduler;

/// Application configuration file.
pub mod config;

// Public API - re-exports
pub use dictionary::{Direction, PhraseDictionary, PhraseEntry};
pub use error::{Error, Result};
pub use extractor::ContentExtractor;
pub use options::{Options, DEFAULT_SEPARATOR};
pub use result::{ElementCounts, ExtractionResult, Section, SectionKind};
pub use sanitizer::ContentSanitizer;
pub use translator::Translator;

/// Extracts a page with default options and the built-in dictionary.
///
/// # Example
///
/// ```rust
/// use fuel_digest::extract;
///
/// let result = extract("<html><body><h2>  Дизельне паливо </h2></body></html>");
/// assert_eq!(result.html, "<h3>Diesel fuel</h3>");
/// ```
#[must_use]
pub fn extract(html: &str) -> ExtractionResult {
    extract_with_options(html, &Options::default())
}

/// Extracts a page with custom options and the built-in dictionary.
///
/// # Example
///
/// ```rust
/// use fuel_digest::{extract_with_options, Direction, Options};
///
/// let options = Options {
///     direction: Direction::ToSource,
///     ..Options::default()
/// };
/// let result = extract_with_options("<h1>Price</h1>", &options);
/// assert_eq!(result.html, "<h3>Ціна</h3>");
/// ```
#[must_use]
pub fn extract_with_options(html: &str, options: &Options) -> ExtractionResult {
    ContentExtractor::new(Translator::builtin(), options.clone()).extract_html(html)
}

/// Extracts a page given as raw bytes, decoding it per its `<meta>` charset.
///
/// # Errors
///
/// [`Error::MalformedDocument`] when most of the bytes are not valid in the
/// declared encoding. Isolated invalid bytes are replaced, not rejected.
///
/// # Example
///
/// ```rust
/// use fuel_digest::extract_bytes;
///
/// // windows-1251 "Ціна"
/// let html = b"<html><head><meta charset=\"windows-1251\"></head><body><h1>\xD6\xB3\xED\xE0</h1></body></html>";
/// let result = extract_bytes(html)?;
/// assert_eq!(result.html, "<h3>Price</h3>");
/// # Ok::<(), fuel_digest::Error>(())
/// ```
pub fn extract_bytes(html: &[u8]) -> Result<ExtractionResult> {
    extract_bytes_with_options(html, &Options::default())
}

/// Byte-input counterpart of [`extract_with_options`].
///
/// # Errors
///
/// [`Error::MalformedDocument`] when most of the bytes are not valid in the
/// declared encoding. Isolated invalid bytes are replaced, not rejected.
pub fn extract_bytes_with_options(html: &[u8], options: &Options) -> Result<ExtractionResult> {
    ContentExtractor::new(Translator::builtin(), options.clone()).extract_bytes(html, options.direction)
}
