//! Content extraction.
//!
//! Extraction runs on a private copy of the document: tracker scripts are
//! stripped, then three passes gather headings, tables and chart widgets.
//! Output is grouped by pass, each group in document order; it is not a
//! single document-order walk.
//!
//! # Module Structure
//!
//! - `tables`: cell-by-cell table translation and negative-change marking

mod tables;

use std::sync::Arc;

use crate::dictionary::Direction;
use crate::dom::{self, Document};
use crate::encoding;
use crate::error::Result;
use crate::options::Options;
use crate::patterns::{CLASS_NAME, HEADING_SELECTOR, TABLE_SELECTOR};
use crate::result::{ExtractionResult, Section, SectionKind};
use crate::sanitizer::ContentSanitizer;
use crate::translator::Translator;

/// Selects, translates and serializes the important parts of a market page.
///
/// Holds no per-call state, so one extractor can serve concurrent callers as
/// long as each passes its own document.
#[derive(Debug, Clone)]
pub struct ContentExtractor {
    translator: Arc<Translator>,
    sanitizer: ContentSanitizer,
    options: Options,
}

impl Default for ContentExtractor {
    fn default() -> Self {
        Self::new(Translator::builtin(), Options::default())
    }
}

impl ContentExtractor {
    /// Create an extractor; the sanitizer is built from `options.tracker_signatures`.
    #[must_use]
    pub fn new(translator: Arc<Translator>, options: Options) -> Self {
        let sanitizer = ContentSanitizer::new(options.tracker_signatures.iter().cloned());
        Self {
            translator,
            sanitizer,
            options,
        }
    }

    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    #[must_use]
    pub fn translator(&self) -> &Translator {
        &self.translator
    }

    /// Extract `doc` in `direction`. The caller's document is not modified.
    #[must_use]
    pub fn extract(&self, doc: &Document, direction: Direction) -> ExtractionResult {
        let working = dom::clone_document(doc);
        let scripts_removed = self.sanitizer.sanitize(&working);

        let mut sections = Vec::new();
        self.collect_headings(&working, direction, &mut sections);
        self.collect_tables(&working, direction, &mut sections);
        self.collect_charts(&working, &mut sections);

        let result = ExtractionResult::from_sections(sections, &self.options.separator, scripts_removed);
        log::debug!(
            "extracted {} heading(s), {} table(s), {} chart(s) [{direction}]",
            result.counts.headings,
            result.counts.tables,
            result.counts.charts
        );
        result
    }

    /// Parse `html` and extract it in the configured direction.
    #[must_use]
    pub fn extract_html(&self, html: &str) -> ExtractionResult {
        self.extract(&dom::parse(html), self.options.direction)
    }

    /// Decode raw page bytes per their `<meta>` charset and extract them.
    ///
    /// # Errors
    ///
    /// [`crate::Error::MalformedDocument`] when the payload is mostly
    /// undecodable.
    pub fn extract_bytes(&self, html: &[u8], direction: Direction) -> Result<ExtractionResult> {
        let decoded = encoding::decode_html(html)?;
        Ok(self.extract(&dom::parse(&decoded), direction))
    }

    /// Headings h1-h3, flattened to h3.
    fn collect_headings(&self, doc: &Document, direction: Direction, out: &mut Vec<Section>) {
        for heading in dom::query_selector_all(doc, HEADING_SELECTOR).iter() {
            let text = dom::text_content(&heading);
            let translated = self.translator.translate(text.trim(), direction);
            out.push(Section {
                kind: SectionKind::Heading,
                html: format!("<h3>{}</h3>", dom::escape_text(&translated)),
            });
        }
    }

    fn collect_tables(&self, doc: &Document, direction: Direction, out: &mut Vec<Section>) {
        for table in dom::query_selector_all(doc, TABLE_SELECTOR).iter() {
            out.push(Section {
                kind: SectionKind::Table,
                html: tables::translate_table(
                    &table,
                    &self.translator,
                    direction,
                    self.options.mark_negative_changes,
                ),
            });
        }
    }

    /// Chart widgets pass through as-is; styling belongs to the presentation layer.
    fn collect_charts(&self, doc: &Document, out: &mut Vec<Section>) {
        let class = self.options.chart_class.as_str();
        if !CLASS_NAME.is_match(class) {
            log::warn!("chart class {class:?} is not a plain class name; skipping charts");
            return;
        }

        for chart in dom::query_selector_all(doc, &format!(".{class}")).iter() {
            out.push(Section {
                kind: SectionKind::Chart,
                html: dom::outer_html(&chart).to_string(),
            });
        }
    }
}
