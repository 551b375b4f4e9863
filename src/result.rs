//! Result types for extraction output.
//!
//! An extraction yields the retained sections in output order, the joined
//! fragment ready for display, and per-kind counts.

use serde::Serialize;

/// Kind of a retained element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    /// Heading (h1-h3), emitted as a level-3 heading.
    Heading,
    /// Table with translated cells.
    Table,
    /// Chart widget passed through untranslated.
    Chart,
}

/// One serialized retained element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub kind: SectionKind,
    pub html: String,
}

/// How many elements of each kind were retained.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ElementCounts {
    pub headings: usize,
    pub tables: usize,
    pub charts: usize,
}

impl ElementCounts {
    #[must_use]
    pub fn total(&self) -> usize {
        self.headings + self.tables + self.charts
    }
}

/// Result of extracting one document.
///
/// Sections are grouped by kind (headings, then tables, then charts), each
/// group in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtractionResult {
    /// Retained sections in output order.
    pub sections: Vec<Section>,

    /// Sections joined with the configured separator.
    pub html: String,

    /// Per-kind counts of retained sections.
    pub counts: ElementCounts,

    /// Tracker scripts removed from the working copy.
    pub scripts_removed: usize,
}

impl ExtractionResult {
    /// Assemble a result from sections already in output order.
    #[must_use]
    pub fn from_sections(sections: Vec<Section>, separator: &str, scripts_removed: usize) -> Self {
        let mut counts = ElementCounts::default();
        for section in &sections {
            match section.kind {
                SectionKind::Heading => counts.headings += 1,
                SectionKind::Table => counts.tables += 1,
                SectionKind::Chart => counts.charts += 1,
            }
        }

        let html = sections
            .iter()
            .map(|s| s.html.as_str())
            .collect::<Vec<_>>()
            .join(separator);

        Self {
            sections,
            html,
            counts,
            scripts_removed,
        }
    }

    /// True when nothing was retained.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Sections of one kind, in document order.
    pub fn sections_of(&self, kind: SectionKind) -> impl Iterator<Item = &Section> {
        self.sections.iter().filter(move |s| s.kind == kind)
    }
}
