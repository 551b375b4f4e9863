//! Tracker script removal.
//!
//! Scripts whose text contains a known ad-loader or tracker signature are
//! dropped from the document before anything is extracted from it. Other
//! scripts are left alone.

use crate::dom::{self, Document};
use crate::patterns::SCRIPT_SELECTOR;

/// Signatures of the ad and tracking loaders seen on the market pages.
pub const DEFAULT_TRACKER_SIGNATURES: &[&str] =
    &["disablePlayerDetachOnCreativeLoad", "googletag", "BidmaticLoader"];

/// Removes tracker scripts matched by substring signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentSanitizer {
    signatures: Vec<String>,
}

impl Default for ContentSanitizer {
    fn default() -> Self {
        Self::new(DEFAULT_TRACKER_SIGNATURES.iter().copied())
    }
}

impl ContentSanitizer {
    /// Create a sanitizer for the given signatures. Empty signatures are ignored.
    pub fn new<I, S>(signatures: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            signatures: signatures
                .into_iter()
                .map(Into::into)
                .filter(|s: &String| !s.is_empty())
                .collect(),
        }
    }

    #[must_use]
    pub fn signatures(&self) -> &[String] {
        &self.signatures
    }

    /// Whether a script body carries any tracker signature.
    #[must_use]
    pub fn is_tracker(&self, script_text: &str) -> bool {
        self.signatures.iter().any(|sig| script_text.contains(sig.as_str()))
    }

    /// Remove every matching script from `doc`, returning how many were removed.
    pub fn sanitize(&self, doc: &Document) -> usize {
        let mut removed = 0;
        for script in dom::query_selector_all(doc, SCRIPT_SELECTOR).iter() {
            if self.is_tracker(&dom::text_content(&script)) {
                dom::remove(&script);
                removed += 1;
            }
        }
        if removed > 0 {
            log::debug!("removed {removed} tracker script(s)");
        }
        removed
    }
}
