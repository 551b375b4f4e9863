//! DOM Operations Adapter
//!
//! The handful of document operations the digest pipeline needs, mapped onto
//! the `dom_query` crate: select, read and replace text, remove, clone,
//! serialize.

// Re-export core types for external use
pub use dom_query::{Document, Selection};

// StrTendril is reference-counted, so cloning text is O(1)
pub use tendril::StrTendril;

// === Class Operations ===

/// Add a class to every element in the selection
#[inline]
pub fn add_class(sel: &Selection, class: &str) {
    sel.add_class(class);
}

// === Text Content ===

/// Get all text content of node and descendants
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Replace the children of every element in the selection with plain text.
///
/// The text is escaped, so markup characters survive as literal text.
pub fn set_text(sel: &Selection, text: &str) {
    sel.set_html(escape_text(text).as_str());
}

/// Get outer HTML content
#[inline]
#[must_use]
pub fn outer_html(sel: &Selection) -> StrTendril {
    sel.html()
}

/// Escape text for inclusion in element content.
#[must_use]
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

// === Querying ===

/// Query all elements by CSS selector, in document order
#[inline]
#[must_use]
pub fn query_selector_all<'a>(doc: &'a Document, selector: &str) -> Selection<'a> {
    doc.select(selector)
}

// === Tree Manipulation ===

/// Remove elements from tree
#[inline]
pub fn remove(sel: &Selection) {
    sel.remove();
}

/// Clone a whole document; edits to the copy never reach the original.
#[must_use]
pub fn clone_document(doc: &Document) -> Document {
    Document::from(doc.html().to_string())
}

/// Deep-clone an element into a standalone document.
///
/// Callers select the element back out of the returned document.
#[must_use]
pub fn clone_element(sel: &Selection) -> Document {
    Document::from(outer_html(sel))
}

// === Parsing ===

/// Parse HTML string into document
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}
