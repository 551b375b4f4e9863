//! Charset detection and decoding of fetched pages.
//!
//! Market pages are served as UTF-8 or windows-1251; the declared charset is
//! read from the `<meta>` tags in the first kilobyte. Stray invalid bytes
//! decode to U+FFFD; only a payload that is mostly undecodable is rejected.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

use crate::error::{Error, Result};

/// Number of leading bytes inspected for a charset declaration.
const SNIFF_LEN: usize = 1024;

/// `<meta charset="...">`
#[allow(clippy::expect_used)]
static META_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>;]+)"#).expect("META_CHARSET regex")
});

/// `<meta http-equiv="Content-Type" content="text/html; charset=...">`
#[allow(clippy::expect_used)]
static HTTP_EQUIV_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)<meta[^>]+http-equiv\s*=\s*["']?content-type["']?[^>]+content\s*=\s*["']?[^"'>]*;\s*charset\s*=\s*([^"'\s>]+)"#,
    )
    .expect("HTTP_EQUIV_CHARSET regex")
});

/// Charset label declared in the document head, if any.
fn declared_charset(head: &str) -> Option<&str> {
    [&*META_CHARSET, &*HTTP_EQUIV_CHARSET]
        .into_iter()
        .find_map(|re| re.captures(head).and_then(|c| c.get(1)))
        .map(|m| m.as_str())
}

/// Detect the character encoding of raw page bytes.
///
/// Unknown or missing labels fall back to UTF-8.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_LEN)]);

    declared_charset(&head)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .unwrap_or(UTF_8)
}

/// Decode raw page bytes into a UTF-8 string.
///
/// A byte-order mark overrides the declared charset. Invalid byte sequences
/// become replacement characters; when those make up more than half of the
/// decoded characters the payload is not a page and
/// [`Error::MalformedDocument`] is returned.
///
/// # Examples
///
/// ```
/// use fuel_digest::encoding::decode_html;
///
/// let page = decode_html(b"<html><body><h1>Ok</h1></body></html>")?;
/// assert!(page.contains("<h1>Ok</h1>"));
/// # Ok::<(), fuel_digest::Error>(())
/// ```
pub fn decode_html(html: &[u8]) -> Result<String> {
    let declared = detect_encoding(html);
    let (decoded, used, had_errors) = declared.decode(html);

    if had_errors {
        let total = decoded.chars().count();
        let replaced = decoded.chars().filter(|&c| c == char::REPLACEMENT_CHARACTER).count();
        if replaced * 2 > total {
            return Err(Error::MalformedDocument(format!(
                "payload is not {} ({replaced} of {total} characters undecodable)",
                used.name()
            )));
        }
        log::warn!(
            "page has {replaced} byte sequence(s) invalid in {}; replaced with U+FFFD",
            used.name()
        );
    }

    Ok(decoded.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utf8_is_the_default() {
        assert_eq!(detect_encoding("<html><body>Ціна</body></html>".as_bytes()), UTF_8);
    }

    #[test]
    fn detects_meta_charset() {
        let html = br#"<html><head><meta charset="windows-1251"></head></html>"#;
        assert_eq!(detect_encoding(html).name(), "windows-1251");
    }

    #[test]
    fn detects_http_equiv_charset() {
        let html = br#"<META HTTP-EQUIV="content-type" CONTENT="text/html; CHARSET=windows-1251">"#;
        assert_eq!(detect_encoding(html).name(), "windows-1251");
    }

    #[test]
    fn unknown_label_falls_back_to_utf8() {
        let html = br#"<meta charset="no-such-charset">"#;
        assert_eq!(detect_encoding(html), UTF_8);
    }

    #[test]
    fn decodes_windows1251_cyrillic() {
        // "Ціна" in windows-1251
        let html = b"<html><head><meta charset=\"windows-1251\"></head><body>\xD6\xB3\xED\xE0</body></html>";
        let decoded = decode_html(html);
        assert!(matches!(decoded.as_deref(), Ok(s) if s.contains("Ціна")));
    }

    #[test]
    fn stray_invalid_byte_is_replaced() {
        let html = b"<html><body>Test \xFF\xFE broken</body></html>";
        let decoded = decode_html(html);
        assert!(matches!(decoded.as_deref(), Ok(s) if s.contains("Test \u{FFFD}\u{FFFD} broken")));
    }

    #[test]
    fn mostly_undecodable_payload_is_malformed() {
        let html = [0xFF_u8; 64];
        assert!(matches!(decode_html(&html), Err(Error::MalformedDocument(_))));
    }

    #[test]
    fn charset_label_stops_at_semicolon() {
        assert_eq!(declared_charset("<meta charset=utf-8;>"), Some("utf-8"));
    }
}
