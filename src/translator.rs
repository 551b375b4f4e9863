//! Phrase translation over free text.
//!
//! Every dictionary key becomes a case-insensitive, Unicode-aware pattern
//! anchored on word boundaries. Patterns are applied longest key first, each
//! one against the text already rewritten by the previous ones.

use std::borrow::Cow;
use std::sync::{Arc, LazyLock};

use regex::{Captures, Regex};

use crate::dictionary::{Direction, PhraseDictionary};

/// A compiled key pattern and the value substituted for it.
#[derive(Debug, Clone)]
struct PhraseRule {
    pattern: Regex,
    replacement: String,
}

/// Translator with patterns for both directions compiled up front.
#[derive(Debug, Clone)]
pub struct Translator {
    to_target: Vec<PhraseRule>,
    to_source: Vec<PhraseRule>,
}

static BUILTIN: LazyLock<Arc<Translator>> =
    LazyLock::new(|| Arc::new(Translator::new(PhraseDictionary::builtin())));

impl Translator {
    /// Compile the rules for `dictionary`.
    #[must_use]
    pub fn new(dictionary: &PhraseDictionary) -> Self {
        Self {
            to_target: compile_rules(dictionary, Direction::ToTarget),
            to_source: compile_rules(dictionary, Direction::ToSource),
        }
    }

    /// Translator over the built-in dictionary, shared process-wide.
    #[must_use]
    pub fn builtin() -> Arc<Self> {
        Arc::clone(&BUILTIN)
    }

    /// Translate `text` in `direction`. Unmapped text passes through unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use fuel_digest::{Direction, Translator};
    ///
    /// let translator = Translator::builtin();
    /// assert_eq!(
    ///     translator.translate("Середня ціна палива", Direction::ToTarget),
    ///     "Average Price палива"
    /// );
    /// ```
    #[must_use]
    pub fn translate(&self, text: &str, direction: Direction) -> String {
        let rules = match direction {
            Direction::ToTarget => &self.to_target,
            Direction::ToSource => &self.to_source,
        };

        let mut result = text.to_string();
        for rule in rules {
            let replaced = rule.pattern.replace_all(&result, |caps: &Captures<'_>| {
                preserve_case(&caps[0], &rule.replacement)
            });
            if let Cow::Owned(rewritten) = replaced {
                result = rewritten;
            }
        }
        result
    }
}

fn compile_rules(dictionary: &PhraseDictionary, direction: Direction) -> Vec<PhraseRule> {
    dictionary
        .all_keys_by_descending_length(direction)
        .iter()
        .filter_map(|key| {
            let replacement = dictionary.lookup(key, direction)?;
            match Regex::new(&key_pattern(key)) {
                Ok(pattern) => Some(PhraseRule {
                    pattern,
                    replacement: replacement.to_string(),
                }),
                Err(err) => {
                    log::warn!("skipping phrase {key:?}: {err}");
                    None
                }
            }
        })
        .collect()
}

/// Whole-phrase pattern for `key`.
///
/// A boundary is only required on an edge that is a word character, so a
/// punctuated key such as `грн.` still matches before a space.
fn key_pattern(key: &str) -> String {
    let is_word = |c: Option<char>| c.is_some_and(|c| c.is_alphanumeric() || c == '_');
    let lead = if is_word(key.chars().next()) { r"\b" } else { "" };
    let trail = if is_word(key.chars().next_back()) { r"\b" } else { "" };
    format!("(?i){lead}{}{trail}", regex::escape(key))
}

/// Titlecase the replacement when the matched span starts uppercase.
///
/// Characters without case (digits, symbols) count as uppercase.
fn preserve_case(matched: &str, replacement: &str) -> String {
    match matched.chars().next() {
        Some(first) if first.to_uppercase().eq(std::iter::once(first)) => {
            let mut chars = replacement.chars();
            match chars.next() {
                Some(head) => head.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        }
        _ => replacement.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::PhraseEntry;

    fn translator(list: &[(&str, &str)]) -> Translator {
        let entries = list.iter().map(|(s, t)| PhraseEntry::new(*s, *t)).collect();
        Translator::new(&PhraseDictionary::new(entries))
    }

    #[test]
    fn longest_phrase_wins() {
        let t = translator(&[("Середня", "Average"), ("Середня ціна", "Average Price")]);
        assert_eq!(
            t.translate("Середня ціна палива", Direction::ToTarget),
            "Average Price палива"
        );
    }

    #[test]
    fn capitalised_match_titlecases_replacement() {
        let t = translator(&[("ціна", "price")]);
        assert_eq!(t.translate("Ціна", Direction::ToTarget), "Price");
        assert_eq!(t.translate("ціна", Direction::ToTarget), "price");
    }

    #[test]
    fn lowercase_match_keeps_dictionary_casing() {
        let t = translator(&[("Ціна", "Price")]);
        assert_eq!(t.translate("ціна", Direction::ToTarget), "Price");
    }

    #[test]
    fn no_match_inside_longer_word() {
        let t = Translator::builtin();
        assert_eq!(t.translate("Газпром", Direction::ToTarget), "Газпром");
        assert_eq!(t.translate("Газ", Direction::ToTarget), "Gas");
        assert_eq!(t.translate("ціна на газ", Direction::ToTarget), "Price as of Gas");
    }

    #[test]
    fn punctuated_key_matches_before_space() {
        let t = translator(&[("грн.", "UAH")]);
        assert_eq!(t.translate("52,30 грн. за літр", Direction::ToTarget), "52,30 UAH за літр");
    }

    #[test]
    fn every_occurrence_is_replaced() {
        let t = translator(&[("газ", "gas")]);
        assert_eq!(t.translate("Газ / газ / ГАЗ", Direction::ToTarget), "Gas / gas / Gas");
    }

    #[test]
    fn earlier_replacements_feed_later_keys() {
        // "ab" -> "c d" and then "d" -> "e": the second rule sees the first one's output
        let t = translator(&[("ab", "c d"), ("d", "e")]);
        assert_eq!(t.translate("ab", Direction::ToTarget), "c e");
    }

    #[test]
    fn reverse_direction_uses_inverted_pairs() {
        let t = Translator::builtin();
        assert_eq!(t.translate("Average Price", Direction::ToSource), "Середня ціна");
        assert_eq!(t.translate("Diesel fuel", Direction::ToSource), "Дизельне паливо");
    }

    #[test]
    fn uncased_first_character_counts_as_uppercase() {
        let t = translator(&[("95-й", "ninety-fifth")]);
        assert_eq!(t.translate("95-й", Direction::ToTarget), "Ninety-fifth");
    }

    #[test]
    fn unmapped_text_passes_through() {
        let t = Translator::builtin();
        assert_eq!(t.translate("", Direction::ToTarget), "");
        assert_eq!(t.translate("OKKO 56.99", Direction::ToTarget), "OKKO 56.99");
    }

    #[test]
    fn key_pattern_boundaries() {
        assert_eq!(key_pattern("Газ"), r"(?i)\bГаз\b");
        assert_eq!(key_pattern("грн."), r"(?i)\bгрн\.");
        assert_eq!(key_pattern("(LPG)"), r"(?i)\(LPG\)");
    }
}
