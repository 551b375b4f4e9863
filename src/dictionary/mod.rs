//! Bidirectional phrase dictionary.
//!
//! Both lookup directions are built once at load time. The inverse table is
//! produced by flipping every pair in definition order; when two source
//! phrases share a target phrase the later pair wins and the collision is
//! recorded and logged as a warning.

mod direction;

pub use direction::Direction;

use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Built-in fuel market vocabulary.
const BUILTIN_PHRASES: &str = include_str!("../../data/phrases.json");

/// A single phrase pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhraseEntry {
    /// Phrase as it appears on the page.
    #[serde(rename = "source")]
    pub source_phrase: String,

    /// English rendering.
    #[serde(rename = "target")]
    pub target_phrase: String,
}

impl PhraseEntry {
    /// Create an entry from a source/target pair.
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source_phrase: source.into(),
            target_phrase: target.into(),
        }
    }
}

/// Two source phrases that invert to the same target phrase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision {
    /// Shared target phrase.
    pub target: String,
    /// Source phrase that lost the inverse slot.
    pub overwritten: String,
    /// Source phrase that holds the inverse slot.
    pub kept: String,
}

impl From<Collision> for Error {
    fn from(c: Collision) -> Self {
        Self::DictionaryCollision {
            target: c.target,
            first: c.overwritten,
            second: c.kept,
        }
    }
}

/// One lookup direction: key -> replacement, plus keys ordered longest first.
#[derive(Debug, Clone, Default)]
struct PhraseTable {
    values: HashMap<String, String>,
    keys_by_length: Vec<String>,
}

impl PhraseTable {
    /// Insert keeping the first-seen position of a key; returns the replaced value.
    fn insert(&mut self, order: &mut Vec<String>, key: &str, value: &str) -> Option<String> {
        let previous = self.values.insert(key.to_string(), value.to_string());
        if previous.is_none() {
            order.push(key.to_string());
        }
        previous
    }

    fn finish(mut self, mut order: Vec<String>) -> Self {
        // stable: equal lengths keep definition order
        order.sort_by_key(|k| std::cmp::Reverse(k.chars().count()));
        self.keys_by_length = order;
        self
    }
}

/// Immutable phrase dictionary with precomputed forward and inverse tables.
#[derive(Debug, Clone)]
pub struct PhraseDictionary {
    entries: Vec<PhraseEntry>,
    forward: PhraseTable,
    inverse: PhraseTable,
    collisions: Vec<Collision>,
}

#[allow(clippy::expect_used)]
static BUILTIN: LazyLock<PhraseDictionary> = LazyLock::new(|| {
    PhraseDictionary::from_json(BUILTIN_PHRASES).expect("built-in phrase table is valid JSON")
});

impl PhraseDictionary {
    /// Build a dictionary, letting later pairs win on inverse collisions.
    #[must_use]
    pub fn new(entries: Vec<PhraseEntry>) -> Self {
        let mut forward = PhraseTable::default();
        let mut inverse = PhraseTable::default();
        let mut forward_order = Vec::with_capacity(entries.len());
        let mut inverse_order = Vec::with_capacity(entries.len());
        let mut collisions = Vec::new();

        for entry in &entries {
            if let Some(old) =
                forward.insert(&mut forward_order, &entry.source_phrase, &entry.target_phrase)
            {
                log::warn!(
                    "duplicate source phrase {:?}: {:?} replaced by {:?}",
                    entry.source_phrase,
                    old,
                    entry.target_phrase
                );
            }

            if let Some(old) =
                inverse.insert(&mut inverse_order, &entry.target_phrase, &entry.source_phrase)
            {
                if old != entry.source_phrase {
                    log::warn!(
                        "inverse collision on {:?}: {:?} overwritten by {:?}",
                        entry.target_phrase,
                        old,
                        entry.source_phrase
                    );
                    collisions.push(Collision {
                        target: entry.target_phrase.clone(),
                        overwritten: old,
                        kept: entry.source_phrase.clone(),
                    });
                }
            }
        }

        Self {
            entries,
            forward: forward.finish(forward_order),
            inverse: inverse.finish(inverse_order),
            collisions,
        }
    }

    /// Build a dictionary, rejecting any inverse collision.
    pub fn strict(entries: Vec<PhraseEntry>) -> Result<Self> {
        let dictionary = Self::new(entries);
        match dictionary.collisions.first() {
            Some(collision) => Err(collision.clone().into()),
            None => Ok(dictionary),
        }
    }

    /// The shipped fuel market dictionary.
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Parse a JSON array of `{"source": ..., "target": ...}` objects.
    pub fn from_json(json: &str) -> Result<Self> {
        let entries: Vec<PhraseEntry> = serde_json::from_str(json)?;
        Ok(Self::new(entries))
    }

    /// Load a dictionary file in the same shape as the built-in table.
    pub fn from_path(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let dictionary = Self::from_json(&json)?;
        log::info!(
            "loaded {} phrases from {} ({} inverse collisions)",
            dictionary.len(),
            path.display(),
            dictionary.collisions.len()
        );
        Ok(dictionary)
    }

    fn table(&self, direction: Direction) -> &PhraseTable {
        match direction {
            Direction::ToTarget => &self.forward,
            Direction::ToSource => &self.inverse,
        }
    }

    /// Exact (case-sensitive) lookup of a phrase key.
    #[must_use]
    pub fn lookup(&self, phrase: &str, direction: Direction) -> Option<&str> {
        self.table(direction).values.get(phrase).map(String::as_str)
    }

    /// Keys for `direction`, longest first; ties keep definition order.
    #[must_use]
    pub fn all_keys_by_descending_length(&self, direction: Direction) -> &[String] {
        &self.table(direction).keys_by_length
    }

    /// Inverse collisions found while loading.
    #[must_use]
    pub fn collisions(&self) -> &[Collision] {
        &self.collisions
    }

    /// Entries in definition order.
    #[must_use]
    pub fn entries(&self) -> &[PhraseEntry] {
        &self.entries
    }

    /// Number of distinct source phrases.
    #[must_use]
    pub fn len(&self) -> usize {
        self.forward.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.forward.values.is_empty()
    }
}

impl Default for PhraseDictionary {
    fn default() -> Self {
        Self::builtin().clone()
    }
}
