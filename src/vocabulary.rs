//! Phrase vocabularies.
//!
//! A [`Vocabulary`] is the ordered list of `(phrase, value)` entries a
//! [`PhraseTrie`](crate::trie::PhraseTrie) is built from. Order matters: the
//! trie keeps the first value inserted for a duplicate phrase.
//!
//! Vocabularies are usually loaded from JSON. Two shapes are accepted:
//!
//! ```json
//! { "break out": 3, "break up": 4 }
//! ```
//!
//! ```json
//! [
//!   { "phrase": "break out", "value": 3 },
//!   { "phrase": "break up", "value": 4 }
//! ]
//! ```
//!
//! Object keys are inserted in sorted order. Array entries are inserted in
//! file order and may repeat a phrase.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use crate::error::{PhraseTagError, Result};

/// One phrase and its value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyEntry {
    /// Space-separated phrase.
    pub phrase: String,
    /// Score attached to the phrase.
    pub value: i64,
}

impl VocabularyEntry {
    pub fn new<S: Into<String>>(phrase: S, value: i64) -> Self {
        VocabularyEntry {
            phrase: phrase.into(),
            value,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum VocabularyFile {
    Map(BTreeMap<String, i64>),
    Entries(Vec<VocabularyEntry>),
}

/// An insertion-ordered phrase vocabulary.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vocabulary {
    entries: Vec<VocabularyEntry>,
}

impl Vocabulary {
    /// Create an empty vocabulary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a vocabulary from a map. Entries are ordered by phrase so the
    /// resulting trie does not depend on hash order.
    pub fn from_map(map: HashMap<String, i64>) -> Self {
        let sorted: BTreeMap<String, i64> = map.into_iter().collect();
        sorted.into_iter().collect()
    }

    /// Build a vocabulary from entries, keeping their order.
    pub fn from_entries(entries: Vec<VocabularyEntry>) -> Self {
        Vocabulary { entries }
    }

    /// Load a vocabulary from a JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            PhraseTagError::vocabulary(format!(
                "Failed to read vocabulary file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let vocabulary = Self::from_json_str(&content).map_err(|e| {
            PhraseTagError::vocabulary(format!(
                "Failed to parse vocabulary from '{}': {}",
                path.display(),
                e
            ))
        })?;

        log::debug!(
            "loaded {} vocabulary entries from {}",
            vocabulary.len(),
            path.display()
        );

        Ok(vocabulary)
    }

    /// Parse a vocabulary from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let file: VocabularyFile = serde_json::from_str(json).map_err(|e| {
            PhraseTagError::vocabulary(format!(
                "expected an object of phrase to value or an array of entries: {e}"
            ))
        })?;

        let vocabulary: Vocabulary = match file {
            VocabularyFile::Map(map) => map.into_iter().collect(),
            VocabularyFile::Entries(entries) => Vocabulary::from_entries(entries),
        };

        for phrase in vocabulary.duplicates() {
            log::warn!("duplicate vocabulary phrase '{phrase}', keeping the first value");
        }

        Ok(vocabulary)
    }

    /// Append an entry.
    pub fn push<S: Into<String>>(&mut self, phrase: S, value: i64) {
        self.entries.push(VocabularyEntry::new(phrase, value));
    }

    /// Iterate over `(phrase, value)` in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.entries.iter().map(|e| (e.phrase.as_str(), e.value))
    }

    /// The entries in insertion order.
    pub fn entries(&self) -> &[VocabularyEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Phrases that appear more than once, in order of their second
    /// occurrence.
    pub fn duplicates(&self) -> Vec<&str> {
        let mut seen = AHashSet::new();
        let mut reported = AHashSet::new();
        let mut duplicates = Vec::new();

        for entry in &self.entries {
            let phrase = entry.phrase.as_str();
            if !seen.insert(phrase) && reported.insert(phrase) {
                duplicates.push(phrase);
            }
        }

        duplicates
    }
}

impl<S: Into<String>> FromIterator<(S, i64)> for Vocabulary {
    fn from_iter<I: IntoIterator<Item = (S, i64)>>(iter: I) -> Self {
        Vocabulary {
            entries: iter
                .into_iter()
                .map(|(phrase, value)| VocabularyEntry::new(phrase, value))
                .collect(),
        }
    }
}
