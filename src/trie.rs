//! Phrase trie keyed on whole words.
//!
//! A [`PhraseTrie`] stores single and multi-word phrases, each mapped to an
//! integer value, and scans tokenized sentences for them. It is built once and
//! only read afterwards, so a built trie can be shared between threads and
//! scanned concurrently.
//!
//! # Examples
//!
//! ```
//! use phrasetag::trie::PhraseTrie;
//!
//! let trie = PhraseTrie::from_pairs([
//!     ("break out", 3),
//!     ("break up", 4),
//!     ("shooting up", 5),
//! ])
//! .unwrap();
//!
//! let sentence: Vec<String> = "its shooting up it might even break up"
//!     .split(' ')
//!     .map(String::from)
//!     .collect();
//!
//! let matches = trie.find_all_members(&sentence).unwrap();
//! assert_eq!(matches.len(), 2);
//! assert_eq!(matches[0].phrase_str(), "shooting up");
//! assert_eq!(matches[1].value(), 4);
//! ```

pub mod node;

pub use node::{MemberPhrase, PhraseTrieNode};

use serde::{Deserialize, Serialize};

use crate::context::{PhraseContext, PhraseContextList};
use crate::error::{PhraseTagError, Result};
use crate::vocabulary::Vocabulary;

/// Summary of a built trie.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrieStats {
    /// Number of successful `add` calls.
    pub phrases_added: usize,
    /// Phrases that can still match (leaf nodes).
    pub terminal_phrases: usize,
    /// Number of word nodes, excluding the root.
    pub nodes: usize,
    /// Word count of the longest stored path.
    pub max_depth: usize,
}

/// A word-level phrase trie with a scan API.
#[derive(Clone, Debug, Default)]
pub struct PhraseTrie {
    root: PhraseTrieNode,
    phrases_added: usize,
}

impl PhraseTrie {
    /// Create an empty trie.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a trie from a vocabulary, inserting entries in vocabulary order.
    ///
    /// Each phrase string is split on single spaces.
    pub fn from_vocabulary(vocabulary: &Vocabulary) -> Result<Self> {
        let mut trie = PhraseTrie::new();
        for (phrase, value) in vocabulary.iter() {
            trie.add_phrase(phrase, value)?;
        }

        log::debug!(
            "built phrase trie from {} vocabulary entries ({} nodes, {} matchable)",
            vocabulary.len(),
            trie.root.descendant_count(),
            trie.root.terminal_count()
        );

        Ok(trie)
    }

    /// Build a trie from `(phrase, value)` pairs in iteration order.
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, i64)>,
        S: AsRef<str>,
    {
        let mut trie = PhraseTrie::new();
        for (phrase, value) in pairs {
            trie.add_phrase(phrase.as_ref(), value)?;
        }
        Ok(trie)
    }

    /// Add a space-separated phrase string.
    ///
    /// # Errors
    ///
    /// Returns [`PhraseTagError::InvalidArgument`] for a blank phrase or one
    /// containing an empty word (leading, trailing or doubled spaces).
    pub fn add_phrase(&mut self, phrase: &str, value: i64) -> Result<()> {
        let words = split_phrase(phrase)?;
        self.add(&words, value)
    }

    /// Add a phrase given as words. See [`PhraseTrieNode::add`].
    pub fn add<S: AsRef<str>>(&mut self, phrase: &[S], value: i64) -> Result<()> {
        self.root.add(phrase, value)?;
        self.phrases_added += 1;
        Ok(())
    }

    /// Remove a phrase. Not supported; always returns
    /// [`PhraseTagError::NotImplemented`].
    pub fn remove<S: AsRef<str>>(&mut self, phrase: &[S]) -> Result<()> {
        self.root.remove(phrase)
    }

    /// Check whether `phrase` is a member and return its value.
    pub fn is_member<S: AsRef<str>>(&self, phrase: &[S]) -> Result<Option<i64>> {
        self.root.is_member(phrase)
    }

    /// Find the member phrase that `sequence` begins with.
    pub fn find_member<S: AsRef<str>>(&self, sequence: &[S]) -> Result<Option<MemberPhrase<'_>>> {
        self.root.find_member(sequence)
    }

    /// Find every member phrase starting at every position of `sentence`.
    ///
    /// Overlapping matches from different start positions are all kept, in
    /// ascending start order. Use [`PhraseContextList::super_only`] to
    /// resolve them.
    ///
    /// # Errors
    ///
    /// Returns [`PhraseTagError::InvalidArgument`] if `sentence` is empty.
    pub fn find_all_members<'s>(&self, sentence: &'s [String]) -> Result<PhraseContextList<'s>> {
        if sentence.is_empty() {
            return Err(PhraseTagError::invalid_argument(
                "cannot scan an empty sentence",
            ));
        }

        let mut found = PhraseContextList::new();
        if self.root.is_leaf() {
            return Ok(found);
        }

        for start in 0..sentence.len() {
            if let Some(member) = self.root.find_member(&sentence[start..])? {
                let end = start + member.len() - 1;
                found.push(PhraseContext::new(sentence, start, end, member.value)?);
            }
        }

        log::trace!(
            "found {} member phrases in a sentence of {} words",
            found.len(),
            sentence.len()
        );

        Ok(found)
    }

    /// The root node.
    pub fn root(&self) -> &PhraseTrieNode {
        &self.root
    }

    /// Returns true if no phrase has been added.
    pub fn is_empty(&self) -> bool {
        self.root.is_leaf()
    }

    /// Summarize the trie.
    pub fn stats(&self) -> TrieStats {
        TrieStats {
            phrases_added: self.phrases_added,
            terminal_phrases: self.root.terminal_count(),
            nodes: self.root.descendant_count(),
            max_depth: self.root.depth(),
        }
    }
}

/// Split a phrase string on single spaces, rejecting empty words.
pub fn split_phrase(phrase: &str) -> Result<Vec<&str>> {
    if phrase.trim().is_empty() {
        return Err(PhraseTagError::invalid_argument("phrase is blank"));
    }

    let words: Vec<&str> = phrase.split(' ').collect();
    if words.iter().any(|w| w.is_empty()) {
        return Err(PhraseTagError::invalid_argument(format!(
            "phrase '{phrase}' contains an empty word"
        )));
    }

    Ok(words)
}
