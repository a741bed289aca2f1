//! Word-keyed trie node.
//!
//! Each [`PhraseTrieNode`] stands for one word position inside one or more
//! phrases. Children are kept in insertion order and are keyed by distinct
//! words.
//!
//! # Shadowing
//!
//! Only leaf nodes terminate phrases. Once a node gains a child it stops being
//! a match, even if it was inserted as a complete phrase earlier:
//!
//! ```
//! use phrasetag::trie::PhraseTrieNode;
//!
//! let mut root = PhraseTrieNode::root();
//! root.add(&["break"], 1).unwrap();
//! assert_eq!(root.is_member(&["break"]).unwrap(), Some(1));
//!
//! root.add(&["break", "out"], 3).unwrap();
//! assert_eq!(root.is_member(&["break"]).unwrap(), None);
//! assert_eq!(root.is_member(&["break", "out"]).unwrap(), Some(3));
//! ```

use crate::error::{PhraseTagError, Result};

/// A member phrase found at the start of a word sequence.
///
/// The words borrow from the trie keys, so they are exactly the words stored
/// for the phrase.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemberPhrase<'t> {
    /// Words of the matched phrase, in order.
    pub words: Vec<&'t str>,
    /// Value stored on the terminating node.
    pub value: i64,
}

impl MemberPhrase<'_> {
    /// Number of words in the matched phrase.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false for a phrase returned by a lookup.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The phrase joined with single spaces.
    pub fn phrase_str(&self) -> String {
        self.words.join(" ")
    }
}

/// A node in the phrase trie.
///
/// The root node has an empty key. `value` is only meaningful when the node is
/// a leaf.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PhraseTrieNode {
    key: String,
    value: i64,
    children: Vec<PhraseTrieNode>,
}

impl PhraseTrieNode {
    /// Create the synthetic root node of an empty trie.
    pub fn root() -> Self {
        Self::default()
    }

    fn with_key(key: &str) -> Self {
        PhraseTrieNode {
            key: key.to_string(),
            value: 0,
            children: Vec::new(),
        }
    }

    /// The word this node matches. Empty for the root.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The value stored on this node.
    pub fn value(&self) -> i64 {
        self.value
    }

    /// Child nodes in insertion order.
    pub fn children(&self) -> &[PhraseTrieNode] {
        &self.children
    }

    /// Returns true if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Add a phrase below this node.
    ///
    /// A phrase that is a strict prefix of an existing phrase ends on an inner
    /// node and will never match. Adding a phrase whose last word already
    /// exists at that position leaves the existing node and its value alone.
    ///
    /// # Errors
    ///
    /// Returns [`PhraseTagError::InvalidArgument`] if `phrase` is empty.
    pub fn add<S: AsRef<str>>(&mut self, phrase: &[S], value: i64) -> Result<()> {
        if phrase.is_empty() {
            return Err(PhraseTagError::invalid_argument(
                "cannot add an empty phrase",
            ));
        }

        self.insert(phrase, value);
        Ok(())
    }

    fn insert<S: AsRef<str>>(&mut self, phrase: &[S], value: i64) {
        let Some((word, rest)) = phrase.split_first() else {
            return;
        };
        let word = word.as_ref();

        if let Some(child) = self.children.iter_mut().find(|c| c.key == word) {
            // An existing terminal keeps its value.
            if !rest.is_empty() {
                child.insert(rest, value);
            }
            return;
        }

        let mut child = PhraseTrieNode::with_key(word);
        if rest.is_empty() {
            child.value = value;
        } else {
            child.insert(rest, value);
        }
        self.children.push(child);
    }

    /// Remove a phrase from this trie.
    ///
    /// Removal has no defined semantics yet and always fails.
    pub fn remove<S: AsRef<str>>(&mut self, _phrase: &[S]) -> Result<()> {
        Err(PhraseTagError::not_implemented("phrase removal"))
    }

    /// Check whether `phrase` is a member and return its value.
    ///
    /// The last word must land on a leaf. A node with children never matches,
    /// because a longer phrase shadows it.
    ///
    /// # Errors
    ///
    /// Returns [`PhraseTagError::InvalidArgument`] if `phrase` is empty.
    pub fn is_member<S: AsRef<str>>(&self, phrase: &[S]) -> Result<Option<i64>> {
        if phrase.is_empty() {
            return Err(PhraseTagError::invalid_argument(
                "cannot look up an empty phrase",
            ));
        }

        Ok(self.member_value(phrase))
    }

    fn member_value<S: AsRef<str>>(&self, phrase: &[S]) -> Option<i64> {
        let (word, rest) = phrase.split_first()?;
        let child = self.child(word.as_ref())?;

        match (rest.is_empty(), child.is_leaf()) {
            (true, true) => Some(child.value),
            (true, false) | (false, true) => None,
            (false, false) => child.member_value(rest),
        }
    }

    /// Find the member phrase that `sequence` begins with, if any.
    ///
    /// Descent stops at the first leaf, so a shorter complete phrase wins over
    /// trying to extend into a longer one. Running out of input on an inner
    /// node is not a match.
    ///
    /// # Errors
    ///
    /// Returns [`PhraseTagError::InvalidArgument`] if `sequence` is empty.
    pub fn find_member<S: AsRef<str>>(&self, sequence: &[S]) -> Result<Option<MemberPhrase<'_>>> {
        if sequence.is_empty() {
            return Err(PhraseTagError::invalid_argument(
                "cannot search an empty sequence",
            ));
        }

        let mut words = Vec::new();
        let found = self.find_prefix(sequence, &mut words);
        Ok(found.map(|value| MemberPhrase { words, value }))
    }

    fn find_prefix<'t, S: AsRef<str>>(
        &'t self,
        sequence: &[S],
        words: &mut Vec<&'t str>,
    ) -> Option<i64> {
        let (word, rest) = sequence.split_first()?;
        let child = self.child(word.as_ref())?;
        words.push(child.key.as_str());

        if child.is_leaf() {
            Some(child.value)
        } else if rest.is_empty() {
            None
        } else {
            child.find_prefix(rest, words)
        }
    }

    fn child(&self, word: &str) -> Option<&PhraseTrieNode> {
        self.children.iter().find(|c| c.key == word)
    }

    /// Number of nodes below this one.
    pub fn descendant_count(&self) -> usize {
        self.children
            .iter()
            .map(|c| 1 + c.descendant_count())
            .sum()
    }

    /// Number of leaves below this one, i.e. phrases that can still match.
    pub fn terminal_count(&self) -> usize {
        self.children
            .iter()
            .map(|c| if c.is_leaf() { 1 } else { c.terminal_count() })
            .sum()
    }

    /// Length in words of the longest path below this node.
    pub fn depth(&self) -> usize {
        self.children
            .iter()
            .map(|c| 1 + c.depth())
            .max()
            .unwrap_or(0)
    }
}
