//! Located phrase matches.
//!
//! A [`PhraseContext`] records one member phrase found in a tokenized
//! sentence: where it starts and ends and the value stored for it in the trie.
//! The sentence itself is borrowed, so every match produced by one scan points
//! at the same caller-owned words.
//!
//! [`PhraseContextList`] is the ordered collection returned by a scan. It
//! sorts by start index, then by end index, and knows how to drop matches that
//! are swallowed by a larger one (see [`PhraseContextList::super_only`]).
//!
//! # Examples
//!
//! ```
//! use phrasetag::context::PhraseContext;
//!
//! let sentence: Vec<String> = "$AAPL will break out nicely"
//!     .split(' ')
//!     .map(String::from)
//!     .collect();
//!
//! let context = PhraseContext::new(&sentence, 2, 4, 6).unwrap();
//! assert_eq!(context.phrase_str(), "break out nicely");
//! assert_eq!(context.indices(), [2, 4]);
//! ```

pub mod overlap;

use std::cmp::Ordering;
use std::ops::Deref;

use crate::error::{PhraseTagError, Result};

/// One member phrase located in a sentence.
///
/// `start` and `end` are inclusive word indices into the sentence, so the
/// phrase is `sentence[start..=end]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PhraseContext<'s> {
    sentence: &'s [String],
    start: usize,
    end: usize,
    value: i64,
}

impl<'s> PhraseContext<'s> {
    /// Create a new phrase context over `sentence[start..=end]`.
    ///
    /// # Errors
    ///
    /// Returns [`PhraseTagError::InvalidArgument`] if the span is reversed or
    /// runs past the end of the sentence.
    pub fn new(sentence: &'s [String], start: usize, end: usize, value: i64) -> Result<Self> {
        if start > end {
            return Err(PhraseTagError::invalid_argument(format!(
                "phrase span [{start}, {end}] is reversed"
            )));
        }
        if end >= sentence.len() {
            return Err(PhraseTagError::invalid_argument(format!(
                "phrase span [{start}, {end}] exceeds sentence of {} words",
                sentence.len()
            )));
        }

        Ok(PhraseContext {
            sentence,
            start,
            end,
            value,
        })
    }

    /// The matched words.
    pub fn phrase(&self) -> &'s [String] {
        &self.sentence[self.start..=self.end]
    }

    /// The full sentence the phrase was found in.
    pub fn sentence(&self) -> &'s [String] {
        self.sentence
    }

    /// First word index of the phrase.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Last word index of the phrase (inclusive).
    pub fn end(&self) -> usize {
        self.end
    }

    /// The `[start, end]` span.
    pub fn indices(&self) -> [usize; 2] {
        [self.start, self.end]
    }

    /// Value of the phrase in the trie.
    pub fn value(&self) -> i64 {
        self.value
    }

    /// Number of words in the phrase.
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// A located phrase always spans at least one word.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The phrase joined with single spaces.
    pub fn phrase_str(&self) -> String {
        self.phrase().join(" ")
    }

    /// The sentence joined with single spaces.
    pub fn sentence_str(&self) -> String {
        self.sentence.join(" ")
    }

    /// Returns true if the two spans share at least one word index.
    pub fn overlaps(&self, other: &PhraseContext<'_>) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Orders by start index, then by end index.
    pub fn span_cmp(&self, other: &PhraseContext<'_>) -> Ordering {
        self.start
            .cmp(&other.start)
            .then_with(|| self.end.cmp(&other.end))
    }
}

/// An ordered list of phrase matches.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PhraseContextList<'s>(Vec<PhraseContext<'s>>);

impl<'s> PhraseContextList<'s> {
    /// Create an empty list.
    pub fn new() -> Self {
        PhraseContextList(Vec::new())
    }

    /// Append a match.
    pub fn push(&mut self, context: PhraseContext<'s>) {
        self.0.push(context);
    }

    /// Sort by `(start, end)` ascending.
    ///
    /// The sort is stable, so matches with identical spans keep their
    /// relative order.
    pub fn sort(&mut self) {
        self.0.sort_by(|a, b| a.span_cmp(b));
    }

    /// Returns true if the list is sorted by `(start, end)`.
    pub fn is_sorted(&self) -> bool {
        self.0
            .windows(2)
            .all(|pair| pair[0].span_cmp(&pair[1]) != Ordering::Greater)
    }

    /// Sum of the values of all matches.
    ///
    /// # Errors
    ///
    /// Returns [`PhraseTagError::InvalidArgument`] if the sum overflows `i64`.
    pub fn total_value(&self) -> Result<i64> {
        sum_values(self.0.iter().map(|c| c.value))
    }

    /// Consume the list into its matches.
    pub fn into_vec(self) -> Vec<PhraseContext<'s>> {
        self.0
    }
}

/// Sum phrase values, rejecting totals that do not fit in an `i64`.
pub fn sum_values<I: IntoIterator<Item = i64>>(values: I) -> Result<i64> {
    values
        .into_iter()
        .try_fold(0i64, |total, value| total.checked_add(value))
        .ok_or_else(|| PhraseTagError::invalid_argument("sum of phrase values overflows i64"))
}

impl<'s> Deref for PhraseContextList<'s> {
    type Target = [PhraseContext<'s>];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'s> From<Vec<PhraseContext<'s>>> for PhraseContextList<'s> {
    fn from(contexts: Vec<PhraseContext<'s>>) -> Self {
        PhraseContextList(contexts)
    }
}

impl<'s> FromIterator<PhraseContext<'s>> for PhraseContextList<'s> {
    fn from_iter<I: IntoIterator<Item = PhraseContext<'s>>>(iter: I) -> Self {
        PhraseContextList(iter.into_iter().collect())
    }
}

impl<'s> IntoIterator for PhraseContextList<'s> {
    type Item = PhraseContext<'s>;
    type IntoIter = std::vec::IntoIter<PhraseContext<'s>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, 's> IntoIterator for &'a PhraseContextList<'s> {
    type Item = &'a PhraseContext<'s>;
    type IntoIter = std::slice::Iter<'a, PhraseContext<'s>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
