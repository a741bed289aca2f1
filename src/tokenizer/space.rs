//! Single-space tokenizer.
//!
//! Splits on `' '` only, the same rule used for vocabulary phrases. For
//! non-empty text the output is exactly `text.split(' ')`, so match indices
//! can be used directly against a plain split of the raw text.
//!
//! Runs of spaces, leading spaces and trailing spaces produce empty words.
//! Empty words count towards `word_count` and occupy an index, but never
//! match because vocabulary phrases cannot contain them. `"break  up"` is
//! three words here and two with the whitespace tokenizer.

use super::Tokenizer;

use crate::error::Result;

/// A tokenizer that splits text on single spaces.
#[derive(Clone, Debug, Default)]
pub struct SpaceTokenizer;

impl SpaceTokenizer {
    /// Create a new space tokenizer.
    pub fn new() -> Self {
        SpaceTokenizer
    }
}

impl Tokenizer for SpaceTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        if text.is_empty() {
            return Ok(Vec::new());
        }
        Ok(text.split(' ').map(String::from).collect())
    }

    fn name(&self) -> &'static str {
        "space"
    }
}
