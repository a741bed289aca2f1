//! Unicode word tokenizer implementation.
//!
//! This module provides a tokenizer that splits text using Unicode word boundary
//! rules (UAX #29). Punctuation and whitespace segments are dropped.
//!
//! # Examples
//!
//! ```
//! use phrasetag::tokenizer::Tokenizer;
//! use phrasetag::tokenizer::unicode_word::UnicodeWordTokenizer;
//!
//! let tokenizer = UnicodeWordTokenizer::new();
//! let words = tokenizer.tokenize("Breaking out, nicely!").unwrap();
//! assert_eq!(words, vec!["Breaking", "out", "nicely"]);
//! ```

use unicode_segmentation::UnicodeSegmentation;

use super::Tokenizer;

use crate::error::Result;

/// A tokenizer that splits text on Unicode word boundaries.
///
/// Words keep their original case; nothing is folded or normalized.
#[derive(Clone, Debug, Default)]
pub struct UnicodeWordTokenizer;

impl UnicodeWordTokenizer {
    /// Create a new Unicode word tokenizer.
    pub fn new() -> Self {
        UnicodeWordTokenizer
    }
}

impl Tokenizer for UnicodeWordTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        Ok(text.unicode_words().map(String::from).collect())
    }

    fn name(&self) -> &'static str {
        "unicode_word"
    }
}
