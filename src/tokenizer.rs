//! Tokenizers that turn raw text into the word sequences the trie scans.
//!
//! The trie never normalizes words, so the tokenizer decides what a word is.
//! Vocabulary phrases are split on single spaces; pick a tokenizer that splits
//! sentences the same way the vocabulary was written.
//!
//! # Available Tokenizers
//!
//! - [`whitespace::WhitespaceTokenizer`] - Splits on any whitespace, drops empty words
//! - [`space::SpaceTokenizer`] - Splits on single spaces exactly, keeps empty words
//! - [`unicode_word::UnicodeWordTokenizer`] - Uses Unicode word boundaries
//!
//! # Examples
//!
//! ```
//! use phrasetag::tokenizer::Tokenizer;
//! use phrasetag::tokenizer::whitespace::WhitespaceTokenizer;
//!
//! let tokenizer = WhitespaceTokenizer::new();
//! let words = tokenizer.tokenize("break  out\tnicely").unwrap();
//! assert_eq!(words, vec!["break", "out", "nicely"]);
//! ```

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Trait for tokenizers that split text into words.
///
/// The trait requires `Send + Sync` so a tagger can be shared across threads.
pub trait Tokenizer: Send + Sync {
    /// Split `text` into words.
    fn tokenize(&self, text: &str) -> Result<Vec<String>>;

    /// Get the name of this tokenizer (for logging and configuration).
    fn name(&self) -> &'static str;
}

/// Selects a built-in tokenizer from configuration or the command line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum TokenizerKind {
    /// Split on any whitespace
    #[default]
    Whitespace,
    /// Split on single spaces exactly
    Space,
    /// Split on Unicode word boundaries
    UnicodeWord,
}

impl TokenizerKind {
    /// Instantiate the tokenizer.
    pub fn build(self) -> Box<dyn Tokenizer> {
        match self {
            TokenizerKind::Whitespace => Box::new(whitespace::WhitespaceTokenizer::new()),
            TokenizerKind::Space => Box::new(space::SpaceTokenizer::new()),
            TokenizerKind::UnicodeWord => Box::new(unicode_word::UnicodeWordTokenizer::new()),
        }
    }
}

pub mod space;
pub mod unicode_word;
pub mod whitespace;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_builds_named_tokenizer() {
        assert_eq!(TokenizerKind::Whitespace.build().name(), "whitespace");
        assert_eq!(TokenizerKind::Space.build().name(), "space");
        assert_eq!(TokenizerKind::UnicodeWord.build().name(), "unicode_word");
    }

    #[test]
    fn test_kind_serde_names() {
        let kind: TokenizerKind = serde_json::from_str(r#""unicode_word""#).unwrap();
        assert_eq!(kind, TokenizerKind::UnicodeWord);
        assert_eq!(
            serde_json::to_string(&TokenizerKind::Space).unwrap(),
            r#""space""#
        );
    }
}
