//! # phrasetag
//!
//! Word-level phrase tagging for tokenized text.
//!
//! ## Features
//!
//! - A word-keyed phrase trie with integer values per phrase
//! - A left-to-right scanner that reports every phrase match in a sentence
//! - Super-phrase resolution that drops matches swallowed by larger ones
//! - Pluggable tokenizers and a parallel batch tagger
//!
//! ## Example
//!
//! ```
//! use phrasetag::prelude::*;
//!
//! let trie = PhraseTrie::from_pairs([("breaking double bottom", 8), ("double bottom", 9)]).unwrap();
//! let sentence: Vec<String> = "its breaking double bottom"
//!     .split(' ')
//!     .map(String::from)
//!     .collect();
//!
//! let all = trie.find_all_members(&sentence).unwrap();
//! assert_eq!(all.len(), 2);
//!
//! let supers = all.super_only();
//! assert_eq!(supers.len(), 1);
//! assert_eq!(supers[0].indices(), [1, 3]);
//! ```

pub mod cli;
pub mod config;
pub mod context;
pub mod error;
pub mod tagger;
pub mod tokenizer;
pub mod trie;
pub mod vocabulary;

pub mod prelude {
    pub use crate::config::TaggerConfig;
    pub use crate::context::overlap::resolve_overlaps;
    pub use crate::context::{PhraseContext, PhraseContextList};
    pub use crate::error::{PhraseTagError, Result};
    pub use crate::tagger::{PhraseTagger, TagReport, TaggedPhrase};
    pub use crate::tokenizer::{Tokenizer, TokenizerKind};
    pub use crate::trie::{PhraseTrie, PhraseTrieNode, TrieStats};
    pub use crate::vocabulary::{Vocabulary, VocabularyEntry};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
