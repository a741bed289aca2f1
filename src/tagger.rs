//! End-to-end phrase tagging.
//!
//! [`PhraseTagger`] ties a built [`PhraseTrie`] to a tokenizer and a
//! [`TaggerConfig`]: raw text goes in, owned [`TaggedPhrase`] records and a
//! total score come out.
//!
//! # Examples
//!
//! ```
//! use phrasetag::config::TaggerConfig;
//! use phrasetag::tagger::PhraseTagger;
//! use phrasetag::vocabulary::Vocabulary;
//!
//! let vocabulary: Vocabulary = [("breaking double bottom", 8), ("double bottom", 9)]
//!     .into_iter()
//!     .collect();
//! let tagger = PhraseTagger::from_vocabulary(&vocabulary, TaggerConfig::default()).unwrap();
//!
//! let report = tagger.tag("its breaking double bottom today").unwrap();
//! assert_eq!(report.phrases.len(), 1);
//! assert_eq!(report.phrases[0].phrase, "breaking double bottom");
//! assert_eq!(report.score, 8);
//! ```

use std::fmt;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::TaggerConfig;
use crate::context::{PhraseContext, sum_values};
use crate::error::Result;
use crate::tokenizer::Tokenizer;
use crate::trie::PhraseTrie;
use crate::vocabulary::Vocabulary;

/// An owned phrase match, detached from the sentence it was found in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedPhrase {
    /// The phrase joined with single spaces.
    pub phrase: String,
    /// First word index.
    pub start: usize,
    /// Last word index (inclusive).
    pub end: usize,
    /// Value of the phrase.
    pub value: i64,
}

impl From<&PhraseContext<'_>> for TaggedPhrase {
    fn from(context: &PhraseContext<'_>) -> Self {
        TaggedPhrase {
            phrase: context.phrase_str(),
            start: context.start(),
            end: context.end(),
            value: context.value(),
        }
    }
}

/// The result of tagging one text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagReport {
    /// The input text.
    pub text: String,
    /// Number of words the text was split into.
    pub word_count: usize,
    /// Surviving matches in ascending start order.
    pub phrases: Vec<TaggedPhrase>,
    /// Sum of the values of `phrases`.
    pub score: i64,
}

/// Tags text with the phrases of a vocabulary.
///
/// The trie is read-only once the tagger is built, so a tagger can be shared
/// by reference between threads; see [`PhraseTagger::tag_batch`].
pub struct PhraseTagger {
    trie: PhraseTrie,
    tokenizer: Box<dyn Tokenizer>,
    config: TaggerConfig,
}

impl PhraseTagger {
    /// Create a tagger over an already built trie.
    pub fn new(trie: PhraseTrie, config: TaggerConfig) -> Result<Self> {
        config.validate()?;

        let tokenizer = config.tokenizer.build();
        log::debug!(
            "phrase tagger ready: {} matchable phrases, tokenizer={}, resolve_overlaps={}",
            trie.root().terminal_count(),
            tokenizer.name(),
            config.resolve_overlaps
        );

        Ok(PhraseTagger {
            trie,
            tokenizer,
            config,
        })
    }

    /// Build the trie from `vocabulary` and create a tagger over it.
    pub fn from_vocabulary(vocabulary: &Vocabulary, config: TaggerConfig) -> Result<Self> {
        let trie = PhraseTrie::from_vocabulary(vocabulary)?;
        Self::new(trie, config)
    }

    /// Replace the configured tokenizer with a custom one.
    pub fn with_tokenizer(mut self, tokenizer: Box<dyn Tokenizer>) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    pub fn trie(&self) -> &PhraseTrie {
        &self.trie
    }

    pub fn config(&self) -> &TaggerConfig {
        &self.config
    }

    /// Tokenize and tag one text.
    ///
    /// # Errors
    ///
    /// Returns [`PhraseTagError::InvalidArgument`](crate::error::PhraseTagError::InvalidArgument)
    /// if the score of the text overflows `i64`.
    pub fn tag(&self, text: &str) -> Result<TagReport> {
        let words = self.tokenizer.tokenize(text)?;
        let phrases = self.tag_tokens(&words)?;
        let score = sum_values(phrases.iter().map(|p| p.value))?;

        Ok(TagReport {
            text: text.to_string(),
            word_count: words.len(),
            phrases,
            score,
        })
    }

    /// Tag an already tokenized sentence.
    ///
    /// An empty sentence has nothing to tag and yields no phrases.
    pub fn tag_tokens(&self, words: &[String]) -> Result<Vec<TaggedPhrase>> {
        if words.is_empty() {
            return Ok(Vec::new());
        }

        let mut matches = self.trie.find_all_members(words)?;
        if self.config.resolve_overlaps {
            matches = matches.super_only();
        }

        Ok(matches
            .iter()
            .filter(|c| self.config.accepts(c.value()))
            .map(TaggedPhrase::from)
            .collect())
    }

    /// Tag many texts in parallel. Reports are returned in input order.
    pub fn tag_batch<S>(&self, texts: &[S]) -> Result<Vec<TagReport>>
    where
        S: AsRef<str> + Sync,
    {
        texts.par_iter().map(|text| self.tag(text.as_ref())).collect()
    }
}

impl fmt::Debug for PhraseTagger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PhraseTagger")
            .field("trie", &self.trie.stats())
            .field("tokenizer", &self.tokenizer.name())
            .field("config", &self.config)
            .finish()
    }
}
