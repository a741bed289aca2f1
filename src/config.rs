//! Configuration for phrase tagging.
//!
//! # Examples
//!
//! ```
//! use phrasetag::config::TaggerConfig;
//! use phrasetag::tokenizer::TokenizerKind;
//!
//! // Use default configuration
//! let config = TaggerConfig::default();
//! assert_eq!(config.tokenizer, TokenizerKind::Whitespace);
//! assert!(config.resolve_overlaps);
//!
//! // Keep every raw match and only strong phrases
//! let mut custom = TaggerConfig::default();
//! custom.resolve_overlaps = false;
//! custom.min_abs_value = Some(5);
//! custom.validate().unwrap();
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PhraseTagError, Result};
use crate::tokenizer::TokenizerKind;

/// Configuration for a [`PhraseTagger`](crate::tagger::PhraseTagger).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaggerConfig {
    /// How raw text is split into words.
    pub tokenizer: TokenizerKind,
    /// Drop matches swallowed by a larger match.
    pub resolve_overlaps: bool,
    /// Drop matches whose absolute value is below this threshold.
    ///
    /// Applied after overlap resolution, so a filtered super-phrase does not
    /// bring back the sub-phrases it suppressed.
    pub min_abs_value: Option<i64>,
}

impl Default for TaggerConfig {
    fn default() -> Self {
        Self {
            tokenizer: TokenizerKind::Whitespace,
            resolve_overlaps: true,
            min_abs_value: None,
        }
    }
}

impl TaggerConfig {
    /// Load a configuration from a JSON file. Missing fields take their
    /// default values.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            PhraseTagError::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: TaggerConfig = serde_json::from_str(&content).map_err(|e| {
            PhraseTagError::config(format!(
                "Failed to parse config from '{}': {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Check the configuration for invalid values.
    pub fn validate(&self) -> Result<()> {
        if let Some(min) = self.min_abs_value
            && min < 0
        {
            return Err(PhraseTagError::config(format!(
                "min_abs_value must not be negative, got {min}"
            )));
        }
        Ok(())
    }

    /// Whether a match with `value` passes the threshold.
    pub fn accepts(&self, value: i64) -> bool {
        self.min_abs_value
            .is_none_or(|min| value.unsigned_abs() >= min.unsigned_abs())
    }
}
