//! Error types for the phrasetag library.
//!
//! All fallible operations return [`PhraseTagError`] through the crate-wide
//! [`Result`] alias.
//!
//! A phrase that is simply not present is never an error: lookups and scans
//! report that as `None` or as an empty match list.
//!
//! # Examples
//!
//! ```
//! use phrasetag::error::{PhraseTagError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(PhraseTagError::invalid_argument("phrase must not be empty"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for phrasetag operations.
#[derive(Error, Debug)]
pub enum PhraseTagError {
    /// I/O errors (reading vocabulary or config files, stdin, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Malformed input shape: empty phrase, empty sentence, bad span
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Operation exists in the API but has no semantics yet
    #[error("Not implemented: {0}")]
    NotImplemented(String),

    /// Vocabulary-related errors (unsupported file shape, bad entries)
    #[error("Vocabulary error: {0}")]
    Vocabulary(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with PhraseTagError.
pub type Result<T> = std::result::Result<T, PhraseTagError>;

impl PhraseTagError {
    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        PhraseTagError::InvalidArgument(msg.into())
    }

    /// Create a new not implemented error.
    pub fn not_implemented<S: Into<String>>(msg: S) -> Self {
        PhraseTagError::NotImplemented(msg.into())
    }

    /// Create a new vocabulary error.
    pub fn vocabulary<S: Into<String>>(msg: S) -> Self {
        PhraseTagError::Vocabulary(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        PhraseTagError::Config(msg.into())
    }

    /// Returns true if this error reports a rejected input shape.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, PhraseTagError::InvalidArgument(_))
    }
}
