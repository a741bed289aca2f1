//! Command line argument parsing for the phrasetag CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::tokenizer::TokenizerKind;

/// phrasetag - tag text with scored multi-word phrases
#[derive(Parser, Debug, Clone)]
#[command(name = "phrasetag")]
#[command(about = "Tag tokenized text with scored multi-word phrases from a vocabulary")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct PhraseTagArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl PhraseTagArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Tag texts with vocabulary phrases
    Tag(TagArgs),

    /// Check whether a phrase is a member of the vocabulary trie
    Lookup(LookupArgs),

    /// Show vocabulary and trie statistics
    Stats(StatsArgs),
}

/// Arguments for tagging
#[derive(Parser, Debug, Clone)]
pub struct TagArgs {
    /// Vocabulary file (JSON object or array of entries)
    #[arg(value_name = "VOCABULARY")]
    pub vocabulary: PathBuf,

    /// Texts to tag; reads one text per stdin line when omitted
    #[arg(value_name = "TEXT")]
    pub texts: Vec<String>,

    /// Keep every match instead of only super-phrases
    #[arg(short, long)]
    pub all: bool,

    /// Tokenizer used to split texts into words
    #[arg(short, long)]
    pub tokenizer: Option<TokenizerKind>,

    /// Tagger configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Drop phrases whose absolute value is below this threshold
    #[arg(long)]
    pub min_value: Option<i64>,
}

/// Arguments for phrase lookup
#[derive(Parser, Debug, Clone)]
pub struct LookupArgs {
    /// Vocabulary file (JSON object or array of entries)
    #[arg(value_name = "VOCABULARY")]
    pub vocabulary: PathBuf,

    /// Space-separated phrase to look up
    #[arg(value_name = "PHRASE")]
    pub phrase: String,
}

/// Arguments for statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Vocabulary file (JSON object or array of entries)
    #[arg(value_name = "VOCABULARY")]
    pub vocabulary: PathBuf,
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text
    Human,
    /// JSON output
    Json,
}
