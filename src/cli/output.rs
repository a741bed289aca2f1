//! Output formatting for CLI results.

use std::io::Write;

use serde::Serialize;

use crate::cli::args::{OutputFormat, PhraseTagArgs};
use crate::error::Result;
use crate::tagger::TagReport;
use crate::trie::TrieStats;

/// Result of a `lookup` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LookupResult {
    pub phrase: String,
    pub member: bool,
    pub value: Option<i64>,
}

/// Result of a `stats` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatsResult {
    pub vocabulary_entries: usize,
    pub duplicate_phrases: Vec<String>,
    #[serde(flatten)]
    pub trie: TrieStats,
}

/// Write tag reports in the requested format.
pub fn output_tag_reports<W: Write>(
    reports: &[TagReport],
    args: &PhraseTagArgs,
    out: &mut W,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => output_json(reports, args, out),
        OutputFormat::Human => {
            for (i, report) in reports.iter().enumerate() {
                if args.verbosity() > 0 {
                    writeln!(out, "Text {}: {}", i + 1, report.text)?;
                    writeln!(out, "{}", "─".repeat(40))?;
                }

                if report.phrases.is_empty() {
                    writeln!(out, "  (no phrases)")?;
                }
                for phrase in &report.phrases {
                    writeln!(
                        out,
                        "  [{}, {}] {} ({})",
                        phrase.start, phrase.end, phrase.phrase, phrase.value
                    )?;
                }

                if args.verbosity() > 0 {
                    writeln!(
                        out,
                        "Score: {} ({} phrases in {} words)",
                        report.score,
                        report.phrases.len(),
                        report.word_count
                    )?;
                    writeln!(out)?;
                }
            }
            Ok(())
        }
    }
}

/// Write a lookup result in the requested format.
pub fn output_lookup<W: Write>(
    result: &LookupResult,
    args: &PhraseTagArgs,
    out: &mut W,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => output_json(result, args, out),
        OutputFormat::Human => {
            match result.value {
                Some(value) => writeln!(out, "'{}' is a member (value: {})", result.phrase, value)?,
                None => writeln!(out, "'{}' is not a member", result.phrase)?,
            }
            Ok(())
        }
    }
}

/// Write vocabulary and trie statistics in the requested format.
pub fn output_stats<W: Write>(stats: &StatsResult, args: &PhraseTagArgs, out: &mut W) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => output_json(stats, args, out),
        OutputFormat::Human => {
            writeln!(out, "Vocabulary Statistics")?;
            writeln!(out, "═════════════════════")?;
            writeln!(out, "Entries:            {}", stats.vocabulary_entries)?;
            writeln!(out, "Duplicate phrases:  {}", stats.duplicate_phrases.len())?;
            writeln!(out, "Phrases added:      {}", stats.trie.phrases_added)?;
            writeln!(out, "Matchable phrases:  {}", stats.trie.terminal_phrases)?;
            writeln!(out, "Trie nodes:         {}", stats.trie.nodes)?;
            writeln!(out, "Max depth (words):  {}", stats.trie.max_depth)?;

            if args.verbosity() > 1 && !stats.duplicate_phrases.is_empty() {
                writeln!(out)?;
                writeln!(out, "Duplicates (first value kept):")?;
                for phrase in &stats.duplicate_phrases {
                    writeln!(out, "  {phrase}")?;
                }
            }
            Ok(())
        }
    }
}

fn output_json<T, W>(value: &T, args: &PhraseTagArgs, out: &mut W) -> Result<()>
where
    T: Serialize + ?Sized,
    W: Write,
{
    if args.pretty {
        serde_json::to_writer_pretty(&mut *out, value)?;
    } else {
        serde_json::to_writer(&mut *out, value)?;
    }
    writeln!(out)?;
    Ok(())
}
