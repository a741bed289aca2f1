//! Command implementations for the phrasetag CLI.

use std::io::{self, BufRead, Write};
use std::time::Instant;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::TaggerConfig;
use crate::error::Result;
use crate::tagger::PhraseTagger;
use crate::trie::{PhraseTrie, split_phrase};
use crate::vocabulary::Vocabulary;

/// Execute a CLI command, writing results to stdout.
pub fn execute_command(args: PhraseTagArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_command(&args, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Execute a CLI command, writing results to `out`.
pub fn run_command<W: Write>(args: &PhraseTagArgs, out: &mut W) -> Result<()> {
    match &args.command {
        Command::Tag(tag_args) => tag_texts(tag_args, args, out),
        Command::Lookup(lookup_args) => lookup_phrase(lookup_args, args, out),
        Command::Stats(stats_args) => show_stats(stats_args, args, out),
    }
}

/// Tag texts given on the command line, or one text per stdin line.
fn tag_texts<W: Write>(args: &TagArgs, cli_args: &PhraseTagArgs, out: &mut W) -> Result<()> {
    let config = tagger_config(args)?;
    let vocabulary = Vocabulary::load_from_file(&args.vocabulary)?;

    let start = Instant::now();
    let tagger = PhraseTagger::from_vocabulary(&vocabulary, config)?;
    log::info!(
        "built trie from {} entries in {:.2}ms",
        vocabulary.len(),
        start.elapsed().as_secs_f64() * 1000.0
    );

    let texts = if args.texts.is_empty() {
        read_stdin_lines()?
    } else {
        args.texts.clone()
    };

    let start = Instant::now();
    let reports = tagger.tag_batch(&texts)?;
    log::info!(
        "tagged {} texts in {:.2}ms",
        reports.len(),
        start.elapsed().as_secs_f64() * 1000.0
    );

    output_tag_reports(&reports, cli_args, out)
}

/// Resolve the tagger configuration: file first, then command line overrides.
fn tagger_config(args: &TagArgs) -> Result<TaggerConfig> {
    let mut config = match &args.config {
        Some(path) => TaggerConfig::load_from_file(path)?,
        None => TaggerConfig::default(),
    };

    if let Some(tokenizer) = args.tokenizer {
        config.tokenizer = tokenizer;
    }
    if args.all {
        config.resolve_overlaps = false;
    }
    if let Some(min_value) = args.min_value {
        config.min_abs_value = Some(min_value);
    }

    config.validate()?;
    Ok(config)
}

fn read_stdin_lines() -> Result<Vec<String>> {
    let stdin = io::stdin();
    let mut texts = Vec::new();
    for line in stdin.lock().lines() {
        let line = line?;
        if !line.trim().is_empty() {
            texts.push(line);
        }
    }
    Ok(texts)
}

/// Look up a single phrase.
fn lookup_phrase<W: Write>(
    args: &LookupArgs,
    cli_args: &PhraseTagArgs,
    out: &mut W,
) -> Result<()> {
    let words = split_phrase(&args.phrase)?;
    let vocabulary = Vocabulary::load_from_file(&args.vocabulary)?;
    let trie = PhraseTrie::from_vocabulary(&vocabulary)?;

    let value = trie.is_member(&words)?;
    let result = LookupResult {
        phrase: args.phrase.clone(),
        member: value.is_some(),
        value,
    };

    output_lookup(&result, cli_args, out)
}

/// Show vocabulary and trie statistics.
fn show_stats<W: Write>(args: &StatsArgs, cli_args: &PhraseTagArgs, out: &mut W) -> Result<()> {
    let vocabulary = Vocabulary::load_from_file(&args.vocabulary)?;
    let trie = PhraseTrie::from_vocabulary(&vocabulary)?;

    let result = StatsResult {
        vocabulary_entries: vocabulary.len(),
        duplicate_phrases: vocabulary
            .duplicates()
            .into_iter()
            .map(str::to_string)
            .collect(),
        trie: trie.stats(),
    };

    output_stats(&result, cli_args, out)
}
