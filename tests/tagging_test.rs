//! Integration tests for vocabulary loading, scanning and tagging.

use phrasetag::prelude::*;
use tempfile::TempDir;

fn split(text: &str) -> Vec<String> {
    text.split(' ').map(String::from).collect()
}

fn stock_vocabulary() -> Vocabulary {
    [
        ("break", 1),
        ("shooting", 2),
        ("break out", 3),
        ("break up", 4),
        ("shooting up", 5),
        ("break out nicely", 6),
    ]
    .into_iter()
    .collect()
}

fn spans(matches: &PhraseContextList<'_>) -> Vec<(String, [usize; 2], i64)> {
    matches
        .iter()
        .map(|m| (m.phrase_str(), m.indices(), m.value()))
        .collect()
}

#[test]
fn test_shadowing_is_order_independent_for_reachability() -> Result<()> {
    let short_first = PhraseTrie::from_pairs([("break out", 3), ("break out nicely", 6)])?;
    let long_first = PhraseTrie::from_pairs([("break out nicely", 6), ("break out", 3)])?;

    for trie in [&short_first, &long_first] {
        assert_eq!(trie.is_member(&["break", "out"])?, None);
        assert_eq!(trie.is_member(&["break", "out", "nicely"])?, Some(6));
    }

    Ok(())
}

#[test]
fn test_scan_then_resolve() -> Result<()> {
    let trie = PhraseTrie::from_vocabulary(&stock_vocabulary())?;
    let sentence =
        split("its shooting up it might even break up i bet $100 $AAPL will break out nicely");

    let supers = trie.find_all_members(&sentence)?.super_only();

    assert_eq!(
        spans(&supers),
        vec![
            ("shooting up".to_string(), [1, 2], 5),
            ("break up".to_string(), [6, 7], 4),
            ("break out nicely".to_string(), [13, 15], 6),
        ]
    );
    Ok(())
}

#[test]
fn test_overlap_domination() -> Result<()> {
    let mut vocabulary = stock_vocabulary();
    vocabulary.push("breaking double bottom", 8);
    vocabulary.push("double bottom", 9);
    let trie = PhraseTrie::from_vocabulary(&vocabulary)?;
    let sentence = split("its breaking double bottom $100 $AAPL will break out");

    let all = trie.find_all_members(&sentence)?;
    assert_eq!(all.len(), 2);

    let supers = all.super_only();
    assert_eq!(
        spans(&supers),
        vec![("breaking double bottom".to_string(), [1, 3], 8)]
    );
    Ok(())
}

#[test]
fn test_no_match() -> Result<()> {
    let trie = PhraseTrie::from_vocabulary(&stock_vocabulary())?;
    let sentence = split("$AAPL isn't doing anything today");

    let all = trie.find_all_members(&sentence)?;
    assert!(all.is_empty());
    assert!(all.super_only().is_empty());
    Ok(())
}

#[test]
fn test_empty_inputs() {
    let trie = PhraseTrie::from_vocabulary(&stock_vocabulary()).unwrap();

    let empty: Vec<String> = Vec::new();
    let err = trie.find_all_members(&empty).unwrap_err();
    assert!(err.is_invalid_argument());

    let empty_phrase: [&str; 0] = [];
    assert!(trie.is_member(&empty_phrase).unwrap_err().is_invalid_argument());

    let empty_trie = PhraseTrie::new();
    assert!(empty_trie.find_all_members(&split("break out")).unwrap().is_empty());
}

#[test]
fn test_vocabulary_file_round_trip_through_tagger() -> Result<()> {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("vocabulary.json");
    std::fs::write(
        &path,
        r#"[
            {"phrase": "double bottom", "value": 9},
            {"phrase": "breaking double bottom", "value": 8},
            {"phrase": "double bottom", "value": -1},
            {"phrase": "r/g", "value": 7}
        ]"#,
    )?;

    let vocabulary = Vocabulary::load_from_file(&path)?;
    assert_eq!(vocabulary.len(), 4);
    assert_eq!(vocabulary.duplicates(), vec!["double bottom"]);

    let tagger = PhraseTagger::from_vocabulary(&vocabulary, TaggerConfig::default())?;
    assert_eq!(tagger.trie().is_member(&["double", "bottom"])?, Some(9));

    let report = tagger.tag("r/g says double bottom")?;
    assert_eq!(report.word_count, 4);
    assert_eq!(report.score, 16);
    assert_eq!(
        report
            .phrases
            .iter()
            .map(|p| (p.phrase.as_str(), p.start, p.end))
            .collect::<Vec<_>>(),
        vec![("r/g", 0, 0), ("double bottom", 2, 3)]
    );
    Ok(())
}

#[test]
fn test_invalid_vocabulary_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("vocabulary.json");
    std::fs::write(&path, r#"{"break  out": 3}"#).unwrap();

    // the file parses, the double space is rejected when building the trie
    let vocabulary = Vocabulary::load_from_file(&path).unwrap();
    let err = PhraseTagger::from_vocabulary(&vocabulary, TaggerConfig::default()).unwrap_err();
    assert!(err.is_invalid_argument());

    std::fs::write(&path, "not json").unwrap();
    let err = Vocabulary::load_from_file(&path).unwrap_err();
    assert!(matches!(err, PhraseTagError::Vocabulary(_)));
}

#[test]
fn test_config_file_drives_tagger() -> Result<()> {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tagger.json");
    std::fs::write(&path, r#"{"tokenizer": "unicode_word", "resolve_overlaps": false}"#)?;

    let mut vocabulary = stock_vocabulary();
    vocabulary.push("breaking double bottom", 8);
    vocabulary.push("double bottom", 9);

    let config = TaggerConfig::load_from_file(&path)?;
    let tagger = PhraseTagger::from_vocabulary(&vocabulary, config)?;

    // punctuation is stripped by the unicode word tokenizer
    let report = tagger.tag("Its breaking double bottom, shooting up!")?;
    let phrases: Vec<&str> = report.phrases.iter().map(|p| p.phrase.as_str()).collect();
    assert_eq!(
        phrases,
        vec!["breaking double bottom", "double bottom", "shooting up"]
    );
    Ok(())
}

#[test]
fn test_shared_tagger_across_threads() -> Result<()> {
    let tagger = PhraseTagger::from_vocabulary(&stock_vocabulary(), TaggerConfig::default())?;
    let texts: Vec<String> = (0..64)
        .map(|i| {
            if i % 2 == 0 {
                "$AAPL will break out nicely".to_string()
            } else {
                "shooting up".to_string()
            }
        })
        .collect();

    let reports = tagger.tag_batch(&texts)?;
    for (i, report) in reports.iter().enumerate() {
        let expected = if i % 2 == 0 { 6 } else { 5 };
        assert_eq!(report.score, expected);
    }

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                let report = tagger.tag("break up").unwrap();
                assert_eq!(report.score, 4);
            });
        }
    });

    Ok(())
}
