//! Criterion benchmarks for phrasetag.
//!
//! This module contains benchmarks for the core phrase tagging paths:
//! - Trie construction
//! - Membership checks and sentence scans
//! - Super-phrase resolution
//! - Batch tagging

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use phrasetag::prelude::*;

const VOCABULARY: [(&str, i64); 9] = [
    ("break", 1),
    ("shooting", 2),
    ("break out", 3),
    ("break up", 4),
    ("shooting up", 5),
    ("break out nicely", 6),
    ("r/g", 7),
    ("breaking double bottom", 8),
    ("double bottom", 9),
];

const SENTENCE: &str =
    "its shooting up it might even break up i bet $100 $AAPL will break out nicely";

fn split(text: &str) -> Vec<String> {
    text.split(' ').map(String::from).collect()
}

/// Generate a synthetic vocabulary of multi-word phrases.
fn generate_vocabulary(count: usize) -> Vocabulary {
    let words = [
        "break", "out", "up", "double", "bottom", "shooting", "star", "head", "shoulders",
        "cup", "handle", "bull", "bear", "flag", "wedge", "gap",
    ];

    (0..count)
        .map(|i| {
            let len = 1 + i % 4;
            let phrase: Vec<&str> = (0..len)
                .map(|j| words[(i * 7 + j * 13) % words.len()]) // Pseudo-random distribution
                .collect();
            (phrase.join(" "), (i % 19) as i64 - 9)
        })
        .collect()
}

/// Generate sentences drawn from the same word pool.
fn generate_sentences(count: usize, length: usize) -> Vec<String> {
    let words = [
        "the", "break", "out", "up", "double", "bottom", "shooting", "star", "head",
        "shoulders", "cup", "handle", "bull", "bear", "flag", "wedge", "gap", "today",
    ];

    (0..count)
        .map(|i| {
            (0..length)
                .map(|j| words[(i * 5 + j * 11) % words.len()])
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// Benchmark trie construction.
fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");

    group.bench_function("add_mock_vocabulary", |b| {
        b.iter(|| black_box(PhraseTrie::from_pairs(black_box(VOCABULARY)).unwrap()))
    });

    for size in [1_000, 10_000] {
        let vocabulary = generate_vocabulary(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(
            BenchmarkId::new("from_vocabulary", size),
            &vocabulary,
            |b, vocabulary| b.iter(|| black_box(PhraseTrie::from_vocabulary(vocabulary).unwrap())),
        );
    }

    group.finish();
}

/// Benchmark membership checks and sentence scans.
fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup");

    let trie = PhraseTrie::from_pairs(VOCABULARY).unwrap();
    let phrase = ["break", "out", "nicely"];
    let sentence = split(SENTENCE);

    group.bench_function("is_member", |b| {
        b.iter(|| black_box(trie.is_member(black_box(&phrase[..])).unwrap()))
    });

    group.bench_function("find_all_members", |b| {
        b.iter(|| black_box(trie.find_all_members(black_box(&sentence)).unwrap()))
    });

    group.finish();
}

/// Benchmark super-phrase resolution.
fn bench_super_only(c: &mut Criterion) {
    let mut group = c.benchmark_group("super_only");

    let trie = PhraseTrie::from_pairs(VOCABULARY).unwrap();
    let sentence = split("its breaking double bottom $100 $AAPL will break out nicely");
    let matches = trie.find_all_members(&sentence).unwrap();

    group.bench_function("mock_sentence", |b| {
        b.iter_with_setup(|| matches.clone(), |m| black_box(m.super_only()))
    });

    let vocabulary = generate_vocabulary(1_000);
    let trie = PhraseTrie::from_vocabulary(&vocabulary).unwrap();
    let long_sentence = split(&generate_sentences(1, 500)[0]);
    let long_matches = trie.find_all_members(&long_sentence).unwrap();

    group.throughput(Throughput::Elements(long_matches.len() as u64));
    group.bench_function("long_sentence", |b| {
        b.iter_with_setup(|| long_matches.clone(), |m| black_box(m.super_only()))
    });

    group.finish();
}

/// Benchmark end-to-end tagging.
fn bench_tagging(c: &mut Criterion) {
    let mut group = c.benchmark_group("tagging");
    group.sample_size(20); // Reduce sample size for batch operations

    let vocabulary = generate_vocabulary(1_000);
    let tagger = PhraseTagger::from_vocabulary(&vocabulary, TaggerConfig::default()).unwrap();
    let texts = generate_sentences(1_000, 40);

    group.bench_function("tag_single_text", |b| {
        b.iter(|| black_box(tagger.tag(black_box(&texts[0])).unwrap()))
    });

    group.throughput(Throughput::Elements(texts.len() as u64));
    group.bench_function("tag_batch_parallel", |b| {
        b.iter(|| black_box(tagger.tag_batch(black_box(&texts)).unwrap()))
    });

    group.bench_function("tag_batch_sequential", |b| {
        b.iter(|| {
            for text in &texts {
                let _ = black_box(tagger.tag(text));
            }
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_build,
    bench_lookup,
    bench_super_only,
    bench_tagging
);

criterion_main!(benches);
