//! Criterion benchmarks for token-sieve.
//!
//! Covers sequence cleaning with and without deletion marks, and the
//! pipe and filter entry points.

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use token_sieve::analysis::pattern::AcceptPattern;
use token_sieve::analysis::token::TokenSequence;
use token_sieve::analysis::token_filter::{Filter, TokenSequenceCleaner};
use token_sieve::instance::{Instance, Pipe};

/// Generate token sequences mixing words, numbers and punctuation.
fn generate_test_sequences(count: usize) -> Vec<TokenSequence> {
    let words = vec![
        "search", "engine", "42", "text", "index", ",", "query", "2024", "document", "!",
        "field", "term", "3.14", "phrase", "(", "vector", ")", "ranking", "--", "filtering",
    ];

    let mut sequences = Vec::with_capacity(count);
    for i in 0..count {
        let seq_length = 50 + (i % 100); // Variable length sequences
        let texts: Vec<&str> = (0..seq_length)
            .map(|j| words[(i * 7 + j * 13) % words.len()]) // Pseudo-random distribution
            .collect();

        sequences.push(TokenSequence::from_texts(texts));
    }

    sequences
}

/// Benchmark cleaning a batch of sequences.
fn bench_clean(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequence_cleaner");

    let sequences = generate_test_sequences(100);
    let plain = TokenSequenceCleaner::new();
    let marking = TokenSequenceCleaner::with_mark_deletions(true, AcceptPattern::alphabetic());

    group.throughput(Throughput::Elements(sequences.len() as u64));

    group.bench_function("clean_plain", |b| {
        b.iter(|| {
            for seq in &sequences {
                black_box(plain.clean(black_box(seq.clone())));
            }
        })
    });

    group.bench_function("clean_marking", |b| {
        b.iter(|| {
            for seq in &sequences {
                black_box(marking.clean(black_box(seq.clone())));
            }
        })
    });

    group.finish();
}

/// Benchmark the pipe and filter entry points.
fn bench_entry_points(c: &mut Criterion) {
    let mut group = c.benchmark_group("entry_points");

    let sequences = generate_test_sequences(100);
    let cleaner = TokenSequenceCleaner::with_mark_deletions(true, AcceptPattern::alphabetic());

    group.bench_function("pipe_instances", |b| {
        b.iter(|| {
            for seq in &sequences {
                let mut instance = Instance::new(seq.clone());
                let _ = black_box(cleaner.pipe(&mut instance));
            }
        })
    });

    group.bench_function("filter_streams", |b| {
        b.iter(|| {
            for seq in &sequences {
                let stream = Box::new(seq.clone().into_iter());
                let count = cleaner.filter(stream).map(|s| s.count());
                let _ = black_box(count);
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_clean, bench_entry_points);
criterion_main!(benches);
