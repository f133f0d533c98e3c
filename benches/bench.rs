//! Criterion benchmarks for Lexiscore.
//!
//! Covers the three hot paths:
//! - Tokenization
//! - Single-sentence scoring
//! - Batch scoring, sequential and parallel

use std::hint::black_box;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use lexiscore::analysis::tokenizer::Tokenizer;
use lexiscore::analysis::tokenizer::emoticon::{EmoticonMatch, EmoticonTokenizer};
use lexiscore::lexicon::{Lexicon, build_lexicon};
use lexiscore::scoring::{BatchScorer, ScoringConfig, score_sentence};

const WORDS: &[&str] = &[
    "good", "bad", "great", "terrible", "happy", "sad", "love", "hate", "fine", "awful",
    "movie", "plot", "acting", "music", "ending", "the", "was", "really", "not", "very",
];

/// Build a lexicon with a score for every benchmark word plus filler entries.
fn generate_lexicon(size: usize) -> Lexicon {
    let mut entries: Vec<(String, f64)> = WORDS
        .iter()
        .enumerate()
        .map(|(i, w)| (w.to_string(), (i as f64 % 7.0) - 3.0))
        .collect();
    entries.extend((0..size).map(|i| (format!("filler{i}"), 0.1)));
    build_lexicon(entries)
}

/// Generate sentences with punctuation, mixed case and emoticons.
fn generate_sentences(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            let len = 5 + (i % 20);
            let mut words: Vec<String> = (0..len)
                .map(|j| {
                    let word = WORDS[(i * 7 + j * 3) % WORDS.len()];
                    match j % 5 {
                        0 => word.to_uppercase(),
                        1 => format!("{word}!!"),
                        2 => format!("{word},"),
                        _ => word.to_string(),
                    }
                })
                .collect();
            if i % 3 == 0 {
                words.push(":-)".to_string());
            }
            words.join(" ")
        })
        .collect()
}

fn bench_tokenization(c: &mut Criterion) {
    let sentences = generate_sentences(1000);
    let bytes: usize = sentences.iter().map(|s| s.len()).sum();

    let mut group = c.benchmark_group("tokenization");
    group.throughput(Throughput::Bytes(bytes as u64));

    for (name, mode) in [
        ("literal", EmoticonMatch::Literal),
        ("symbol", EmoticonMatch::Symbol),
    ] {
        let tokenizer = EmoticonTokenizer::with_match(mode);
        group.bench_function(name, |b| {
            b.iter(|| {
                for sentence in &sentences {
                    black_box(tokenizer.tokenize(black_box(sentence)).count());
                }
            })
        });
    }

    group.finish();
}

fn bench_sentence_scoring(c: &mut Criterion) {
    let lexicon = generate_lexicon(10_000);
    let sentences = generate_sentences(1000);

    let mut group = c.benchmark_group("sentence_scoring");
    group.throughput(Throughput::Elements(sentences.len() as u64));
    group.bench_function("score_sentence", |b| {
        b.iter(|| {
            for sentence in &sentences {
                black_box(score_sentence(black_box(sentence), &lexicon));
            }
        })
    });
    group.finish();
}

fn bench_batch_scoring(c: &mut Criterion) {
    let lexicon = generate_lexicon(10_000);
    let sentences = generate_sentences(20_000);

    let sequential = BatchScorer::new(ScoringConfig::default()).unwrap();
    let parallel = BatchScorer::new(ScoringConfig::default().with_parallel(true)).unwrap();

    let mut group = c.benchmark_group("batch_scoring");
    group.throughput(Throughput::Elements(sentences.len() as u64));
    group.sample_size(20);
    group.bench_function("sequential", |b| {
        b.iter(|| black_box(sequential.score_lines(&sentences, &lexicon)))
    });
    group.bench_function("parallel", |b| {
        b.iter(|| black_box(parallel.score_lines(&sentences, &lexicon)))
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_tokenization,
    bench_sentence_scoring,
    bench_batch_scoring
);
criterion_main!(benches);
