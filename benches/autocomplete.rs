//! Trie vs brute-force benchmarks
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use topk_trie::{AutocompleteIndex, BruteForceIndex, Score};

const K: usize = 10;

/// Synthetic corpus of word pairs drawn from a small vocabulary
fn corpus(size: usize) -> Vec<(String, Score)> {
    const WORDS: &[&str] = &[
        "tape", "trie", "tree", "system", "design", "debt", "technical", "grid", "api",
        "water", "search", "index", "query", "rank", "score", "prefix",
    ];
    let mut rng = StdRng::seed_from_u64(0x5eed);
    (0..size)
        .map(|i| {
            let first = WORDS[rng.gen_range(0..WORDS.len())];
            let second = WORDS[rng.gen_range(0..WORDS.len())];
            (format!("{first} {second} {i}"), rng.gen_range(0..1_000_000))
        })
        .collect()
}

fn bench_insert(c: &mut Criterion) {
    let entries = corpus(10_000);

    c.bench_function("insert_10k", |b| {
        b.iter(|| {
            let mut index = AutocompleteIndex::new(K).expect("valid k");
            for (phrase, score) in &entries {
                index.insert(black_box(phrase), *score);
            }
            index
        })
    });
}

fn bench_query(c: &mut Criterion) {
    let prefixes = ["", "t", "tr", "tape g", "system design 1", "nothing"];

    let mut group = c.benchmark_group("query");
    for size in [1_000, 10_000, 100_000] {
        let entries = corpus(size);
        let mut index = AutocompleteIndex::new(K).expect("valid k");
        let mut baseline = BruteForceIndex::new(K).expect("valid k");
        for (phrase, score) in &entries {
            index.insert(phrase, *score);
            baseline.insert(phrase, *score);
        }

        group.bench_with_input(BenchmarkId::new("trie", size), &prefixes, |b, prefixes| {
            b.iter(|| {
                for p in prefixes {
                    black_box(index.query(black_box(p)));
                }
            })
        });

        group.bench_with_input(BenchmarkId::new("baseline", size), &prefixes, |b, prefixes| {
            b.iter(|| {
                for p in prefixes {
                    black_box(baseline.query(black_box(p)));
                }
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_insert, bench_query);
criterion_main!(benches);
