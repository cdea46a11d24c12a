//! Criterion benchmarks for novelty scoring.
//!
//! Measures corpus-wide and per-list scoring across evaluation sizes (1k, 10k
//! and 100k contexts) with a fixed catalogue and cutoff.
//!
//! Run benchmarks with:
//! ```bash
//! cargo bench --package novelty-scorer
//! ```

// Criterion macros generate code that triggers missing_docs warnings.
#![allow(missing_docs, reason = "Criterion macros generate undocumented code")]

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use novelty_core::{
    EvaluationConfig, ItemId, PopularityTable, RankedList, RankedListCollection,
};
use novelty_scorer::{NoveltyScorer, evaluate_contexts, mean_surprisal};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seed for deterministic random number generation in benchmarks.
const BENCHMARK_SEED: u64 = 42;

/// Number of contexts to benchmark.
const CONTEXT_COUNTS: &[usize] = &[1_000, 10_000, 100_000];

/// Distinct items that may be recommended.
const CATALOGUE_SIZE: ItemId = 5_000;

/// Entries generated per ranked list.
const LIST_LENGTH: usize = 50;

/// Cutoff applied while scoring.
const TOP_K: usize = 20;

/// Generate one ranked list per context with items drawn uniformly from the
/// catalogue.
fn generate_lists(contexts: usize, rng: &mut ChaCha8Rng) -> RankedListCollection {
    (0..contexts)
        .map(|_| {
            (0..LIST_LENGTH)
                .map(|_| (rng.gen_range(0..CATALOGUE_SIZE), rng.r#gen::<f64>()))
                .collect::<RankedList>()
        })
        .collect()
}

/// Generate popularity counts bounded by the number of contexts, leaving
/// roughly a tenth of the catalogue without purchases.
fn generate_popularity(contexts: usize, rng: &mut ChaCha8Rng) -> PopularityTable {
    let max_count = i64::try_from(contexts).unwrap_or(i64::MAX);
    (0..CATALOGUE_SIZE)
        .map(|item| {
            let count = if rng.gen_bool(0.1) {
                0
            } else {
                rng.gen_range(1..=max_count)
            };
            (item, count)
        })
        .collect()
}

fn bench_scoring(c: &mut Criterion) {
    let mut group = c.benchmark_group("novelty");
    let config = EvaluationConfig::new(TOP_K);

    for &contexts in CONTEXT_COUNTS {
        let mut rng = ChaCha8Rng::seed_from_u64(BENCHMARK_SEED);
        let lists = generate_lists(contexts, &mut rng);
        let popularity = generate_popularity(contexts, &mut rng);
        let Ok(users) = u64::try_from(contexts) else {
            continue;
        };
        let Ok(scorer) = NoveltyScorer::new(users, popularity.clone()) else {
            continue;
        };

        group.throughput(Throughput::Elements(users));
        group.bench_with_input(
            BenchmarkId::new("mean_surprisal", contexts),
            &lists,
            |b, lists| b.iter(|| mean_surprisal(contexts, lists, &popularity, &config)),
        );
        group.bench_with_input(
            BenchmarkId::new("summed_surprisal", contexts),
            &lists,
            |b, lists| b.iter(|| evaluate_contexts(&scorer, lists, &config)),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_scoring);
criterion_main!(benches);
