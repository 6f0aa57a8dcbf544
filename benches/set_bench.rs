//! Benchmark for Set vs standard HashSet.
//!
//! Covers repeated insertion of one element, membership lookups, and sorted
//! enumeration of a set built from pseudo-random input.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use sets::{Set, sorted_list};
use std::collections::HashSet;
use std::hint::black_box;

/// Deterministic pseudo-random values in `0..bound` (linear congruential).
fn pseudo_random_values(count: usize, bound: u64) -> Vec<String> {
    let mut state: u64 = 0x2545_F491_4F6C_DD1D;
    (0..count)
        .map(|_| {
            state = state
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            ((state >> 33) % bound).to_string()
        })
        .collect()
}

// =============================================================================
// insert Benchmark
// =============================================================================

fn benchmark_insert(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("insert");

    group.bench_function("Set", |bencher| {
        bencher.iter(|| {
            let mut set = Set::new();
            for _ in 0..1_000 {
                set.insert(black_box("item"));
            }
            black_box(set)
        });
    });

    group.bench_function("HashSet", |bencher| {
        bencher.iter(|| {
            let mut set = HashSet::new();
            for _ in 0..1_000 {
                set.insert(black_box("item"));
            }
            black_box(set)
        });
    });

    group.finish();
}

// =============================================================================
// contains Benchmark
// =============================================================================

fn benchmark_contains(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("contains");

    for size in [100, 1_000, 10_000] {
        let set: Set<String> = (0..size).map(|index| index.to_string()).collect();
        let standard_set: HashSet<String> = (0..size).map(|index| index.to_string()).collect();

        group.bench_with_input(BenchmarkId::new("Set", size), &set, |bencher, set| {
            bencher.iter(|| black_box(set.contains(black_box("100"))));
        });

        group.bench_with_input(
            BenchmarkId::new("HashSet", size),
            &standard_set,
            |bencher, set| {
                bencher.iter(|| black_box(set.contains(black_box("100"))));
            },
        );
    }

    group.finish();
}

// =============================================================================
// sorted Benchmark
// =============================================================================

fn benchmark_sorted(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("sorted");

    for size in [100, 1_000, 10_000] {
        let set: Set<String> = pseudo_random_values(size, size as u64)
            .into_iter()
            .collect();

        group.bench_with_input(BenchmarkId::new("sorted_list", size), &set, |bencher, set| {
            bencher.iter(|| black_box(sorted_list(set)));
        });

        #[cfg(feature = "rayon")]
        group.bench_with_input(
            BenchmarkId::new("par_sorted_list", size),
            &set,
            |bencher, set| {
                bencher.iter(|| black_box(sets::par_sorted_list(set)));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_insert,
    benchmark_contains,
    benchmark_sorted
);
criterion_main!(benches);
