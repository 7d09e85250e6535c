//! Criterion benchmarks for the closest-pair solvers.
//! Focus sizes: n in {10, 100, 1000, 10000}; brute force stops at 1000.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use closest::api::{
    closest_pair, closest_pair_brute_force, draw_points, CloudCfg, MedianPolicy, ReplayToken,
    SolverCfg,
};

fn cloud(n: usize, seed: u64) -> Vec<closest::Point> {
    draw_points(
        CloudCfg {
            count: n,
            ..Default::default()
        },
        ReplayToken { seed, index: 0 },
    )
}

fn bench_closest(c: &mut Criterion) {
    let mut group = c.benchmark_group("closest_pair");
    let rank = SolverCfg {
        median: MedianPolicy::SplitByRank,
        ..Default::default()
    };
    for &n in &[10usize, 100, 1000, 10000] {
        group.bench_with_input(BenchmarkId::new("divide_conquer", n), &n, |b, &n| {
            b.iter_batched(
                || cloud(n, 43),
                |pts| closest_pair(&pts, SolverCfg::default()),
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("divide_conquer_rank", n), &n, |b, &n| {
            b.iter_batched(
                || cloud(n, 44),
                |pts| closest_pair(&pts, rank),
                BatchSize::SmallInput,
            )
        });

        if n <= 1000 {
            group.bench_with_input(BenchmarkId::new("brute_force", n), &n, |b, &n| {
                b.iter_batched(
                    || cloud(n, 45),
                    |pts| closest_pair_brute_force(&pts),
                    BatchSize::SmallInput,
                )
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_closest);
criterion_main!(benches);
