//! Criterion benchmarks for the TSP solvers.
//!
//! Uses synthetic instances (points on a jittered grid) to measure
//! solver cost as the node count grows.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tsp_colony::aco::{AcoConfig, AcoRunner};
use tsp_colony::exact::ExactRunner;
use tsp_colony::instance::{DistanceMatrix, Point};

fn random_instance(n: usize, seed: u64) -> DistanceMatrix {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let points: Vec<Point> = (0..n)
        .map(|_| Point::new(rng.random_range(0.0..100.0), rng.random_range(0.0..100.0)))
        .collect();
    DistanceMatrix::from_points(&points).expect("n >= 2")
}

fn bench_exact(c: &mut Criterion) {
    let mut group = c.benchmark_group("exact");
    for n in [6, 8, 10] {
        let distances = random_instance(n, 42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &distances, |b, m| {
            b.iter(|| ExactRunner::run(black_box(m)));
        });
    }
    group.finish();
}

fn bench_aco(c: &mut Criterion) {
    let mut group = c.benchmark_group("aco");
    group.sample_size(10);
    for n in [10, 25, 50] {
        let distances = random_instance(n, 42);
        let config = AcoConfig::default()
            .with_iteration_count(50)
            .with_ant_count(20)
            .with_seed(42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &distances, |b, m| {
            b.iter(|| AcoRunner::run(black_box(m), &config));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_exact, bench_aco);
criterion_main!(benches);
