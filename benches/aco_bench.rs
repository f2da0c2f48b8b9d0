//! Criterion benchmarks for the ACO solver.
//!
//! Uses random complete instances so timings measure solver overhead,
//! not instance structure.

use aco_tsp::aco::{AcoConfig, AcoRunner};
use aco_tsp::graph::TspGraph;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_complete_graph(n: usize, seed: u64) -> TspGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = TspGraph::new(n);
    for i in 0..n {
        for j in (i + 1)..n {
            graph.add_edge(i, j, rng.random_range(1.0..100.0));
        }
    }
    graph
}

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("aco_solve");

    for &n in &[10usize, 20, 40] {
        let graph = random_complete_graph(n, 1951);
        let config = AcoConfig::default()
            .with_n_ants(20)
            .with_max_iterations(50)
            .with_seed(42);

        group.bench_with_input(BenchmarkId::new("serial", n), &graph, |b, graph| {
            b.iter(|| AcoRunner::run(black_box(graph), 0, &config).unwrap());
        });

        let parallel = config.clone().with_parallel(true);
        group.bench_with_input(BenchmarkId::new("parallel", n), &graph, |b, graph| {
            b.iter(|| AcoRunner::run(black_box(graph), 0, &parallel).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_solve);
criterion_main!(benches);
