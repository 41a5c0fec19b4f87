//! Criterion benchmarks for the TSP solvers.
//!
//! Uses random complete Euclidean graphs so every solver sees the same
//! instances.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_tsp::graph::{random_complete_graph, random_points};
use u_tsp::random::create_rng;
use u_tsp::sa::{CoolingSchedule, SaConfig};
use u_tsp::solver::{
    anneal_points, AnnealingSolver, ExhaustiveConfig, ExhaustiveSolver, GreedyConfig,
    GreedySolver,
};

fn annealing_config() -> SaConfig {
    SaConfig::default()
        .with_initial_temperature(50.0)
        .with_bound_temperature(0.002)
        .with_decay(0.999)
        .with_schedule(CoolingSchedule::Exponential)
        .with_max_iterations(10_000)
        .with_seed(42)
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_exhaustive(c: &mut Criterion) {
    let mut group = c.benchmark_group("exhaustive");
    group.sample_size(10);

    for &n in &[6usize, 8, 9] {
        let graph = random_complete_graph(n, 100.0, 42).expect("valid extent");
        let config = ExhaustiveConfig::default();
        group.bench_with_input(BenchmarkId::from_parameter(n), &(graph, config), |b, (g, c)| {
            b.iter(|| {
                let result = ExhaustiveSolver::solve(black_box(g), black_box(c));
                black_box(result)
            })
        });
    }
    group.finish();
}

fn bench_greedy(c: &mut Criterion) {
    let mut group = c.benchmark_group("greedy");

    for &n in &[10usize, 50, 200] {
        let graph = random_complete_graph(n, 100.0, 42).expect("valid extent");
        let config = GreedyConfig::default().with_seed(42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &(graph, config), |b, (g, c)| {
            b.iter(|| {
                let result = GreedySolver::solve(black_box(g), black_box(c));
                black_box(result)
            })
        });
    }
    group.finish();
}

fn bench_annealing(c: &mut Criterion) {
    let mut group = c.benchmark_group("annealing");
    group.sample_size(10);

    for &n in &[10usize, 30] {
        let graph = random_complete_graph(n, 100.0, 42).expect("valid extent");
        let config = annealing_config();
        group.bench_with_input(
            BenchmarkId::new("graph", n),
            &(graph, config),
            |b, (g, c)| {
                b.iter(|| {
                    let result = AnnealingSolver::solve(black_box(g), black_box(c));
                    black_box(result)
                })
            },
        );

        let mut rng = create_rng(42);
        let points = random_points(n, 100.0, &mut rng);
        let config = annealing_config().with_record_trace(false);
        group.bench_with_input(
            BenchmarkId::new("points", n),
            &(points, config),
            |b, (p, c)| {
                b.iter(|| {
                    let result = anneal_points(black_box(p.clone()), black_box(c));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_exhaustive, bench_greedy, bench_annealing);
criterion_main!(benches);
