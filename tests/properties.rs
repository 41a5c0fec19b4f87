//! Property-based tests for the graph model and solvers.
//!
//! Uses proptest to verify invariants across many random inputs.

use proptest::prelude::*;
use u_tsp::graph::{vertex_label, Point, Tour, WeightedGraph};
use u_tsp::sa::{CoolingSchedule, SaConfig};
use u_tsp::solver::{
    AnnealingSolver, ExhaustiveConfig, ExhaustiveSolver, GreedyConfig, GreedySolver,
};

// ============================================================================
// Instance Generation Strategies
// ============================================================================

/// Random coordinates for `n` vertices
fn random_coords(n: usize) -> impl Strategy<Value = Vec<(f64, f64)>> {
    prop::collection::vec((0.0..100.0f64, 0.0..100.0f64), n)
}

/// A complete Euclidean graph with 3-7 vertices
fn complete_graph() -> impl Strategy<Value = WeightedGraph<String>> {
    (3usize..=7)
        .prop_flat_map(random_coords)
        .prop_map(|coords| {
            WeightedGraph::complete_euclidean(
                coords
                    .into_iter()
                    .enumerate()
                    .map(|(i, (x, y))| (vertex_label(i), Point::new(x, y))),
            )
            .unwrap()
        })
}

fn quick_annealing(seed: u64) -> SaConfig {
    SaConfig::default()
        .with_initial_temperature(20.0)
        .with_bound_temperature(0.01)
        .with_decay(0.995)
        .with_schedule(CoolingSchedule::Exponential)
        .with_max_iterations(2_000)
        .with_record_trace(false)
        .with_seed(seed)
}

fn edge_sum(tour: &Tour<String>, graph: &WeightedGraph<String>) -> f64 {
    tour.sequence()
        .windows(2)
        .map(|w| graph.weight(&w[0], &w[1]).unwrap())
        .sum()
}

// ============================================================================
// Graph Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn prop_weights_are_symmetric(graph in complete_graph()) {
        for a in graph.vertices() {
            for (b, w) in graph.neighbors(a).unwrap() {
                prop_assert_eq!(graph.weight(b, a).unwrap(), *w);
            }
        }
    }

    #[test]
    fn prop_duplicate_vertex_rejected(graph in complete_graph()) {
        let mut graph = graph;
        let first = graph.vertices()[0].clone();
        prop_assert!(graph.add_vertex(first, None).is_err());
    }
}

// ============================================================================
// Solver Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(30))]

    #[test]
    fn prop_solver_tours_closed_and_consistent(
        graph in complete_graph(),
        seed in 0u64..1000
    ) {
        let tours = [
            ExhaustiveSolver::solve(&graph, &ExhaustiveConfig::default()).unwrap().tour,
            GreedySolver::solve(&graph, &GreedyConfig::default().with_seed(seed)).unwrap().tour,
            AnnealingSolver::solve(&graph, &quick_annealing(seed)).unwrap().tour,
        ];
        for tour in &tours {
            let seq = tour.sequence();
            prop_assert_eq!(seq.first(), seq.last());
            prop_assert!(tour.covers(&graph));
            prop_assert!(tour.is_hamiltonian(&graph));
            prop_assert!((tour.cost() - edge_sum(tour, &graph)).abs() < 1e-9);
        }
    }

    #[test]
    fn prop_exhaustive_never_worse(
        graph in complete_graph(),
        seed in 0u64..1000
    ) {
        let optimum = ExhaustiveSolver::solve(&graph, &ExhaustiveConfig::default())
            .unwrap()
            .tour
            .cost();
        let greedy = GreedySolver::solve(&graph, &GreedyConfig::default().with_seed(seed))
            .unwrap()
            .tour
            .cost();
        let annealed = AnnealingSolver::solve(&graph, &quick_annealing(seed)).unwrap();

        prop_assert!(optimum <= greedy + 1e-9);
        prop_assert!(optimum <= annealed.run.final_cost + 1e-9);
        prop_assert!(annealed.run.best_cost <= annealed.run.final_cost);
    }

    #[test]
    fn prop_exhaustive_start_independent(graph in complete_graph()) {
        let a = ExhaustiveSolver::solve(&graph, &ExhaustiveConfig::default()).unwrap();
        let last = graph.vertices().last().unwrap().clone();
        let b = ExhaustiveSolver::solve(
            &graph,
            &ExhaustiveConfig::default().with_start(last.clone()),
        )
        .unwrap();
        prop_assert_eq!(b.tour.start(), &last);
        prop_assert!((a.tour.cost() - b.tour.cost()).abs() < 1e-9);
    }
}
