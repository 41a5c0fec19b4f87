//! Serialization round trips (requires the `serde` feature).

#![cfg(feature = "serde")]

use u_tsp::graph::{random_complete_graph, Tour, WeightedGraph};
use u_tsp::sa::{CoolingSchedule, SaConfig, Trace};
use u_tsp::solver::{
    AnnealingSolver, ExhaustiveConfig, ExhaustiveSolver, GreedyConfig, GreedySolver, PointPath,
};

#[test]
fn tour_roundtrip_preserves_sequence_and_cost() {
    let g = random_complete_graph(6, 100.0, 5).unwrap();
    let tour = GreedySolver::solve(&g, &GreedyConfig::default()).unwrap().tour;

    let json = serde_json::to_string(&tour).unwrap();
    let back: Tour<String> = serde_json::from_str(&json).unwrap();
    assert_eq!(back.sequence(), tour.sequence());
    assert_eq!(back.cost().to_bits(), tour.cost().to_bits());
}

#[test]
fn trace_roundtrip_preserves_order() {
    let g = random_complete_graph(5, 10.0, 1).unwrap();
    let config = SaConfig::default()
        .with_initial_temperature(5.0)
        .with_bound_temperature(0.01)
        .with_decay(0.95)
        .with_schedule(CoolingSchedule::Exponential)
        .with_seed(2);
    let result = AnnealingSolver::solve(&g, &config).unwrap();

    let json = serde_json::to_string(&result.run.trace).unwrap();
    let back: Trace<Vec<String>> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, result.run.trace);
}

#[test]
fn graph_and_config_roundtrip() {
    let g = random_complete_graph(4, 10.0, 3).unwrap();
    let json = serde_json::to_string(&g).unwrap();
    let back: WeightedGraph<String> = serde_json::from_str(&json).unwrap();
    assert_eq!(back.vertices(), g.vertices());
    for a in g.vertices() {
        for b in g.vertices() {
            if a != b {
                assert_eq!(back.weight(a, b), g.weight(a, b));
            }
        }
    }

    let config = SaConfig::default().with_seed(77).unbounded();
    let json = serde_json::to_string(&config).unwrap();
    let back: SaConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
}

#[test]
fn tour_rejects_unclosed_or_empty_sequence() {
    for json in [
        r#"{"sequence":[],"cost":0.0}"#,
        r#"{"sequence":["A"],"cost":0.0}"#,
        r#"{"sequence":["A","B"],"cost":1.0}"#,
        r#"{"sequence":["A","B","A"],"cost":-7.0}"#,
    ] {
        assert!(
            serde_json::from_str::<Tour<String>>(json).is_err(),
            "accepted {json}"
        );
    }

    let tour: Tour<String> =
        serde_json::from_str(r#"{"sequence":["A","B","A"],"cost":2.0}"#).unwrap();
    assert_eq!(tour.len(), 2);
    assert_eq!(tour.start(), "A");
}

#[test]
fn point_path_rejects_open_path() {
    let open = r#"{"points":[{"x":0.0,"y":0.0},{"x":1.0,"y":0.0}]}"#;
    assert!(serde_json::from_str::<PointPath>(open).is_err());
    assert!(serde_json::from_str::<PointPath>(r#"{"points":[]}"#).is_err());
}

#[test]
fn graph_rejects_inconsistent_adjacency() {
    let unknown_endpoint = r#"{
        "order": ["A", "B"],
        "vertices": {"A": {"id": "A", "coord": null}, "B": {"id": "B", "coord": null}},
        "adjacency": {"A": [["B", 1.0], ["Z", 1.0]], "B": [["A", 1.0]]}
    }"#;
    assert!(serde_json::from_str::<WeightedGraph<String>>(unknown_endpoint).is_err());

    let one_sided = r#"{
        "order": ["A", "B", "C"],
        "vertices": {
            "A": {"id": "A", "coord": null},
            "B": {"id": "B", "coord": null},
            "C": {"id": "C", "coord": null}
        },
        "adjacency": {"A": [["B", 1.0], ["C", 1.0]], "B": [["A", 1.0]], "C": []}
    }"#;
    assert!(serde_json::from_str::<WeightedGraph<String>>(one_sided).is_err());

    let asymmetric = r#"{
        "order": ["A", "B"],
        "vertices": {"A": {"id": "A", "coord": null}, "B": {"id": "B", "coord": null}},
        "adjacency": {"A": [["B", 1.0]], "B": [["A", 2.0]]}
    }"#;
    assert!(serde_json::from_str::<WeightedGraph<String>>(asymmetric).is_err());

    let consistent = r#"{
        "order": ["A", "B", "C"],
        "vertices": {
            "A": {"id": "A", "coord": null},
            "B": {"id": "B", "coord": null},
            "C": {"id": "C", "coord": null}
        },
        "adjacency": {
            "A": [["B", 1.0], ["C", 1.0]],
            "B": [["A", 1.0], ["C", 1.0]],
            "C": [["A", 1.0], ["B", 1.0]]
        }
    }"#;
    let g: WeightedGraph<String> = serde_json::from_str(consistent).unwrap();
    let result = ExhaustiveSolver::solve(&g, &ExhaustiveConfig::default()).unwrap();
    assert_eq!(result.tour.cost(), 3.0);
}
