//! Traveling Salesman solvers over weighted graphs.
//!
//! Provides a small graph model and three interchangeable strategies:
//!
//! - **Exhaustive search**: enumerates every Hamiltonian cycle through a
//!   fixed start. Exact, `O(n!)`; a correctness oracle for small graphs.
//! - **Greedy traversal**: a stack-driven depth-first walk that always
//!   explores the cheapest unqueued edge next.
//! - **Simulated Annealing (SA)**: a generic engine over any
//!   [`sa::SaProblem`], instantiated for discrete graph tours and for
//!   continuous point sequences.
//!
//! # Example
//!
//! ```
//! use u_tsp::graph::{Point, WeightedGraph};
//! use u_tsp::solver::{ExhaustiveConfig, ExhaustiveSolver};
//!
//! let graph = WeightedGraph::complete_euclidean([
//!     ("A", Point::new(0.0, 0.0)),
//!     ("B", Point::new(0.0, 1.0)),
//!     ("C", Point::new(1.0, 1.0)),
//!     ("D", Point::new(1.0, 0.0)),
//! ])?;
//! let result = ExhaustiveSolver::solve(&graph, &ExhaustiveConfig::default())?;
//! assert_eq!(result.tour.cost(), 4.0);
//! # Ok::<(), u_tsp::Error>(())
//! ```
//!
//! # Determinism
//!
//! Every randomized operation takes an explicit seed and owns its
//! generator, so identical inputs always produce identical tours and
//! traces.
//!
//! # Feature Flags
//!
//! - `serde`: serialization for graphs, tours, traces and SA config
//! - `parallel`: rayon-parallel exhaustive search

pub mod error;
pub mod graph;
pub mod random;
pub mod sa;
pub mod solver;

pub use error::{Error, Result};
