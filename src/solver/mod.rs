//! TSP solvers.
//!
//! Three independent strategies share a calling convention rather than a
//! trait: each takes a `&WeightedGraph` plus its own config and returns a
//! [`Tour`](crate::graph::Tour) together with a record of how it got
//! there.
//!
//! | Solver | Cost | Output trace |
//! |--------|------|--------------|
//! | [`ExhaustiveSolver`] | `O(n!)`, exact | every evaluated tour |
//! | [`GreedySolver`] | `O(n + m log m)` | closed prefix after each visit |
//! | [`AnnealingSolver`] | configurable | per-iteration [`Trace`](crate::sa::Trace) |

mod annealing;
mod exhaustive;
mod greedy;

pub use annealing::{
    anneal_points, AnnealingResult, AnnealingSolver, GraphTourProblem, PointPath,
    PointTourProblem,
};
pub use exhaustive::{ExhaustiveConfig, ExhaustiveResult, ExhaustiveSolver};
pub use greedy::{GreedyConfig, GreedyResult, GreedySolver};
