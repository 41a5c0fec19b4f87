//! Simulated Annealing (SA).
//!
//! A single-solution trajectory metaheuristic inspired by the physical
//! annealing process. Accepts worsening moves with a probability that
//! decreases over time (temperature), allowing the search to escape
//! local optima.
//!
//! The engine is generic over [`SaProblem`]: a problem supplies the
//! initial state, the cost function and the neighbor proposal, and the
//! engine supplies everything else. The TSP instantiations live in
//! [`crate::solver`].
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"
//! - Metropolis et al. (1953), "Equation of State Calculations by Fast Computing Machines"

mod config;
mod runner;
mod trace;
mod types;

pub use config::{CoolingSchedule, SaConfig, TEMPERATURE_EPSILON};
pub use runner::{SaEngine, SaPhase, SaResult, SaRunner};
pub use trace::{Trace, TraceRecord};
pub use types::SaProblem;
