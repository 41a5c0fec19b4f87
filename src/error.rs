//! Error types shared by the graph model and all solvers.

use thiserror::Error;

/// Errors raised by graph construction, tour validation and solvers.
///
/// Every variant is a precondition violation detected at the call that
/// raises it. Nothing in the crate retries or recovers internally.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("vertex {0} already exists")]
    DuplicateVertex(String),

    #[error("edge {0} - {1} already exists")]
    DuplicateEdge(String, String),

    #[error("unknown vertex {0}")]
    UnknownVertex(String),

    #[error("vertex {0} has no coordinate; an explicit weight is required")]
    MissingCoordinate(String),

    #[error("no edge between {0} and {1}")]
    NoSuchEdge(String, String),

    #[error("self-loop on vertex {0} is not allowed")]
    SelfLoop(String),

    #[error("edge {from} - {to} has invalid weight {weight}")]
    InvalidWeight { from: String, to: String, weight: f64 },

    #[error("invalid tour: {0}")]
    InvalidTour(String),

    #[error("graph admits no Hamiltonian cycle")]
    NoTourExists,

    #[error("graph is disconnected: reached {reached} of {total} vertices")]
    DisconnectedGraph { reached: usize, total: usize },

    #[error("graph has no vertices")]
    EmptyGraph,

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            Error::DuplicateVertex("A".into()).to_string(),
            "vertex A already exists"
        );
        assert_eq!(
            Error::NoSuchEdge("A".into(), "C".into()).to_string(),
            "no edge between A and C"
        );
        assert_eq!(
            Error::DisconnectedGraph {
                reached: 2,
                total: 5
            }
            .to_string(),
            "graph is disconnected: reached 2 of 5 vertices"
        );
    }
}
