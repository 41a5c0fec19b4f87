//! Greedy depth-first traversal.
//!
//! Builds a single tour from a LIFO frontier. Each visited vertex pushes
//! its not-yet-queued neighbors so that the cheapest edge ends up on top
//! of the stack and is explored next.
//!
//! This is a DFS-ordered heuristic, not nearest-neighbor. A vertex queued
//! early by one parent keeps its stack position, so it is only visited
//! when the traversal unwinds back to it, even if a later vertex is
//! closer to it. On a sparse graph the resulting order may therefore
//! step between vertices that share no edge, in which case no closed
//! tour exists for that order and the solve fails.

use crate::error::{Error, Result};
use crate::graph::{Tour, VertexId, WeightedGraph};
use crate::random::create_rng;
use rand::Rng;
use std::collections::HashSet;

/// Configuration for [`GreedySolver`].
#[derive(Debug, Clone)]
pub struct GreedyConfig<V> {
    /// Start vertex. `None` = drawn uniformly using `seed`.
    pub start: Option<V>,

    /// Seed for the start vertex draw.
    pub seed: u64,

    /// Whether to keep the closed partial tour after every visit.
    pub record_partials: bool,
}

impl<V> Default for GreedyConfig<V> {
    fn default() -> Self {
        Self {
            start: None,
            seed: 0,
            record_partials: true,
        }
    }
}

impl<V> GreedyConfig<V> {
    pub fn with_start(mut self, start: V) -> Self {
        self.start = Some(start);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_record_partials(mut self, record: bool) -> Self {
        self.record_partials = record;
        self
    }
}

/// Result of a greedy traversal.
#[derive(Debug, Clone)]
pub struct GreedyResult<V> {
    /// Tour over the complete visit order.
    pub tour: Tour<V>,

    /// Visit order without the closing return to the start.
    pub visit_order: Vec<V>,

    /// `visited[..k] + start` for each `k >= 2`, whenever that prefix
    /// closes into a valid tour. The last entry equals `tour`.
    pub partials: Vec<Tour<V>>,
}

/// Stack-based greedy TSP heuristic.
pub struct GreedySolver;

impl GreedySolver {
    /// Traverses `graph` and closes the visit order into a tour.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyGraph`] if `graph` has no vertices
    /// - [`Error::NoTourExists`] if `graph` has a single vertex
    /// - [`Error::UnknownVertex`] if the configured start is not in `graph`
    /// - [`Error::DisconnectedGraph`] if some vertex is unreachable
    /// - [`Error::InvalidTour`] if the visit order is not a closed walk
    pub fn solve<V: VertexId>(
        graph: &WeightedGraph<V>,
        config: &GreedyConfig<V>,
    ) -> Result<GreedyResult<V>> {
        let n = graph.vertex_count();
        match n {
            0 => return Err(Error::EmptyGraph),
            1 => return Err(Error::NoTourExists),
            _ => {}
        }

        let start = match &config.start {
            Some(v) => graph.vertex(v)?.id().clone(),
            None => {
                let mut rng = create_rng(config.seed);
                graph.vertices()[rng.random_range(0..n)].clone()
            }
        };
        log::debug!("greedy traversal: n={n}, start={start}");

        let mut frontier = vec![start.clone()];
        let mut queued: HashSet<V> = HashSet::from([start.clone()]);
        let mut visited: Vec<V> = Vec::with_capacity(n + 1);
        let mut partials = Vec::new();

        while let Some(v) = frontier.pop() {
            visited.push(v.clone());
            if config.record_partials && visited.len() >= 2 {
                let mut closed = visited.clone();
                closed.push(start.clone());
                match Tour::new(closed, graph) {
                    Ok(tour) => partials.push(tour),
                    Err(e) => log::trace!("skipping partial tour: {e}"),
                }
            }

            let mut next: Vec<&(V, f64)> = graph
                .neighbors(&v)?
                .iter()
                .filter(|(nb, _)| !queued.contains(nb))
                .collect();
            // Ascending weight, then push in reverse: cheapest on top.
            next.sort_by(|a, b| a.1.total_cmp(&b.1));
            for (nb, _) in next.into_iter().rev() {
                queued.insert(nb.clone());
                frontier.push(nb.clone());
            }
        }

        if visited.len() < n {
            return Err(Error::DisconnectedGraph {
                reached: visited.len(),
                total: n,
            });
        }

        let mut closed = visited.clone();
        closed.push(start);
        let tour = Tour::new(closed, graph)?;
        log::debug!("greedy traversal done: cost={:.4}", tour.cost());

        Ok(GreedyResult {
            tour,
            visit_order: visited,
            partials,
        })
    }
}
