//! Exhaustive (brute force) search.
//!
//! Enumerates every Hamiltonian cycle through a fixed start vertex and
//! keeps the cheapest. The running time is `O(n!)`, so this solver is
//! meant as a correctness oracle for small instances (n ≲ 10).
//!
//! # Enumeration
//!
//! The `n - 1` non-start vertices are split into groups by the vertex
//! that follows the start. Within a group the remaining `n - 2` vertices
//! are permuted with Heap's algorithm, which yields each permutation
//! exactly once. Cycles are distinct up to rotation only: a cycle and
//! its reverse are both evaluated.
//!
//! With the `parallel` feature the groups run on the rayon pool and are
//! reduced in group order, so the result and the recorded tours are the
//! same as in a sequential run.

use crate::error::{Error, Result};
use crate::graph::{Tour, VertexId, WeightedGraph};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Configuration for [`ExhaustiveSolver`].
#[derive(Debug, Clone)]
pub struct ExhaustiveConfig<V> {
    /// Fixed start vertex. `None` = the first vertex of the graph.
    pub start: Option<V>,

    /// Whether to keep every evaluated tour in the result.
    pub record_evaluated: bool,

    /// Whether to spread the permutation groups across threads.
    #[cfg(feature = "parallel")]
    pub parallel: bool,
}

impl<V> Default for ExhaustiveConfig<V> {
    fn default() -> Self {
        Self {
            start: None,
            record_evaluated: false,
            #[cfg(feature = "parallel")]
            parallel: false,
        }
    }
}

impl<V> ExhaustiveConfig<V> {
    pub fn with_start(mut self, start: V) -> Self {
        self.start = Some(start);
        self
    }

    pub fn with_record_evaluated(mut self, record: bool) -> Self {
        self.record_evaluated = record;
        self
    }

    #[cfg(feature = "parallel")]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

/// Result of an exhaustive search.
#[derive(Debug, Clone)]
pub struct ExhaustiveResult<V> {
    /// The minimum-cost tour. Ties keep the first tour enumerated.
    pub tour: Tour<V>,

    /// Every feasible tour, in enumeration order. Empty unless
    /// `record_evaluated` is set.
    pub evaluated: Vec<Tour<V>>,

    /// Number of vertex orders examined.
    pub permutations: usize,

    /// Number of those orders that formed a Hamiltonian cycle.
    pub feasible: usize,
}

/// Brute-force TSP solver.
pub struct ExhaustiveSolver;

impl ExhaustiveSolver {
    /// Finds the optimal tour of `graph`.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyGraph`] if `graph` has no vertices
    /// - [`Error::UnknownVertex`] if the configured start is not in `graph`
    /// - [`Error::NoTourExists`] if no Hamiltonian cycle exists
    pub fn solve<V: VertexId>(
        graph: &WeightedGraph<V>,
        config: &ExhaustiveConfig<V>,
    ) -> Result<ExhaustiveResult<V>> {
        if graph.is_empty() {
            return Err(Error::EmptyGraph);
        }
        let start = match &config.start {
            Some(v) => graph
                .index_of(v)
                .ok_or_else(|| Error::UnknownVertex(v.to_string()))?,
            None => 0,
        };

        let n = graph.vertex_count();
        if n > 12 {
            log::warn!("exhaustive search over {n} vertices; this may not finish");
        }
        log::debug!("exhaustive search: n={n}, start={}", graph.vertices()[start]);

        let search = Search {
            matrix: graph.weight_matrix(),
            start,
            others: (0..n).filter(|&i| i != start).collect(),
            record: config.record_evaluated,
        };
        #[cfg(feature = "parallel")]
        let groups = if config.parallel {
            search.run_parallel()
        } else {
            search.run_sequential()
        };
        #[cfg(not(feature = "parallel"))]
        let groups = search.run_sequential();

        let mut permutations = 0;
        let mut feasible = 0;
        let mut best: Option<(f64, Vec<usize>)> = None;
        let mut evaluated = Vec::new();
        for group in groups {
            permutations += group.permutations;
            feasible += group.feasible;
            if let Some((cost, order)) = group.best {
                if best.as_ref().is_none_or(|(c, _)| cost < *c) {
                    best = Some((cost, order));
                }
            }
            for order in group.evaluated {
                evaluated.push(Tour::new(to_ids(graph, &order), graph)?);
            }
        }

        let (cost, order) = best.ok_or(Error::NoTourExists)?;
        let tour = Tour::new(to_ids(graph, &order), graph)?;
        log::debug!(
            "exhaustive search done: permutations={permutations}, feasible={feasible}, cost={cost:.4}"
        );

        Ok(ExhaustiveResult {
            tour,
            evaluated,
            permutations,
            feasible,
        })
    }
}

fn to_ids<V: VertexId>(graph: &WeightedGraph<V>, order: &[usize]) -> Vec<V> {
    let ids = graph.vertices();
    order.iter().map(|&i| ids[i].clone()).collect()
}

/// Search state shared by all groups, in vertex-index space.
struct Search {
    matrix: Vec<Vec<Option<f64>>>,
    start: usize,
    others: Vec<usize>,
    record: bool,
}

#[derive(Default)]
struct GroupOutcome {
    best: Option<(f64, Vec<usize>)>,
    evaluated: Vec<Vec<usize>>,
    permutations: usize,
    feasible: usize,
}

impl Search {
    #[cfg(feature = "parallel")]
    fn run_parallel(&self) -> Vec<GroupOutcome> {
        (0..self.others.len())
            .into_par_iter()
            .map(|g| self.group(g))
            .collect()
    }

    fn run_sequential(&self) -> Vec<GroupOutcome> {
        (0..self.others.len()).map(|g| self.group(g)).collect()
    }

    /// Every cycle `start -> others[g] -> ... -> start`.
    fn group(&self, g: usize) -> GroupOutcome {
        let head = self.others[g];
        let mut rest: Vec<usize> = self
            .others
            .iter()
            .copied()
            .filter(|&v| v != head)
            .collect();

        let mut outcome = GroupOutcome::default();
        for_each_permutation(&mut rest, |perm| {
            outcome.permutations += 1;
            let Some(cost) = self.cycle_cost(head, perm) else {
                return;
            };
            outcome.feasible += 1;

            let improved = outcome.best.as_ref().is_none_or(|(c, _)| cost < *c);
            if improved || self.record {
                let order = self.closed_order(head, perm);
                if self.record {
                    outcome.evaluated.push(order.clone());
                }
                if improved {
                    log::trace!("group {g}: new best {cost:.4}");
                    outcome.best = Some((cost, order));
                }
            }
        });
        outcome
    }

    /// Cost of `start, head, perm.., start`, summed in sequence order.
    fn cycle_cost(&self, head: usize, perm: &[usize]) -> Option<f64> {
        let mut cost = 0.0;
        let mut prev = self.start;
        for &v in std::iter::once(&head).chain(perm).chain(std::iter::once(&self.start)) {
            cost += self.matrix[prev][v]?;
            prev = v;
        }
        Some(cost)
    }

    fn closed_order(&self, head: usize, perm: &[usize]) -> Vec<usize> {
        let mut order = Vec::with_capacity(perm.len() + 3);
        order.push(self.start);
        order.push(head);
        order.extend_from_slice(perm);
        order.push(self.start);
        order
    }
}

/// Visits every permutation of `items` exactly once (Heap's algorithm).
///
/// The first visit sees `items` in its original order.
fn for_each_permutation<F: FnMut(&[usize])>(items: &mut [usize], mut visit: F) {
    let n = items.len();
    let mut c = vec![0usize; n];
    visit(items);
    let mut i = 1;
    while i < n {
        if c[i] < i {
            if i % 2 == 0 {
                items.swap(0, i);
            } else {
                items.swap(c[i], i);
            }
            visit(items);
            c[i] += 1;
            i = 1;
        } else {
            c[i] = 0;
            i += 1;
        }
    }
}
