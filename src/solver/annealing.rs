//! Simulated annealing over tours.
//!
//! Two [`SaProblem`] instantiations share the generic engine in
//! [`crate::sa`]:
//!
//! - [`GraphTourProblem`]: the state is a closed vertex sequence over a
//!   [`WeightedGraph`] with a fixed start; the cost is the tour cost.
//! - [`PointTourProblem`]: the state is a closed sequence of plane
//!   points ([`PointPath`]); the cost is its Euclidean length.
//!
//! Both propose moves by swapping one interior element with its
//! successor, never touching the closing anchor.

use crate::error::{Error, Result};
use crate::graph::{path_length, Point, Tour, VertexId, WeightedGraph};
use crate::random::{shuffle, swap_adjacent_interior};
use crate::sa::{SaConfig, SaProblem, SaResult, SaRunner};
use rand::Rng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Discrete annealing state space: closed tours through a fixed start.
///
/// A state is `[start, v1, ..., v_{n-1}, start]`. States that step over a
/// missing edge cost `+inf`.
#[derive(Debug, Clone)]
pub struct GraphTourProblem<'g, V> {
    graph: &'g WeightedGraph<V>,
    start: V,
    others: Vec<V>,
}

impl<'g, V: VertexId> GraphTourProblem<'g, V> {
    /// Tours of `graph` anchored at `start` (default: its first vertex).
    pub fn new(graph: &'g WeightedGraph<V>, start: Option<&V>) -> Result<Self> {
        let start = match start {
            Some(v) => graph.vertex(v)?.id().clone(),
            None => graph.vertices().first().cloned().ok_or(Error::EmptyGraph)?,
        };
        if graph.vertex_count() < 2 {
            return Err(Error::NoTourExists);
        }
        let others = graph
            .vertices()
            .iter()
            .filter(|&v| *v != start)
            .cloned()
            .collect();
        Ok(Self {
            graph,
            start,
            others,
        })
    }

    pub fn start(&self) -> &V {
        &self.start
    }
}

impl<V: VertexId> SaProblem for GraphTourProblem<'_, V> {
    type State = Vec<V>;

    fn initial_state<R: Rng>(&self, rng: &mut R) -> Vec<V> {
        let mut middle = self.others.clone();
        shuffle(&mut middle, rng);
        let mut state = Vec::with_capacity(middle.len() + 2);
        state.push(self.start.clone());
        state.extend(middle);
        state.push(self.start.clone());
        state
    }

    fn cost(&self, state: &Vec<V>) -> f64 {
        state
            .windows(2)
            .try_fold(0.0, |acc, w| self.graph.weight(&w[0], &w[1]).map(|c| acc + c))
            .unwrap_or(f64::INFINITY)
    }

    fn neighbor<R: Rng>(&self, state: &Vec<V>, rng: &mut R) -> Vec<V> {
        let mut next = state.clone();
        swap_adjacent_interior(&mut next, rng);
        next
    }
}

/// A closed sequence of points whose first point is repeated at the end.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawPointPath"))]
pub struct PointPath {
    points: Vec<Point>,
}

impl PointPath {
    /// Closes `points` by repeating the first one at the end.
    pub fn closed(mut points: Vec<Point>) -> Result<Self> {
        let first = *points
            .first()
            .ok_or_else(|| Error::InvalidConfig("a point path needs at least one point".into()))?;
        points.push(first);
        Ok(Self { points })
    }

    /// All points including the closing duplicate.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of distinct stops.
    pub fn len(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total Euclidean length of the closed path.
    pub fn length(&self) -> f64 {
        path_length(&self.points)
    }

    /// The path as separate x and y coordinate sequences.
    pub fn coordinates(&self) -> (Vec<f64>, Vec<f64>) {
        self.points.iter().map(|p| (p.x, p.y)).unzip()
    }
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawPointPath {
    points: Vec<Point>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawPointPath> for PointPath {
    type Error = Error;

    fn try_from(raw: RawPointPath) -> Result<Self> {
        match (raw.points.first(), raw.points.last()) {
            (Some(first), Some(last)) if raw.points.len() >= 2 && first == last => {
                Ok(Self { points: raw.points })
            }
            _ => Err(Error::InvalidConfig(
                "a point path must repeat its first point at the end".into(),
            )),
        }
    }
}

/// Continuous annealing state space: orderings of a fixed point set.
///
/// The initial state visits the points in the order given and closes on
/// the first one, which stays anchored throughout the run.
#[derive(Debug, Clone)]
pub struct PointTourProblem {
    initial: PointPath,
}

impl PointTourProblem {
    pub fn new(points: Vec<Point>) -> Result<Self> {
        Ok(Self {
            initial: PointPath::closed(points)?,
        })
    }

    pub fn initial(&self) -> &PointPath {
        &self.initial
    }
}

impl SaProblem for PointTourProblem {
    type State = PointPath;

    fn initial_state<R: Rng>(&self, _rng: &mut R) -> PointPath {
        self.initial.clone()
    }

    fn cost(&self, state: &PointPath) -> f64 {
        state.length()
    }

    fn neighbor<R: Rng>(&self, state: &PointPath, rng: &mut R) -> PointPath {
        let mut next = state.clone();
        swap_adjacent_interior(&mut next.points, rng);
        next
    }
}

/// Anneals an ordering of `points`, starting from the given order.
pub fn anneal_points(points: Vec<Point>, config: &SaConfig) -> Result<SaResult<PointPath>> {
    let problem = PointTourProblem::new(points)?;
    SaRunner::run(&problem, config)
}

/// Result of annealing a graph tour.
#[derive(Debug, Clone)]
pub struct AnnealingResult<V: Clone> {
    /// The tour the chain ended in.
    pub tour: Tour<V>,

    /// The cheapest tour seen during the run.
    pub best: Tour<V>,

    /// Raw engine output, including the trace.
    pub run: SaResult<Vec<V>>,
}

/// Simulated annealing TSP solver over a [`WeightedGraph`].
pub struct AnnealingSolver;

impl AnnealingSolver {
    /// Anneals from a random tour anchored at the first vertex.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyGraph`] / [`Error::NoTourExists`] for graphs with
    ///   fewer than two vertices
    /// - [`Error::InvalidConfig`] if `config` does not validate
    /// - [`Error::InvalidTour`] if the chain never reaches a tour that
    ///   uses only existing edges (sparse graphs)
    pub fn solve<V: VertexId>(
        graph: &WeightedGraph<V>,
        config: &SaConfig,
    ) -> Result<AnnealingResult<V>> {
        let problem = GraphTourProblem::new(graph, None)?;
        log::debug!("annealing graph tour: n={}", graph.vertex_count());
        let run = SaRunner::run(&problem, config)?;
        Self::finish(graph, run)
    }

    /// Anneals from `initial`, which must visit every vertex exactly once.
    pub fn solve_from<V: VertexId>(
        graph: &WeightedGraph<V>,
        config: &SaConfig,
        initial: &Tour<V>,
    ) -> Result<AnnealingResult<V>> {
        if !initial.is_hamiltonian(graph) {
            return Err(Error::InvalidTour(
                "initial tour must visit every vertex exactly once".into(),
            ));
        }
        let problem = GraphTourProblem::new(graph, Some(initial.start()))?;
        log::debug!(
            "annealing graph tour: n={}, initial cost={:.4}",
            graph.vertex_count(),
            initial.cost()
        );
        let run = SaRunner::run_from(&problem, config, initial.sequence().to_vec())?;
        Self::finish(graph, run)
    }

    fn finish<V: VertexId>(
        graph: &WeightedGraph<V>,
        run: SaResult<Vec<V>>,
    ) -> Result<AnnealingResult<V>> {
        let tour = Tour::new(run.final_state.clone(), graph)?;
        let best = Tour::new(run.best.clone(), graph)?;
        Ok(AnnealingResult { tour, best, run })
    }
}
