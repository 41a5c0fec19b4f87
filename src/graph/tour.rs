//! Closed tours over a [`WeightedGraph`].

use super::vertex::VertexId;
use super::weighted::WeightedGraph;
use crate::error::{Error, Result};
use std::collections::HashSet;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A closed walk `v0 -> v1 -> ... -> v0` with its total cost.
///
/// The sequence has length `n + 1` and repeats its first vertex at the
/// end. The cost is the sum of the edge weights along the sequence and is
/// computed once, when the tour is validated. A `Tour` cannot be
/// modified after construction.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "RawTour<V>",
        bound(deserialize = "V: Deserialize<'de> + VertexId")
    )
)]
pub struct Tour<V> {
    sequence: Vec<V>,
    cost: f64,
}

impl<V: VertexId> Tour<V> {
    /// Validates `sequence` against `graph` and computes its cost.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidTour`] if the sequence has fewer than two
    /// elements, does not end where it starts, or uses a pair of
    /// consecutive vertices that is not an edge of `graph`.
    pub fn new(sequence: Vec<V>, graph: &WeightedGraph<V>) -> Result<Self> {
        let (first, last) = match (sequence.first(), sequence.last()) {
            (Some(f), Some(l)) if sequence.len() >= 2 => (f, l),
            _ => {
                return Err(Error::InvalidTour(format!(
                    "a closed tour needs at least two entries, got {}",
                    sequence.len()
                )))
            }
        };
        if first != last {
            return Err(Error::InvalidTour(format!(
                "tour starts at {first} but ends at {last}"
            )));
        }

        let mut cost = 0.0;
        for pair in sequence.windows(2) {
            cost += graph.weight(&pair[0], &pair[1]).map_err(|_| {
                Error::InvalidTour(format!("{} -> {} is not an edge", pair[0], pair[1]))
            })?;
        }
        Ok(Self { sequence, cost })
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// The closed vertex sequence; first and last entries are equal.
    pub fn sequence(&self) -> &[V] {
        &self.sequence
    }

    pub fn into_sequence(self) -> Vec<V> {
        self.sequence
    }

    pub fn start(&self) -> &V {
        &self.sequence[0]
    }

    /// Number of stops, not counting the return to the start.
    pub fn len(&self) -> usize {
        self.sequence.len().saturating_sub(1)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether every vertex of `graph` is visited.
    pub fn covers(&self, graph: &WeightedGraph<V>) -> bool {
        let stops: HashSet<&V> = self.stops().iter().collect();
        graph.vertices().iter().all(|v| stops.contains(v))
    }

    /// Whether the tour visits every vertex of `graph` exactly once.
    pub fn is_hamiltonian(&self, graph: &WeightedGraph<V>) -> bool {
        let stops: HashSet<&V> = self.stops().iter().collect();
        stops.len() == self.len() && self.len() == graph.vertex_count() && self.covers(graph)
    }

    fn stops(&self) -> &[V] {
        self.sequence.split_last().map(|(_, stops)| stops).unwrap_or_default()
    }
}

/// Unchecked wire form of a [`Tour`].
///
/// The edges cannot be checked without the graph, so loading enforces
/// closure and a finite non-negative cost. Use [`Tour::new`] to
/// revalidate against a graph.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawTour<V> {
    sequence: Vec<V>,
    cost: f64,
}

#[cfg(feature = "serde")]
impl<V: VertexId> TryFrom<RawTour<V>> for Tour<V> {
    type Error = Error;

    fn try_from(raw: RawTour<V>) -> Result<Self> {
        match (raw.sequence.first(), raw.sequence.last()) {
            (Some(first), Some(last)) if raw.sequence.len() >= 2 => {
                if first != last {
                    return Err(Error::InvalidTour(format!(
                        "tour starts at {first} but ends at {last}"
                    )));
                }
            }
            _ => {
                return Err(Error::InvalidTour(format!(
                    "a closed tour needs at least two entries, got {}",
                    raw.sequence.len()
                )))
            }
        }
        if !(raw.cost.is_finite() && raw.cost >= 0.0) {
            return Err(Error::InvalidTour(format!(
                "tour cost must be finite and non-negative, got {}",
                raw.cost
            )));
        }
        Ok(Self {
            sequence: raw.sequence,
            cost: raw.cost,
        })
    }
}

impl<V: fmt::Display> fmt::Display for Tour<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.sequence.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}
