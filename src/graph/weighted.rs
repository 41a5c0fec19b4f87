//! Undirected weighted graph with named vertices.

use super::point::Point;
use super::vertex::{Vertex, VertexId};
use crate::error::{Error, Result};
use std::collections::HashMap;
#[cfg(feature = "serde")]
use std::collections::HashSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An undirected graph with symmetric edge weights.
///
/// Each vertex keeps an adjacency list of `(neighbor, weight)` pairs.
/// Every edge is stored twice, once per endpoint, with the same weight.
/// Vertices remember their insertion order so that [`vertices`] is
/// stable for a given instance.
///
/// The graph is built incrementally and then handed to solvers by shared
/// reference, which keeps it immutable for the duration of a solve.
///
/// # Examples
///
/// ```
/// use u_tsp::graph::{Point, WeightedGraph};
///
/// let mut g = WeightedGraph::new();
/// g.add_vertex("A", Some(Point::new(0.0, 0.0))).unwrap();
/// g.add_vertex("B", Some(Point::new(3.0, 4.0))).unwrap();
/// g.add_edge(&"A", &"B", None).unwrap();
/// assert_eq!(g.weight(&"B", &"A").unwrap(), 5.0);
/// ```
///
/// [`vertices`]: WeightedGraph::vertices
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "RawGraph<V>",
        bound(
            serialize = "V: Serialize",
            deserialize = "V: Deserialize<'de> + VertexId"
        )
    )
)]
pub struct WeightedGraph<V> {
    order: Vec<V>,
    vertices: HashMap<V, Vertex<V>>,
    adjacency: HashMap<V, Vec<(V, f64)>>,
}

impl<V: VertexId> Default for WeightedGraph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: VertexId> WeightedGraph<V> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            order: Vec::new(),
            vertices: HashMap::new(),
            adjacency: HashMap::new(),
        }
    }

    /// Builds a complete graph whose edge weights are Euclidean distances.
    pub fn complete_euclidean<I>(points: I) -> Result<Self>
    where
        I: IntoIterator<Item = (V, Point)>,
    {
        let mut graph = Self::new();
        for (id, p) in points {
            graph.add_vertex(id, Some(p))?;
        }
        let ids = graph.order.clone();
        for (i, a) in ids.iter().enumerate() {
            for b in &ids[i + 1..] {
                graph.add_edge(a, b, None)?;
            }
        }
        Ok(graph)
    }

    /// Adds a vertex with an optional coordinate.
    pub fn add_vertex(&mut self, id: V, coord: Option<Point>) -> Result<()> {
        if self.vertices.contains_key(&id) {
            return Err(Error::DuplicateVertex(id.to_string()));
        }
        self.order.push(id.clone());
        self.adjacency.insert(id.clone(), Vec::new());
        self.vertices.insert(id.clone(), Vertex::new(id, coord));
        Ok(())
    }

    /// Adds the undirected edge `a - b`.
    ///
    /// Without an explicit `weight` the Euclidean distance between the
    /// two coordinates is used.
    pub fn add_edge(&mut self, a: &V, b: &V, weight: Option<f64>) -> Result<()> {
        let va = self.vertex(a)?;
        let vb = self.vertex(b)?;
        if a == b {
            return Err(Error::SelfLoop(a.to_string()));
        }
        if self.contains_edge(a, b) || self.contains_edge(b, a) {
            return Err(Error::DuplicateEdge(a.to_string(), b.to_string()));
        }

        let w = match weight {
            Some(w) => w,
            None => {
                let pa = va
                    .coord()
                    .ok_or_else(|| Error::MissingCoordinate(a.to_string()))?;
                let pb = vb
                    .coord()
                    .ok_or_else(|| Error::MissingCoordinate(b.to_string()))?;
                pa.distance(&pb)
            }
        };
        if !w.is_finite() || w < 0.0 {
            return Err(Error::InvalidWeight {
                from: a.to_string(),
                to: b.to_string(),
                weight: w,
            });
        }

        for (from, to) in [(a, b), (b, a)] {
            self.adjacency
                .get_mut(from)
                .ok_or_else(|| Error::UnknownVertex(from.to_string()))?
                .push((to.clone(), w));
        }
        Ok(())
    }

    /// Returns the `(neighbor, weight)` pairs of `a`, in insertion order.
    pub fn neighbors(&self, a: &V) -> Result<&[(V, f64)]> {
        self.adjacency
            .get(a)
            .map(Vec::as_slice)
            .ok_or_else(|| Error::UnknownVertex(a.to_string()))
    }

    /// Returns the weight of edge `a - b`.
    pub fn weight(&self, a: &V, b: &V) -> Result<f64> {
        self.neighbors(a)?
            .iter()
            .find(|(n, _)| n == b)
            .map(|&(_, w)| w)
            .ok_or_else(|| Error::NoSuchEdge(a.to_string(), b.to_string()))
    }

    /// All vertex ids in insertion order.
    pub fn vertices(&self) -> &[V] {
        &self.order
    }

    pub fn vertex(&self, id: &V) -> Result<&Vertex<V>> {
        self.vertices
            .get(id)
            .ok_or_else(|| Error::UnknownVertex(id.to_string()))
    }

    pub fn coordinate(&self, id: &V) -> Result<Option<Point>> {
        self.vertex(id).map(Vertex::coord)
    }

    pub fn contains_vertex(&self, id: &V) -> bool {
        self.vertices.contains_key(id)
    }

    pub fn contains_edge(&self, a: &V, b: &V) -> bool {
        self.adjacency
            .get(a)
            .is_some_and(|adj| adj.iter().any(|(n, _)| n == b))
    }

    pub fn vertex_count(&self) -> usize {
        self.order.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum::<usize>() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Whether every pair of distinct vertices is connected.
    pub fn is_complete(&self) -> bool {
        let n = self.vertex_count();
        self.adjacency.values().all(|adj| adj.len() + 1 == n)
    }

    /// Position of `id` in [`vertices`](Self::vertices).
    pub(crate) fn index_of(&self, id: &V) -> Option<usize> {
        self.order.iter().position(|v| v == id)
    }

    /// Dense weight lookup indexed by vertex position.
    pub(crate) fn weight_matrix(&self) -> Vec<Vec<Option<f64>>> {
        let index: HashMap<&V, usize> =
            self.order.iter().enumerate().map(|(i, v)| (v, i)).collect();
        let n = self.order.len();
        let mut matrix = vec![vec![None; n]; n];
        for (i, v) in self.order.iter().enumerate() {
            for (nb, w) in &self.adjacency[v] {
                matrix[i][index[nb]] = Some(*w);
            }
        }
        matrix
    }
}

/// Unchecked wire form of a [`WeightedGraph`].
#[cfg(feature = "serde")]
#[derive(Deserialize)]
#[serde(bound(deserialize = "V: Deserialize<'de> + VertexId"))]
struct RawGraph<V> {
    order: Vec<V>,
    vertices: HashMap<V, Vertex<V>>,
    adjacency: HashMap<V, Vec<(V, f64)>>,
}

#[cfg(feature = "serde")]
impl<V: VertexId> TryFrom<RawGraph<V>> for WeightedGraph<V> {
    type Error = Error;

    /// Rebuilds the graph through [`add_vertex`](WeightedGraph::add_vertex)
    /// and [`add_edge`](WeightedGraph::add_edge), then requires every
    /// stored adjacency list to hold exactly the rebuilt edges.
    fn try_from(raw: RawGraph<V>) -> Result<Self> {
        let RawGraph {
            order,
            mut vertices,
            mut adjacency,
        } = raw;

        let mut graph = Self::new();
        for id in order {
            if graph.contains_vertex(&id) {
                return Err(Error::DuplicateVertex(id.to_string()));
            }
            let vertex = vertices
                .remove(&id)
                .ok_or_else(|| Error::UnknownVertex(id.to_string()))?;
            graph.add_vertex(id, vertex.coord())?;
        }
        let stray = vertices
            .keys()
            .chain(adjacency.keys())
            .find(|v| !graph.contains_vertex(v));
        if let Some(v) = stray {
            return Err(Error::UnknownVertex(v.to_string()));
        }

        let lists: Vec<(V, Vec<(V, f64)>)> = graph
            .order
            .iter()
            .map(|id| (id.clone(), adjacency.remove(id).unwrap_or_default()))
            .collect();
        for (a, list) in &lists {
            for (b, w) in list {
                if !graph.contains_edge(a, b) {
                    graph.add_edge(a, b, Some(*w))?;
                }
            }
        }

        for (a, list) in &lists {
            let mut seen = HashSet::with_capacity(list.len());
            for (b, w) in list {
                if !seen.insert(b) {
                    return Err(Error::DuplicateEdge(a.to_string(), b.to_string()));
                }
                if graph.weight(a, b)? != *w {
                    return Err(Error::InvalidWeight {
                        from: a.to_string(),
                        to: b.to_string(),
                        weight: *w,
                    });
                }
            }
            if let Some((b, _)) = graph.neighbors(a)?.iter().find(|(b, _)| !seen.contains(b)) {
                return Err(Error::NoSuchEdge(a.to_string(), b.to_string()));
            }
        }

        // Keep the stored neighbor order; greedy tie-breaks depend on it.
        for (a, list) in lists {
            graph.adjacency.insert(a, list);
        }
        Ok(graph)
    }
}
