//! Named vertices.

use super::point::Point;
use std::fmt::{Debug, Display};
use std::hash::Hash;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Requirements on a vertex identifier.
///
/// Implemented automatically for every type that qualifies, so `String`,
/// `&'static str`, `char` and the integer types all work as ids.
pub trait VertexId: Clone + Eq + Hash + Debug + Display + Send + Sync {}

impl<T> VertexId for T where T: Clone + Eq + Hash + Debug + Display + Send + Sync {}

/// A vertex: identifier plus an optional location.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vertex<V> {
    id: V,
    coord: Option<Point>,
}

impl<V: VertexId> Vertex<V> {
    pub fn new(id: V, coord: Option<Point>) -> Self {
        Self { id, coord }
    }

    pub fn id(&self) -> &V {
        &self.id
    }

    pub fn coord(&self) -> Option<Point> {
        self.coord
    }
}
