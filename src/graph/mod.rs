//! Graph and tour model.
//!
//! A [`WeightedGraph`] holds named vertices with optional coordinates and
//! symmetric weighted edges. A [`Tour`] is a validated closed walk over
//! such a graph with its total cost.

mod generate;
mod point;
mod tour;
mod vertex;
mod weighted;

pub use generate::{random_complete_graph, random_points, vertex_label};
pub use point::{path_length, Point};
pub use tour::Tour;
pub use vertex::{Vertex, VertexId};
pub use weighted::WeightedGraph;
