//! Random instance generators.

use super::point::Point;
use super::weighted::WeightedGraph;
use crate::error::{Error, Result};
use crate::random::create_rng;
use rand::Rng;

/// Letter label for the `index`-th vertex: `A..Z`, then `AA`, `AB`, ...
pub fn vertex_label(index: usize) -> String {
    let mut n = index + 1;
    let mut letters = Vec::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push(char::from(b'A' + rem as u8));
        n = (n - 1) / 26;
    }
    letters.iter().rev().collect()
}

/// `count` points drawn uniformly from `[0, extent)²`.
pub fn random_points<R: Rng + ?Sized>(count: usize, extent: f64, rng: &mut R) -> Vec<Point> {
    (0..count)
        .map(|_| Point::new(rng.random_range(0.0..extent), rng.random_range(0.0..extent)))
        .collect()
}

/// A complete Euclidean graph on `count` random vertices labelled
/// `A`, `B`, `C`, ...
///
/// # Errors
///
/// [`Error::InvalidConfig`] if `extent` is not a positive finite number.
pub fn random_complete_graph(count: usize, extent: f64, seed: u64) -> Result<WeightedGraph<String>> {
    if !(extent.is_finite() && extent > 0.0) {
        return Err(Error::InvalidConfig(format!(
            "extent must be positive and finite, got {extent}"
        )));
    }
    let mut rng = create_rng(seed);
    let points = random_points(count, extent, &mut rng);
    WeightedGraph::complete_euclidean(
        points
            .into_iter()
            .enumerate()
            .map(|(i, p)| (vertex_label(i), p)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_label() {
        assert_eq!(vertex_label(0), "A");
        assert_eq!(vertex_label(25), "Z");
        assert_eq!(vertex_label(26), "AA");
        assert_eq!(vertex_label(27), "AB");
        assert_eq!(vertex_label(701), "ZZ");
        assert_eq!(vertex_label(26 * 27), "AAA");
    }

    #[test]
    fn test_random_points_in_range() {
        let mut rng = create_rng(5);
        let pts = random_points(100, 10.0, &mut rng);
        assert_eq!(pts.len(), 100);
        assert!(pts
            .iter()
            .all(|p| (0.0..10.0).contains(&p.x) && (0.0..10.0).contains(&p.y)));
    }

    #[test]
    fn test_random_complete_graph() {
        let g = random_complete_graph(6, 100.0, 42).unwrap();
        assert_eq!(g.vertex_count(), 6);
        assert_eq!(g.edge_count(), 15);
        assert!(g.is_complete());
        assert_eq!(g.vertices()[0], "A");
        assert_eq!(g.vertices()[5], "F");
    }

    #[test]
    fn test_random_complete_graph_reproducible() {
        let a = random_complete_graph(5, 10.0, 9).unwrap();
        let b = random_complete_graph(5, 10.0, 9).unwrap();
        for v in a.vertices() {
            assert_eq!(a.coordinate(v).unwrap(), b.coordinate(v).unwrap());
        }
    }

    #[test]
    fn test_random_complete_graph_bad_extent() {
        assert!(matches!(
            random_complete_graph(3, 0.0, 0),
            Err(Error::InvalidConfig(_))
        ));
    }
}
