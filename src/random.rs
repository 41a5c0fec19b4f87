//! Seeded random number helpers.
//!
//! Every solver creates its own generator from a config seed. There is
//! no process-wide seed, so repeated or concurrent runs stay
//! independently reproducible.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Creates a deterministic generator from `seed`.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Shuffles `items` in place (Fisher-Yates).
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    items.shuffle(rng);
}

/// Swaps a uniformly chosen interior position with its successor.
///
/// `path` is a closed sequence whose first and last elements are the
/// fixed anchor. The swapped index `i` is drawn from `1..=len-3`, so
/// both `i` and `i + 1` stay strictly inside the anchor. Returns the
/// chosen index, or `None` when the path has fewer than two interior
/// elements and nothing can move.
pub fn swap_adjacent_interior<T, R: Rng + ?Sized>(path: &mut [T], rng: &mut R) -> Option<usize> {
    if path.len() < 4 {
        return None;
    }
    let i = rng.random_range(1..path.len() - 2);
    path.swap(i, i + 1);
    Some(i)
}
