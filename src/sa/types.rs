//! Core trait for Simulated Annealing.

use rand::Rng;

/// Defines a Simulated Annealing problem.
///
/// The user implements initial state generation, cost evaluation and
/// neighbor proposal. The SA engine handles temperature management, the
/// acceptance criterion, cooling and trace recording.
///
/// A proposal must return a fresh state. The engine keeps the current
/// state untouched until the candidate is accepted, at which point the
/// candidate replaces it.
///
/// # Minimization
///
/// SA minimizes the cost function. For maximization, negate the cost.
///
/// # Examples
///
/// ```
/// use rand::Rng;
/// use u_tsp::sa::SaProblem;
///
/// struct Parabola;
///
/// impl SaProblem for Parabola {
///     type State = f64;
///
///     fn initial_state<R: Rng>(&self, rng: &mut R) -> f64 {
///         rng.random_range(-10.0..10.0)
///     }
///
///     fn cost(&self, x: &f64) -> f64 {
///         x * x
///     }
///
///     fn neighbor<R: Rng>(&self, x: &f64, rng: &mut R) -> f64 {
///         x + rng.random_range(-1.0..1.0)
///     }
/// }
/// ```
///
/// # References
///
/// Kirkpatrick et al. (1983), Cerny (1985)
pub trait SaProblem: Send + Sync {
    /// The state representation type.
    type State: Clone + Send;

    /// Creates a random initial state.
    fn initial_state<R: Rng>(&self, rng: &mut R) -> Self::State;

    /// Computes the cost of a state. Lower is better.
    fn cost(&self, state: &Self::State) -> f64;

    /// Proposes a neighbor of `state`.
    ///
    /// The neighbor should be "close" to the current state (small
    /// perturbation) but the neighborhood must be connected (any state
    /// reachable from any other via a sequence of moves).
    fn neighbor<R: Rng>(&self, state: &Self::State, rng: &mut R) -> Self::State;
}
