//! SA execution loop.
//!
//! # Algorithm
//!
//! 1. Start from a random (or supplied) state at `T_0`
//! 2. At each iteration:
//!    a. Propose a neighbor and compute `delta = cost(candidate) - cost(current)`
//!    b. Accept if `delta < 0`; otherwise draw `u ~ U(0, 1)` and accept iff
//!       `exp(-delta / T) > u`
//!    c. Cool the temperature and append a trace record
//! 3. Terminate once `T <= T_bound + eps` or the iteration cap is hit

use super::config::SaConfig;
use super::trace::{Trace, TraceRecord};
use super::types::SaProblem;
use crate::error::Result;
use crate::random::create_rng;
use rand::rngs::StdRng;
use rand::Rng;

/// Lifecycle of an [`SaEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaPhase {
    /// State and temperature initialized; no iteration run yet.
    Initial,
    /// At least one iteration run and no stop condition met.
    Iterating,
    /// Temperature reached its bound or the iteration cap was hit.
    Terminated,
}

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone)]
pub struct SaResult<S: Clone> {
    /// The state the chain ended in.
    pub final_state: S,

    /// Cost of `final_state`.
    pub final_cost: f64,

    /// The best state seen during the run.
    pub best: S,

    /// Cost of the best state.
    pub best_cost: f64,

    /// Total number of iterations (neighbor evaluations).
    pub iterations: usize,

    /// Temperature when the algorithm stopped.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of strictly improving moves.
    pub improving_moves: usize,

    /// Per-iteration trace. Empty when `record_trace` is off.
    pub trace: Trace<S>,
}

/// A steppable annealing chain.
///
/// Useful when a caller wants to observe the chain between iterations;
/// [`SaRunner`] simply steps one until it terminates.
pub struct SaEngine<'a, P: SaProblem> {
    problem: &'a P,
    config: &'a SaConfig,
    rng: StdRng,
    current: P::State,
    current_cost: f64,
    best: P::State,
    best_cost: f64,
    temperature: f64,
    iteration: usize,
    accepted_moves: usize,
    improving_moves: usize,
    phase: SaPhase,
    trace: Trace<P::State>,
}

impl<'a, P: SaProblem> SaEngine<'a, P> {
    /// Creates an engine starting from `problem.initial_state`.
    ///
    /// The initial state is drawn from the same seeded generator that
    /// later drives proposals and acceptance draws.
    pub fn new(problem: &'a P, config: &'a SaConfig) -> Result<Self> {
        config.validate()?;
        let mut rng = create_rng(config.seed);
        let initial = problem.initial_state(&mut rng);
        Ok(Self::start(problem, config, rng, initial))
    }

    /// Creates an engine starting from a caller-supplied state.
    pub fn with_initial(problem: &'a P, config: &'a SaConfig, initial: P::State) -> Result<Self> {
        config.validate()?;
        let rng = create_rng(config.seed);
        Ok(Self::start(problem, config, rng, initial))
    }

    fn start(problem: &'a P, config: &'a SaConfig, rng: StdRng, initial: P::State) -> Self {
        let cost = problem.cost(&initial);
        let mut trace = match (config.record_trace, config.max_iterations) {
            (false, _) => Trace::new(),
            (true, Some(cap)) => Trace::with_capacity(cap.saturating_add(1).min(1 << 16)),
            (true, None) => Trace::new(),
        };
        if config.record_trace {
            trace.push(TraceRecord {
                iteration: 0,
                state: initial.clone(),
                cost,
                temperature: config.initial_temperature,
                acceptance_probability: None,
            });
        }
        log::debug!(
            "SA start: T0={:.4}, bound={:.6}, schedule={:?}, cost={:.4}",
            config.initial_temperature,
            config.bound_temperature,
            config.schedule,
            cost
        );

        Self {
            problem,
            config,
            rng,
            best: initial.clone(),
            current: initial,
            current_cost: cost,
            best_cost: cost,
            temperature: config.initial_temperature,
            iteration: 0,
            accepted_moves: 0,
            improving_moves: 0,
            phase: SaPhase::Initial,
            trace,
        }
    }

    pub fn phase(&self) -> SaPhase {
        self.phase
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn iteration(&self) -> usize {
        self.iteration
    }

    pub fn current(&self) -> &P::State {
        &self.current
    }

    pub fn current_cost(&self) -> f64 {
        self.current_cost
    }

    pub fn best_cost(&self) -> f64 {
        self.best_cost
    }

    /// Runs one iteration and returns the resulting phase.
    ///
    /// Stepping a terminated engine is a no-op.
    pub fn step(&mut self) -> SaPhase {
        if self.phase == SaPhase::Terminated {
            return self.phase;
        }
        if self.should_stop() {
            self.phase = SaPhase::Terminated;
            return self.phase;
        }

        let candidate = self.problem.neighbor(&self.current, &mut self.rng);
        let candidate_cost = self.problem.cost(&candidate);
        let mut delta = candidate_cost - self.current_cost;
        // inf - inf: two infeasible states are treated as equally bad.
        if delta.is_nan() {
            delta = 0.0;
        }

        // Metropolis acceptance criterion
        let (accept, probability) = if delta < 0.0 {
            self.improving_moves += 1;
            (true, None)
        } else {
            let u: f64 = self.rng.random_range(0.0..1.0);
            let p = (-delta / self.temperature).exp();
            (p > u, Some(p))
        };

        if accept {
            self.current = candidate;
            self.current_cost = candidate_cost;
            self.accepted_moves += 1;

            if self.current_cost < self.best_cost {
                self.best = self.current.clone();
                self.best_cost = self.current_cost;
            }
        }

        self.temperature = self.config.schedule.cool(
            self.temperature,
            self.config.decay,
            self.config.bound_temperature,
        );
        self.iteration += 1;

        if self.config.record_trace {
            self.trace.push(TraceRecord {
                iteration: self.iteration,
                state: self.current.clone(),
                cost: self.current_cost,
                temperature: self.temperature.max(0.0),
                acceptance_probability: probability,
            });
        }

        self.phase = if self.should_stop() {
            SaPhase::Terminated
        } else {
            SaPhase::Iterating
        };
        self.phase
    }

    /// Steps until terminated and returns the result.
    pub fn run(mut self) -> SaResult<P::State> {
        while self.step() != SaPhase::Terminated {}
        self.finish()
    }

    /// Consumes the engine, wherever it is in its lifecycle.
    pub fn finish(self) -> SaResult<P::State> {
        log::debug!(
            "SA done: iterations={}, T={:.6}, final_cost={:.4}, best_cost={:.4}, accepted={}",
            self.iteration,
            self.temperature,
            self.current_cost,
            self.best_cost,
            self.accepted_moves
        );
        SaResult {
            final_state: self.current,
            final_cost: self.current_cost,
            best: self.best,
            best_cost: self.best_cost,
            iterations: self.iteration,
            final_temperature: self.temperature,
            accepted_moves: self.accepted_moves,
            improving_moves: self.improving_moves,
            trace: self.trace,
        }
    }

    fn should_stop(&self) -> bool {
        self.config.is_frozen(self.temperature)
            || self
                .config
                .max_iterations
                .is_some_and(|cap| self.iteration >= cap)
    }
}

/// Executes the Simulated Annealing algorithm.
pub struct SaRunner;

impl SaRunner {
    /// Runs SA from a random initial state.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidConfig`](crate::Error::InvalidConfig) if the
    /// configuration does not validate.
    pub fn run<P: SaProblem>(problem: &P, config: &SaConfig) -> Result<SaResult<P::State>> {
        Ok(SaEngine::new(problem, config)?.run())
    }

    /// Runs SA from a caller-supplied initial state.
    pub fn run_from<P: SaProblem>(
        problem: &P,
        config: &SaConfig,
        initial: P::State,
    ) -> Result<SaResult<P::State>> {
        Ok(SaEngine::with_initial(problem, config, initial)?.run())
    }
}
