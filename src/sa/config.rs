//! SA configuration and cooling schedules.

use crate::error::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Smallest margin kept between the temperature and its bound.
///
/// The exponential schedule clamps to `bound_temperature + TEMPERATURE_EPSILON`
/// so the Metropolis ratio `-delta / T` never divides by zero.
pub const TEMPERATURE_EPSILON: f64 = f64::EPSILON;

/// Cooling schedule for temperature reduction.
///
/// Both schedules read their rate from [`SaConfig::decay`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CoolingSchedule {
    /// Linear cooling: `T_{k+1} = T_k - decay`.
    ///
    /// Constant decrement per iteration. `decay` must be positive.
    Linear,

    /// Exponential cooling: `T_{k+1} = max(decay * T_k, T_bound + eps)`.
    ///
    /// Most widely used. `decay` must lie in (0, 1); typical values are
    /// 0.95–0.999.
    #[default]
    Exponential,
}

impl CoolingSchedule {
    /// Applies one cooling step.
    pub fn cool(self, temperature: f64, decay: f64, bound: f64) -> f64 {
        match self {
            CoolingSchedule::Linear => temperature - decay,
            CoolingSchedule::Exponential => {
                (temperature * decay).max(bound + TEMPERATURE_EPSILON)
            }
        }
    }
}

/// Configuration for the Simulated Annealing engine.
///
/// # Examples
///
/// ```
/// use u_tsp::sa::{SaConfig, CoolingSchedule};
///
/// let config = SaConfig::default()
///     .with_initial_temperature(50.0)
///     .with_bound_temperature(0.002)
///     .with_decay(0.999)
///     .with_schedule(CoolingSchedule::Exponential)
///     .with_max_iterations(10_000)
///     .with_seed(0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SaConfig {
    /// Starting temperature `T_0`. Higher values allow more exploration.
    pub initial_temperature: f64,

    /// Stop threshold. The run ends once `T <= bound + eps`.
    pub bound_temperature: f64,

    /// Per-step cooling rate: a decrement for [`CoolingSchedule::Linear`],
    /// a multiplier for [`CoolingSchedule::Exponential`].
    pub decay: f64,

    /// Cooling rule.
    pub schedule: CoolingSchedule,

    /// Hard iteration cap. `None` = no limit.
    pub max_iterations: Option<usize>,

    /// Seed for the proposal stream and acceptance draws.
    pub seed: u64,

    /// Whether to keep a per-iteration trace in the result.
    pub record_trace: bool,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 100.0,
            bound_temperature: 1e-3,
            decay: 0.995,
            schedule: CoolingSchedule::default(),
            max_iterations: Some(100_000),
            seed: 0,
            record_trace: true,
        }
    }
}

impl SaConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_bound_temperature(mut self, t: f64) -> Self {
        self.bound_temperature = t;
        self
    }

    pub fn with_decay(mut self, decay: f64) -> Self {
        self.decay = decay;
        self
    }

    pub fn with_schedule(mut self, schedule: CoolingSchedule) -> Self {
        self.schedule = schedule;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = Some(n);
        self
    }

    /// Removes the iteration cap; the run ends on temperature alone.
    pub fn unbounded(mut self) -> Self {
        self.max_iterations = None;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_record_trace(mut self, record: bool) -> Self {
        self.record_trace = record;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if !(self.initial_temperature.is_finite() && self.initial_temperature > 0.0) {
            return Err(Error::InvalidConfig(
                "initial_temperature must be positive".into(),
            ));
        }
        if !(self.bound_temperature.is_finite() && self.bound_temperature >= 0.0) {
            return Err(Error::InvalidConfig(
                "bound_temperature must be non-negative".into(),
            ));
        }
        if self.bound_temperature >= self.initial_temperature {
            return Err(Error::InvalidConfig(
                "bound_temperature must be less than initial_temperature".into(),
            ));
        }
        match self.schedule {
            CoolingSchedule::Linear => {
                if !(self.decay.is_finite() && self.decay > 0.0) {
                    return Err(Error::InvalidConfig(format!(
                        "linear decay must be positive, got {}",
                        self.decay
                    )));
                }
            }
            CoolingSchedule::Exponential => {
                if !(self.decay > 0.0 && self.decay < 1.0) {
                    return Err(Error::InvalidConfig(format!(
                        "exponential decay must be in (0, 1), got {}",
                        self.decay
                    )));
                }
            }
        }
        Ok(())
    }

    /// Whether the engine stops at `temperature`.
    pub(crate) fn is_frozen(&self, temperature: f64) -> bool {
        temperature <= self.bound_temperature + TEMPERATURE_EPSILON
    }
}
