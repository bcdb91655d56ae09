//! Annealing configuration and temperature schedules.

use crate::error::{MatchupError, Result};

/// Temperature as a function of the step counter `t`.
///
/// Every schedule starts at `1.0` and never increases. The temperature is
/// also the probability of accepting a candidate unconditionally.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TemperatureSchedule {
    /// Exponential decay: `T(t) = decay^t`.
    Exponential {
        /// Decay factor in (0, 1). Higher = slower cooling.
        decay: f64,
    },

    /// Linear decay: `T(t) = max(0, 1 - t / steps)`.
    ///
    /// Reaches zero after exactly `steps` steps.
    Linear {
        /// Number of steps until the temperature reaches zero.
        steps: usize,
    },
}

impl Default for TemperatureSchedule {
    fn default() -> Self {
        TemperatureSchedule::Exponential { decay: 0.999 }
    }
}

impl TemperatureSchedule {
    /// Temperature at step `t`.
    pub fn temperature(&self, t: usize) -> f64 {
        match *self {
            TemperatureSchedule::Exponential { decay } => {
                decay.powi(i32::try_from(t).unwrap_or(i32::MAX))
            }
            TemperatureSchedule::Linear { steps } => {
                if steps == 0 {
                    0.0
                } else {
                    (1.0 - t as f64 / steps as f64).max(0.0)
                }
            }
        }
    }
}

/// Configuration for the annealing search.
///
/// # Examples
///
/// ```
/// use matchup::sa::{AnnealingConfig, TemperatureSchedule};
///
/// let config = AnnealingConfig::default()
///     .with_schedule(TemperatureSchedule::Exponential { decay: 0.995 })
///     .with_stopping_temperature(1e-6)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct AnnealingConfig {
    /// Temperature schedule.
    pub schedule: TemperatureSchedule,

    /// The search stops once the temperature is at or below this value.
    pub stopping_temperature: f64,

    /// Maximum total iterations (hard budget). 0 = no limit.
    pub max_iterations: usize,

    /// The score is recorded in the history every this many iterations.
    pub history_interval: usize,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for AnnealingConfig {
    fn default() -> Self {
        Self {
            schedule: TemperatureSchedule::default(),
            stopping_temperature: 1e-10,
            max_iterations: 0,
            history_interval: 100,
            seed: None,
        }
    }
}

impl AnnealingConfig {
    pub fn with_schedule(mut self, schedule: TemperatureSchedule) -> Self {
        self.schedule = schedule;
        self
    }

    /// Shorthand for an exponential schedule with the given decay.
    pub fn with_decay(mut self, decay: f64) -> Self {
        self.schedule = TemperatureSchedule::Exponential { decay };
        self
    }

    pub fn with_stopping_temperature(mut self, t: f64) -> Self {
        self.stopping_temperature = t;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_history_interval(mut self, n: usize) -> Self {
        self.history_interval = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..1.0).contains(&self.stopping_temperature) {
            return Err(MatchupError::Config(format!(
                "stopping_temperature must be in [0, 1), got {}",
                self.stopping_temperature
            )));
        }
        if self.history_interval == 0 {
            return Err(MatchupError::Config(
                "history_interval must be positive".into(),
            ));
        }
        match self.schedule {
            TemperatureSchedule::Exponential { decay } => {
                if !(decay > 0.0 && decay < 1.0) {
                    return Err(MatchupError::Config(format!(
                        "exponential decay must be in (0, 1), got {decay}"
                    )));
                }
                if self.stopping_temperature == 0.0 && self.max_iterations == 0 {
                    return Err(MatchupError::Config(
                        "exponential schedule never reaches a zero stopping_temperature; \
                         set max_iterations"
                            .into(),
                    ));
                }
            }
            TemperatureSchedule::Linear { steps } => {
                if steps == 0 {
                    return Err(MatchupError::Config(
                        "linear schedule needs at least one step".into(),
                    ));
                }
            }
        }
        Ok(())
    }
}
