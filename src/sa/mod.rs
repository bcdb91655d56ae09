//! Simulated annealing over pairing solutions.
//!
//! Starts from an independent random pairing of every game and repeatedly
//! proposes a neighbor through a [`SwapStrategy`](crate::swap::SwapStrategy).
//! A neighbor with fewer duplicates is always taken. Any other neighbor is
//! taken with probability equal to the current temperature, which decays
//! with the step count, so the search wanders early and settles late.
//!
//! The acceptance chance does not depend on how much worse the neighbor is;
//! this differs from the classic Metropolis rule.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"

mod config;
mod runner;

pub use config::{AnnealingConfig, TemperatureSchedule};
pub use runner::{AnnealingResult, AnnealingRunner, Termination};
