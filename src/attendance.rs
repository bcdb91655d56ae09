//! Synthetic attendance data.
//!
//! Every person gets a fixed probability of turning up. Each generated game
//! includes a person when their probability beats a fresh uniform draw, so
//! regulars show up to most games and occasional visitors to few.

use rand::Rng;

use crate::error::{MatchupError, Result};
use crate::pairing::{Game, Player};

/// Per-person attendance probabilities.
#[derive(Debug, Clone, Default)]
pub struct AttendanceModel {
    attendance: Vec<(Player, f64)>,
}

impl AttendanceModel {
    /// Builds a model from explicit probabilities.
    ///
    /// # Errors
    ///
    /// [`MatchupError::Config`] if a probability lies outside `[0, 1]`.
    pub fn new<P: Into<Player>>(attendance: impl IntoIterator<Item = (P, f64)>) -> Result<Self> {
        let attendance = attendance
            .into_iter()
            .map(|(player, p)| {
                let player: Player = player.into();
                if (0.0..=1.0).contains(&p) {
                    Ok((player, p))
                } else {
                    Err(MatchupError::Config(format!(
                        "attendance probability of {player} must be in [0, 1], got {p}"
                    )))
                }
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { attendance })
    }

    /// Assigns every name a uniformly random probability.
    pub fn random<P: Into<Player>, R: Rng>(names: impl IntoIterator<Item = P>, rng: &mut R) -> Self {
        Self {
            attendance: names
                .into_iter()
                .map(|name| (name.into(), rng.random::<f64>()))
                .collect(),
        }
    }

    pub fn probability(&self, player: &Player) -> Option<f64> {
        self.attendance
            .iter()
            .find(|(p, _)| p == player)
            .map(|&(_, probability)| probability)
    }

    /// Number of people in the model.
    pub fn len(&self) -> usize {
        self.attendance.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attendance.is_empty()
    }

    /// Draws the attendees of one game.
    pub fn generate_game<R: Rng>(&self, rng: &mut R) -> Game {
        self.attendance
            .iter()
            .filter(|(_, p)| *p > rng.random::<f64>())
            .map(|(player, _)| player.clone())
            .collect()
    }

    /// Draws `n` independent games.
    pub fn generate_games<R: Rng>(&self, n: usize, rng: &mut R) -> Vec<Game> {
        (0..n).map(|_| self.generate_game(rng)).collect()
    }
}
