//! Overlap-biased swap.

use rand::Rng;
use tracing::debug;

use super::{recombine, SwapStrategy, UniformSwap};
use crate::pairing::Solution;
use crate::score::OverlapIndex;

/// Breaks up the most repeated pairings first.
///
/// Builds an [`OverlapIndex`] over the solution and considers only the
/// pairings occurring the maximum number of times. Each attempt picks one of
/// them, one game where it occurs, and a random second pairing of that game.
/// If no attempt yields four distinct players within `max_attempts`, it
/// falls back to [`UniformSwap`].
#[derive(Debug, Clone, Copy)]
pub struct OverlapSwap {
    max_attempts: usize,
}

impl Default for OverlapSwap {
    fn default() -> Self {
        Self { max_attempts: 10 }
    }
}

impl OverlapSwap {
    /// Sets how many targeted attempts are made before falling back.
    pub fn with_max_attempts(mut self, n: usize) -> Self {
        self.max_attempts = n;
        self
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    fn targeted<R: Rng>(&self, solution: &Solution, rng: &mut R) -> Option<Solution> {
        let index = OverlapIndex::build(solution);
        let candidates = index.most_duplicated();
        if candidates.is_empty() {
            return None;
        }

        for _ in 0..self.max_attempts {
            let pairing = candidates[rng.random_range(0..candidates.len())];
            let games = index.games_of(pairing);
            let game = games[rng.random_range(0..games.len())];
            let pairings = solution.game(game)?;

            let i = pairings.iter().position(|p| p == pairing)?;
            let j = rng.random_range(0..pairings.len());
            if let Some(next) = recombine(solution, game, i, j, rng) {
                return Some(next);
            }
        }
        None
    }
}

impl SwapStrategy for OverlapSwap {
    fn name(&self) -> &str {
        "overlap"
    }

    fn swap<R: Rng>(&self, solution: &Solution, rng: &mut R) -> Option<Solution> {
        self.targeted(solution, rng).or_else(|| {
            debug!(
                attempts = self.max_attempts,
                "no targeted swap found, falling back to uniform"
            );
            UniformSwap.swap(solution, rng)
        })
    }
}
