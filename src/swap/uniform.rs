//! Uniform-random swap.

use rand::Rng;

use super::{recombine, SwapStrategy};
use crate::pairing::{GamePairings, Solution};

/// Recombines two pairings of a uniformly chosen game.
///
/// Draws a random game and two random pairings from it until the pairings
/// involve four distinct players. The draw is retried without a cap, but
/// only after checking that some game admits a legal swap at all, so the
/// loop terminates with probability one.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformSwap;

impl SwapStrategy for UniformSwap {
    fn name(&self) -> &str {
        "uniform"
    }

    fn swap<R: Rng>(&self, solution: &Solution, rng: &mut R) -> Option<Solution> {
        if !solution.games().any(GamePairings::has_disjoint_pairs) {
            return None;
        }

        loop {
            let game = rng.random_range(0..solution.len());
            let Some(pairings) = solution.game(game).filter(|p| !p.is_empty()) else {
                continue;
            };
            let i = rng.random_range(0..pairings.len());
            let j = rng.random_range(0..pairings.len());
            if let Some(next) = recombine(solution, game, i, j, rng) {
                return Some(next);
            }
        }
    }
}
