//! Neighbor moves for the annealing search.
//!
//! Every strategy performs a two-for-two recombination inside a single game:
//! two pairings `(p1, p2)` and `(p3, p4)` on four distinct players become
//! either `(p1, p3), (p2, p4)` or `(p1, p4), (p2, p3)`, decided by a fair
//! coin. The same four players stay covered the same number of times, so a
//! legal game stays legal.

mod overlap;
mod uniform;

use std::fmt;
use std::str::FromStr;

use rand::Rng;

use crate::error::MatchupError;
use crate::pairing::{Pairing, Solution};

pub use overlap::OverlapSwap;
pub use uniform::UniformSwap;

/// A neighbor-move generator.
pub trait SwapStrategy {
    /// Returns a human-readable name for this strategy.
    fn name(&self) -> &str;

    /// Produces a neighbor of `solution` differing in exactly one game.
    ///
    /// Returns `None` when no game contains two pairings without a common
    /// player, i.e. no recombination is possible anywhere.
    fn swap<R: Rng>(&self, solution: &Solution, rng: &mut R) -> Option<Solution>;
}

/// Runtime choice between the built-in strategies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum SwapKind {
    /// [`UniformSwap`].
    #[default]
    Uniform,
    /// [`OverlapSwap`] with the default attempt budget.
    Overlap,
}

impl SwapStrategy for SwapKind {
    fn name(&self) -> &str {
        match self {
            SwapKind::Uniform => "uniform",
            SwapKind::Overlap => "overlap",
        }
    }

    fn swap<R: Rng>(&self, solution: &Solution, rng: &mut R) -> Option<Solution> {
        match self {
            SwapKind::Uniform => UniformSwap.swap(solution, rng),
            SwapKind::Overlap => OverlapSwap::default().swap(solution, rng),
        }
    }
}

impl fmt::Display for SwapKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SwapKind {
    type Err = MatchupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "uniform" => Ok(SwapKind::Uniform),
            "overlap" => Ok(SwapKind::Overlap),
            other => Err(MatchupError::Config(format!(
                "unknown swap strategy {other:?}, expected \"uniform\" or \"overlap\""
            ))),
        }
    }
}

/// Recombines pairings `i` and `j` of game `game`.
///
/// Returns `None` if the indices are equal, out of range, or the two
/// pairings share a player.
fn recombine<R: Rng>(
    solution: &Solution,
    game: usize,
    i: usize,
    j: usize,
    rng: &mut R,
) -> Option<Solution> {
    let pairings = solution.game(game)?;
    let (a, b) = (pairings.get(i)?, pairings.get(j)?);
    if i == j || !a.is_disjoint(b) {
        return None;
    }

    let [p1, p2] = a.players();
    let [p3, p4] = b.players();
    let (first, second) = if rng.random_bool(0.5) {
        (
            Pairing::new(p1.clone(), p3.clone()),
            Pairing::new(p2.clone(), p4.clone()),
        )
    } else {
        (
            Pairing::new(p1.clone(), p4.clone()),
            Pairing::new(p2.clone(), p3.clone()),
        )
    };

    let recombined = pairings.replaced(i, j, first.ok()?, second.ok()?);
    Some(solution.with_game(game, recombined))
}
