//! Players, games and pairings.
//!
//! A [`Game`] is the set of people attending one round. [`create_pairings`]
//! splits it into two-person [`Pairing`]s; when the head count is odd one
//! person plays twice. A [`Solution`] holds the pairings of every game in
//! input order.

mod generator;
mod types;

pub use generator::{create_pairings, create_solution};
pub use types::{pair, Game, GamePairings, Pairing, Player, Solution};
