//! Random initial pairings.

use rand::seq::SliceRandom;
use rand::Rng;

use super::types::{Game, GamePairings, Pairing, Player, Solution};
use crate::error::{MatchupError, Result};

/// Pairs up the attendees of one game at random.
///
/// The players are shuffled and taken two at a time. In an odd-size game the
/// last player left over is paired with the first player of the shuffle, who
/// therefore plays twice (the bye rotation).
///
/// # Errors
///
/// [`MatchupError::TooFewPlayers`] if the game has fewer than two players.
pub fn create_pairings<R: Rng>(game: &Game, rng: &mut R) -> Result<GamePairings> {
    if game.len() < 2 {
        return Err(MatchupError::TooFewPlayers {
            players: game.len(),
        });
    }

    let mut players: Vec<Player> = game.players().cloned().collect();
    players.shuffle(rng);

    let mut pairings = Vec::with_capacity(players.len().div_ceil(2));
    let mut chunks = players.chunks_exact(2);
    for chunk in &mut chunks {
        pairings.push(Pairing::new(chunk[0].clone(), chunk[1].clone())?);
    }
    if let [leftover] = chunks.remainder() {
        pairings.push(Pairing::new(leftover.clone(), players[0].clone())?);
    }

    Ok(GamePairings::new(pairings))
}

/// Builds a full solution by pairing every game independently, in order.
pub fn create_solution<R: Rng>(games: &[Game], rng: &mut R) -> Result<Solution> {
    games.iter().map(|game| create_pairings(game, rng)).collect()
}
