//! Structural legality check for finished solutions.

use std::collections::BTreeMap;

use crate::error::{Result, ValidationError};
use crate::pairing::{Game, GamePairings, Player, Solution};

/// Checks that every game is covered correctly by its pairings.
///
/// Each attendee must appear exactly once, except that in an odd-size game
/// exactly one attendee (the bye rotation) appears twice. Nobody who did not
/// attend may appear. The optimizer never calls this itself; callers run it
/// on the final solution.
///
/// # Errors
///
/// The first violation found, as [`crate::MatchupError::Validation`].
pub fn validate(games: &[Game], solution: &Solution) -> Result<()> {
    if games.len() != solution.len() {
        return Err(ValidationError::GameCountMismatch {
            games: games.len(),
            pairings: solution.len(),
        }
        .into());
    }

    for (index, (game, pairings)) in games.iter().zip(solution.games()).enumerate() {
        validate_game(index + 1, game, pairings)?;
    }
    Ok(())
}

fn validate_game(
    number: usize,
    game: &Game,
    pairings: &GamePairings,
) -> std::result::Result<(), ValidationError> {
    let mut counts: BTreeMap<&Player, usize> = BTreeMap::new();
    for pairing in pairings {
        for player in pairing.players() {
            if !game.contains(player) {
                return Err(ValidationError::ForeignPlayer {
                    game: number,
                    player: player.to_string(),
                });
            }
            *counts.entry(player).or_insert(0) += 1;
        }
    }

    let mut bye_allowed = game.len() % 2 == 1;
    for (player, &count) in &counts {
        match count {
            1 => {}
            2 if bye_allowed => bye_allowed = false,
            _ => {
                return Err(ValidationError::Coverage {
                    game: number,
                    player: player.to_string(),
                    count,
                })
            }
        }
    }

    if counts.len() != game.len() {
        return Err(ValidationError::MissingPlayers {
            game: number,
            expected: game.len(),
            found: counts.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MatchupError;
    use crate::pairing::pair;

    fn game(pairs: &[(&str, &str)]) -> GamePairings {
        pairs.iter().map(|&(a, b)| pair(a, b).unwrap()).collect()
    }

    fn validation_error(games: &[Game], solution: &Solution) -> ValidationError {
        match validate(games, solution) {
            Err(MatchupError::Validation(err)) => err,
            other => panic!("expected a validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_even_and_odd() {
        let games = vec![Game::new(["A", "B", "C", "D"]), Game::new(["A", "B", "C"])];
        let solution = Solution::new(vec![
            game(&[("A", "B"), ("C", "D")]),
            game(&[("A", "B"), ("C", "A")]),
        ]);
        assert!(validate(&games, &solution).is_ok());
    }

    #[test]
    fn test_missing_player() {
        let games = vec![Game::new(["A", "B", "C", "D"])];
        let solution = Solution::new(vec![game(&[("A", "B")])]);
        assert_eq!(
            validation_error(&games, &solution),
            ValidationError::MissingPlayers {
                game: 1,
                expected: 4,
                found: 2
            }
        );
    }

    #[test]
    fn test_double_in_even_game() {
        let games = vec![Game::new(["A", "B", "C", "D"])];
        let solution = Solution::new(vec![game(&[("A", "B"), ("A", "C"), ("C", "D")])]);
        assert_eq!(
            validation_error(&games, &solution),
            ValidationError::Coverage {
                game: 1,
                player: "A".into(),
                count: 2
            }
        );
    }

    #[test]
    fn test_bye_allowance_used_once() {
        let games = vec![Game::new(["A", "B", "C", "D", "E"])];
        let solution = Solution::new(vec![game(&[("A", "B"), ("A", "C"), ("B", "D"), ("E", "C")])]);
        // A takes the bye, so B is the violation
        assert_eq!(
            validation_error(&games, &solution),
            ValidationError::Coverage {
                game: 1,
                player: "B".into(),
                count: 2
            }
        );
    }

    #[test]
    fn test_triple_rejected_in_odd_game() {
        let games = vec![Game::new(["A", "B", "C", "D", "E"])];
        let solution = Solution::new(vec![game(&[("A", "B"), ("A", "C"), ("A", "D"), ("E", "C")])]);
        assert!(matches!(
            validation_error(&games, &solution),
            ValidationError::Coverage { count: 3, .. }
        ));
    }

    #[test]
    fn test_foreign_player() {
        let games = vec![Game::new(["A", "B"])];
        let solution = Solution::new(vec![game(&[("A", "Z")])]);
        assert_eq!(
            validation_error(&games, &solution),
            ValidationError::ForeignPlayer {
                game: 1,
                player: "Z".into()
            }
        );
    }

    #[test]
    fn test_game_count_mismatch() {
        let games = vec![Game::new(["A", "B"]), Game::new(["A", "B"])];
        let solution = Solution::new(vec![game(&[("A", "B")])]);
        assert_eq!(
            validation_error(&games, &solution),
            ValidationError::GameCountMismatch {
                games: 2,
                pairings: 1
            }
        );
    }

    #[test]
    fn test_reports_game_number() {
        let games = vec![Game::new(["A", "B"]), Game::new(["C", "D"])];
        let solution = Solution::new(vec![game(&[("A", "B")]), game(&[("C", "E")])]);
        assert!(matches!(
            validation_error(&games, &solution),
            ValidationError::ForeignPlayer { game: 2, .. }
        ));
    }
}
