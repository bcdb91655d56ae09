//! Error types for matchup.

use thiserror::Error;

/// Main error type for matchup operations.
#[derive(Debug, Error)]
pub enum MatchupError {
    /// A game cannot be paired because it has fewer than two players.
    #[error("cannot play a game with less than two players (got {players})")]
    TooFewPlayers {
        /// Number of players in the offending game.
        players: usize,
    },

    /// A player was paired with themselves.
    #[error("player {player} cannot play with themselves")]
    SelfPair {
        /// The player's name.
        player: String,
    },

    /// A solution failed the structural legality check.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Invalid optimizer configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// Malformed round-list or names text.
    #[error("line {line}: {message}")]
    Parse {
        /// 1-based line number.
        line: usize,
        /// What was wrong with the line.
        message: String,
    },

    /// Reading or writing a file failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Coverage violations reported by [`crate::validate::validate`].
///
/// Game numbers are 1-based, matching the `Game <n>` headers of the output
/// format.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The solution does not have one entry per game.
    #[error("expected pairings for {games} games, got {pairings}")]
    GameCountMismatch {
        /// Number of input games.
        games: usize,
        /// Number of game pairings in the solution.
        pairings: usize,
    },

    /// A pairing names somebody who did not attend the game.
    #[error("game {game}: player {player} did not attend")]
    ForeignPlayer {
        /// 1-based game number.
        game: usize,
        /// The foreign player.
        player: String,
    },

    /// A player is covered the wrong number of times.
    #[error("game {game}: player {player} appears {count} times")]
    Coverage {
        /// 1-based game number.
        game: usize,
        /// The offending player.
        player: String,
        /// How often the player appears in the game's pairings.
        count: usize,
    },

    /// Some attendees are not covered by any pairing.
    #[error("game {game}: {found} of {expected} players are paired")]
    MissingPlayers {
        /// 1-based game number.
        game: usize,
        /// Number of attendees.
        expected: usize,
        /// Number of distinct players found in the pairings.
        found: usize,
    },
}

/// Result type alias for matchup operations.
pub type Result<T> = std::result::Result<T, MatchupError>;
