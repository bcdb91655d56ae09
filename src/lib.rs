//! Rotating partner assignment.
//!
//! Given the attendees of a series of rounds ("games"), pairs everyone up in
//! every round so that as few pairs as possible meet more than once:
//!
//! - **Pairing**: random initial pairings per game, with one person playing
//!   twice when the head count is odd.
//! - **Score**: the number of repeated pairings across all games.
//! - **Swap**: neighbor moves that recombine two pairings of one game, either
//!   uniformly at random or targeting the most repeated pairings.
//! - **Simulated Annealing (SA)**: the search loop tying these together.
//! - **Validate**: a structural check for finished solutions.
//!
//! Reading round lists, writing results and generating synthetic attendance
//! live in [`io`] and [`attendance`].
//!
//! # Example
//!
//! ```
//! use matchup::io::{format_solution, parse_games};
//! use matchup::sa::{AnnealingConfig, AnnealingRunner};
//! use matchup::swap::OverlapSwap;
//! use matchup::validate::validate;
//!
//! let games = parse_games("Ann,Bob,Cid,Dot\nAnn,Bob,Cid,Dot,Eve\n").unwrap();
//! let config = AnnealingConfig::default().with_seed(1);
//! let result = AnnealingRunner::run(&games, &OverlapSwap::default(), &config).unwrap();
//! validate(&games, &result.solution).unwrap();
//! assert!(format_solution(&result.solution).starts_with("Game 1\n"));
//! ```

pub mod attendance;
pub mod error;
pub mod io;
pub mod pairing;
pub mod sa;
pub mod score;
pub mod swap;
pub mod validate;

pub use error::{MatchupError, Result, ValidationError};
