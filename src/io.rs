//! Round-list and result text formats.
//!
//! Round list: one game per line, player names separated by commas.
//! Results: a `Game <n>` header per game, one `A vs B` line per pairing,
//! and a blank line after each game.

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::error::{MatchupError, Result};
use crate::pairing::{Game, Solution};

/// Parses a round list.
///
/// Whitespace around names is ignored, as are blank lines and empty names.
/// A name repeated within a line counts once.
///
/// # Errors
///
/// [`MatchupError::Parse`] for a non-blank line without any name.
pub fn parse_games(input: &str) -> Result<Vec<Game>> {
    let mut games = Vec::new();
    for (index, line) in input.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let game: Game = line
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .collect();
        if game.is_empty() {
            return Err(MatchupError::Parse {
                line: index + 1,
                message: "no player names".into(),
            });
        }
        games.push(game);
    }
    Ok(games)
}

pub fn read_games(path: impl AsRef<Path>) -> Result<Vec<Game>> {
    parse_games(&fs::read_to_string(path)?)
}

/// Renders games in the round-list format, players in name order.
pub fn format_games(games: &[Game]) -> String {
    let mut out = String::new();
    for game in games {
        let names: Vec<&str> = game.players().map(|p| p.name()).collect();
        out.push_str(&names.join(","));
        out.push('\n');
    }
    out
}

/// Renders a solution in the result format.
pub fn format_solution(solution: &Solution) -> String {
    let mut out = String::new();
    for (index, game) in solution.games().enumerate() {
        out.push_str("Game ");
        out.push_str(&(index + 1).to_string());
        out.push('\n');
        for pairing in game {
            out.push_str(&pairing.to_string());
            out.push('\n');
        }
        out.push('\n');
    }
    out
}

pub fn write_solution<W: Write>(mut writer: W, solution: &Solution) -> Result<()> {
    writer.write_all(format_solution(solution).as_bytes())?;
    Ok(())
}

/// Parses a names list: one name per line, blank lines skipped.
pub fn parse_names(input: &str) -> Vec<String> {
    input
        .lines()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(String::from)
        .collect()
}

pub fn read_names(path: impl AsRef<Path>) -> Result<Vec<String>> {
    Ok(parse_names(&fs::read_to_string(path)?))
}
