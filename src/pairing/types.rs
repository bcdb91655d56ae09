//! Value types: players, games, pairings and solutions.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{MatchupError, Result};

/// A participant, identified by name.
///
/// Equality is exact string match and the total order is lexicographic.
/// Clones share the underlying name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct Player(Arc<str>);

impl Player {
    pub fn new(name: impl AsRef<str>) -> Self {
        Player(Arc::from(name.as_ref()))
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Player {
    fn from(name: &str) -> Self {
        Player::new(name)
    }
}

impl From<String> for Player {
    fn from(name: String) -> Self {
        Player(Arc::from(name))
    }
}

/// The attendees of one round.
///
/// A genuine set: adding the same player twice keeps one copy. Players are
/// kept in name order so that iteration (and therefore seeded shuffling) is
/// reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Game {
    players: BTreeSet<Player>,
}

impl Game {
    pub fn new<I, P>(players: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Player>,
    {
        players.into_iter().collect()
    }

    /// Number of attendees.
    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn contains(&self, player: &Player) -> bool {
        self.players.contains(player)
    }

    /// Attendees in name order.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }
}

impl<P: Into<Player>> FromIterator<P> for Game {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Game {
            players: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// An unordered match between two distinct players.
///
/// Stored in canonical order (`first <= second`), so `pair(a, b)` and
/// `pair(b, a)` produce identical values.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Pairing {
    first: Player,
    second: Player,
}

impl Pairing {
    /// Canonicalizes a pair of players.
    ///
    /// # Errors
    ///
    /// [`MatchupError::SelfPair`] if both players are the same person.
    pub fn new(a: Player, b: Player) -> Result<Self> {
        match a.cmp(&b) {
            std::cmp::Ordering::Less => Ok(Pairing {
                first: a,
                second: b,
            }),
            std::cmp::Ordering::Greater => Ok(Pairing {
                first: b,
                second: a,
            }),
            std::cmp::Ordering::Equal => Err(MatchupError::SelfPair {
                player: a.name().to_string(),
            }),
        }
    }

    pub fn first(&self) -> &Player {
        &self.first
    }

    pub fn second(&self) -> &Player {
        &self.second
    }

    pub fn players(&self) -> [&Player; 2] {
        [&self.first, &self.second]
    }

    pub fn contains(&self, player: &Player) -> bool {
        self.first == *player || self.second == *player
    }

    /// Whether the two pairings have no player in common.
    pub fn is_disjoint(&self, other: &Pairing) -> bool {
        !other.contains(&self.first) && !other.contains(&self.second)
    }
}

impl fmt::Display for Pairing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} vs {}", self.first, self.second)
    }
}

/// Shorthand for [`Pairing::new`] taking anything convertible to a player.
pub fn pair(a: impl Into<Player>, b: impl Into<Player>) -> Result<Pairing> {
    Pairing::new(a.into(), b.into())
}

/// The pairings covering one game.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct GamePairings {
    pairings: Vec<Pairing>,
}

impl GamePairings {
    /// Wraps a list of pairings. Coverage is not checked here; see
    /// [`crate::validate::validate`].
    pub fn new(pairings: Vec<Pairing>) -> Self {
        GamePairings { pairings }
    }

    pub fn len(&self) -> usize {
        self.pairings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairings.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Pairing> {
        self.pairings.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Pairing> {
        self.pairings.iter()
    }

    pub fn as_slice(&self) -> &[Pairing] {
        &self.pairings
    }

    /// Whether some two pairings of this game share no player.
    pub fn has_disjoint_pairs(&self) -> bool {
        self.pairings.iter().enumerate().any(|(i, p)| {
            self.pairings[i + 1..]
                .iter()
                .any(|other| p.is_disjoint(other))
        })
    }

    /// Copy with the pairings at `i` and `j` replaced by `first` and `second`.
    pub(crate) fn replaced(&self, i: usize, j: usize, first: Pairing, second: Pairing) -> Self {
        let mut pairings = self.pairings.clone();
        pairings[i] = first;
        pairings[j] = second;
        GamePairings { pairings }
    }
}

impl<'a> IntoIterator for &'a GamePairings {
    type Item = &'a Pairing;
    type IntoIter = std::slice::Iter<'a, Pairing>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairings.iter()
    }
}

impl FromIterator<Pairing> for GamePairings {
    fn from_iter<I: IntoIterator<Item = Pairing>>(iter: I) -> Self {
        GamePairings::new(iter.into_iter().collect())
    }
}

/// One [`GamePairings`] per input game, in input order.
///
/// Solutions are immutable snapshots. Deriving a neighbor with
/// [`Solution::with_game`] shares every untouched game with the parent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Solution {
    games: Vec<Arc<GamePairings>>,
}

impl Solution {
    pub fn new(games: Vec<GamePairings>) -> Self {
        games.into_iter().collect()
    }

    /// Number of games.
    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    pub fn game(&self, index: usize) -> Option<&GamePairings> {
        self.games.get(index).map(Arc::as_ref)
    }

    pub fn games(&self) -> impl Iterator<Item = &GamePairings> {
        self.games.iter().map(Arc::as_ref)
    }

    /// Every pairing of every game, flattened in game order.
    pub fn pairings(&self) -> impl Iterator<Item = &Pairing> {
        self.games().flat_map(GamePairings::iter)
    }

    /// A new solution with game `index` replaced.
    ///
    /// # Panics
    ///
    /// If `index` is out of bounds.
    pub fn with_game(&self, index: usize, game: GamePairings) -> Self {
        let mut games = self.games.clone();
        games[index] = Arc::new(game);
        Solution { games }
    }

    /// Whether `index` still shares its game with `other` (same allocation).
    pub fn shares_game(&self, other: &Solution, index: usize) -> bool {
        match (self.games.get(index), other.games.get(index)) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl FromIterator<GamePairings> for Solution {
    fn from_iter<I: IntoIterator<Item = GamePairings>>(iter: I) -> Self {
        Solution {
            games: iter.into_iter().map(Arc::new).collect(),
        }
    }
}
