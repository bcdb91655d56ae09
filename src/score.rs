//! Duplicate counting and the pairing overlap index.

use std::collections::{BTreeMap, HashSet};

use crate::pairing::{Pairing, Solution};

/// Counts repeated pairings across the whole solution.
///
/// Every occurrence of a pairing beyond its first counts as one duplicate,
/// so the score is the total number of pairings minus the number of
/// distinct pairings. Zero means nobody meets the same partner twice.
pub fn calculate_score(solution: &Solution) -> usize {
    let mut seen = HashSet::new();
    solution
        .pairings()
        .filter(|pairing| !seen.insert(*pairing))
        .count()
}

/// The pairings that occur more than once, with their occurrence counts,
/// in pairing order.
pub fn duplicates(solution: &Solution) -> Vec<(Pairing, usize)> {
    OverlapIndex::build(solution)
        .iter()
        .filter(|(_, games)| games.len() > 1)
        .map(|(pairing, games)| (pairing.clone(), games.len()))
        .collect()
}

/// Where each pairing occurs: pairing to the list of game indices.
///
/// The length of a pairing's list is its occurrence count. Generated
/// solutions never repeat a pairing within one game, but a hand-built
/// solution may, in which case the game index appears once per occurrence.
/// Keyed in pairing order so that iteration, and any random choice made over
/// it, is reproducible.
#[derive(Debug, Clone, Default)]
pub struct OverlapIndex {
    occurrences: BTreeMap<Pairing, Vec<usize>>,
}

impl OverlapIndex {
    pub fn build(solution: &Solution) -> Self {
        let mut occurrences: BTreeMap<Pairing, Vec<usize>> = BTreeMap::new();
        for (index, game) in solution.games().enumerate() {
            for pairing in game {
                occurrences.entry(pairing.clone()).or_default().push(index);
            }
        }
        OverlapIndex { occurrences }
    }

    /// Highest occurrence count of any single pairing (0 for an empty solution).
    pub fn max_occurrences(&self) -> usize {
        self.occurrences.values().map(Vec::len).max().unwrap_or(0)
    }

    /// The pairings occurring exactly [`max_occurrences`](Self::max_occurrences) times.
    pub fn most_duplicated(&self) -> Vec<&Pairing> {
        let max = self.max_occurrences();
        self.occurrences
            .iter()
            .filter(|(_, games)| games.len() == max)
            .map(|(pairing, _)| pairing)
            .collect()
    }

    /// Game indices containing `pairing`, in ascending order.
    pub fn games_of(&self, pairing: &Pairing) -> &[usize] {
        self.occurrences
            .get(pairing)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Pairing, &[usize])> {
        self.occurrences
            .iter()
            .map(|(pairing, games)| (pairing, games.as_slice()))
    }

    /// Number of distinct pairings.
    pub fn len(&self) -> usize {
        self.occurrences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.occurrences.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pairing::{create_solution, pair, Game, GamePairings};
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn game(pairs: &[(&str, &str)]) -> GamePairings {
        pairs.iter().map(|&(a, b)| pair(a, b).unwrap()).collect()
    }

    #[test]
    fn test_no_duplicates() {
        let solution = Solution::new(vec![
            game(&[("A", "B"), ("C", "D")]),
            game(&[("A", "C"), ("B", "D")]),
        ]);
        assert_eq!(calculate_score(&solution), 0);
        assert!(duplicates(&solution).is_empty());
    }

    #[test]
    fn test_counts_every_repeat() {
        let solution = Solution::new(vec![
            game(&[("A", "B"), ("C", "D")]),
            game(&[("B", "A"), ("D", "C")]),
            game(&[("A", "B"), ("C", "E")]),
        ]);
        // A-B three times (2 duplicates), C-D twice (1 duplicate)
        assert_eq!(calculate_score(&solution), 3);
        assert_eq!(
            duplicates(&solution),
            vec![(pair("A", "B").unwrap(), 3), (pair("C", "D").unwrap(), 2)]
        );
    }

    #[test]
    fn test_empty_solution() {
        let solution = Solution::default();
        assert_eq!(calculate_score(&solution), 0);
        let index = OverlapIndex::build(&solution);
        assert_eq!(index.max_occurrences(), 0);
        assert!(index.most_duplicated().is_empty());
        assert!(index.is_empty());
    }

    #[test]
    fn test_overlap_index() {
        let solution = Solution::new(vec![
            game(&[("A", "B"), ("C", "D")]),
            game(&[("A", "C"), ("B", "D")]),
            game(&[("A", "B"), ("C", "D")]),
        ]);
        let index = OverlapIndex::build(&solution);

        assert_eq!(index.len(), 4);
        assert_eq!(index.max_occurrences(), 2);
        assert_eq!(
            index.most_duplicated(),
            vec![&pair("A", "B").unwrap(), &pair("C", "D").unwrap()]
        );
        assert_eq!(index.games_of(&pair("B", "A").unwrap()), &[0, 2]);
        assert_eq!(index.games_of(&pair("A", "D").unwrap()), &[] as &[usize]);
    }

    #[test]
    fn test_overlap_index_repeats_within_one_game() {
        let solution = Solution::new(vec![
            game(&[("A", "B"), ("B", "A")]),
            game(&[("A", "B")]),
        ]);
        let index = OverlapIndex::build(&solution);
        assert_eq!(index.games_of(&pair("A", "B").unwrap()), &[0, 0, 1]);
        assert_eq!(index.max_occurrences(), 3);
        assert_eq!(calculate_score(&solution), 2);
    }

    #[test]
    fn test_score_ignores_order() {
        let forward = Solution::new(vec![
            game(&[("A", "B"), ("C", "D")]),
            game(&[("A", "B"), ("C", "E")]),
        ]);
        let reversed = Solution::new(vec![
            game(&[("E", "C"), ("B", "A")]),
            game(&[("D", "C"), ("A", "B")]),
        ]);
        assert_eq!(calculate_score(&forward), calculate_score(&reversed));
    }

    proptest! {
        #[test]
        fn prop_score_ignores_order(
            games in prop::collection::vec(
                prop::sample::subsequence(vec!["A", "B", "C", "D", "E", "F", "G"], 2..=7),
                1..8,
            ),
            seed in any::<u64>(),
        ) {
            let games: Vec<Game> = games.into_iter().map(Game::new).collect();
            let mut rng = StdRng::seed_from_u64(seed);
            let solution = create_solution(&games, &mut rng).unwrap();

            let reordered: Solution = solution
                .games()
                .collect::<Vec<_>>()
                .into_iter()
                .rev()
                .map(|game| game.iter().rev().cloned().collect::<GamePairings>())
                .collect();
            prop_assert_eq!(calculate_score(&solution), calculate_score(&reordered));

            let index = OverlapIndex::build(&solution);
            let total: usize = index.iter().map(|(_, games)| games.len()).sum();
            prop_assert_eq!(calculate_score(&solution), total - index.len());
        }
    }
}
