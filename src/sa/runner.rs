//! Annealing execution loop.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, trace};

use super::config::AnnealingConfig;
use crate::error::Result;
use crate::pairing::{create_solution, Game, Solution};
use crate::score::calculate_score;
use crate::swap::SwapStrategy;

/// Why the search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The score reached zero: no pairing repeats.
    Converged,
    /// The temperature fell to the stopping threshold.
    Cooled,
    /// `max_iterations` was reached.
    IterationLimit,
    /// No game admits a swap, so the search cannot move.
    NoLegalSwap,
}

/// Result of an annealing run.
#[derive(Debug, Clone)]
pub struct AnnealingResult {
    /// The solution current when the search stopped.
    pub solution: Solution,

    /// Duplicate count of `solution`.
    pub score: usize,

    /// The lowest-scoring solution visited.
    pub best: Solution,

    /// Duplicate count of `best`.
    pub best_score: usize,

    /// Duplicate count of the initial random pairing.
    pub initial_score: usize,

    /// Total number of steps taken.
    pub iterations: usize,

    /// Temperature at the step the search stopped.
    pub final_temperature: f64,

    /// Number of accepted candidates (including improvements).
    pub accepted_moves: usize,

    /// Number of candidates that improved on the current score.
    pub improving_moves: usize,

    /// Why the search stopped.
    pub termination: Termination,

    /// Current score sampled every `history_interval` steps, starting with
    /// the initial score and ending with the final one.
    pub score_history: Vec<usize>,
}

/// Executes the annealing search.
pub struct AnnealingRunner;

impl AnnealingRunner {
    /// Pairs up every game, then anneals towards zero duplicates.
    ///
    /// Each step asks `strategy` for a neighbor of the current solution. The
    /// neighbor replaces the current solution if it scores strictly lower,
    /// or otherwise if a uniform draw falls below the current temperature.
    /// The search stops once the temperature is at or below
    /// `stopping_temperature`, the score is zero, the iteration budget is
    /// spent, or no swap is possible.
    ///
    /// # Errors
    ///
    /// Invalid configuration, or a game with fewer than two players.
    ///
    /// # Examples
    ///
    /// ```
    /// use matchup::pairing::Game;
    /// use matchup::sa::{AnnealingConfig, AnnealingRunner};
    /// use matchup::swap::UniformSwap;
    ///
    /// let games = vec![Game::new(["A", "B", "C", "D"]); 2];
    /// let config = AnnealingConfig::default().with_seed(7);
    /// let result = AnnealingRunner::run(&games, &UniformSwap, &config).unwrap();
    /// assert_eq!(result.score, 0);
    /// ```
    pub fn run<S: SwapStrategy>(
        games: &[Game],
        strategy: &S,
        config: &AnnealingConfig,
    ) -> Result<AnnealingResult> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::run_with_rng(games, strategy, config, &mut rng)
    }

    /// Like [`run`](Self::run) but draws from the caller's generator,
    /// ignoring `config.seed`.
    pub fn run_with_rng<S: SwapStrategy, R: Rng>(
        games: &[Game],
        strategy: &S,
        config: &AnnealingConfig,
        rng: &mut R,
    ) -> Result<AnnealingResult> {
        config.validate()?;

        let mut current = create_solution(games, rng)?;
        let mut current_score = calculate_score(&current);
        let initial_score = current_score;
        let mut best = current.clone();
        let mut best_score = current_score;

        debug!(
            games = games.len(),
            strategy = strategy.name(),
            initial_score,
            "starting annealing"
        );

        let mut t = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut score_history = vec![current_score];

        let termination = loop {
            let temperature = config.schedule.temperature(t);
            if current_score == 0 {
                break Termination::Converged;
            }
            if temperature <= config.stopping_temperature {
                break Termination::Cooled;
            }
            if config.max_iterations > 0 && t >= config.max_iterations {
                break Termination::IterationLimit;
            }

            let Some(candidate) = strategy.swap(&current, rng) else {
                break Termination::NoLegalSwap;
            };
            let candidate_score = calculate_score(&candidate);

            let improving = candidate_score < current_score;
            if improving || rng.random::<f64>() < temperature {
                if improving {
                    improving_moves += 1;
                }
                accepted_moves += 1;
                current = candidate;
                current_score = candidate_score;

                if current_score < best_score {
                    best = current.clone();
                    best_score = current_score;
                }
            }

            t += 1;

            if t % config.history_interval == 0 {
                trace!(step = t, temperature, score = current_score, "progress");
                score_history.push(current_score);
            }
        };

        if t % config.history_interval != 0 {
            score_history.push(current_score);
        }

        let final_temperature = config.schedule.temperature(t);
        info!(
            ?termination,
            iterations = t,
            initial_score,
            score = current_score,
            best_score,
            "annealing finished"
        );

        Ok(AnnealingResult {
            solution: current,
            score: current_score,
            best,
            best_score,
            initial_score,
            iterations: t,
            final_temperature,
            accepted_moves,
            improving_moves,
            termination,
            score_history,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sa::TemperatureSchedule;
    use crate::swap::{OverlapSwap, SwapKind, UniformSwap};
    use crate::validate::validate;

    fn four_players_twice() -> Vec<Game> {
        vec![Game::new(["A", "B", "C", "D"]); 2]
    }

    fn club_nights() -> Vec<Game> {
        let names = [
            "Ada", "Ben", "Cy", "Dee", "Eli", "Fay", "Gus", "Hal", "Ivy", "Jo", "Kit", "Lou",
            "Max", "Ned", "Oz", "Pam",
        ];
        (0..8usize)
            .map(|night| {
                names
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| (i + night) % 5 != 0)
                    .map(|(_, name)| *name)
                    .collect::<Game>()
            })
            .collect()
    }

    #[test]
    fn test_four_players_converge_with_both_strategies() {
        let games = four_players_twice();
        for seed in 0..10 {
            let config = AnnealingConfig::default().with_seed(seed);

            let uniform = AnnealingRunner::run(&games, &UniformSwap, &config).unwrap();
            assert_eq!(uniform.score, 0);
            assert_eq!(uniform.termination, Termination::Converged);
            validate(&games, &uniform.solution).unwrap();

            let overlap = AnnealingRunner::run(&games, &OverlapSwap::default(), &config).unwrap();
            assert_eq!(overlap.score, 0);
            assert_eq!(overlap.termination, Termination::Converged);
            validate(&games, &overlap.solution).unwrap();
        }
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let games = club_nights();
        let config = AnnealingConfig::default()
            .with_decay(0.99)
            .with_stopping_temperature(1e-3)
            .with_seed(2024);

        for kind in [SwapKind::Uniform, SwapKind::Overlap] {
            let a = AnnealingRunner::run(&games, &kind, &config).unwrap();
            let b = AnnealingRunner::run(&games, &kind, &config).unwrap();
            assert_eq!(a.score, b.score);
            assert_eq!(a.iterations, b.iterations);
            assert_eq!(a.solution, b.solution);
            assert_eq!(a.score_history, b.score_history);
        }
    }

    #[test]
    fn test_result_is_legal_and_not_worse_than_start() {
        let games = club_nights();
        let config = AnnealingConfig::default().with_seed(3);

        for kind in [SwapKind::Uniform, SwapKind::Overlap] {
            let result = AnnealingRunner::run(&games, &kind, &config).unwrap();
            validate(&games, &result.solution).unwrap();
            validate(&games, &result.best).unwrap();
            assert!(result.best_score <= result.initial_score);
            assert!(result.best_score <= result.score);
            assert_eq!(calculate_score(&result.solution), result.score);
            assert_eq!(calculate_score(&result.best), result.best_score);
            assert!(result.improving_moves <= result.accepted_moves);
            assert!(result.accepted_moves <= result.iterations);
        }
    }

    #[test]
    fn test_no_legal_swap_stops_search() {
        // Three identical games of three players: every pairing necessarily
        // repeats, and no swap exists.
        let games = vec![Game::new(["A", "B", "C"]); 3];
        let config = AnnealingConfig::default().with_seed(1);
        let result = AnnealingRunner::run(&games, &UniformSwap, &config).unwrap();
        assert_eq!(result.termination, Termination::NoLegalSwap);
        assert!(result.score > 0);
        assert_eq!(result.iterations, 0);

        // A single game never repeats anything.
        let result = AnnealingRunner::run(&games[..1], &UniformSwap, &config).unwrap();
        assert_eq!(result.termination, Termination::Converged);
    }

    #[test]
    fn test_cooling_stops_the_search() {
        // Six games over the same four players cannot avoid repeats: only
        // three distinct splits exist.
        let games = vec![Game::new(["A", "B", "C", "D"]); 6];
        let config = AnnealingConfig::default()
            .with_schedule(TemperatureSchedule::Linear { steps: 50 })
            .with_stopping_temperature(0.0)
            .with_history_interval(10)
            .with_seed(5);
        let result = AnnealingRunner::run(&games, &UniformSwap, &config).unwrap();

        assert_eq!(result.termination, Termination::Cooled);
        assert_eq!(result.iterations, 50);
        assert_eq!(result.final_temperature, 0.0);
        assert!(result.score >= 6);
        assert_eq!(result.score_history.len(), 6);
        validate(&games, &result.solution).unwrap();
    }

    #[test]
    fn test_iteration_limit() {
        let games = vec![Game::new(["A", "B", "C", "D"]); 6];
        let config = AnnealingConfig::default()
            .with_max_iterations(25)
            .with_seed(9);
        let result = AnnealingRunner::run(&games, &OverlapSwap::default(), &config).unwrap();
        assert_eq!(result.termination, Termination::IterationLimit);
        assert_eq!(result.iterations, 25);
    }

    #[test]
    fn test_structural_error_propagates() {
        let games = vec![Game::new(["A", "B"]), Game::new(["C"])];
        let config = AnnealingConfig::default().with_seed(0);
        assert!(AnnealingRunner::run(&games, &UniformSwap, &config).is_err());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = AnnealingConfig::default().with_decay(2.0);
        assert!(AnnealingRunner::run(&four_players_twice(), &UniformSwap, &config).is_err());
    }

    #[test]
    fn test_nan_decay_rejected_before_search() {
        // A-B repeats in every pairing, so only cooling could stop this run.
        let games = vec![
            Game::new(["A", "B"]),
            Game::new(["A", "B"]),
            Game::new(["C", "D", "E", "F"]),
        ];
        let config = AnnealingConfig::default().with_decay(f64::NAN).with_seed(1);
        let err = AnnealingRunner::run(&games, &UniformSwap, &config).unwrap_err();
        assert!(matches!(err, crate::error::MatchupError::Config(_)));
    }

    #[test]
    fn test_score_history_starts_and_ends() {
        let games = club_nights();
        let config = AnnealingConfig::default()
            .with_max_iterations(1000)
            .with_history_interval(100)
            .with_seed(11);
        let result = AnnealingRunner::run(&games, &UniformSwap, &config).unwrap();
        assert_eq!(result.score_history.first(), Some(&result.initial_score));
        assert_eq!(result.score_history.last(), Some(&result.score));
    }
}
