//! Random-answer simulation
//!
//! Plays a batch of games against uniformly random answers, optionally seeded.

use super::batch::{BatchReport, run_batch};
use crate::solver::Strategy;
use crate::wordlists::Vocabulary;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Configuration for a simulation run
#[derive(Debug, Clone, Default)]
pub struct SimulationConfig {
    /// Seed for answer selection; `None` draws from OS entropy
    pub seed: Option<u64>,
    /// Number of games; defaults to the size of the answer list
    pub games: Option<usize>,
    /// Print per-guess diagnostics instead of a progress bar
    pub verbose: bool,
}

impl SimulationConfig {
    #[must_use]
    pub const fn new(seed: Option<u64>, games: Option<usize>, verbose: bool) -> Self {
        Self {
            seed,
            games,
            verbose,
        }
    }
}

/// Build the answer RNG for a run
#[must_use]
pub fn answer_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

/// Run a simulation with random answers
///
/// One RNG is shared by every game, so a fixed seed reproduces the whole
/// sequence of answers.
pub fn run_simulation<S: Strategy + Clone>(
    vocabulary: &Vocabulary,
    strategy: &S,
    config: &SimulationConfig,
) -> BatchReport {
    let games = config.games.unwrap_or(vocabulary.answers().len());
    let mut rng = answer_rng(config.seed);

    run_batch(vocabulary, strategy, games, config.verbose, |_, engine| {
        engine.pick_answer(&mut rng);
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::FrequencyStrategy;
    use crate::wordlists::loader::words_from_slice;

    fn vocabulary() -> Vocabulary {
        Vocabulary::new(
            words_from_slice(&[
                "crane", "slate", "irate", "grate", "crate", "angle", "ankle",
            ]),
            words_from_slice(&["lunar", "biddy"]),
        )
        .unwrap()
    }

    #[test]
    fn runs_requested_number_of_games() {
        let vocabulary = vocabulary();
        let config = SimulationConfig::new(Some(7), Some(12), false);

        let report = run_simulation(&vocabulary, &FrequencyStrategy, &config);

        assert_eq!(report.records.len(), 12);
        assert_eq!(report.statistics.total_games, 12);
        assert!(report.records.iter().all(|r| r.num_guesses() <= 6));
    }

    #[test]
    fn defaults_to_one_game_per_answer() {
        let vocabulary = vocabulary();
        let config = SimulationConfig::new(Some(1), None, false);

        let report = run_simulation(&vocabulary, &FrequencyStrategy, &config);

        assert_eq!(report.records.len(), vocabulary.answers().len());
    }

    #[test]
    fn same_seed_same_answers() {
        let vocabulary = vocabulary();
        let config = SimulationConfig::new(Some(2024), Some(8), false);

        let first = run_simulation(&vocabulary, &FrequencyStrategy, &config);
        let second = run_simulation(&vocabulary, &FrequencyStrategy, &config);

        let answers = |report: &BatchReport| -> Vec<String> {
            report.records.iter().map(|r| r.answer.clone()).collect()
        };
        assert_eq!(answers(&first), answers(&second));
        assert_eq!(first.statistics.wins, second.statistics.wins);
    }

    #[test]
    fn all_answers_come_from_vocabulary() {
        let vocabulary = vocabulary();
        let config = SimulationConfig::new(Some(3), Some(20), false);

        let report = run_simulation(&vocabulary, &FrequencyStrategy, &config);

        for record in &report.records {
            assert!(
                vocabulary
                    .answers()
                    .iter()
                    .any(|answer| answer.text() == record.answer)
            );
        }
    }
}
