//! Aggregate statistics over a batch of games

use super::game::{GameOutcome, GameRecord};
use rustc_hash::FxHashMap;
use std::time::Duration;

/// Statistics from a batch of simulated games
#[derive(Debug, Clone)]
pub struct BatchStatistics {
    pub total_games: usize,
    pub wins: usize,
    pub losses: usize,
    pub anomalies: usize,
    /// Guess count -> number of games won in that many guesses
    pub guess_distribution: FxHashMap<usize, usize>,
    pub average_guesses: f64,
    /// Won-in-6 and lost answers, hardest first
    pub hardest_words: Vec<(String, Option<usize>)>,
    pub total_time: Duration,
}

impl BatchStatistics {
    /// Tally a batch of game records
    #[must_use]
    pub fn from_records(records: &[GameRecord], total_time: Duration) -> Self {
        let mut guess_distribution: FxHashMap<usize, usize> = FxHashMap::default();
        let mut wins = 0;
        let mut losses = 0;
        let mut anomalies = 0;
        let mut total_guesses = 0;

        for record in records {
            match record.outcome {
                GameOutcome::Won => {
                    wins += 1;
                    total_guesses += record.num_guesses();
                    *guess_distribution.entry(record.num_guesses()).or_insert(0) += 1;
                }
                GameOutcome::Lost => losses += 1,
                GameOutcome::Anomaly(_) => anomalies += 1,
            }
        }

        let average_guesses = if wins > 0 {
            total_guesses as f64 / wins as f64
        } else {
            0.0
        };

        // Losses first, then wins that needed every guess
        let mut hardest_words: Vec<(String, Option<usize>)> = records
            .iter()
            .filter_map(|r| match r.outcome {
                GameOutcome::Lost => Some((r.answer.clone(), None)),
                GameOutcome::Won if r.num_guesses() >= 6 => {
                    Some((r.answer.clone(), Some(r.num_guesses())))
                }
                _ => None,
            })
            .collect();
        hardest_words.sort_by_key(|(_, guesses)| guesses.is_some());
        hardest_words.truncate(10);

        Self {
            total_games: records.len(),
            wins,
            losses,
            anomalies,
            guess_distribution,
            average_guesses,
            hardest_words,
            total_time,
        }
    }

    /// Share of games won, as a percentage
    #[must_use]
    pub fn win_percentage(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.wins as f64 / self.total_games as f64 * 100.0
        }
    }
}
