//! Batch game runner shared by the simulate and test-all commands

use super::game::{GameOutcome, GameRecord, play_game};
use super::stats::BatchStatistics;
use crate::game::{GameEngine, GameError};
use crate::output::{print_game_banner, print_game_result, print_turn};
use crate::solver::{Solver, Strategy};
use crate::wordlists::Vocabulary;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Instant;

/// Records and statistics from a batch run
#[derive(Debug)]
pub struct BatchReport {
    pub records: Vec<GameRecord>,
    pub statistics: BatchStatistics,
}

/// Name a game whose answer could not be set
fn anomaly_label(index: usize, error: &GameError) -> String {
    match error {
        GameError::UnknownAnswer(word) => word.clone(),
        _ => format!("game #{}", index + 1),
    }
}

/// Play `games` games, letting `choose_answer` set up each engine
///
/// Every game gets a fresh engine and solver. An answer-selection failure is
/// recorded as that game's anomaly and the batch carries on.
pub(crate) fn run_batch<S, F>(
    vocabulary: &Vocabulary,
    strategy: &S,
    games: usize,
    verbose: bool,
    mut choose_answer: F,
) -> BatchReport
where
    S: Strategy + Clone,
    F: FnMut(usize, &mut GameEngine<'_>) -> Result<(), GameError>,
{
    let pb = if verbose {
        ProgressBar::hidden()
    } else {
        ProgressBar::new(games as u64)
    };
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let mut records = Vec::with_capacity(games);
    let mut wins = 0usize;

    for index in 0..games {
        let mut engine = GameEngine::new(vocabulary);
        let mut solver = Solver::new(strategy.clone(), vocabulary);

        let record = match choose_answer(index, &mut engine) {
            Ok(()) => {
                if verbose {
                    print_game_banner(index + 1, &engine);
                }
                play_game(&mut engine, &mut solver, |turn| {
                    if verbose {
                        print_turn(turn);
                    }
                })
            }
            Err(e) => GameRecord {
                answer: anomaly_label(index, &e),
                guesses: Vec::new(),
                outcome: GameOutcome::Anomaly(e.into()),
            },
        };

        if verbose {
            print_game_result(&record);
        }

        if record.is_win() {
            wins += 1;
        }
        records.push(record);

        if index % 10 == 0 {
            let pct = wins as f64 / records.len() as f64 * 100.0;
            pb.set_message(format!("Win: {pct:.1}%"));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    let statistics = BatchStatistics::from_records(&records, start.elapsed());
    BatchReport {
        records,
        statistics,
    }
}
