//! Test all answers - exhaustive solver evaluation
//!
//! Plays exactly one game per answer word, in answer-list order.

use super::batch::{BatchReport, run_batch};
use crate::solver::Strategy;
use crate::wordlists::Vocabulary;

/// Run the solver against every answer (or the first `limit` answers)
pub fn run_test_all<S: Strategy + Clone>(
    vocabulary: &Vocabulary,
    strategy: &S,
    limit: Option<usize>,
    verbose: bool,
) -> BatchReport {
    let answers = vocabulary.answers();
    let games = limit.map_or(answers.len(), |n| n.min(answers.len()));

    run_batch(vocabulary, strategy, games, verbose, |index, engine| {
        engine.set_answer(answers[index].clone())
    })
}
