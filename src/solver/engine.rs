//! Main solver interface

use super::filter::prune;
use super::scoring::{ScoredWord, score_candidates, top_scores};
use super::strategy::Strategy;
use crate::core::{Feedback, Word};
use crate::game::GameEngine;
use crate::wordlists::Vocabulary;
use std::fmt;

/// Number of top-scoring contenders carried in a [`Suggestion`]
pub const CONTENDERS: usize = 5;

/// Error raised by the solver
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// Pruning left no candidate consistent with the feedback
    ExhaustedCandidates,
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExhaustedCandidates => {
                write!(f, "No candidates remain consistent with the feedback")
            }
        }
    }
}

impl std::error::Error for SolverError {}

/// The solver's chosen guess with context for diagnostics
#[derive(Debug, Clone)]
pub struct Suggestion<'a> {
    pub word: &'a Word,
    pub score: u32,
    /// Candidates left after pruning, including `word`
    pub remaining: usize,
    /// Highest-scoring candidates, best first
    pub contenders: Vec<ScoredWord<'a>>,
}

/// Letter-frequency Wordle solver
///
/// Keeps a shrinking candidate set drawn from the allowed vocabulary and
/// re-reads feedback from the game engine as owned snapshots.
pub struct Solver<'a, S: Strategy> {
    strategy: S,
    vocabulary: &'a Vocabulary,
    candidates: Vec<&'a Word>,
    feedback: Feedback,
    past_guesses: Vec<&'a Word>,
}

impl<'a, S: Strategy> Solver<'a, S> {
    /// Create a solver whose candidates are the full allowed vocabulary
    pub fn new(strategy: S, vocabulary: &'a Vocabulary) -> Self {
        Self {
            strategy,
            vocabulary,
            candidates: vocabulary.allowed().iter().collect(),
            feedback: Feedback::default(),
            past_guesses: Vec::new(),
        }
    }

    /// Restore the full candidate set and forget feedback and guesses
    pub fn reset(&mut self) {
        self.candidates = self.vocabulary.allowed().iter().collect();
        self.feedback = Feedback::default();
        self.past_guesses.clear();
    }

    /// Copy the engine's current feedback into the solver
    pub fn sync_state(&mut self, engine: &GameEngine<'_>) {
        self.feedback = engine.feedback();
    }

    /// Apply the current feedback and drop the last guess from the candidates
    pub fn prune_candidates(&mut self) {
        prune(
            &mut self.candidates,
            &self.feedback,
            self.past_guesses.last().copied(),
        );
    }

    /// Prune, score, and pick the next guess
    ///
    /// The pick is recorded so the next prune removes it.
    ///
    /// # Errors
    /// Returns `SolverError::ExhaustedCandidates` if pruning empties the set.
    pub fn next_guess(&mut self) -> Result<Suggestion<'a>, SolverError> {
        self.prune_candidates();

        let scored = score_candidates(&self.candidates);
        let pick = *self
            .strategy
            .select_guess(&scored)
            .ok_or(SolverError::ExhaustedCandidates)?;

        self.past_guesses.push(pick.word);

        Ok(Suggestion {
            word: pick.word,
            score: pick.score,
            remaining: self.candidates.len(),
            contenders: top_scores(&scored, CONTENDERS),
        })
    }

    /// Current candidate set in vocabulary order
    #[must_use]
    pub fn candidates(&self) -> &[&'a Word] {
        &self.candidates
    }

    #[must_use]
    pub fn candidate_count(&self) -> usize {
        self.candidates.len()
    }

    /// Last feedback snapshot read from the engine
    #[must_use]
    pub const fn feedback(&self) -> &Feedback {
        &self.feedback
    }

    /// Guesses this solver has suggested in the current game
    #[must_use]
    pub fn past_guesses(&self) -> &[&'a Word] {
        &self.past_guesses
    }
}
