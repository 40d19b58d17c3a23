//! Single-game driver loop
//!
//! Alternates solver suggestions and engine evaluations for up to six rounds.
//! Any error ends that game as an anomaly instead of propagating.

use crate::game::{GameEngine, GameError, MAX_GUESSES};
use crate::solver::{Solver, SolverError, Strategy, Suggestion};
use std::fmt;

/// Error that ended a game early
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayError {
    Game(GameError),
    Solver(SolverError),
}

impl fmt::Display for PlayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Game(e) => write!(f, "game error: {e}"),
            Self::Solver(e) => write!(f, "solver error: {e}"),
        }
    }
}

impl std::error::Error for PlayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Game(e) => Some(e),
            Self::Solver(e) => Some(e),
        }
    }
}

impl From<GameError> for PlayError {
    fn from(e: GameError) -> Self {
        Self::Game(e)
    }
}

impl From<SolverError> for PlayError {
    fn from(e: SolverError) -> Self {
        Self::Solver(e)
    }
}

/// How a game ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameOutcome {
    Won,
    Lost,
    Anomaly(PlayError),
}

/// Result of one simulated game
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub answer: String,
    pub guesses: Vec<String>,
    pub outcome: GameOutcome,
}

impl GameRecord {
    #[must_use]
    pub const fn is_win(&self) -> bool {
        matches!(self.outcome, GameOutcome::Won)
    }

    #[must_use]
    pub fn num_guesses(&self) -> usize {
        self.guesses.len()
    }
}

/// One evaluated round, handed to the turn observer
pub struct Turn<'t, 'a> {
    pub number: usize,
    pub suggestion: &'t Suggestion<'a>,
    pub engine: &'t GameEngine<'a>,
}

/// Play one game to completion
///
/// The engine must already hold an answer. `observe` is called after every
/// evaluated guess, once the solver has re-synced.
pub fn play_game<S, F>(
    engine: &mut GameEngine<'_>,
    solver: &mut Solver<'_, S>,
    mut observe: F,
) -> GameRecord
where
    S: Strategy,
    F: FnMut(&Turn<'_, '_>),
{
    let outcome = match run_rounds(engine, solver, &mut observe) {
        Ok(()) if engine.is_won() => GameOutcome::Won,
        Ok(()) => GameOutcome::Lost,
        Err(e) => GameOutcome::Anomaly(e),
    };

    GameRecord {
        answer: engine
            .answer()
            .map_or_else(String::new, |answer| answer.text().to_string()),
        guesses: engine
            .guesses()
            .iter()
            .map(|guess| guess.text().to_string())
            .collect(),
        outcome,
    }
}

fn run_rounds<S, F>(
    engine: &mut GameEngine<'_>,
    solver: &mut Solver<'_, S>,
    observe: &mut F,
) -> Result<(), PlayError>
where
    S: Strategy,
    F: FnMut(&Turn<'_, '_>),
{
    for number in 1..=MAX_GUESSES {
        if engine.is_won() {
            break;
        }

        let suggestion = solver.next_guess()?;
        engine.evaluate_guess(suggestion.word)?;
        solver.sync_state(engine);

        observe(&Turn {
            number,
            suggestion: &suggestion,
            engine,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::solver::{FirstCandidateStrategy, FrequencyStrategy};
    use crate::wordlists::Vocabulary;
    use crate::wordlists::loader::words_from_slice;

    fn vocab(answers: &[&str], guesses: &[&str]) -> Vocabulary {
        Vocabulary::new(words_from_slice(answers), words_from_slice(guesses)).unwrap()
    }

    #[test]
    fn frequency_solver_wins_small_game() {
        let vocabulary = vocab(
            &["crane", "slate", "irate", "grate", "crate"],
            &["lunar", "biddy"],
        );
        let mut engine = GameEngine::new(&vocabulary);
        engine.set_answer(Word::new("grate").unwrap()).unwrap();
        let mut solver = Solver::new(FrequencyStrategy, &vocabulary);

        let mut turns = Vec::new();
        let record = play_game(&mut engine, &mut solver, |turn| {
            turns.push((turn.number, turn.suggestion.word.text().to_string()));
        });

        assert!(record.is_win());
        assert_eq!(record.answer, "grate");
        assert_eq!(record.guesses, ["irate", "grate"]);
        assert_eq!(turns, [(1, "irate".to_string()), (2, "grate".to_string())]);
    }

    #[test]
    fn game_without_answer_is_an_anomaly() {
        let vocabulary = vocab(&["crane"], &[]);
        let mut engine = GameEngine::new(&vocabulary);
        let mut solver = Solver::new(FrequencyStrategy, &vocabulary);

        let record = play_game(&mut engine, &mut solver, |_| {});

        assert_eq!(
            record.outcome,
            GameOutcome::Anomaly(PlayError::Game(GameError::NoAnswer))
        );
        assert!(!record.is_win());
        assert!(record.answer.is_empty());
    }

    #[test]
    fn first_candidate_prunes_down_to_answer() {
        let vocabulary = vocab(&["zesty"], &["babes", "bacon", "badge", "bagel"]);
        let mut engine = GameEngine::new(&vocabulary);
        engine.set_answer(Word::new("zesty").unwrap()).unwrap();
        let mut solver = Solver::new(FirstCandidateStrategy, &vocabulary);

        let record = play_game(&mut engine, &mut solver, |_| {});

        // babes grays out a and b, leaving only the answer
        assert!(record.is_win());
        assert_eq!(record.guesses, ["babes", "zesty"]);
    }

    #[test]
    fn game_is_lost_after_six_guesses() {
        let guesses = [
            "bight", "fight", "light", "might", "night", "right", "sight",
        ];
        let vocabulary = vocab(&["wight"], &guesses);
        let mut engine = GameEngine::new(&vocabulary);
        engine.set_answer(Word::new("wight").unwrap()).unwrap();
        let mut solver = Solver::new(FirstCandidateStrategy, &vocabulary);

        let mut rounds = 0;
        let record = play_game(&mut engine, &mut solver, |_| rounds += 1);

        assert_eq!(record.outcome, GameOutcome::Lost);
        assert_eq!(record.num_guesses(), MAX_GUESSES);
        assert_eq!(rounds, MAX_GUESSES);
        assert_eq!(record.guesses[5], "right");
    }
}
