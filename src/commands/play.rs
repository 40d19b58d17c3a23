//! Single game with full diagnostics

use super::game::{GameRecord, PlayError, play_game};
use crate::core::Word;
use crate::game::GameEngine;
use crate::output::{print_game_banner, print_turn};
use crate::solver::{Solver, Strategy};
use crate::wordlists::Vocabulary;
use rand::Rng;

/// Play one game against `answer`, or a random answer if none is given
///
/// Every turn is printed as it happens.
///
/// # Errors
///
/// Returns an error if `answer` is not in the answer list.
pub fn run_play<S: Strategy, R: Rng>(
    vocabulary: &Vocabulary,
    strategy: S,
    answer: Option<Word>,
    rng: &mut R,
) -> Result<GameRecord, PlayError> {
    let mut engine = GameEngine::new(vocabulary);
    match answer {
        Some(word) => engine.set_answer(word)?,
        None => {
            engine.pick_answer(rng);
        }
    }

    print_game_banner(1, &engine);

    let mut solver = Solver::new(strategy, vocabulary);
    Ok(play_game(&mut engine, &mut solver, print_turn))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameError;
    use crate::solver::FrequencyStrategy;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn vocabulary() -> Vocabulary {
        Vocabulary::new(
            words_from_slice(&["crane", "slate", "irate"]),
            words_from_slice(&["adieu"]),
        )
        .unwrap()
    }

    #[test]
    fn plays_requested_answer() {
        let vocabulary = vocabulary();
        let mut rng = StdRng::seed_from_u64(0);

        let record = run_play(
            &vocabulary,
            FrequencyStrategy,
            Some(Word::new("slate").unwrap()),
            &mut rng,
        )
        .unwrap();

        assert_eq!(record.answer, "slate");
        assert!(record.is_win());
    }

    #[test]
    fn rejects_non_answer() {
        let vocabulary = vocabulary();
        let mut rng = StdRng::seed_from_u64(0);

        let err = run_play(
            &vocabulary,
            FrequencyStrategy,
            Some(Word::new("adieu").unwrap()),
            &mut rng,
        )
        .unwrap_err();

        assert_eq!(
            err,
            PlayError::Game(GameError::UnknownAnswer("adieu".to_string()))
        );
    }

    #[test]
    fn random_answer_when_none_given() {
        let vocabulary = vocabulary();
        let mut rng = StdRng::seed_from_u64(9);

        let record = run_play(&vocabulary, FrequencyStrategy, None, &mut rng).unwrap();

        assert!(["crane", "slate", "irate"].contains(&record.answer.as_str()));
    }
}
