//! Wordle game engine
//!
//! Holds the hidden answer and evaluates guesses into accumulated
//! green/yellow/gray feedback.

use crate::core::{Feedback, Green, WORD_LENGTH, Word, Yellow, letter_mask};
use crate::wordlists::Vocabulary;
use rand::Rng;
use std::fmt;

/// Maximum number of guesses per game
pub const MAX_GUESSES: usize = 6;

/// Error raised by the game engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// A guess was evaluated before an answer was chosen
    NoAnswer,
    /// The requested answer is not in the answer list
    UnknownAnswer(String),
    /// The guess is not in the allowed vocabulary
    InvalidGuess(String),
    /// All six guesses have been used
    NoGuessesRemaining,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoAnswer => write!(f, "No answer has been picked"),
            Self::UnknownAnswer(word) => write!(f, "{word} is not a possible answer"),
            Self::InvalidGuess(word) => write!(f, "{word} is not a valid guess"),
            Self::NoGuessesRemaining => write!(f, "You have no more guesses remaining"),
        }
    }
}

impl std::error::Error for GameError {}

/// A single game of Wordle
///
/// Feedback accumulates across guesses. Repeated letters are not allocated by
/// count: a letter guessed twice where the answer holds it once can be marked
/// at both positions.
#[derive(Debug, Clone)]
pub struct GameEngine<'a> {
    vocabulary: &'a Vocabulary,
    answer: Option<Word>,
    feedback: Feedback,
    guesses: Vec<Word>,
    won: bool,
}

impl<'a> GameEngine<'a> {
    /// Create an engine with no answer picked yet
    #[must_use]
    pub fn new(vocabulary: &'a Vocabulary) -> Self {
        Self {
            vocabulary,
            answer: None,
            feedback: Feedback::default(),
            guesses: Vec::new(),
            won: false,
        }
    }

    /// Pick a uniformly random answer from the vocabulary
    ///
    /// Determinism comes from the caller's RNG.
    pub fn pick_answer<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &Word {
        // Vocabulary guarantees at least one answer
        let answers = self.vocabulary.answers();
        let index = rng.random_range(0..answers.len());
        self.answer.insert(answers[index].clone())
    }

    /// Use a specific answer
    ///
    /// # Errors
    /// Returns `GameError::UnknownAnswer` if the word is not a possible answer.
    pub fn set_answer(&mut self, answer: Word) -> Result<(), GameError> {
        if !self.vocabulary.is_answer(&answer) {
            return Err(GameError::UnknownAnswer(answer.text().to_string()));
        }
        self.answer = Some(answer);
        Ok(())
    }

    /// Clear feedback, guesses and the win flag, keeping the answer
    pub fn reset(&mut self) {
        self.feedback = Feedback::default();
        self.guesses.clear();
        self.won = false;
    }

    /// Evaluate a guess against the answer, updating the accumulated feedback
    ///
    /// On a win (five greens recorded) classification stops before yellows
    /// and grays are touched.
    ///
    /// # Errors
    /// - `GameError::NoAnswer` if no answer is set
    /// - `GameError::InvalidGuess` if the guess is not allowed; state is untouched
    /// - `GameError::NoGuessesRemaining` if six guesses were already made
    pub fn evaluate_guess(&mut self, guess: &Word) -> Result<(), GameError> {
        let Some(answer) = self.answer.as_ref() else {
            return Err(GameError::NoAnswer);
        };

        if !self.vocabulary.is_allowed(guess) {
            return Err(GameError::InvalidGuess(guess.text().to_string()));
        }

        if self.guesses.len() >= MAX_GUESSES {
            return Err(GameError::NoGuessesRemaining);
        }
        self.guesses.push(guess.clone());

        let feedback = &mut self.feedback;

        for position in 0..WORD_LENGTH {
            let letter = guess.char_at(position);
            let green = Green::new(position, letter);
            if letter == answer.char_at(position) && !feedback.greens.contains(&green) {
                feedback.greens.push(green);
            }
        }

        if feedback.greens.len() == WORD_LENGTH {
            self.won = true;
            return Ok(());
        }

        remove_promoted_yellows(feedback);

        let green_mask = feedback.green_mask();
        for position in 0..WORD_LENGTH {
            let letter = guess.char_at(position);
            if answer.has_letter(letter) && letter_mask([letter]) & green_mask == 0 {
                feedback.yellows.push(Yellow::new(position, letter));
            }
        }

        feedback.grays.extend(
            guess
                .chars()
                .iter()
                .copied()
                .filter(|&letter| !answer.has_letter(letter)),
        );

        Ok(())
    }

    /// The hidden answer, if one has been picked
    #[must_use]
    pub const fn answer(&self) -> Option<&Word> {
        self.answer.as_ref()
    }

    /// Owned snapshot of the accumulated feedback
    #[must_use]
    pub fn feedback(&self) -> Feedback {
        self.feedback.clone()
    }

    #[must_use]
    pub fn greens(&self) -> &[Green] {
        &self.feedback.greens
    }

    #[must_use]
    pub fn yellows(&self) -> &[Yellow] {
        &self.feedback.yellows
    }

    #[must_use]
    pub fn grays(&self) -> &[u8] {
        &self.feedback.grays
    }

    /// Guesses accepted so far
    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    #[must_use]
    pub const fn guesses_remaining(&self) -> usize {
        MAX_GUESSES.saturating_sub(self.guesses.len())
    }

    #[must_use]
    pub const fn is_won(&self) -> bool {
        self.won
    }
}

/// Drop one yellow per letter that is now green
///
/// Only the first yellow carrying each green letter is removed, even when
/// several yellows share that letter.
fn remove_promoted_yellows(feedback: &mut Feedback) {
    let mut removed: Vec<u8> = Vec::new();
    for green in &feedback.greens {
        if removed.contains(&green.letter) {
            continue;
        }
        if let Some(index) = feedback
            .yellows
            .iter()
            .position(|y| y.letter == green.letter)
        {
            feedback.yellows.remove(index);
            removed.push(green.letter);
        }
    }
}
