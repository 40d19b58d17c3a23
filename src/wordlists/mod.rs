//! Word lists for Wordle simulation
//!
//! Provides embedded word lists compiled into the binary, file loading, and the
//! immutable [`Vocabulary`] handed to the game engine and solver.

mod embedded;
pub mod loader;
mod vocabulary;

pub use embedded::{ALLOWED, ALLOWED_COUNT, ANSWERS, ANSWERS_COUNT};
pub use vocabulary::{Vocabulary, VocabularyError};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_count_matches_const() {
        assert_eq!(ANSWERS.len(), ANSWERS_COUNT);
    }

    #[test]
    fn allowed_count_matches_const() {
        assert_eq!(ALLOWED.len(), ALLOWED_COUNT);
    }

    #[test]
    fn bundled_words_are_valid() {
        for &word in ANSWERS.iter().chain(ALLOWED) {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn bundled_lists_are_nonempty() {
        const { assert!(ANSWERS_COUNT > 0) };
        const { assert!(ALLOWED_COUNT > 0) };
    }
}
