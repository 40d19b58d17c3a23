//! Immutable answer/guess vocabulary shared by engine and solver

use super::loader::{load_from_file, words_from_slice};
use super::{ALLOWED, ANSWERS};
use crate::core::Word;
use rustc_hash::FxHashSet;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Error building a vocabulary
#[derive(Debug)]
pub enum VocabularyError {
    /// The answer list contained no valid words
    NoAnswers,
    /// A word list file could not be read
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for VocabularyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoAnswers => write!(f, "Answer list contains no valid words"),
            Self::Io { path, source } => {
                write!(f, "Failed to read word list {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for VocabularyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NoAnswers => None,
            Self::Io { source, .. } => Some(source),
        }
    }
}

/// Possible answers plus the allowed-guess list
///
/// `allowed` always contains every answer. Its order (guess list first, then
/// any answers not already present) is the vocabulary order used for
/// tie-breaking throughout the solver.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    answers: Vec<Word>,
    allowed: Vec<Word>,
    allowed_index: FxHashSet<[u8; 5]>,
    answer_index: FxHashSet<[u8; 5]>,
}

impl Vocabulary {
    /// Build a vocabulary from answer words and extra allowed guesses
    ///
    /// Duplicates are dropped, keeping the first occurrence.
    ///
    /// # Errors
    /// Returns `VocabularyError::NoAnswers` if `answers` is empty.
    pub fn new(answers: Vec<Word>, guesses: Vec<Word>) -> Result<Self, VocabularyError> {
        let mut answer_index = FxHashSet::default();
        let answers: Vec<Word> = answers
            .into_iter()
            .filter(|w| answer_index.insert(*w.chars()))
            .collect();

        if answers.is_empty() {
            return Err(VocabularyError::NoAnswers);
        }

        let mut allowed_index = FxHashSet::default();
        let allowed: Vec<Word> = guesses
            .into_iter()
            .chain(answers.iter().cloned())
            .filter(|w| allowed_index.insert(*w.chars()))
            .collect();

        Ok(Self {
            answers,
            allowed,
            allowed_index,
            answer_index,
        })
    }

    /// Vocabulary built from the word lists compiled into the binary
    ///
    /// # Errors
    /// Only fails if the bundled answer list is empty.
    pub fn embedded() -> Result<Self, VocabularyError> {
        Self::new(words_from_slice(ANSWERS), words_from_slice(ALLOWED))
    }

    /// Vocabulary loaded from word list files, one word per line
    ///
    /// # Errors
    /// Returns an error if either file cannot be read or no answers are valid.
    pub fn from_files(answers: &Path, allowed: &Path) -> Result<Self, VocabularyError> {
        let read = |path: &Path| {
            load_from_file(path).map_err(|source| VocabularyError::Io {
                path: path.to_path_buf(),
                source,
            })
        };

        Self::new(read(answers)?, read(allowed)?)
    }

    /// Words that can be picked as the hidden answer
    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }

    /// Every word accepted as a guess, in vocabulary order
    #[must_use]
    pub fn allowed(&self) -> &[Word] {
        &self.allowed
    }

    /// Whether `word` is an accepted guess
    #[must_use]
    pub fn is_allowed(&self, word: &Word) -> bool {
        self.allowed_index.contains(word.chars())
    }

    /// Whether `word` can be a hidden answer
    #[must_use]
    pub fn is_answer(&self, word: &Word) -> bool {
        self.answer_index.contains(word.chars())
    }
}
