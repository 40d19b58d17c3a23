//! Core domain types for Wordle
//!
//! Words and the feedback entries recorded against them. Everything here is
//! pure data with no I/O.

mod feedback;
mod word;

pub use feedback::{Feedback, GraysDisplay, Green, GreensDisplay, Yellow, YellowsDisplay};
pub use word::{WORD_LENGTH, Word, WordError, letter_mask};
