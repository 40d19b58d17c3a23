//! Candidate pruning against accumulated feedback

use crate::core::{Feedback, Word};

/// Constraints derived from a feedback snapshot
///
/// Letter sets are precomputed as bitmasks so each candidate check is a few
/// integer operations plus the positional lookups.
#[derive(Debug, Clone)]
pub struct Constraints<'f> {
    feedback: &'f Feedback,
    gray_mask: u32,
    required_mask: u32,
}

impl<'f> Constraints<'f> {
    #[must_use]
    pub fn new(feedback: &'f Feedback) -> Self {
        Self {
            feedback,
            gray_mask: feedback.gray_mask(),
            required_mask: feedback.required_mask(),
        }
    }

    /// Whether `word` is consistent with every recorded entry
    ///
    /// - no gray letter anywhere
    /// - every green and yellow letter somewhere (not count-aware)
    /// - no yellow letter at the position it was guessed at
    /// - every green letter at its position
    #[must_use]
    pub fn allows(&self, word: &Word) -> bool {
        !word.has_any_letter(self.gray_mask)
            && word.has_all_letters(self.required_mask)
            && self
                .feedback
                .yellows
                .iter()
                .all(|y| word.char_at(y.position) != y.letter)
            && self
                .feedback
                .greens
                .iter()
                .all(|g| word.char_at(g.position) == g.letter)
    }
}

/// Remove the last guess and every candidate inconsistent with `feedback`
///
/// Order is preserved and the set never grows.
pub fn prune(candidates: &mut Vec<&Word>, feedback: &Feedback, last_guess: Option<&Word>) {
    let constraints = Constraints::new(feedback);
    candidates.retain(|&word| last_guess != Some(word) && constraints.allows(word));
}
