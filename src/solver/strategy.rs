//! Guess selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use super::scoring::ScoredWord;

/// A strategy for picking the next guess from the scored candidate set
pub trait Strategy {
    /// Select a guess from `scored`, which is in vocabulary order
    ///
    /// Returns `None` only if `scored` is empty.
    fn select_guess<'s, 'a>(&self, scored: &'s [ScoredWord<'a>]) -> Option<&'s ScoredWord<'a>>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyType {
    /// Highest letter-frequency score (default)
    Frequency(FrequencyStrategy),
    /// First remaining candidate in vocabulary order
    FirstCandidate(FirstCandidateStrategy),
}

impl Strategy for StrategyType {
    fn select_guess<'s, 'a>(&self, scored: &'s [ScoredWord<'a>]) -> Option<&'s ScoredWord<'a>> {
        match self {
            Self::Frequency(s) => s.select_guess(scored),
            Self::FirstCandidate(s) => s.select_guess(scored),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "frequency", "first".
    /// Defaults to frequency if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "first" | "first-candidate" => Self::FirstCandidate(FirstCandidateStrategy),
            _ => Self::Frequency(FrequencyStrategy),
        }
    }

    /// Canonical name for display
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Frequency(_) => "frequency",
            Self::FirstCandidate(_) => "first",
        }
    }
}

impl Default for StrategyType {
    fn default() -> Self {
        Self::Frequency(FrequencyStrategy)
    }
}

/// Letter-frequency maximization
///
/// Picks the highest score; ties go to the first maximum in vocabulary order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrequencyStrategy;

impl Strategy for FrequencyStrategy {
    fn select_guess<'s, 'a>(&self, scored: &'s [ScoredWord<'a>]) -> Option<&'s ScoredWord<'a>> {
        // min_by_key keeps the first of equal keys
        scored.iter().min_by_key(|s| std::cmp::Reverse(s.score))
    }
}

/// Always guesses the first remaining candidate
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FirstCandidateStrategy;

impl Strategy for FirstCandidateStrategy {
    fn select_guess<'s, 'a>(&self, scored: &'s [ScoredWord<'a>]) -> Option<&'s ScoredWord<'a>> {
        scored.first()
    }
}
