//! Letter-frequency scoring
//!
//! Each candidate contributes its distinct letters once to a global histogram;
//! a word scores the sum of the histogram counts of its distinct letters.

use crate::core::Word;

/// A candidate paired with its frequency score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredWord<'a> {
    pub word: &'a Word,
    pub score: u32,
}

/// Count how many candidates contain each letter a-z
#[must_use]
pub fn letter_frequencies(candidates: &[&Word]) -> [u32; 26] {
    let mut frequencies = [0u32; 26];
    for word in candidates {
        for letter in word.distinct_letters() {
            frequencies[usize::from(letter - b'a')] += 1;
        }
    }
    frequencies
}

/// Score every candidate against the candidate set's letter frequencies
///
/// The result keeps the input order, so callers can break ties by position.
///
/// # Examples
/// ```
/// use wordle_sim::core::Word;
/// use wordle_sim::solver::score_candidates;
///
/// let angle = Word::new("angle").unwrap();
/// let ankle = Word::new("ankle").unwrap();
/// let scores = score_candidates(&[&angle, &ankle]);
///
/// // a, n, l, e appear in both words; g and k in one each
/// assert_eq!(scores[0].score, 2 + 2 + 1 + 2 + 2);
/// assert_eq!(scores[0].score, scores[1].score);
/// ```
#[must_use]
pub fn score_candidates<'a>(candidates: &[&'a Word]) -> Vec<ScoredWord<'a>> {
    let frequencies = letter_frequencies(candidates);

    candidates
        .iter()
        .map(|&word| ScoredWord {
            word,
            score: word
                .distinct_letters()
                .map(|letter| frequencies[usize::from(letter - b'a')])
                .sum(),
        })
        .collect()
}

/// The `n` highest-scoring entries, ties kept in input order
#[must_use]
pub fn top_scores<'a>(scored: &[ScoredWord<'a>], n: usize) -> Vec<ScoredWord<'a>> {
    let mut ranked = scored.to_vec();
    // Stable sort keeps vocabulary order among equal scores
    ranked.sort_by_key(|s| std::cmp::Reverse(s.score));
    ranked.truncate(n);
    ranked
}
