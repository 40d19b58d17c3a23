//! Formatting utilities for terminal output

use crate::solver::ScoredWord;

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format the top contenders as `word (score)` pairs
#[must_use]
pub fn format_contenders(contenders: &[ScoredWord<'_>]) -> String {
    contenders
        .iter()
        .map(|s| format!("{} ({})", s.word, s.score))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Percentage of `part` in `total`, 0 when `total` is 0
#[must_use]
pub fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn contenders_are_comma_separated() {
        let crane = Word::new("crane").unwrap();
        let slate = Word::new("slate").unwrap();
        let contenders = [
            ScoredWord {
                word: &crane,
                score: 12,
            },
            ScoredWord {
                word: &slate,
                score: 10,
            },
        ];

        assert_eq!(format_contenders(&contenders), "crane (12), slate (10)");
        assert_eq!(format_contenders(&[]), "");
    }

    #[test]
    fn percentage_handles_zero_total() {
        assert!(percentage(3, 0).abs() < f64::EPSILON);
        assert!((percentage(1, 4) - 25.0).abs() < f64::EPSILON);
    }
}
