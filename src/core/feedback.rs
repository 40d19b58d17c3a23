//! Accumulated green/yellow/gray feedback
//!
//! Feedback is recorded per entry rather than per guess:
//! - Green: `(position, letter)` confirmed correct at that position
//! - Yellow: `(position, letter)` present in the answer but not where it was guessed
//! - Gray: a bare letter absent from the answer (global, may repeat)

use super::word::letter_mask;
use std::fmt;

/// A letter confirmed at a position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Green {
    pub position: usize,
    pub letter: u8,
}

/// A letter present in the answer, tied to the position it was guessed at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Yellow {
    pub position: usize,
    pub letter: u8,
}

impl Green {
    #[must_use]
    pub const fn new(position: usize, letter: u8) -> Self {
        Self { position, letter }
    }
}

impl Yellow {
    #[must_use]
    pub const fn new(position: usize, letter: u8) -> Self {
        Self { position, letter }
    }
}

/// Snapshot of the feedback accumulated over a game
///
/// The engine owns the live copy; the solver only ever sees clones of it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Feedback {
    pub greens: Vec<Green>,
    pub yellows: Vec<Yellow>,
    pub grays: Vec<u8>,
}

impl Feedback {
    /// Whether no feedback has been recorded yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.greens.is_empty() && self.yellows.is_empty() && self.grays.is_empty()
    }

    /// Letter mask of every gray letter
    #[must_use]
    pub fn gray_mask(&self) -> u32 {
        letter_mask(self.grays.iter().copied())
    }

    /// Letter mask of every green letter
    #[must_use]
    pub fn green_mask(&self) -> u32 {
        letter_mask(self.greens.iter().map(|g| g.letter))
    }

    /// Letter mask of the union of green and yellow letters
    #[must_use]
    pub fn required_mask(&self) -> u32 {
        self.green_mask() | letter_mask(self.yellows.iter().map(|y| y.letter))
    }
}

fn write_entries<T>(
    f: &mut fmt::Formatter<'_>,
    entries: &[T],
    mut entry: impl FnMut(&mut fmt::Formatter<'_>, &T) -> fmt::Result,
) -> fmt::Result {
    write!(f, "[")?;
    for (i, item) in entries.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        entry(f, item)?;
    }
    write!(f, "]")
}

/// Display adapter for a list of greens
pub struct GreensDisplay<'a>(pub &'a [Green]);

/// Display adapter for a list of yellows
pub struct YellowsDisplay<'a>(pub &'a [Yellow]);

/// Display adapter for a list of grays
pub struct GraysDisplay<'a>(pub &'a [u8]);

impl fmt::Display for GreensDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_entries(f, self.0, |f, g| {
            write!(f, "({}, '{}')", g.position, char::from(g.letter))
        })
    }
}

impl fmt::Display for YellowsDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_entries(f, self.0, |f, y| {
            write!(f, "({}, '{}')", y.position, char::from(y.letter))
        })
    }
}

impl fmt::Display for GraysDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_entries(f, self.0, |f, &letter| {
            write!(f, "'{}'", char::from(letter))
        })
    }
}
