//! Wordle game state and guess evaluation

mod engine;

pub use engine::{GameEngine, GameError, MAX_GUESSES};
