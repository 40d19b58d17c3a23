//! Wordle Simulator
//!
//! Simulates Wordle games and evaluates a letter-frequency solver across a
//! vocabulary of answers.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use wordle_sim::core::Word;
//! use wordle_sim::game::GameEngine;
//! use wordle_sim::solver::{FrequencyStrategy, Solver};
//! use wordle_sim::wordlists::Vocabulary;
//!
//! let vocabulary = Vocabulary::embedded().unwrap();
//! let mut engine = GameEngine::new(&vocabulary);
//! engine.set_answer(Word::new("crane").unwrap()).unwrap();
//!
//! let mut solver = Solver::new(FrequencyStrategy, &vocabulary);
//! let guess = solver.next_guess().unwrap();
//! engine.evaluate_guess(guess.word).unwrap();
//! solver.sync_state(&engine);
//! println!("Greens so far: {}", engine.greens().len());
//! ```

// Core domain types
pub mod core;

// Game state and guess evaluation
pub mod game;

// Candidate pruning and scoring
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
