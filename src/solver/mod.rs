//! Wordle solving algorithms
//!
//! Candidate pruning, letter-frequency scoring, and the strategies that pick a
//! guess from the scored candidates.

mod engine;
pub mod filter;
pub mod scoring;
pub mod strategy;

pub use engine::{CONTENDERS, Solver, SolverError, Suggestion};
pub use scoring::{ScoredWord, score_candidates};
pub use strategy::{FirstCandidateStrategy, FrequencyStrategy, Strategy, StrategyType};
