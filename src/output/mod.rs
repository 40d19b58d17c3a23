//! Terminal output formatting
//!
//! Display utilities for per-guess diagnostics and batch summaries.

pub mod display;
pub mod formatters;

pub use display::{print_batch_statistics, print_game_banner, print_game_result, print_turn};
