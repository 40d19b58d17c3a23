//! Command implementations

mod batch;
pub mod game;
pub mod play;
pub mod simulate;
pub mod stats;
pub mod test_all;

pub use batch::BatchReport;
pub use game::{GameOutcome, GameRecord, PlayError, Turn, play_game};
pub use play::run_play;
pub use simulate::{SimulationConfig, answer_rng, run_simulation};
pub use stats::BatchStatistics;
pub use test_all::run_test_all;
