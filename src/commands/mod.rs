//! Command implementations

pub mod benchmark;
pub mod play;
pub mod solve;

pub use benchmark::{BenchmarkResult, run_benchmark, select_targets};
pub use play::{ConsolePrompter, run_play};
pub use solve::{SolveConfig, SolveResult, solve_word};
