//! Terminal output formatting
//!
//! Display utilities for rounds, outcomes and command results.

pub mod display;
pub mod formatters;

pub use display::{print_benchmark_result, print_outcome, print_solve_result};
