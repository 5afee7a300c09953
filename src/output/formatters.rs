//! Formatting utilities for terminal output

use crate::solver::RankedWord;

/// `"1 attempt"`, `"2 attempts"`
#[must_use]
pub fn pluralize(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

/// One row of the candidate table: word, fixed-width score, probability in
/// scientific notation
#[must_use]
pub fn rank_row(ranked: &RankedWord<'_>) -> String {
    format!(
        "{:<10} | {:<6.3} | {:.4E}",
        ranked.word.text(),
        ranked.score,
        ranked.probability
    )
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
