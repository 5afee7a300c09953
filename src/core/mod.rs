//! Core domain types for Wordle
//!
//! This module contains the fundamental domain types. Everything here is
//! pure and independent of word lists, ranking or I/O.

mod feedback;
mod letters;
mod word;

pub use feedback::{Feedback, FeedbackError, FeedbackSymbol};
pub use letters::LetterSet;
pub use word::{Word, WordError};

/// Number of letters in every word
pub const WORD_LENGTH: usize = 5;
