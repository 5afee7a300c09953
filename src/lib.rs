//! Wordle Helper
//!
//! Narrows a dictionary to the words consistent with Wordle's colour
//! feedback and ranks the survivors by how common they are.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_helper::core::{Feedback, Word};
//! use wordle_helper::solver::{FrequencyTables, RankingModel, Session, SolverConfig};
//! use wordle_helper::wordlists::Dictionary;
//! use wordle_helper::wordlists::loader::words_from_slice;
//!
//! let dictionary = Dictionary::from_words(words_from_slice(&["arose", "crane", "slate"]));
//! let model = RankingModel::new(FrequencyTables::build(dictionary.words(), []));
//! let mut session = Session::new(&dictionary, &model, SolverConfig::default());
//!
//! let guess = Word::new("arose").unwrap();
//! session.submit(guess, Feedback::parse("YG??G").unwrap()).unwrap();
//! assert_eq!(session.candidates(), &[Word::new("crane").unwrap()]);
//! ```

// Core domain types
pub mod core;

// Constraint tracking, filtering and ranking
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
