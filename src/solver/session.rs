//! Attempt-by-attempt solving session
//!
//! A `Session` owns the candidate set and the accumulated constraints and
//! moves through `Attempt(1) .. Attempt(max)` until it is solved or out of
//! attempts.

use super::{ConstraintState, RankedWord, RankingModel, filter};
use crate::core::{Feedback, FeedbackError, Word, WordError};
use crate::wordlists::Dictionary;
use log::{debug, warn};
use std::fmt;

/// Solver limits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    pub max_attempts: usize,
    /// How many ranked candidates to show each round
    pub top_n: usize,
}

impl SolverConfig {
    #[must_use]
    pub const fn new(max_attempts: usize, top_n: usize) -> Self {
        Self {
            max_attempts,
            top_n,
        }
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self::new(6, 15)
    }
}

/// Where the session is
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// Waiting for attempt `n` (1-based)
    Attempt(usize),
    Solved { word: Word, attempts: usize },
    Exhausted { attempts: usize },
}

/// Input that cannot be used for a round
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    Word(WordError),
    UnknownWord(String),
    Feedback(FeedbackError),
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Word(e) => write!(f, "{e}"),
            Self::UnknownWord(word) => write!(f, "'{word}' is not in the dictionary"),
            Self::Feedback(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Rejection {}

impl From<WordError> for Rejection {
    fn from(e: WordError) -> Self {
        Self::Word(e)
    }
}

impl From<FeedbackError> for Rejection {
    fn from(e: FeedbackError) -> Self {
        Self::Feedback(e)
    }
}

/// Misuse of a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Feedback was submitted after the session ended
    Finished,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finished => write!(f, "Session is already finished"),
        }
    }
}

impl std::error::Error for SessionError {}

/// What happened in one round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundReport {
    pub attempt: usize,
    pub guess: Word,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// The feedback eliminated every candidate and the previous set was kept
    /// minus the guess
    pub reverted: bool,
}

/// A single solve, from the full dictionary down to one word
pub struct Session<'a> {
    dictionary: &'a Dictionary,
    model: &'a RankingModel,
    config: SolverConfig,
    candidates: Vec<Word>,
    constraints: ConstraintState,
    history: Vec<(Word, Feedback)>,
    state: SessionState,
}

impl<'a> Session<'a> {
    /// Start a session with every dictionary word as a candidate
    #[must_use]
    pub fn new(dictionary: &'a Dictionary, model: &'a RankingModel, config: SolverConfig) -> Self {
        let state = if config.max_attempts == 0 {
            SessionState::Exhausted { attempts: 0 }
        } else {
            SessionState::Attempt(1)
        };

        Self {
            dictionary,
            model,
            config,
            candidates: dictionary.words().to_vec(),
            constraints: ConstraintState::new(),
            history: Vec::new(),
            state,
        }
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> SolverConfig {
        self.config
    }

    #[inline]
    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    #[inline]
    #[must_use]
    pub const fn constraints(&self) -> &ConstraintState {
        &self.constraints
    }

    /// Guesses and feedback so far, oldest first
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[(Word, Feedback)] {
        &self.history
    }

    /// The best candidates to show for the coming attempt
    #[must_use]
    pub fn ranked(&self) -> Vec<RankedWord<'_>> {
        self.model.top(&self.candidates, self.config.top_n)
    }

    /// Validate a typed guess: five letters and a dictionary word
    ///
    /// # Errors
    /// Returns a `Rejection` describing why the input cannot be played.
    pub fn parse_guess(&self, input: &str) -> Result<Word, Rejection> {
        let word = Word::new(input.trim())?;
        self.dictionary
            .lookup(word.text())
            .cloned()
            .ok_or_else(|| Rejection::UnknownWord(word.text().to_string()))
    }

    /// Record the feedback for `guess` and advance the session
    ///
    /// All-green feedback solves the session. Otherwise the feedback is
    /// merged into the constraints and the current candidates are filtered.
    /// If nothing survives, the previous candidates are kept without the
    /// guessed word.
    ///
    /// # Errors
    /// Returns `SessionError::Finished` if the session has already ended.
    pub fn submit(&mut self, guess: Word, feedback: Feedback) -> Result<RoundReport, SessionError> {
        let SessionState::Attempt(attempt) = self.state else {
            return Err(SessionError::Finished);
        };

        let candidates_before = self.candidates.len();
        self.history.push((guess.clone(), feedback));

        if feedback.is_all_hit() {
            self.candidates.retain(|w| *w == guess);
            self.state = SessionState::Solved {
                word: guess.clone(),
                attempts: attempt,
            };
            return Ok(RoundReport {
                attempt,
                guess,
                feedback,
                candidates_before,
                candidates_after: self.candidates.len(),
                reverted: false,
            });
        }

        self.constraints.apply(&guess, &feedback);
        debug!("attempt {attempt}: {guess} {feedback} -> {}", self.constraints);

        let mut survivors = filter(&self.candidates, &self.constraints);
        let reverted = survivors.is_empty();
        if reverted {
            warn!("feedback {feedback} for {guess} left no candidates, keeping previous set");
            survivors = std::mem::take(&mut self.candidates);
        }
        // The guess itself is not the secret, even when a gray on a repeated
        // letter leaves it consistent with its own feedback
        survivors.retain(|w| *w != guess);
        self.candidates = survivors;
        debug!(
            "attempt {attempt}: {candidates_before} -> {} candidates",
            self.candidates.len()
        );

        self.state = if attempt >= self.config.max_attempts {
            SessionState::Exhausted { attempts: attempt }
        } else {
            SessionState::Attempt(attempt + 1)
        };

        Ok(RoundReport {
            attempt,
            guess,
            feedback,
            candidates_before,
            candidates_after: self.candidates.len(),
            reverted,
        })
    }
}
