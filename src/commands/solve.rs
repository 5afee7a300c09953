//! Word solving command
//!
//! Solves a known target word by always guessing the top-ranked candidate,
//! and returns the solution path.

use crate::core::{Feedback, Word};
use crate::solver::{
    Outcome, Prompter, RankedWord, RankingModel, Rejection, RoundReport, Session, SolverConfig,
    run,
};
use crate::wordlists::Dictionary;
use anyhow::{Result, anyhow};
use log::warn;

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    pub solver: SolverConfig,
}

impl SolveConfig {
    #[must_use]
    pub fn new(target: String) -> Self {
        Self {
            target,
            solver: SolverConfig::default(),
        }
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub target: String,
    pub outcome: Outcome,
    pub steps: Vec<RoundReport>,
}

impl SolveResult {
    #[must_use]
    pub const fn success(&self) -> bool {
        self.outcome.is_solved()
    }
}

/// Answers for the user: guesses the best-ranked candidate and scores it
/// against the known target
struct OraclePrompter {
    target: Word,
    next: Option<Word>,
    steps: Vec<RoundReport>,
}

impl Prompter for OraclePrompter {
    fn show_round(&mut self, _attempt: usize, _remaining: usize, top: &[RankedWord<'_>]) {
        self.next = top.first().map(|ranked| ranked.word.clone());
    }

    fn read_guess(&mut self) -> Result<Option<String>> {
        Ok(self.next.take().map(|word| word.text().to_string()))
    }

    fn read_feedback(&mut self, guess: &Word) -> Result<Option<String>> {
        Ok(Some(Feedback::calculate(guess, &self.target).to_string()))
    }

    fn reject(&mut self, rejection: &Rejection) {
        warn!("solver produced unusable input: {rejection}");
    }

    fn round_finished(&mut self, report: &RoundReport) {
        self.steps.push(report.clone());
    }
}

/// Solve a specific dictionary word
///
/// Stops early with `Outcome::Interrupted` if no candidate is left to
/// guess.
///
/// # Errors
///
/// Returns an error if the target is not a valid five-letter word or is not
/// in the dictionary.
pub fn solve_word(
    config: &SolveConfig,
    dictionary: &Dictionary,
    model: &RankingModel,
) -> Result<SolveResult> {
    let target = Word::new(config.target.trim())
        .map_err(|e| anyhow!("Invalid target word '{}': {e}", config.target))?;
    if !dictionary.contains(target.text()) {
        return Err(anyhow!("Target word '{target}' is not in the dictionary"));
    }

    let mut session = Session::new(dictionary, model, config.solver);
    let mut prompter = OraclePrompter {
        target: target.clone(),
        next: None,
        steps: Vec::new(),
    };
    let outcome = run(&mut session, &mut prompter)?;

    Ok(SolveResult {
        target: target.text().to_string(),
        outcome,
        steps: prompter.steps,
    })
}
