//! Interactive console mode
//!
//! The user plays Wordle elsewhere and types in each guess and the colours
//! the game showed; the solver narrows and ranks the remaining words.

use crate::core::Word;
use crate::output::display::{
    print_legend, print_outcome, print_rejection, print_reverted, print_round,
};
use crate::solver::{
    Outcome, Prompter, RankedWord, RankingModel, Rejection, RoundReport, Session, SolverConfig,
    run,
};
use crate::wordlists::Dictionary;
use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

/// Prompts on the terminal with line editing
///
/// Ctrl-C and Ctrl-D at a prompt end the session.
pub struct ConsolePrompter {
    editor: DefaultEditor,
}

impl ConsolePrompter {
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be set up for line editing.
    pub fn new() -> Result<Self> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }

    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                self.editor.add_history_entry(line.as_str())?;
                Ok(Some(line))
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

impl Prompter for ConsolePrompter {
    fn show_round(&mut self, attempt: usize, remaining: usize, top: &[RankedWord<'_>]) {
        print_round(attempt, remaining, top);
    }

    fn read_guess(&mut self) -> Result<Option<String>> {
        self.read_line("Input the word you entered> ")
    }

    fn read_feedback(&mut self, _guess: &Word) -> Result<Option<String>> {
        self.read_line("Response from Wordle> ")
    }

    fn reject(&mut self, rejection: &Rejection) {
        print_rejection(rejection);
    }

    fn round_finished(&mut self, report: &RoundReport) {
        if report.reverted {
            print_reverted(report);
        }
    }
}

/// Run the interactive console mode
///
/// # Errors
///
/// Returns an error if the terminal cannot be read.
pub fn run_play(
    dictionary: &Dictionary,
    model: &RankingModel,
    config: SolverConfig,
) -> Result<Outcome> {
    let mut prompter = ConsolePrompter::new()?;
    let mut session = Session::new(dictionary, model, config);

    print_legend();
    let outcome = run(&mut session, &mut prompter)?;
    print_outcome(&outcome);

    Ok(outcome)
}
