//! Main solving loop
//!
//! Drives a `Session` through its attempts, asking a `Prompter` for each
//! guess and its feedback until the word is solved, the attempts run out,
//! or the input source goes away.

use super::{RankedWord, Rejection, RoundReport, Session, SessionState};
use crate::core::{Feedback, Word};
use anyhow::Result;
use log::debug;

/// Source of guesses and feedback, and sink for round updates
///
/// `read_guess` and `read_feedback` return `Ok(None)` when input was
/// interrupted or closed; the loop then stops without touching the session.
pub trait Prompter {
    /// Called at the start of every attempt
    fn show_round(&mut self, attempt: usize, remaining: usize, top: &[RankedWord<'_>]);

    /// Raw guess input
    ///
    /// # Errors
    /// Returns an error if the input source fails.
    fn read_guess(&mut self) -> Result<Option<String>>;

    /// Raw feedback input for `guess`
    ///
    /// # Errors
    /// Returns an error if the input source fails.
    fn read_feedback(&mut self, guess: &Word) -> Result<Option<String>>;

    /// Unusable input; the loop asks again
    fn reject(&mut self, rejection: &Rejection);

    /// Called after every submitted round, including the solving one
    fn round_finished(&mut self, _report: &RoundReport) {}
}

/// How a solve ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Solved {
        word: Word,
        attempts: usize,
    },
    /// Every attempt used without an all-green feedback
    Exhausted {
        attempts: usize,
        remaining: Vec<Word>,
    },
    /// Input stopped during `attempt`
    Interrupted {
        attempt: usize,
    },
}

impl Outcome {
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        matches!(self, Self::Solved { .. })
    }
}

/// Run `session` to completion
///
/// # Errors
/// Returns an error only if the prompter's input source fails.
pub fn run<P: Prompter + ?Sized>(session: &mut Session<'_>, prompter: &mut P) -> Result<Outcome> {
    loop {
        let attempt = match session.state() {
            SessionState::Attempt(n) => *n,
            SessionState::Solved { word, attempts } => {
                return Ok(Outcome::Solved {
                    word: word.clone(),
                    attempts: *attempts,
                });
            }
            SessionState::Exhausted { attempts } => {
                return Ok(Outcome::Exhausted {
                    attempts: *attempts,
                    remaining: session.candidates().to_vec(),
                });
            }
        };

        prompter.show_round(attempt, session.candidates().len(), &session.ranked());

        let Some(guess) = read_guess(session, prompter)? else {
            return Ok(Outcome::Interrupted { attempt });
        };
        let Some(feedback) = read_feedback(&guess, prompter)? else {
            return Ok(Outcome::Interrupted { attempt });
        };

        debug!("attempt {attempt}: guessed {guess}, feedback {feedback}");
        let report = session.submit(guess, feedback)?;
        prompter.round_finished(&report);
    }
}

fn read_guess<P: Prompter + ?Sized>(session: &Session<'_>, prompter: &mut P) -> Result<Option<Word>> {
    loop {
        let Some(input) = prompter.read_guess()? else {
            return Ok(None);
        };
        match session.parse_guess(&input) {
            Ok(word) => return Ok(Some(word)),
            Err(rejection) => prompter.reject(&rejection),
        }
    }
}

fn read_feedback<P: Prompter + ?Sized>(guess: &Word, prompter: &mut P) -> Result<Option<Feedback>> {
    loop {
        let Some(input) = prompter.read_feedback(guess)? else {
            return Ok(None);
        };
        match Feedback::parse(input.trim()) {
            Ok(feedback) => return Ok(Some(feedback)),
            Err(e) => prompter.reject(&Rejection::from(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{FrequencyTables, RankingModel, SolverConfig};
    use crate::wordlists::Dictionary;
    use crate::wordlists::loader::words_from_slice;
    use std::collections::VecDeque;

    /// Replays fixed lines and records what the loop reported
    #[derive(Default)]
    struct Scripted {
        lines: VecDeque<&'static str>,
        rounds: Vec<(usize, usize)>,
        rejections: Vec<Rejection>,
        reports: Vec<RoundReport>,
    }

    impl Scripted {
        fn new(lines: &[&'static str]) -> Self {
            Self {
                lines: lines.iter().copied().collect(),
                ..Self::default()
            }
        }
    }

    impl Prompter for Scripted {
        fn show_round(&mut self, attempt: usize, remaining: usize, _top: &[RankedWord<'_>]) {
            self.rounds.push((attempt, remaining));
        }

        fn read_guess(&mut self) -> Result<Option<String>> {
            Ok(self.lines.pop_front().map(String::from))
        }

        fn read_feedback(&mut self, _guess: &Word) -> Result<Option<String>> {
            Ok(self.lines.pop_front().map(String::from))
        }

        fn reject(&mut self, rejection: &Rejection) {
            self.rejections.push(rejection.clone());
        }

        fn round_finished(&mut self, report: &RoundReport) {
            self.reports.push(report.clone());
        }
    }

    fn setup() -> (Dictionary, RankingModel) {
        let dictionary = Dictionary::from_words(words_from_slice(&[
            "arose", "crane", "irate", "slate", "trace", "crate", "mummy", "fuzzy",
        ]));
        let model = RankingModel::new(FrequencyTables::build(dictionary.words(), []));
        (dictionary, model)
    }

    #[test]
    fn solves_in_two_attempts() {
        let (dictionary, model) = setup();
        let mut session = Session::new(&dictionary, &model, SolverConfig::default());
        let mut prompter = Scripted::new(&["arose", "YG??G", "crane", "ggggg"]);

        let outcome = run(&mut session, &mut prompter).unwrap();
        assert_eq!(
            outcome,
            Outcome::Solved {
                word: Word::new("crane").unwrap(),
                attempts: 2
            }
        );
        assert_eq!(prompter.rounds, [(1, 8), (2, 4)]);
        assert_eq!(prompter.reports.len(), 2);
        assert!(prompter.reports[1].feedback.is_all_hit());
        assert!(prompter.rejections.is_empty());
    }

    #[test]
    fn reprompts_on_bad_input() {
        let (dictionary, model) = setup();
        let mut session = Session::new(&dictionary, &model, SolverConfig::default());
        let mut prompter = Scripted::new(&[
            "cranes", "house", "crane", "GGG", "GGXGG", "GGGGG",
        ]);

        let outcome = run(&mut session, &mut prompter).unwrap();
        assert!(outcome.is_solved());
        assert_eq!(prompter.rejections.len(), 4);
        assert!(matches!(prompter.rejections[0], Rejection::Word(_)));
        assert!(matches!(prompter.rejections[1], Rejection::UnknownWord(_)));
        assert!(matches!(prompter.rejections[2], Rejection::Feedback(_)));
        assert!(matches!(prompter.rejections[3], Rejection::Feedback(_)));
    }

    #[test]
    fn interruption_stops_the_loop() {
        let (dictionary, model) = setup();
        let mut session = Session::new(&dictionary, &model, SolverConfig::default());
        let mut prompter = Scripted::new(&["arose", "YG??G", "crane"]);

        let outcome = run(&mut session, &mut prompter).unwrap();
        assert_eq!(outcome, Outcome::Interrupted { attempt: 2 });
        // Round one stays applied, nothing from the abandoned round
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn exhaustion_is_reported() {
        let (dictionary, model) = setup();
        let mut session = Session::new(&dictionary, &model, SolverConfig::new(2, 15));
        let mut prompter = Scripted::new(&["mummy", "?????", "fuzzy", "?????"]);

        let outcome = run(&mut session, &mut prompter).unwrap();
        match outcome {
            Outcome::Exhausted {
                attempts,
                remaining,
            } => {
                assert_eq!(attempts, 2);
                assert_eq!(remaining.len(), 6);
            }
            other => panic!("expected exhaustion, got {other:?}"),
        }
    }
}
