use std::collections::VecDeque;

use anyhow::Result;
use wordle_helper::core::{Feedback, Word};
use wordle_helper::solver::{
    FrequencyTables, Outcome, Prompter, RankedWord, RankingModel, Rejection, RoundReport, Session,
    SessionState, SolverConfig, filter, run,
};
use wordle_helper::wordlists::Dictionary;
use wordle_helper::wordlists::loader::{corpus_tokens, words_from_slice};

const WORDS: [&str; 14] = [
    "arose", "crane", "slate", "trace", "crate", "irate", "grate", "prise", "rotor", "robot",
    "floor", "motor", "mummy", "fuzzy",
];

fn setup() -> (Dictionary, RankingModel) {
    let dictionary = Dictionary::from_words(words_from_slice(&WORDS));
    let model = RankingModel::new(FrequencyTables::build(
        dictionary.words(),
        corpus_tokens("The crane stood by the slate. A robot, a motor and a crane."),
    ));
    (dictionary, model)
}

fn word(s: &str) -> Word {
    Word::new(s).unwrap()
}

/// Feeds a fixed script of guesses and feedback
struct Script {
    lines: VecDeque<&'static str>,
    shown: Vec<usize>,
    reports: Vec<RoundReport>,
}

impl Script {
    fn new(lines: &[&'static str]) -> Self {
        Self {
            lines: lines.iter().copied().collect(),
            shown: Vec::new(),
            reports: Vec::new(),
        }
    }
}

impl Prompter for Script {
    fn show_round(&mut self, _attempt: usize, remaining: usize, top: &[RankedWord<'_>]) {
        assert!(top.len() <= 15);
        self.shown.push(remaining);
    }

    fn read_guess(&mut self) -> Result<Option<String>> {
        Ok(self.lines.pop_front().map(String::from))
    }

    fn read_feedback(&mut self, _guess: &Word) -> Result<Option<String>> {
        Ok(self.lines.pop_front().map(String::from))
    }

    fn reject(&mut self, rejection: &Rejection) {
        panic!("unexpected rejection: {rejection}");
    }

    fn round_finished(&mut self, report: &RoundReport) {
        self.reports.push(report.clone());
    }
}

#[test]
fn test_crane_with_typed_feedback() {
    // "?G?YG" claims A and O are absent and S is present: nothing in the
    // dictionary fits, so the previous set minus AROSE is kept
    let (dictionary, model) = setup();
    let mut session = Session::new(&dictionary, &model, SolverConfig::default());
    let mut script = Script::new(&["arose", "?G?YG", "crane", "GGGGG"]);

    let outcome = run(&mut session, &mut script).unwrap();

    let round_one = &script.reports[0];
    assert!(round_one.candidates_after < round_one.candidates_before);
    assert!(round_one.reverted);
    assert_eq!(script.shown, [14, 13]);

    assert_eq!(
        outcome,
        Outcome::Solved {
            word: word("crane"),
            attempts: 2
        }
    );
    assert_eq!(
        session.state(),
        &SessionState::Solved {
            word: word("crane"),
            attempts: 2
        }
    );
}

#[test]
fn test_crane_with_game_feedback() {
    let (dictionary, model) = setup();
    let mut session = Session::new(&dictionary, &model, SolverConfig::default());

    let feedback = Feedback::calculate(&word("arose"), &word("crane"));
    assert_eq!(feedback.to_string(), "YG??G");

    let report = session.submit(word("arose"), feedback).unwrap();
    assert!(!report.reverted);
    assert!(report.candidates_after < report.candidates_before);
    assert!(session.candidates().contains(&word("crane")));

    session.submit(word("crane"), Feedback::ALL_HIT).unwrap();
    assert_eq!(
        session.state(),
        &SessionState::Solved {
            word: word("crane"),
            attempts: 2
        }
    );
}

#[test]
fn test_fallback_never_empties_set() {
    let (dictionary, model) = setup();
    let mut session = Session::new(&dictionary, &model, SolverConfig::default());

    // No A, R, O, S or E leaves only FUZZY and MUMMY
    session
        .submit(word("arose"), Feedback::parse("?????").unwrap())
        .unwrap();
    let before: Vec<Word> = session.candidates().to_vec();
    assert_eq!(before, [word("fuzzy"), word("mummy")]);

    // FUZZY cannot be green in four places and wrong: nothing survives
    let report = session
        .submit(word("fuzzy"), Feedback::parse("GGGG?").unwrap())
        .unwrap();
    assert!(report.reverted);

    let expected: Vec<Word> = before.into_iter().filter(|w| *w != word("fuzzy")).collect();
    assert_eq!(session.candidates(), expected.as_slice());
    assert!(!session.candidates().is_empty());
}

#[test]
fn test_guess_as_only_survivor_keeps_constraints() {
    let dictionary = Dictionary::from_words(words_from_slice(&["mamma", "crane", "slate"]));
    let model = RankingModel::new(FrequencyTables::build(dictionary.words(), []));
    let mut session = Session::new(&dictionary, &model, SolverConfig::default());

    let report = session
        .submit(word("mamma"), Feedback::parse("GG?G?").unwrap())
        .unwrap();
    assert!(!report.reverted);
    assert!(session.candidates().iter().all(|w| w.char_at(0) == b'm'));
    assert!(session.candidates().is_empty());
}

#[test]
fn test_exhausted_is_distinct_outcome() {
    let (dictionary, model) = setup();
    let mut session = Session::new(&dictionary, &model, SolverConfig::new(3, 15));
    let mut script = Script::new(&["mummy", "?????", "fuzzy", "?????", "robot", "Y????"]);

    let outcome = run(&mut session, &mut script).unwrap();
    match outcome {
        Outcome::Exhausted {
            attempts,
            remaining,
        } => {
            assert_eq!(attempts, 3);
            assert_eq!(remaining, [word("crane"), word("prise")]);
            assert!(remaining.iter().all(|w| w.has_letter(b'r')));
        }
        other => panic!("expected exhaustion, got {other:?}"),
    }
}

#[test]
fn test_rounds_only_shrink_candidates() {
    let (dictionary, model) = setup();
    let secret = word("motor");
    let mut session = Session::new(&dictionary, &model, SolverConfig::default());

    for guess in ["arose", "robot", "floor"] {
        let guess = word(guess);
        let feedback = Feedback::calculate(&guess, &secret);
        let before: Vec<Word> = session.candidates().to_vec();

        let report = session.submit(guess, feedback).unwrap();
        assert!(!report.reverted);
        assert!(session.candidates().iter().all(|w| before.contains(w)));
        assert!(session.candidates().contains(&secret));
        assert_eq!(
            filter(session.candidates(), session.constraints()),
            session.candidates()
        );
    }
}
