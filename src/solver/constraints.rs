//! Accumulated knowledge from feedback
//!
//! Every round's feedback is folded into a `ConstraintState`. Facts only
//! accumulate; the state is never reset during a solve.

use crate::core::{Feedback, FeedbackSymbol, LetterSet, WORD_LENGTH, Word};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Everything known about the secret word so far
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstraintState {
    /// Letters confirmed at a position (green)
    fixed: [Option<u8>; WORD_LENGTH],
    /// Positions a present letter is known not to occupy (yellow)
    misplaced: BTreeMap<u8, BTreeSet<usize>>,
    /// Letters known to be absent from the word (gray)
    excluded: LetterSet,
    /// Letters known to be in the word (green or yellow)
    required: LetterSet,
}

impl ConstraintState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a new state extended with one round of feedback
    ///
    /// # Examples
    /// ```
    /// use wordle_helper::core::{Feedback, Word};
    /// use wordle_helper::solver::ConstraintState;
    ///
    /// let state = ConstraintState::new().merge(
    ///     &Word::new("arose").unwrap(),
    ///     &Feedback::parse("YG??G").unwrap(),
    /// );
    /// assert_eq!(state.fixed_at(1), Some(b'r'));
    /// assert!(state.required().contains(b'a'));
    /// assert!(state.excluded().contains(b'o'));
    /// ```
    #[must_use]
    pub fn merge(&self, guess: &Word, feedback: &Feedback) -> Self {
        let mut next = self.clone();
        next.apply(guess, feedback);
        next
    }

    /// Fold one round of feedback into this state
    ///
    /// Greens and yellows are recorded before grays, so a gray on a letter
    /// that is green or yellow elsewhere in the same guess only means
    /// "no further copy" and never excludes the letter.
    pub fn apply(&mut self, guess: &Word, feedback: &Feedback) {
        let pairs = || guess.chars().iter().copied().zip(feedback.symbols().iter().copied());

        for (pos, (letter, symbol)) in pairs().enumerate() {
            match symbol {
                FeedbackSymbol::Hit => {
                    self.fixed[pos] = Some(letter);
                    self.unmark_misplaced(letter, pos);
                    self.require(letter);
                }
                FeedbackSymbol::Present => {
                    if self.fixed[pos] == Some(letter) {
                        self.fixed[pos] = None;
                    }
                    self.misplaced.entry(letter).or_default().insert(pos);
                    self.require(letter);
                }
                FeedbackSymbol::Miss => {}
            }
        }

        for (letter, symbol) in pairs() {
            if symbol == FeedbackSymbol::Miss && !self.required.contains(letter) {
                self.excluded.insert(letter);
            }
        }
    }

    fn require(&mut self, letter: u8) {
        self.required.insert(letter);
        self.excluded.remove(letter);
    }

    fn unmark_misplaced(&mut self, letter: u8, pos: usize) {
        if let Some(positions) = self.misplaced.get_mut(&letter) {
            positions.remove(&pos);
            if positions.is_empty() {
                self.misplaced.remove(&letter);
            }
        }
    }

    /// Confirmed letter at each position
    #[inline]
    #[must_use]
    pub const fn fixed(&self) -> &[Option<u8>; WORD_LENGTH] {
        &self.fixed
    }

    #[inline]
    #[must_use]
    pub const fn fixed_at(&self, pos: usize) -> Option<u8> {
        self.fixed[pos]
    }

    /// Present letters and the positions they are known not to occupy
    #[inline]
    #[must_use]
    pub const fn misplaced(&self) -> &BTreeMap<u8, BTreeSet<usize>> {
        &self.misplaced
    }

    #[inline]
    #[must_use]
    pub const fn excluded(&self) -> LetterSet {
        self.excluded
    }

    #[inline]
    #[must_use]
    pub const fn required(&self) -> LetterSet {
        self.required
    }

    /// `true` if no feedback has been recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl fmt::Display for ConstraintState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pattern: String = self
            .fixed
            .iter()
            .map(|slot| slot.map_or('_', char::from))
            .collect();
        write!(f, "fixed={pattern} required={} excluded={}", self.required, self.excluded)?;
        for (letter, positions) in &self.misplaced {
            write!(f, " {}!{positions:?}", char::from(*letter))?;
        }
        Ok(())
    }
}
