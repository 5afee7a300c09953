//! Candidate filtering against a constraint state

use super::ConstraintState;
use crate::core::Word;

/// Check whether a word is consistent with everything in `state`
///
/// A word survives when it:
/// 1. contains every required letter
/// 2. contains no excluded letter
/// 3. has every fixed letter at its position
/// 4. has no present letter at a position it was ruled out of
#[must_use]
pub fn is_consistent(word: &Word, state: &ConstraintState) -> bool {
    if !state.required().is_subset(word.letters()) {
        return false;
    }

    if !state.excluded().is_disjoint(word.letters()) {
        return false;
    }

    let fixed_ok = state
        .fixed()
        .iter()
        .enumerate()
        .all(|(pos, slot)| slot.is_none_or(|letter| word.char_at(pos) == letter));
    if !fixed_ok {
        return false;
    }

    state.misplaced().iter().all(|(&letter, positions)| {
        positions.iter().all(|&pos| word.char_at(pos) != letter)
    })
}

/// Keep the candidates consistent with `state`, preserving their order
///
/// Only the given candidates are considered, so words dropped in an earlier
/// round can never come back.
///
/// # Examples
/// ```
/// use wordle_helper::core::{Feedback, Word};
/// use wordle_helper::solver::{ConstraintState, filter};
/// use wordle_helper::wordlists::loader::words_from_slice;
///
/// let candidates = words_from_slice(&["crane", "slate", "arose", "irate"]);
/// let state = ConstraintState::new().merge(
///     &Word::new("arose").unwrap(),
///     &Feedback::parse("YG??G").unwrap(),
/// );
/// let survivors = filter(&candidates, &state);
/// assert_eq!(survivors, words_from_slice(&["crane", "irate"]));
/// ```
#[must_use]
pub fn filter(candidates: &[Word], state: &ConstraintState) -> Vec<Word> {
    candidates
        .iter()
        .filter(|word| is_consistent(word, state))
        .cloned()
        .collect()
}
