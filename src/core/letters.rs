//! Compact set of lowercase ASCII letters
//!
//! Used for the required / excluded letter sets of the constraint state and
//! for a word's own distinct letters.

use std::fmt;

/// A set of letters `a..=z`, stored as a 26-bit mask
///
/// Bytes outside `a..=z` are never members: inserting one is a no-op.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LetterSet(u32);

impl LetterSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    #[inline]
    const fn bit(letter: u8) -> u32 {
        if letter.is_ascii_lowercase() {
            1 << (letter - b'a')
        } else {
            0
        }
    }

    /// Add a letter, returning `true` if it was not already present
    #[inline]
    pub fn insert(&mut self, letter: u8) -> bool {
        let bit = Self::bit(letter);
        let added = bit != 0 && self.0 & bit == 0;
        self.0 |= bit;
        added
    }

    /// Remove a letter, returning `true` if it was present
    #[inline]
    pub fn remove(&mut self, letter: u8) -> bool {
        let bit = Self::bit(letter);
        let present = self.0 & bit != 0;
        self.0 &= !bit;
        present
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        self.0 & Self::bit(letter) != 0
    }

    /// `true` if every letter of `self` is also in `other`
    #[inline]
    #[must_use]
    pub const fn is_subset(self, other: Self) -> bool {
        self.0 & !other.0 == 0
    }

    /// `true` if the two sets share no letter
    #[inline]
    #[must_use]
    pub const fn is_disjoint(self, other: Self) -> bool {
        self.0 & other.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate the letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (b'a'..=b'z').filter(move |&letter| self.contains(letter))
    }
}

impl FromIterator<u8> for LetterSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.iter() {
            write!(f, "{}", letter as char)?;
        }
        Ok(())
    }
}
