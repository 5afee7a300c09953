//! Wordle feedback symbols and per-guess feedback
//!
//! Feedback is typed as `G` (green), `Y` (yellow) or `?` (gray):
//! - `Hit` = letter in the correct position
//! - `Present` = letter in the word, wrong position
//! - `Miss` = no (further) copy of the letter in the word

use super::{WORD_LENGTH, Word};
use rustc_hash::FxHashMap;
use std::fmt;
use std::str::FromStr;

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedbackSymbol {
    Hit,
    Present,
    Miss,
}

impl FeedbackSymbol {
    /// Parse one feedback character (`G`, `Y` or `?`, case-insensitive)
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'G' | 'g' => Some(Self::Hit),
            'Y' | 'y' => Some(Self::Present),
            '?' => Some(Self::Miss),
            _ => None,
        }
    }

    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Self::Hit => 'G',
            Self::Present => 'Y',
            Self::Miss => '?',
        }
    }

    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Hit => '🟩',
            Self::Present => '🟨',
            Self::Miss => '⬜',
        }
    }
}

/// Error type for malformed feedback strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackError {
    InvalidLength(usize),
    InvalidSymbol(char),
}

impl fmt::Display for FeedbackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Feedback must be exactly {WORD_LENGTH} symbols, got {len}")
            }
            Self::InvalidSymbol(c) => {
                write!(f, "Invalid feedback symbol '{c}' (use G, Y or ?)")
            }
        }
    }
}

impl std::error::Error for FeedbackError {}

/// The feedback received for one guess, one symbol per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([FeedbackSymbol; WORD_LENGTH]);

impl Feedback {
    /// All greens (solved)
    pub const ALL_HIT: Self = Self([FeedbackSymbol::Hit; WORD_LENGTH]);

    #[must_use]
    pub const fn new(symbols: [FeedbackSymbol; WORD_LENGTH]) -> Self {
        Self(symbols)
    }

    /// Parse a feedback string like `"?G?YG"`
    ///
    /// # Errors
    /// Returns `FeedbackError` if the string is not exactly 5 characters
    /// or contains anything other than `G`, `Y` or `?` (any case).
    ///
    /// # Examples
    /// ```
    /// use wordle_helper::core::{Feedback, FeedbackSymbol};
    ///
    /// let feedback = Feedback::parse("g?Y??").unwrap();
    /// assert_eq!(feedback.symbol(0), FeedbackSymbol::Hit);
    /// assert_eq!(feedback.symbol(2), FeedbackSymbol::Present);
    /// assert!(Feedback::parse("GGGG").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, FeedbackError> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != WORD_LENGTH {
            return Err(FeedbackError::InvalidLength(chars.len()));
        }

        let mut symbols = [FeedbackSymbol::Miss; WORD_LENGTH];
        for (slot, ch) in symbols.iter_mut().zip(chars) {
            *slot = FeedbackSymbol::from_char(ch).ok_or(FeedbackError::InvalidSymbol(ch))?;
        }

        Ok(Self(symbols))
    }

    /// Calculate the feedback the game gives when `guess` is played
    /// against `secret`
    ///
    /// Greens are marked first and consume their letter; yellows are then
    /// handed out left to right from the letters that remain, so repeated
    /// letters never earn more yellows than the secret has copies.
    ///
    /// # Examples
    /// ```
    /// use wordle_helper::core::{Feedback, Word};
    ///
    /// let guess = Word::new("robot").unwrap();
    /// let secret = Word::new("floor").unwrap();
    /// assert_eq!(Feedback::calculate(&guess, &secret).to_string(), "YY?G?");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, secret: &Word) -> Self {
        let mut result = [FeedbackSymbol::Miss; WORD_LENGTH];
        let mut available: FxHashMap<u8, u8> = FxHashMap::default();

        // First pass: greens, everything else goes into the pool
        for (i, (&g, &s)) in guess.chars().iter().zip(secret.chars()).enumerate() {
            if g == s {
                result[i] = FeedbackSymbol::Hit;
            } else {
                *available.entry(s).or_insert(0) += 1;
            }
        }

        // Second pass: yellows from the remaining pool
        for (i, &g) in guess.chars().iter().enumerate() {
            if result[i] == FeedbackSymbol::Hit {
                continue;
            }
            if let Some(count) = available.get_mut(&g) {
                if *count > 0 {
                    result[i] = FeedbackSymbol::Present;
                    *count -= 1;
                }
            }
        }

        Self(result)
    }

    /// Symbol at a position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn symbol(&self, position: usize) -> FeedbackSymbol {
        self.0[position]
    }

    #[inline]
    #[must_use]
    pub const fn symbols(&self) -> &[FeedbackSymbol; WORD_LENGTH] {
        &self.0
    }

    #[must_use]
    pub fn is_all_hit(&self) -> bool {
        *self == Self::ALL_HIT
    }

    /// Render as a row of coloured squares
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|s| s.to_emoji()).collect()
    }
}

impl FromStr for Feedback {
    type Err = FeedbackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.0 {
            write!(f, "{}", symbol.to_char())?;
        }
        Ok(())
    }
}
