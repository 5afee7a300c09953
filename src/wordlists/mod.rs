//! Word lists for Wordle solving
//!
//! The dictionary is read from a newline-delimited file at startup and
//! trimmed to lowercase five-letter words.

pub mod loader;

use crate::core::Word;
use rustc_hash::FxHashSet;

/// The full set of playable words
///
/// Words are kept sorted so iteration order (and therefore ranking
/// tie-breaks) is deterministic.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Vec<Word>,
    index: FxHashSet<String>,
}

impl Dictionary {
    /// Build a dictionary from words, dropping duplicates
    #[must_use]
    pub fn from_words(words: impl IntoIterator<Item = Word>) -> Self {
        let mut words: Vec<Word> = words.into_iter().collect();
        words.sort();
        words.dedup();

        let index = words.iter().map(|w| w.text().to_string()).collect();
        Self { words, index }
    }

    /// All words, in alphabetical order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.index.contains(text)
    }

    /// Find the dictionary entry for `text`
    #[must_use]
    pub fn lookup(&self, text: &str) -> Option<&Word> {
        if !self.contains(text) {
            return None;
        }
        self.words
            .binary_search_by(|w| w.text().cmp(text))
            .ok()
            .map(|i| &self.words[i])
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loader::words_from_slice;

    #[test]
    fn from_words_sorts_and_dedups() {
        let dict = Dictionary::from_words(words_from_slice(&["slate", "crane", "slate", "arose"]));
        let texts: Vec<&str> = dict.words().iter().map(Word::text).collect();
        assert_eq!(texts, ["arose", "crane", "slate"]);
        assert_eq!(dict.len(), 3);
    }

    #[test]
    fn lookup_and_contains() {
        let dict = Dictionary::from_words(words_from_slice(&["crane", "slate"]));
        assert!(dict.contains("crane"));
        assert!(!dict.contains("irate"));
        assert_eq!(dict.lookup("slate").map(Word::text), Some("slate"));
        assert!(dict.lookup("irate").is_none());
    }

    #[test]
    fn empty_dictionary() {
        let dict = Dictionary::default();
        assert!(dict.is_empty());
        assert!(dict.lookup("crane").is_none());
    }
}
