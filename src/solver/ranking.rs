//! Commonality ranking of candidate words
//!
//! Two signals are combined:
//! - a letter-frequency score, computed from how often each letter occurs
//!   across the whole dictionary, penalised for repeated letters
//! - a corpus probability, the empirical frequency of the word in a large
//!   natural-language text sample
//!
//! Large candidate pools are ordered by score; once the pool is small the
//! corpus probability becomes the primary key.

use crate::core::{WORD_LENGTH, Word};
use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};
use std::cmp::Ordering;

/// Below this many candidates, rank by corpus probability first
pub const PROBABILITY_FIRST_BELOW: usize = 30;

/// Precomputed letter frequencies and corpus counts
///
/// Built once at startup and read-only afterwards.
#[derive(Debug, Clone)]
pub struct FrequencyTables {
    letter_counts: [u64; 26],
    total_letters: u64,
    corpus_counts: FxHashMap<String, u64>,
    corpus_total: u64,
}

impl FrequencyTables {
    /// Build the tables from the full dictionary and a stream of corpus tokens
    ///
    /// Only corpus tokens that are dictionary words are counted.
    #[must_use]
    pub fn build(dictionary: &[Word], corpus: impl IntoIterator<Item = Word>) -> Self {
        let mut letter_counts = [0u64; 26];
        for word in dictionary {
            for &ch in word.chars() {
                letter_counts[usize::from(ch - b'a')] += 1;
            }
        }

        let total_letters = letter_counts.iter().sum();

        let known: FxHashSet<&str> = dictionary.iter().map(Word::text).collect();
        let mut corpus_counts: FxHashMap<String, u64> = FxHashMap::default();
        let mut corpus_total = 0;
        for token in corpus {
            if known.contains(token.text()) {
                *corpus_counts.entry(token.text().to_string()).or_insert(0) += 1;
                corpus_total += 1;
            }
        }

        Self {
            letter_counts,
            total_letters,
            corpus_counts,
            corpus_total,
        }
    }

    /// Summed letter frequency of a word
    ///
    /// Counts are added as integers before dividing, so anagrams sum to
    /// exactly the same value.
    #[must_use]
    pub fn letter_mass(&self, word: &Word) -> f64 {
        if self.total_letters == 0 {
            return 0.0;
        }
        let count: u64 = word
            .chars()
            .iter()
            .map(|&ch| self.letter_counts[usize::from(ch - b'a')])
            .sum();
        count as f64 / self.total_letters as f64
    }

    /// How many times the word occurred in the corpus
    #[must_use]
    pub fn corpus_count(&self, word: &Word) -> u64 {
        self.corpus_counts.get(word.text()).copied().unwrap_or(0)
    }

    /// Total number of counted corpus tokens
    #[inline]
    #[must_use]
    pub const fn corpus_total(&self) -> u64 {
        self.corpus_total
    }
}

/// A word with its ranking signals
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedWord<'a> {
    pub word: &'a Word,
    pub score: f64,
    pub probability: f64,
}

/// Scores and orders candidate words
#[derive(Debug, Clone)]
pub struct RankingModel {
    tables: FrequencyTables,
}

impl RankingModel {
    #[must_use]
    pub const fn new(tables: FrequencyTables) -> Self {
        Self { tables }
    }

    #[inline]
    #[must_use]
    pub const fn tables(&self) -> &FrequencyTables {
        &self.tables
    }

    /// Letter-frequency commonality of a word
    ///
    /// Sum of the letter frequencies, divided by `5 - distinct + 1` so that
    /// words reusing letters score lower.
    ///
    /// # Examples
    /// ```
    /// use wordle_helper::core::Word;
    /// use wordle_helper::solver::{FrequencyTables, RankingModel};
    ///
    /// let dictionary = vec![Word::new("crane").unwrap(), Word::new("mummy").unwrap()];
    /// let model = RankingModel::new(FrequencyTables::build(&dictionary, []));
    ///
    /// assert!(model.score(&dictionary[0]) > model.score(&dictionary[1]));
    /// ```
    #[must_use]
    pub fn score(&self, word: &Word) -> f64 {
        self.tables.letter_mass(word) / (WORD_LENGTH - word.distinct_letters() + 1) as f64
    }

    /// Corpus occurrence probability of a word (0.0 if never seen)
    #[must_use]
    pub fn probability(&self, word: &Word) -> f64 {
        match self.tables.corpus_total() {
            0 => 0.0,
            total => self.tables.corpus_count(word) as f64 / total as f64,
        }
    }

    /// Score and order all `words`, best first
    ///
    /// With fewer than 30 words the order is probability then score;
    /// otherwise score then probability. Both keys descend. Equal entries
    /// keep their input order.
    #[must_use]
    pub fn rank<'a>(&self, words: &'a [Word]) -> Vec<RankedWord<'a>> {
        let mut ranked: Vec<RankedWord<'a>> = words
            .par_iter()
            .map(|word| RankedWord {
                word,
                score: self.score(word),
                probability: self.probability(word),
            })
            .collect();

        let probability_first = words.len() < PROBABILITY_FIRST_BELOW;
        ranked.par_sort_by(|a, b| {
            if probability_first {
                descending(a.probability, b.probability)
                    .then_with(|| descending(a.score, b.score))
            } else {
                descending(a.score, b.score)
                    .then_with(|| descending(a.probability, b.probability))
            }
        });

        ranked
    }

    /// The best `n` words of `words`
    #[must_use]
    pub fn top<'a>(&self, words: &'a [Word], n: usize) -> Vec<RankedWord<'a>> {
        let mut ranked = self.rank(words);
        ranked.truncate(n);
        ranked
    }
}

fn descending(a: f64, b: f64) -> Ordering {
    b.total_cmp(&a)
}
