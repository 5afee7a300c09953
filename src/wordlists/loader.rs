//! Word list loading utilities
//!
//! Reads the dictionary and the frequency corpus from disk and turns their
//! raw text into `Word`s.

use super::Dictionary;
use crate::core::{WORD_LENGTH, Word};
use anyhow::{Context, Result, bail};
use log::info;
use std::fs;
use std::path::Path;

/// Load the dictionary from a newline-delimited word file
///
/// # Errors
///
/// Returns an error if the file cannot be read, or if it holds no usable
/// five-letter words.
///
/// # Examples
/// ```no_run
/// use wordle_helper::wordlists::loader::load_dictionary;
///
/// let dictionary = load_dictionary("/usr/share/dict/words").unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_dictionary<P: AsRef<Path>>(path: P) -> Result<Dictionary> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read dictionary {}", path.display()))?;

    let dictionary = trim_to_size(content.lines());
    if dictionary.is_empty() {
        bail!(
            "dictionary {} contains no {WORD_LENGTH}-letter words",
            path.display()
        );
    }

    info!(
        "loaded {} words from dictionary {}",
        dictionary.len(),
        path.display()
    );
    Ok(dictionary)
}

/// Read the whole frequency corpus as text
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn load_corpus<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read corpus {}", path.display()))?;

    info!("loaded {} bytes of corpus from {}", text.len(), path.display());
    Ok(text)
}

/// Keep only lines that are exactly five ASCII letters, lowercased
///
/// Entries with apostrophes, digits, accents or surrounding whitespace
/// other than a trailing newline are dropped rather than repaired.
pub fn trim_to_size<'a>(lines: impl IntoIterator<Item = &'a str>) -> Dictionary {
    Dictionary::from_words(lines.into_iter().filter_map(|line| {
        let line = line.trim_end_matches('\r');
        if line.len() == WORD_LENGTH && line.bytes().all(|b| b.is_ascii_alphabetic()) {
            Word::new(line).ok()
        } else {
            None
        }
    }))
}

/// Extract five-letter tokens from free text
///
/// The text is lowercased and split into runs of word characters
/// (alphanumerics and `_`). Each run is cut into consecutive,
/// non-overlapping five-character chunks; a shorter remainder is dropped.
/// Chunks that are not five lowercase letters are skipped.
///
/// # Examples
/// ```
/// use wordle_helper::wordlists::loader::corpus_tokens;
///
/// let tokens: Vec<String> = corpus_tokens("The Crane flew, cranes flew.")
///     .map(|w| w.text().to_string())
///     .collect();
/// assert_eq!(tokens, ["crane", "crane"]);
/// ```
pub fn corpus_tokens(text: &str) -> impl Iterator<Item = Word> + '_ {
    text.split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .flat_map(|run| {
            let chars: Vec<char> = run.chars().flat_map(char::to_lowercase).collect();
            chars
                .chunks_exact(WORD_LENGTH)
                .map(|chunk| chunk.iter().collect::<String>())
                .collect::<Vec<_>>()
        })
        .filter_map(|token| Word::new(token).ok())
}

/// Convert a string slice to a Word vector, skipping invalid entries
///
/// # Examples
/// ```
/// use wordle_helper::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["crane", "toolong", "slate"]);
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
