//! Benchmark command
//!
//! Solves many dictionary words automatically and collects statistics on
//! how many attempts the ranking needs.

use super::solve::{SolveConfig, solve_word};
use crate::core::Word;
use crate::solver::{Outcome, RankingModel, SolverConfig};
use crate::wordlists::Dictionary;
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;
use rand::prelude::IndexedRandom;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub average_attempts: f64,
    pub min_attempts: usize,
    pub max_attempts: usize,
    /// Solved words per attempt count
    pub distribution: HashMap<usize, usize>,
    /// Words that ran out of attempts or candidates
    pub failures: Vec<String>,
    pub duration: Duration,
    pub words_per_second: f64,
}

impl BenchmarkResult {
    #[must_use]
    pub fn failed(&self) -> usize {
        self.failures.len()
    }
}

/// Pick `count` random dictionary words, or all of them
#[must_use]
pub fn select_targets(dictionary: &Dictionary, count: Option<usize>) -> Vec<&Word> {
    match count {
        Some(n) => dictionary
            .words()
            .choose_multiple(&mut rand::rng(), n)
            .collect(),
        None => dictionary.words().iter().collect(),
    }
}

/// Solve every target word and summarise the attempts needed
///
/// # Errors
///
/// Returns an error if the progress bar template is invalid or a target
/// cannot be solved at all (not a dictionary word).
pub fn run_benchmark(
    dictionary: &Dictionary,
    model: &RankingModel,
    config: SolverConfig,
    targets: &[&Word],
) -> Result<BenchmarkResult> {
    let pb = ProgressBar::new(targets.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let mut total_attempts = 0;
    let mut min_attempts = usize::MAX;
    let mut max_attempts = 0;
    let mut distribution: HashMap<usize, usize> = HashMap::new();
    let mut failures = Vec::new();

    for (idx, target) in targets.iter().enumerate() {
        let solve_config = SolveConfig {
            target: target.text().to_string(),
            solver: config,
        };
        let result = solve_word(&solve_config, dictionary, model)?;

        match result.outcome {
            Outcome::Solved { attempts, .. } => {
                total_attempts += attempts;
                min_attempts = min_attempts.min(attempts);
                max_attempts = max_attempts.max(attempts);
                *distribution.entry(attempts).or_insert(0) += 1;
            }
            other => {
                debug!("benchmark: {target} not solved ({other:?})");
                failures.push(target.text().to_string());
            }
        }

        let solved = idx + 1 - failures.len();
        if solved > 0 {
            pb.set_message(format!("Avg: {:.2}", total_attempts as f64 / solved as f64));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    let duration = start.elapsed();
    let solved = targets.len() - failures.len();
    let average_attempts = if solved == 0 {
        0.0
    } else {
        total_attempts as f64 / solved as f64
    };
    let words_per_second = if duration.as_secs_f64() > 0.0 {
        targets.len() as f64 / duration.as_secs_f64()
    } else {
        0.0
    };

    Ok(BenchmarkResult {
        total_words: targets.len(),
        solved,
        average_attempts,
        min_attempts: if solved == 0 { 0 } else { min_attempts },
        max_attempts,
        distribution,
        failures,
        duration,
        words_per_second,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::FrequencyTables;
    use crate::wordlists::loader::{corpus_tokens, words_from_slice};

    fn setup() -> (Dictionary, RankingModel) {
        let dictionary = Dictionary::from_words(words_from_slice(&[
            "crane", "slate", "irate", "trace", "crate", "grate", "arose", "roast", "toast",
            "beast", "feast", "least",
        ]));
        let model = RankingModel::new(FrequencyTables::build(
            dictionary.words(),
            corpus_tokens("crane slate slate least"),
        ));
        (dictionary, model)
    }

    #[test]
    fn select_targets_respects_count() {
        let (dictionary, _) = setup();
        assert_eq!(select_targets(&dictionary, Some(5)).len(), 5);
        assert_eq!(select_targets(&dictionary, Some(50)).len(), 12);
        assert_eq!(select_targets(&dictionary, None).len(), 12);
    }

    #[test]
    fn benchmark_solves_everything() {
        let (dictionary, model) = setup();
        let targets = select_targets(&dictionary, None);

        let result = run_benchmark(&dictionary, &model, SolverConfig::default(), &targets).unwrap();
        assert_eq!(result.total_words, 12);
        assert_eq!(result.solved, 12);
        assert_eq!(result.failed(), 0);
        assert_eq!(result.distribution.values().sum::<usize>(), 12);
        assert_eq!(result.min_attempts, 1);
        assert!(result.max_attempts <= 6);
        assert!(result.average_attempts >= 1.0);
    }

    #[test]
    fn benchmark_counts_failures() {
        let (dictionary, model) = setup();
        let targets = select_targets(&dictionary, None);

        // One attempt only: just the first guess can be solved
        let result =
            run_benchmark(&dictionary, &model, SolverConfig::new(1, 15), &targets).unwrap();
        assert_eq!(result.solved, 1);
        assert_eq!(result.failed(), 11);
        assert_eq!(result.distribution.get(&1), Some(&1));
    }
}
