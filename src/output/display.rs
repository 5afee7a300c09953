//! Display functions for rounds and command results

use super::formatters::{create_progress_bar, pluralize, rank_row};
use crate::commands::{BenchmarkResult, SolveResult};
use crate::solver::{Outcome, RankedWord, Rejection, RoundReport};
use colored::Colorize;

/// How many leftover candidates to list when attempts run out
const LEFTOVER_SHOWN: usize = 15;

/// Explain the feedback codes
pub fn print_legend() {
    println!("Type the color-coded reply from Wordle:");
    println!("  {} for Green", "G".green().bold());
    println!("  {} for Yellow", "Y".yellow().bold());
    println!("  {} for Gray", "?".bright_black().bold());
    println!("Press Ctrl-C to quit.\n");
}

/// Print the header and ranked candidate table for an attempt
pub fn print_round(attempt: usize, remaining: usize, top: &[RankedWord<'_>]) {
    println!(
        "\n{} with {}",
        format!("Attempt {attempt}").bright_cyan().bold(),
        pluralize(remaining, "possible word")
    );
    println!("{}", "─".repeat(36).cyan());
    for ranked in top {
        println!("{}", rank_row(ranked));
    }
    println!("{}", "─".repeat(36).cyan());
}

pub fn print_rejection(rejection: &Rejection) {
    println!("{} {rejection}", "Error -".red());
}

/// Tell the user the last feedback contradicted everything left
pub fn print_reverted(report: &RoundReport) {
    println!(
        "{}",
        format!(
            "No word matches {} for {}; keeping the previous {} minus the guess.",
            report.feedback,
            report.guess.text().to_uppercase(),
            pluralize(report.candidates_before, "candidate")
        )
        .yellow()
    );
}

/// Print how an interactive session ended
pub fn print_outcome(outcome: &Outcome) {
    match outcome {
        Outcome::Solved { word, attempts } => {
            println!(
                "\n{} The word \"{word}\" is correct after {}.",
                "Congrats!".bright_green().bold(),
                pluralize(*attempts, "attempt")
            );
        }
        Outcome::Exhausted {
            attempts,
            remaining,
        } => {
            println!(
                "\n{} after {}; {} left.",
                "Out of attempts".red().bold(),
                pluralize(*attempts, "attempt"),
                pluralize(remaining.len(), "candidate")
            );
            for word in remaining.iter().take(LEFTOVER_SHOWN) {
                println!("  • {}", word.text());
            }
        }
        Outcome::Interrupted { .. } => {
            println!("\n{}", "C YA!".bright_cyan());
        }
    }
}

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for step in &result.steps {
        println!(
            "\nAttempt {}: {} {}",
            step.attempt,
            step.guess.text().to_uppercase(),
            step.feedback.to_emoji()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            if step.reverted {
                println!("  {}", "Feedback eliminated everything; reverted".yellow());
            }
        }
    }

    println!();
    match &result.outcome {
        Outcome::Solved { attempts, .. } => println!(
            "{}",
            format!("✅ Solved in {}!", pluralize(*attempts, "attempt"))
                .green()
                .bold()
        ),
        Outcome::Exhausted { attempts, .. } => println!(
            "{}",
            format!("❌ Failed to solve in {}", pluralize(*attempts, "attempt"))
                .red()
                .bold()
        ),
        Outcome::Interrupted { attempt } => println!(
            "{}",
            format!("❌ Ran out of candidates at attempt {attempt}")
                .red()
                .bold()
        ),
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult, max_attempts: usize) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Solved:           {}",
        format!("{}", result.solved).green()
    );
    println!(
        "   Failed:           {}",
        format!("{}", result.failed()).red()
    );
    println!(
        "   Average attempts: {}",
        format!("{:.2}", result.average_attempts)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_attempts).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_attempts).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for attempts in 1..=max_attempts {
        let count = result.distribution.get(&attempts).copied().unwrap_or(0);
        let pct = if result.total_words == 0 {
            0.0
        } else {
            (count as f64 / result.total_words as f64) * 100.0
        };
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {attempts}: {} {count:4} ({pct:5.1}%)", bar.green());
    }

    if !result.failures.is_empty() {
        println!("\n❌ {}", "Unsolved:".red().bold());
        for word in result.failures.iter().take(LEFTOVER_SHOWN) {
            println!("   {word}");
        }
        if result.failures.len() > LEFTOVER_SHOWN {
            println!("   … and {} more", result.failures.len() - LEFTOVER_SHOWN);
        }
    }
}
