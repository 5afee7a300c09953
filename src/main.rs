//! Wordle Helper - CLI
//!
//! Interactive Wordle assistant: enter each guess and the colours Wordle
//! showed, and it ranks the words that are still possible.

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::info;
use std::path::PathBuf;
use wordle_helper::{
    commands::{SolveConfig, run_benchmark, run_play, select_targets, solve_word},
    output::{print_benchmark_result, print_solve_result},
    solver::{FrequencyTables, RankingModel, SolverConfig},
    wordlists::{
        Dictionary,
        loader::{corpus_tokens, load_corpus, load_dictionary},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_helper",
    about = "Wordle assistant that narrows candidates from colour feedback and ranks them by commonality",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Newline-delimited word list
    #[arg(short, long, global = true, default_value = "/usr/share/dict/words")]
    dictionary: PathBuf,

    /// Free text used to estimate how common each word is
    #[arg(short, long, global = true, default_value = "big.txt")]
    corpus: PathBuf,

    /// Attempts allowed per game
    #[arg(short = 'a', long, global = true, default_value_t = 6)]
    max_attempts: usize,

    /// Ranked candidates shown each round
    #[arg(short, long, global = true, default_value_t = 15)]
    top: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode (default): type your guesses and Wordle's replies
    Play,

    /// Solve a specific target word automatically
    Solve {
        /// The target word to solve
        word: String,

        /// Show candidate counts for every attempt
        #[arg(short, long)]
        verbose: bool,
    },

    /// Solve many dictionary words and report statistics
    Benchmark {
        /// Number of random words to test (default: every word)
        #[arg(short = 'n', long)]
        count: Option<usize>,
    },
}

/// Load the dictionary and corpus and build the ranking tables
fn load_resources(cli: &Cli) -> Result<(Dictionary, RankingModel)> {
    let dictionary = load_dictionary(&cli.dictionary)?;
    let corpus = load_corpus(&cli.corpus)?;

    let tables = FrequencyTables::build(dictionary.words(), corpus_tokens(&corpus));
    info!(
        "counted {} corpus occurrences of dictionary words",
        tables.corpus_total()
    );

    Ok((dictionary, RankingModel::new(tables)))
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let (dictionary, model) = load_resources(&cli)?;
    let config = SolverConfig::new(cli.max_attempts, cli.top);

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => {
            run_play(&dictionary, &model, config)?;
        }
        Commands::Solve { word, verbose } => {
            let solve_config = SolveConfig {
                target: word,
                solver: config,
            };
            let result = solve_word(&solve_config, &dictionary, &model)?;
            print_solve_result(&result, verbose);
        }
        Commands::Benchmark { count } => {
            let targets = select_targets(&dictionary, count);
            println!("Running benchmark on {} words...", targets.len());
            let result = run_benchmark(&dictionary, &model, config, &targets)?;
            print_benchmark_result(&result, config.max_attempts);
        }
    }

    Ok(())
}
