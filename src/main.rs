//! Wordle Simulator - CLI
//!
//! Plays simulated Wordle games with a letter-frequency solver and reports the
//! win rate.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wordle_sim::{
    commands::{SimulationConfig, answer_rng, run_play, run_simulation, run_test_all},
    core::Word,
    output::{print_batch_statistics, print_game_result},
    solver::StrategyType,
    wordlists::Vocabulary,
};

#[derive(Parser)]
#[command(
    name = "wordle_sim",
    about = "Simulate Wordle games with a letter-frequency solver",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Strategy: frequency (default) or first
    #[arg(short, long, global = true, default_value = "frequency")]
    strategy: String,

    /// Seed for answer selection (random if unset)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Answer word list file, one word per line (default: bundled list)
    #[arg(long, global = true, requires = "allowed")]
    answers: Option<PathBuf>,

    /// Allowed guess word list file, one word per line (default: bundled list)
    #[arg(long, global = true, requires = "answers")]
    allowed: Option<PathBuf>,

    /// Print per-guess diagnostics
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play random-answer games (default)
    Simulate {
        /// Number of games (default: one per answer word)
        #[arg(short = 'n', long)]
        games: Option<usize>,
    },

    /// Play every answer word exactly once
    TestAll {
        /// Limit number of answers to play
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Play a single game with full diagnostics
    Play {
        /// Answer to play against (random if omitted)
        word: Option<String>,
    },
}

/// Load the vocabulary from files if given, else the bundled lists
fn load_vocabulary(answers: Option<&PathBuf>, allowed: Option<&PathBuf>) -> Result<Vocabulary> {
    match (answers, allowed) {
        (Some(answers), Some(allowed)) => Vocabulary::from_files(answers, allowed)
            .with_context(|| format!("loading word lists {}", answers.display())),
        _ => Vocabulary::embedded().context("loading bundled word lists"),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let vocabulary = load_vocabulary(cli.answers.as_ref(), cli.allowed.as_ref())?;
    let strategy = StrategyType::from_name(&cli.strategy);

    let command = cli.command.unwrap_or(Commands::Simulate { games: None });

    match command {
        Commands::Simulate { games } => {
            println!(
                "Simulating {} games with the {} strategy over {} allowed words",
                games.unwrap_or(vocabulary.answers().len()),
                strategy.name(),
                vocabulary.allowed().len()
            );
            let config = SimulationConfig::new(cli.seed, games, cli.verbose);
            let report = run_simulation(&vocabulary, &strategy, &config);
            print_batch_statistics(&report.statistics);
        }
        Commands::TestAll { limit } => {
            let total = vocabulary.answers().len();
            let count = limit.map_or(total, |n| n.min(total));
            let name = strategy.name();
            println!("Testing {count} answers with the {name} strategy");
            let report = run_test_all(&vocabulary, &strategy, limit, cli.verbose);
            print_batch_statistics(&report.statistics);
        }
        Commands::Play { word } => {
            let answer = word
                .map(|w| Word::new(&w).with_context(|| format!("invalid answer '{w}'")))
                .transpose()?;
            let mut rng = answer_rng(cli.seed);
            let record = run_play(&vocabulary, strategy, answer, &mut rng)?;
            print_game_result(&record);
        }
    }

    Ok(())
}
