//! Evil Hangman - CLI
//!
//! Play adversarial Hangman in the terminal, or let a letter-frequency guesser
//! play many rounds against the engine.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use evil_hangman::{
    commands::{PlayConfig, SimulateConfig, run_play, run_simulation},
    core::Difficulty,
    dictionary::{Dictionary, loader::load_from_file},
    game::HangmanEngine,
    output::print_simulation_result,
};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "evil_hangman",
    about = "Hangman where the computer cheats: the word is chosen as late as possible",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file, one word per line (default: embedded list)
    #[arg(short = 'w', long, global = true)]
    dictionary: Option<PathBuf>,

    /// Show debug logging and the word families after each guess
    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively (default)
    Play {
        /// Word length (asked for if omitted)
        #[arg(short, long)]
        length: Option<usize>,

        /// Wrong guesses allowed (asked for if omitted)
        #[arg(short, long)]
        guesses: Option<u32>,

        /// Difficulty: relaxed, moderate or strict (asked for if omitted)
        #[arg(short = 'D', long)]
        difficulty: Option<Difficulty>,
    },

    /// Let a letter-frequency guesser play many rounds
    Simulate {
        /// Number of rounds to play
        #[arg(short = 'n', long, default_value = "200")]
        rounds: usize,

        /// Word length (random per round if omitted)
        #[arg(short, long)]
        length: Option<usize>,

        /// Wrong guesses allowed
        #[arg(short, long, default_value = "10")]
        guesses: u32,

        /// Difficulty: relaxed, moderate or strict
        #[arg(short = 'D', long, default_value = "strict")]
        difficulty: Difficulty,

        /// Seed for reproducible runs
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

fn init_logging(debug: bool) {
    let level = if debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn load_dictionary(path: Option<&PathBuf>) -> Result<Dictionary> {
    match path {
        Some(path) => load_from_file(path),
        None => Dictionary::embedded().context("Embedded dictionary is empty"),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let dictionary = load_dictionary(cli.dictionary.as_ref())?;
    log::info!("dictionary has {} words", dictionary.len());

    let command = cli.command.unwrap_or(Commands::Play {
        length: None,
        guesses: None,
        difficulty: None,
    });

    match command {
        Commands::Play {
            length,
            guesses,
            difficulty,
        } => {
            let config = PlayConfig {
                length,
                guesses,
                difficulty,
                debug: cli.debug,
            };
            run_play_command(dictionary, &config)
        }
        Commands::Simulate {
            rounds,
            length,
            guesses,
            difficulty,
            seed,
        } => {
            let config = SimulateConfig {
                rounds,
                length,
                guesses,
                difficulty,
                seed,
                show_progress: true,
            };
            run_simulate_command(&dictionary, &config)
        }
    }
}

fn run_play_command(dictionary: Dictionary, config: &PlayConfig) -> Result<()> {
    let mut engine = HangmanEngine::new(dictionary);
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    run_play(&mut engine, config, &mut input, &mut output, &mut rand::rng())
}

fn run_simulate_command(dictionary: &Dictionary, config: &SimulateConfig) -> Result<()> {
    println!("Simulating {} rounds at {}...", config.rounds, config.difficulty);

    let result = run_simulation(dictionary, config).context("Simulation failed")?;
    print_simulation_result(&result);
    Ok(())
}
