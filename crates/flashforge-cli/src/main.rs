//! flashforge CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "flashforge", version, about = "Gamified flashcard review engine")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Review a deck interactively (reads commands from stdin)
    Review {
        /// Path to a .toml deck (defaults to the built-in starter deck)
        #[arg(long)]
        deck: Option<PathBuf>,

        /// Shuffle the deck before the first card
        #[arg(long)]
        shuffle: bool,

        /// RNG seed for reproducible shuffles
        #[arg(long)]
        seed: Option<u64>,

        /// Write a JSON summary of the run to this path
        #[arg(long)]
        summary: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Apply a scripted sequence of grades with a simulated clock
    Simulate {
        /// Grades to apply in order (e.g. "good,easy,again")
        #[arg(long)]
        grades: String,

        /// Path to a .toml deck (defaults to the built-in starter deck)
        #[arg(long)]
        deck: Option<PathBuf>,

        /// Simulated think time before each grade, in milliseconds
        #[arg(long, default_value = "0")]
        elapsed_ms: u64,

        /// Shuffle the deck before the first card
        #[arg(long)]
        shuffle: bool,

        /// RNG seed for reproducible shuffles
        #[arg(long)]
        seed: Option<u64>,

        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Validate deck TOML files
    Validate {
        /// Path to deck file or directory
        #[arg(long)]
        deck: PathBuf,
    },

    /// Show the grade rules and badge definitions
    Rules,

    /// Create starter config and example deck
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("flashforge_core=warn".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Review {
            deck,
            shuffle,
            seed,
            summary,
            config,
        } => commands::review::execute(deck, shuffle, seed, summary, config),
        Commands::Simulate {
            grades,
            deck,
            elapsed_ms,
            shuffle,
            seed,
            format,
            config,
        } => commands::simulate::execute(grades, deck, elapsed_ms, shuffle, seed, format, config),
        Commands::Validate { deck } => commands::validate::execute(deck),
        Commands::Rules => commands::rules::execute(),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
