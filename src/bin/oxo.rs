//! oxo CLI - noughts and crosses search engine
//!
//! This CLI provides:
//! - Computing the engine's move for a position
//! - Static evaluation breakdowns
//! - Match series against baseline opponents
//! - Interactive play on the terminal

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "oxo")]
#[command(version, about = "Minimax search engine for noughts and crosses", long_about = None)]
struct Cli {
    /// Log search details (overridden by RUST_LOG)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the engine's move for a position
    Move(oxo::cli::commands::best_move::MoveArgs),

    /// Show the static evaluation of a position
    Eval(oxo::cli::commands::evaluate::EvalArgs),

    /// Play the engine against an opponent
    Match(oxo::cli::commands::match_cmd::MatchArgs),

    /// Play against the engine
    Play(oxo::cli::commands::play::PlayArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "oxo=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Move(args) => oxo::cli::commands::best_move::execute(args),
        Commands::Eval(args) => oxo::cli::commands::evaluate::execute(args),
        Commands::Match(args) => oxo::cli::commands::match_cmd::execute(args),
        Commands::Play(args) => oxo::cli::commands::play::execute(args),
    }
}
