//! RPS CLI - Command-line interface
//!
//! Commands:
//! - play: Play a match between two players
//! - games: List built-in games

mod games_cmd;
mod play_cmd;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "rps")]
#[command(about = "Generalized rock-paper-scissors")]
struct Cli {
    /// Random seed for computer players
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a match
    Play(play_cmd::PlayArgs),
    /// List built-in games
    Games,
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays the game transcript
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => play_cmd::run(args, cli.seed),
        Commands::Games => games_cmd::run(),
    }
}
