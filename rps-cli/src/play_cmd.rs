//! Play command - run a match between two players
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: load_game(), build_players(), play_match(), report_results()
//! - Level 3: MatchHandler turns (rps-match)
//! - Level 4: formatting utilities

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use rps_core::{Game, Player, PlayerError};
use rps_match::{
    tally_brief, MatchConfig, MatchError, MatchHandler, MatchSummary, PlayerSpec, PromptStream,
    TurnLimit,
};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct PlayArgs {
    /// Built-in game (rps, rpsls)
    #[arg(long, default_value = "rps", conflicts_with = "game_file")]
    pub game: String,

    /// Game definition JSON file
    #[arg(long, value_name = "FILE")]
    pub game_file: Option<PathBuf>,

    /// First player: human:NAME, computer:NAME, weighted:NAME or script:NAME:m1,m2
    #[arg(long, default_value = "human:player")]
    pub player1: PlayerSpec,

    /// Second player, same format as --player1
    #[arg(long, default_value = "computer:random")]
    pub player2: PlayerSpec,

    /// Number of turns (omit to play until input ends)
    #[arg(long)]
    pub turns: Option<usize>,

    /// Output final results as JSON
    #[arg(long)]
    pub json: bool,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run play command
///
/// 1. Load the game
/// 2. Build both players
/// 3. Play the match
/// 4. Report results
///
/// With `--json`, stdout carries only the JSON summary; the turn transcript
/// and human prompts go to stderr.
pub fn run(args: PlayArgs, seed: Option<u64>) -> Result<()> {
    run_to(args, seed, &mut io::stdout())
}

fn run_to<W: Write>(args: PlayArgs, seed: Option<u64>, out: &mut W) -> Result<()> {
    let game = load_game(&args)?;
    let config = MatchConfig {
        turn_limit: TurnLimit::from(args.turns),
        seed,
    };
    let prompts = if args.json { PromptStream::Stderr } else { PromptStream::Stdout };
    let (mut player1, mut player2) = build_players(&args, &config, prompts)?;

    tracing::info!(
        "Starting match: {} vs {} on {} ({:?})",
        player1,
        player2,
        game.name(),
        config.turn_limit
    );

    let summary = if args.json {
        play_match(&game, &mut player1, &mut player2, &config, io::stderr())?
    } else {
        play_match(&game, &mut player1, &mut player2, &config, &mut *out)?
    };

    tracing::info!("Match finished after {} turns", summary.turns);

    report_results(&summary, args.json, out)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Resolve the game from a file or a preset key
fn load_game(args: &PlayArgs) -> Result<Game> {
    match &args.game_file {
        Some(path) => Game::load(path),
        None => Game::preset(&args.game)
            .with_context(|| format!("Unknown game: {} (see `rps games`)", args.game)),
    }
}

/// Build both players, giving each computer its own seed
fn build_players(
    args: &PlayArgs,
    config: &MatchConfig,
    prompts: PromptStream,
) -> Result<(Player, Player)> {
    let player1 = args
        .player1
        .build_with(config.seed_for(0), prompts)
        .with_context(|| format!("Failed to create player 1: {}", args.player1.name()))?;
    let player2 = args
        .player2
        .build_with(config.seed_for(1), prompts)
        .with_context(|| format!("Failed to create player 2: {}", args.player2.name()))?;
    Ok((player1, player2))
}

/// Play until the turn limit, or until input ends in an unbounded match
fn play_match<W: Write>(
    game: &Game,
    player1: &mut Player,
    player2: &mut Player,
    config: &MatchConfig,
    out: W,
) -> Result<MatchSummary> {
    let mut handler = MatchHandler::new(game, player1, player2, out);

    match handler.play(config.turn_limit) {
        Ok(_) => {}
        Err(MatchError::Player { seat, source: PlayerError::InputClosed })
            if config.turn_limit == TurnLimit::Unbounded =>
        {
            tracing::info!("Input closed for {}, ending match", seat);
        }
        Err(e) => {
            return Err(e).with_context(|| {
                format!("Match aborted on turn {}", handler.turns_played() + 1)
            })
        }
    }

    Ok(handler.summary())
}

/// Print final results
fn report_results<W: Write>(summary: &MatchSummary, json: bool, out: &mut W) -> Result<()> {
    if json {
        writeln!(out, "{}", summary.to_json()?)?;
    } else {
        write_text_results(summary, out)?;
    }
    Ok(())
}

// ============================================================================
// LEVEL 4 - UTILITIES
// ============================================================================

/// Print results as text
fn write_text_results<W: Write>(summary: &MatchSummary, out: &mut W) -> io::Result<()> {
    writeln!(out, "\n=== {} ===", summary.game)?;
    writeln!(out, "Turns played: {}", summary.turns)?;
    writeln!(out, "{:<24} {}", summary.player1, tally_brief(&summary.standings.player1))?;
    writeln!(out, "{:<24} {}", summary.player2, tally_brief(&summary.standings.player2))?;
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
