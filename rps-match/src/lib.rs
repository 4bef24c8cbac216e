//! RPS Match - Turn-by-turn play between two players
//!
//! This crate provides match infrastructure:
//! - A match handler that resolves turns and keeps the match history
//! - Running tallies and text reports
//! - Match and player configuration
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: MatchHandler::play (orchestration)
//! - Level 2: MatchHandler::play_turn (phases)
//! - Level 3: Standings::from_history (steps)
//! - Level 4: report formatting, summary, configuration

mod config;
mod handler;
mod report;
mod summary;

pub use config::{MatchConfig, PlayerSpec, PromptStream, TurnLimit};
pub use handler::{MatchError, MatchHandler, MatchTurn, Seat, Standings, Tally};
pub use report::{standings_line, tally_brief, turn_report};
pub use summary::MatchSummary;
