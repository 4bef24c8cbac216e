//! RPS Core - Game model and players
//!
//! This crate provides the core logic for generalized rock-paper-scissors:
//! - Outcomes and the payoff-matrix selection set
//! - Games (named selection sets, built-in presets, JSON files)
//! - Players with a private history and pluggable move sources
//! - Human (line input), computer (random) and scripted move sources

pub mod outcome;
pub mod selection;
pub mod game;
pub mod player;
pub mod human;
pub mod computer;

// Re-exports for convenient access
pub use outcome::Outcome;
pub use selection::{ConfigError, SelectionError, SelectionSet};
pub use game::{Game, PRESETS};
pub use player::{MoveSource, Player, PlayerError, PlayerKind, Scripted, TurnRecord};
pub use human::{parse_move, HumanInput, LineReader, StdinLines};
pub use computer::{Computer, Strategy};
