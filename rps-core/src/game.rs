//! Game - a named selection set, with built-in presets and JSON files

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::selection::SelectionSet;

// ============================================================================
// PRESETS
// ============================================================================

/// Keys accepted by [`Game::preset`]
pub const PRESETS: &[&str] = &["rps", "rpsls"];

const RPS_SELECTIONS: [&str; 3] = ["rock", "paper", "scissors"];
const RPS_RELATIONS: [[i8; 3]; 3] = [
    [0, -1, 1],
    [1, 0, -1],
    [-1, 1, 0],
];

const RPSLS_SELECTIONS: [&str; 5] = ["rock", "paper", "scissors", "lizard", "spock"];
const RPSLS_RELATIONS: [[i8; 5]; 5] = [
    [0, -1, 1, 1, -1],  // rock: crushes scissors, crushes lizard
    [1, 0, -1, -1, 1],  // paper: covers rock, disproves spock
    [-1, 1, 0, 1, -1],  // scissors: cuts paper, decapitates lizard
    [-1, 1, -1, 0, 1],  // lizard: eats paper, poisons spock
    [1, -1, 1, -1, 0],  // spock: vaporizes rock, smashes scissors
];

// ============================================================================
// GAME
// ============================================================================

/// A display name bound to one selection set
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    name: String,
    selection_set: SelectionSet,
}

impl Game {
    pub fn new(name: impl Into<String>, selection_set: SelectionSet) -> Self {
        Self {
            name: name.into(),
            selection_set,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn selection_set(&self) -> &SelectionSet {
        &self.selection_set
    }

    /// Classic three-way rock/paper/scissors
    pub fn rock_paper_scissors() -> Self {
        Self::from_table("Rock Paper Scissors", &RPS_SELECTIONS, &RPS_RELATIONS)
    }

    /// Five-way variant with lizard and spock
    pub fn rock_paper_scissors_lizard_spock() -> Self {
        Self::from_table(
            "Rock Paper Scissors Lizard Spock",
            &RPSLS_SELECTIONS,
            &RPSLS_RELATIONS,
        )
    }

    /// Look up a built-in game by key (see [`PRESETS`])
    pub fn preset(key: &str) -> Option<Self> {
        match key {
            "rps" => Some(Self::rock_paper_scissors()),
            "rpsls" => Some(Self::rock_paper_scissors_lizard_spock()),
            _ => None,
        }
    }

    /// Load from JSON file, validating the payoff matrix
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read game file: {}", path.display()))?;
        let game: Game = serde_json::from_str(&content)
            .with_context(|| format!("Invalid game definition: {}", path.display()))?;
        Ok(game)
    }

    /// Save to JSON file
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write game file: {}", path.display()))?;
        Ok(())
    }

    /// Build a preset from a constant table.
    ///
    /// Panics if the table is malformed; the tables are fixed at compile time.
    fn from_table<const N: usize>(name: &str, selections: &[&str; N], relations: &[[i8; N]; N]) -> Self {
        let relations = relations.iter().map(|row| row.to_vec()).collect();
        let selection_set = SelectionSet::new(selections.to_vec(), relations)
            .unwrap_or_else(|e| panic!("built-in game {:?} has a malformed table: {}", name, e));
        Self::new(name, selection_set)
    }
}

// ============================================================================
// TESTS
// ============================================================================
