//! Per-player result of a resolved turn

use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of one selection played against another, from one side's view
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Win,
    Tie,
    Lose,
}

impl Outcome {
    /// All outcomes in reporting order
    pub const ALL: [Outcome; 3] = [Outcome::Win, Outcome::Tie, Outcome::Lose];

    /// Decode a payoff matrix entry (1, 0, -1)
    pub fn from_relation(value: i8) -> Option<Self> {
        match value {
            1 => Some(Outcome::Win),
            0 => Some(Outcome::Tie),
            -1 => Some(Outcome::Lose),
            _ => None,
        }
    }

    /// Encode as a payoff matrix entry
    pub fn to_relation(self) -> i8 {
        match self {
            Outcome::Win => 1,
            Outcome::Tie => 0,
            Outcome::Lose => -1,
        }
    }

    /// The outcome the opponent gets
    pub fn reverse(self) -> Self {
        match self {
            Outcome::Win => Outcome::Lose,
            Outcome::Tie => Outcome::Tie,
            Outcome::Lose => Outcome::Win,
        }
    }

    /// Lowercase label used in reports
    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::Win => "win",
            Outcome::Tie => "tie",
            Outcome::Lose => "lose",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
