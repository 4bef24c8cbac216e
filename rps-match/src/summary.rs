//! Serializable end-of-match report
//!
//! Level 4 - Utilities

use serde::{Deserialize, Serialize};

use crate::handler::{MatchTurn, Standings};

/// Snapshot of a match: who played what, and the tallies
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    /// Game display name
    pub game: String,
    /// Player 1 label, e.g. `(human)alice`
    pub player1: String,
    /// Player 2 label
    pub player2: String,
    /// Turns played
    pub turns: usize,
    pub standings: Standings,
    pub history: Vec<MatchTurn>,
}

impl MatchSummary {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::Tally;
    use rps_core::Outcome;

    #[test]
    fn test_json_layout() {
        let summary = MatchSummary {
            game: "Rock Paper Scissors".into(),
            player1: "(human)alice".into(),
            player2: "(computer)random".into(),
            turns: 1,
            standings: crate::handler::Standings {
                player1: Tally { wins: 1, ties: 0, losses: 0 },
                player2: Tally { wins: 0, ties: 0, losses: 1 },
            },
            history: vec![MatchTurn {
                player1_move: "rock".into(),
                player2_move: "scissors".into(),
                player1_result: Outcome::Win,
                player2_result: Outcome::Lose,
            }],
        };

        let value: serde_json::Value = serde_json::from_str(&summary.to_json().unwrap()).unwrap();
        assert_eq!(value["standings"]["player1"]["wins"], 1);
        assert_eq!(value["standings"]["player2"]["losses"], 1);
        assert_eq!(value["history"][0]["player2_result"], "lose");
        assert_eq!(value["player2"], "(computer)random");
    }
}
