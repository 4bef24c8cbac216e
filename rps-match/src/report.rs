//! Text rendering of turns and running tallies
//!
//! Level 4 - Formatting utilities

use rps_core::Outcome;

use crate::handler::{Standings, Tally};

/// Two-line report of a resolved turn.
///
/// The verb is the outcome label with an `s` appended: `wins`, `ties`,
/// `loses`.
pub fn turn_report(
    player1: &str,
    player2: &str,
    player1_move: &str,
    player2_move: &str,
    player1_result: Outcome,
    player2_result: Outcome,
) -> String {
    format!(
        "{p1} chooses {m1} and {p2} chooses {m2}\n{p1} {r1}s and {p2} {r2}s\n",
        p1 = player1,
        p2 = player2,
        m1 = player1_move,
        m2 = player2_move,
        r1 = player1_result,
        r2 = player2_result,
    )
}

/// `(<w>W, <t>T, <l>L)`
pub fn tally_brief(tally: &Tally) -> String {
    format!("({}W, {}T, {}L)", tally.wins, tally.ties, tally.losses)
}

/// `<p1> (<w>W, <t>T, <l>L) vs <p2> (<w>W, <t>T, <l>L)`
pub fn standings_line(player1: &str, player2: &str, standings: &Standings) -> String {
    format!(
        "{} {} vs {} {}",
        player1,
        tally_brief(&standings.player1),
        player2,
        tally_brief(&standings.player2)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_report_wording() {
        let report = turn_report(
            "(human)alice",
            "(computer)random",
            "rock",
            "scissors",
            Outcome::Win,
            Outcome::Lose,
        );
        assert_eq!(
            report,
            "(human)alice chooses rock and (computer)random chooses scissors\n\
             (human)alice wins and (computer)random loses\n"
        );
    }

    #[test]
    fn test_turn_report_tie() {
        let report = turn_report("a", "b", "paper", "paper", Outcome::Tie, Outcome::Tie);
        assert!(report.ends_with("a ties and b ties\n"));
    }

    #[test]
    fn test_standings_line() {
        let standings = Standings {
            player1: Tally { wins: 2, ties: 1, losses: 0 },
            player2: Tally { wins: 0, ties: 1, losses: 2 },
        };
        assert_eq!(
            standings_line("(human)alice", "(computer)random", &standings),
            "(human)alice (2W, 1T, 0L) vs (computer)random (0W, 1T, 2L)"
        );
    }
}
