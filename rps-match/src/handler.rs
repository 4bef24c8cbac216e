//! Match handler - turn-by-turn play between two players on one game
//!
//! Level 2 - Phase-level implementation

use std::fmt;
use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use rps_core::{Game, Outcome, Player, PlayerError, SelectionError};

use crate::config::TurnLimit;
use crate::report::{standings_line, turn_report};
use crate::summary::MatchSummary;

// ============================================================================
// TYPES
// ============================================================================

/// Which side of the match
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Seat {
    Player1,
    Player2,
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Seat::Player1 => f.write_str("player1"),
            Seat::Player2 => f.write_str("player2"),
        }
    }
}

/// Errors that abort a turn
#[derive(Debug, thiserror::Error)]
pub enum MatchError {
    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error("{seat} could not move: {source}")]
    Player {
        seat: Seat,
        #[source]
        source: PlayerError,
    },

    #[error("Failed to write match report: {0}")]
    Output(#[source] io::Error),
}

/// One resolved turn in the handler's history
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchTurn {
    pub player1_move: String,
    pub player2_move: String,
    pub player1_result: Outcome,
    pub player2_result: Outcome,
}

/// Win/tie/loss counts for one player
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub wins: u32,
    pub ties: u32,
    pub losses: u32,
}

impl Tally {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Tie => self.ties += 1,
            Outcome::Lose => self.losses += 1,
        }
    }

    pub fn get(&self, outcome: Outcome) -> u32 {
        match outcome {
            Outcome::Win => self.wins,
            Outcome::Tie => self.ties,
            Outcome::Lose => self.losses,
        }
    }

    pub fn total(&self) -> u32 {
        self.wins + self.ties + self.losses
    }
}

/// Tallies for both seats
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standings {
    pub player1: Tally,
    pub player2: Tally,
}

impl Standings {
    /// Count every turn in `history`
    pub fn from_history(history: &[MatchTurn]) -> Self {
        let mut standings = Standings::default();
        for turn in history {
            standings.player1.record(turn.player1_result);
            standings.player2.record(turn.player2_result);
        }
        standings
    }

    pub fn seat(&self, seat: Seat) -> &Tally {
        match seat {
            Seat::Player1 => &self.player1,
            Seat::Player2 => &self.player2,
        }
    }
}

// ============================================================================
// MATCH HANDLER
// ============================================================================

/// Runs turns between two players on one game and reports to `out`.
///
/// Player order is fixed for the handler's lifetime. Both players are
/// borrowed mutably so their histories keep growing across matches.
pub struct MatchHandler<'a, W> {
    game: &'a Game,
    player1: &'a mut Player,
    player2: &'a mut Player,
    history: Vec<MatchTurn>,
    out: W,
}

impl<'a, W: Write> MatchHandler<'a, W> {
    pub fn new(game: &'a Game, player1: &'a mut Player, player2: &'a mut Player, out: W) -> Self {
        Self {
            game,
            player1,
            player2,
            history: Vec::new(),
            out,
        }
    }

    /// Play one turn.
    ///
    /// Player 1 moves first, then player 2. A failed move or an invalid
    /// selection aborts the turn before anything is recorded.
    pub fn play_turn(&mut self) -> Result<MatchTurn, MatchError> {
        let player1_move = self
            .player1
            .play(self.game)
            .map_err(|source| MatchError::Player { seat: Seat::Player1, source })?;
        let player2_move = self
            .player2
            .play(self.game)
            .map_err(|source| MatchError::Player { seat: Seat::Player2, source })?;

        let (player1_result, player2_result) = self
            .game
            .selection_set()
            .get_result(&player1_move, &player2_move)?;

        self.player1
            .observe(&player1_move, &player2_move, player1_result, player2_result);
        self.player2
            .observe(&player2_move, &player1_move, player2_result, player1_result);

        tracing::debug!(
            "Turn {}: {} {} ({}) vs {} {} ({})",
            self.history.len() + 1,
            self.player1.name(),
            player1_move,
            player1_result,
            self.player2.name(),
            player2_move,
            player2_result
        );

        let turn = MatchTurn {
            player1_move,
            player2_move,
            player1_result,
            player2_result,
        };
        self.history.push(turn.clone());

        self.report_turn(&turn).map_err(MatchError::Output)?;
        Ok(turn)
    }

    /// Play turns until `limit` is reached, returning how many were played
    pub fn play(&mut self, limit: TurnLimit) -> Result<usize, MatchError> {
        let mut played = 0;
        while !limit.reached(played) {
            self.play_turn()?;
            played += 1;
        }
        Ok(played)
    }

    /// Tallies recomputed from the full history
    pub fn current_result(&self) -> Standings {
        Standings::from_history(&self.history)
    }

    /// Running tally line for the current history
    pub fn current_result_line(&self) -> String {
        standings_line(
            &self.player1.label(),
            &self.player2.label(),
            &self.current_result(),
        )
    }

    pub fn history(&self) -> &[MatchTurn] {
        &self.history
    }

    pub fn turns_played(&self) -> usize {
        self.history.len()
    }

    pub fn game(&self) -> &Game {
        self.game
    }

    pub fn player1(&self) -> &Player {
        &*self.player1
    }

    pub fn player2(&self) -> &Player {
        &*self.player2
    }

    /// Serializable snapshot of the match so far
    pub fn summary(&self) -> MatchSummary {
        MatchSummary {
            game: self.game.name().to_string(),
            player1: self.player1.label(),
            player2: self.player2.label(),
            turns: self.history.len(),
            standings: self.current_result(),
            history: self.history.clone(),
        }
    }

    /// Release the output sink
    pub fn into_output(self) -> W {
        self.out
    }

    fn report_turn(&mut self, turn: &MatchTurn) -> io::Result<()> {
        let report = turn_report(
            &self.player1.label(),
            &self.player2.label(),
            &turn.player1_move,
            &turn.player2_move,
            turn.player1_result,
            turn.player2_result,
        );
        writeln!(self.out, "{}", report)?;
        let tally = self.current_result_line();
        writeln!(self.out, "{}", tally)?;
        self.out.flush()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rps_core::{Computer, Scripted, Strategy};

    fn scripted(name: &str, moves: &[&str]) -> Player {
        Player::new(name, Scripted::new(moves.to_vec()).unwrap())
    }

    #[test]
    fn test_play_turn_resolves_and_records() {
        let game = Game::rock_paper_scissors();
        let mut p1 = scripted("a", &["rock"]);
        let mut p2 = scripted("b", &["scissors"]);
        let mut handler = MatchHandler::new(&game, &mut p1, &mut p2, Vec::new());

        let turn = handler.play_turn().unwrap();
        assert_eq!(
            turn,
            MatchTurn {
                player1_move: "rock".into(),
                player2_move: "scissors".into(),
                player1_result: Outcome::Win,
                player2_result: Outcome::Lose,
            }
        );
        assert_eq!(handler.history().len(), 1);
        drop(handler);

        // Each player sees its own move and result first
        assert_eq!(p1.history()[0].player_move, "rock");
        assert_eq!(p1.history()[0].player_result, Outcome::Win);
        assert_eq!(p2.history()[0].player_move, "scissors");
        assert_eq!(p2.history()[0].opponent_move, "rock");
        assert_eq!(p2.history()[0].player_result, Outcome::Lose);
        assert_eq!(p2.history()[0].opponent_result, Outcome::Win);
    }

    #[test]
    fn test_turn_output() {
        let game = Game::rock_paper_scissors();
        let mut p1 = scripted("a", &["paper"]);
        let mut p2 = scripted("b", &["paper"]);
        let mut handler = MatchHandler::new(&game, &mut p1, &mut p2, Vec::new());
        handler.play_turn().unwrap();

        let output = String::from_utf8(handler.into_output()).unwrap();
        assert_eq!(
            output,
            "(script)a chooses paper and (script)b chooses paper\n\
             (script)a ties and (script)b ties\n\
             \n\
             (script)a (0W, 1T, 0L) vs (script)b (0W, 1T, 0L)\n"
        );
    }

    #[test]
    fn test_play_exact_turns() {
        let game = Game::rock_paper_scissors();
        let mut p1 = scripted("a", &["rock", "paper", "scissors"]);
        let mut p2 = scripted("b", &["rock", "rock"]);
        let mut handler = MatchHandler::new(&game, &mut p1, &mut p2, io::sink());

        let played = handler.play(TurnLimit::Turns(7)).unwrap();
        assert_eq!(played, 7);
        assert_eq!(handler.history().len(), 7);

        let standings = handler.current_result();
        assert_eq!(standings.player1.total(), 7);
        assert_eq!(standings.player2.total(), 7);
        assert_eq!(standings.player1.wins, standings.player2.losses);
        assert_eq!(standings.player1.ties, standings.player2.ties);
    }

    #[test]
    fn test_scripted_tally() {
        // a: rock paper scissors rock ...; b: rock rock ...
        // turn 1 tie, 2 a wins, 3 a loses, 4 tie
        let game = Game::rock_paper_scissors();
        let mut p1 = scripted("a", &["rock", "paper", "scissors"]);
        let mut p2 = scripted("b", &["rock"]);
        let mut handler = MatchHandler::new(&game, &mut p1, &mut p2, io::sink());
        handler.play(TurnLimit::Turns(4)).unwrap();

        let standings = handler.current_result();
        assert_eq!(standings.player1, Tally { wins: 1, ties: 2, losses: 1 });
        assert_eq!(standings.player2, Tally { wins: 1, ties: 2, losses: 1 });
        assert_eq!(standings.seat(Seat::Player1).get(Outcome::Tie), 2);
    }

    #[test]
    fn test_zero_turns() {
        let game = Game::rock_paper_scissors();
        let mut p1 = scripted("a", &["rock"]);
        let mut p2 = scripted("b", &["rock"]);
        let mut handler = MatchHandler::new(&game, &mut p1, &mut p2, Vec::new());

        assert_eq!(handler.play(TurnLimit::Turns(0)).unwrap(), 0);
        assert!(handler.history().is_empty());
        assert!(handler.into_output().is_empty());
    }

    #[test]
    fn test_current_result_idempotent() {
        let game = Game::rock_paper_scissors();
        let mut p1 = Player::new("x", Computer::with_seed(Strategy::Uniform, 3));
        let mut p2 = Player::new("y", Computer::with_seed(Strategy::Uniform, 4));
        let mut handler = MatchHandler::new(&game, &mut p1, &mut p2, io::sink());
        handler.play(TurnLimit::Turns(25)).unwrap();

        assert_eq!(handler.current_result(), handler.current_result());
        assert_eq!(handler.current_result_line(), handler.current_result_line());
    }

    #[test]
    fn test_invalid_move_aborts_turn() {
        let game = Game::rock_paper_scissors();
        let mut p1 = scripted("a", &["rock"]);
        let mut p2 = scripted("b", &["lizard"]);
        let mut handler = MatchHandler::new(&game, &mut p1, &mut p2, Vec::new());

        let err = handler.play(TurnLimit::Turns(3)).unwrap_err();
        assert!(matches!(
            err,
            MatchError::Selection(SelectionError::InvalidSelection(ref s)) if s == "lizard"
        ));
        assert!(handler.history().is_empty());
        drop(handler);
        assert!(p1.history().is_empty());
        assert!(p2.history().is_empty());
    }

    #[test]
    fn test_player_error_names_seat() {
        let game = Game::rock_paper_scissors();
        let mut p1 = scripted("a", &["rock"]);
        let mut p2 = Player::new(
            "b",
            rps_core::HumanInput::new(std::io::Cursor::new(""), Vec::new()),
        );
        let mut handler = MatchHandler::new(&game, &mut p1, &mut p2, Vec::new());

        let err = handler.play_turn().unwrap_err();
        assert!(matches!(
            err,
            MatchError::Player { seat: Seat::Player2, source: PlayerError::InputClosed }
        ));
        assert_eq!(err.to_string(), "player2 could not move: Input closed before a valid move was entered");
    }

    #[test]
    fn test_players_reused_across_matches() {
        let game = Game::rock_paper_scissors();
        let mut p1 = scripted("a", &["rock"]);
        let mut p2 = scripted("b", &["paper"]);

        MatchHandler::new(&game, &mut p1, &mut p2, io::sink())
            .play(TurnLimit::Turns(2))
            .unwrap();
        let mut second = MatchHandler::new(&game, &mut p1, &mut p2, io::sink());
        second.play(TurnLimit::Turns(3)).unwrap();
        assert_eq!(second.turns_played(), 3);
        drop(second);

        assert_eq!(p1.history().len(), 5);
        assert_eq!(p2.history().len(), 5);
    }

    #[test]
    fn test_summary() {
        let game = Game::rock_paper_scissors();
        let mut p1 = scripted("a", &["rock"]);
        let mut p2 = scripted("b", &["paper"]);
        let mut handler = MatchHandler::new(&game, &mut p1, &mut p2, io::sink());
        handler.play(TurnLimit::Turns(2)).unwrap();

        let summary = handler.summary();
        assert_eq!(summary.game, "Rock Paper Scissors");
        assert_eq!(summary.player1, "(script)a");
        assert_eq!(summary.turns, 2);
        assert_eq!(summary.standings.player2.wins, 2);
        assert_eq!(summary.history.len(), 2);
    }
}
