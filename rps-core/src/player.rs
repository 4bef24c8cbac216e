//! Player - a named move source with a private turn history

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::game::Game;
use crate::outcome::Outcome;

/// Errors raised while a player produces a move
#[derive(Debug, thiserror::Error)]
pub enum PlayerError {
    #[error("I/O error while reading a move: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input closed before a valid move was entered")]
    InputClosed,

    #[error("Scripted player needs at least one move")]
    EmptyScript,

    #[error("Invalid player spec: {0}")]
    InvalidSpec(String),
}

/// Which kind of move source drives a player
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerKind {
    Human,
    Computer,
    Script,
}

impl PlayerKind {
    /// Tag shown in front of the player's name
    pub fn tag(self) -> &'static str {
        match self {
            PlayerKind::Human => "human",
            PlayerKind::Computer => "computer",
            PlayerKind::Script => "script",
        }
    }
}

/// One turn as seen from a single player's seat
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    pub player_move: String,
    pub opponent_move: String,
    pub player_result: Outcome,
    pub opponent_result: Outcome,
}

/// Capability to produce one move for a game
pub trait MoveSource {
    /// Choose a selection from `game`'s selection set
    fn choose(&mut self, game: &Game) -> Result<String, PlayerError>;

    fn kind(&self) -> PlayerKind;
}

/// A participant in a match
pub struct Player {
    name: String,
    history: Vec<TurnRecord>,
    source: Box<dyn MoveSource>,
}

impl Player {
    pub fn new(name: impl Into<String>, source: impl MoveSource + 'static) -> Self {
        Self::from_boxed(name, Box::new(source))
    }

    pub fn from_boxed(name: impl Into<String>, source: Box<dyn MoveSource>) -> Self {
        Self {
            name: name.into(),
            history: Vec::new(),
            source,
        }
    }

    /// Produce one move for this turn
    pub fn play(&mut self, game: &Game) -> Result<String, PlayerError> {
        self.source.choose(game)
    }

    /// Record a resolved turn in this player's history
    pub fn observe(
        &mut self,
        player_move: &str,
        opponent_move: &str,
        player_result: Outcome,
        opponent_result: Outcome,
    ) {
        self.history.push(TurnRecord {
            player_move: player_move.to_string(),
            opponent_move: opponent_move.to_string(),
            player_result,
            opponent_result,
        });
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> PlayerKind {
        self.source.kind()
    }

    pub fn history(&self) -> &[TurnRecord] {
        &self.history
    }

    /// Name with its kind tag, e.g. `(human)alice`
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}){}", self.kind().tag(), self.name)
    }
}

impl fmt::Debug for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Player")
            .field("name", &self.name)
            .field("kind", &self.kind())
            .field("turns", &self.history.len())
            .finish()
    }
}

// ============================================================================
// SCRIPTED SOURCE
// ============================================================================

/// Replays a fixed list of moves, wrapping around at the end
#[derive(Clone, Debug)]
pub struct Scripted {
    moves: Vec<String>,
    cursor: usize,
}

impl Scripted {
    pub fn new<S: Into<String>>(moves: Vec<S>) -> Result<Self, PlayerError> {
        if moves.is_empty() {
            return Err(PlayerError::EmptyScript);
        }
        Ok(Self {
            moves: moves.into_iter().map(Into::into).collect(),
            cursor: 0,
        })
    }
}

impl MoveSource for Scripted {
    fn choose(&mut self, _game: &Game) -> Result<String, PlayerError> {
        let mv = self.moves[self.cursor].clone();
        self.cursor = (self.cursor + 1) % self.moves.len();
        Ok(mv)
    }

    fn kind(&self) -> PlayerKind {
        PlayerKind::Script
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_cycles() {
        let game = Game::rock_paper_scissors();
        let mut player = Player::new("bot", Scripted::new(vec!["rock", "paper"]).unwrap());
        let moves: Vec<String> = (0..5).map(|_| player.play(&game).unwrap()).collect();
        assert_eq!(moves, ["rock", "paper", "rock", "paper", "rock"]);
    }

    #[test]
    fn test_scripted_rejects_empty() {
        let result = Scripted::new(Vec::<String>::new());
        assert!(matches!(result, Err(PlayerError::EmptyScript)));
    }

    #[test]
    fn test_observe_appends() {
        let mut player = Player::new("bot", Scripted::new(vec!["rock"]).unwrap());
        assert!(player.history().is_empty());

        player.observe("rock", "scissors", Outcome::Win, Outcome::Lose);
        player.observe("rock", "paper", Outcome::Lose, Outcome::Win);

        assert_eq!(player.history().len(), 2);
        assert_eq!(
            player.history()[1],
            TurnRecord {
                player_move: "rock".to_string(),
                opponent_move: "paper".to_string(),
                player_result: Outcome::Lose,
                opponent_result: Outcome::Win,
            }
        );
    }

    #[test]
    fn test_observe_does_not_validate() {
        let mut player = Player::new("bot", Scripted::new(vec!["rock"]).unwrap());
        player.observe("banana", "", Outcome::Tie, Outcome::Win);
        assert_eq!(player.history()[0].player_move, "banana");
    }

    #[test]
    fn test_label() {
        let player = Player::new("bot", Scripted::new(vec!["rock"]).unwrap());
        assert_eq!(player.label(), "(script)bot");
        assert_eq!(player.kind(), PlayerKind::Script);
        assert_eq!(player.name(), "bot");
    }
}
