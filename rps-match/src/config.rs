//! Configuration types for match play
//!
//! Level 4 - Utilities and configuration

use std::str::FromStr;

use rps_core::{Computer, HumanInput, Player, PlayerError, Scripted, Strategy};

/// When a match stops
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnLimit {
    /// Play exactly this many turns (0 plays none)
    Turns(usize),
    /// Keep playing until a turn fails or the process is interrupted
    Unbounded,
}

impl TurnLimit {
    /// True once `played` turns satisfy the limit
    pub fn reached(self, played: usize) -> bool {
        match self {
            TurnLimit::Turns(max) => played >= max,
            TurnLimit::Unbounded => false,
        }
    }
}

impl From<Option<usize>> for TurnLimit {
    fn from(turns: Option<usize>) -> Self {
        turns.map_or(TurnLimit::Unbounded, TurnLimit::Turns)
    }
}

/// Match configuration
#[derive(Clone, Debug)]
pub struct MatchConfig {
    /// Stop condition for `MatchHandler::play`
    pub turn_limit: TurnLimit,
    /// Random seed for computer players (None = entropy)
    pub seed: Option<u64>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            turn_limit: TurnLimit::Turns(10),
            seed: None,
        }
    }
}

impl MatchConfig {
    /// Stop after `turns` turns
    pub fn with_turns(mut self, turns: usize) -> Self {
        self.turn_limit = TurnLimit::Turns(turns);
        self
    }

    /// Play until interrupted
    pub fn unbounded(mut self) -> Self {
        self.turn_limit = TurnLimit::Unbounded;
        self
    }

    /// Set random seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Seed for the player in `seat` (0 or 1), offset so two computers differ
    pub fn seed_for(&self, seat: u64) -> Option<u64> {
        self.seed.map(|s| s.wrapping_add(seat))
    }
}

/// Where human players print their prompts
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PromptStream {
    #[default]
    Stdout,
    /// Keeps stdout clean for machine-readable output
    Stderr,
}

/// Description of a player, parsed from `kind:name[:moves]`
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlayerSpec {
    /// `human:NAME` - reads moves from stdin
    Human { name: String },
    /// `computer:NAME` or `weighted:NAME`
    Computer { name: String, strategy: Strategy },
    /// `script:NAME:rock,paper,...` - cycles through fixed moves
    Scripted { name: String, moves: Vec<String> },
}

impl PlayerSpec {
    pub fn name(&self) -> &str {
        match self {
            PlayerSpec::Human { name }
            | PlayerSpec::Computer { name, .. }
            | PlayerSpec::Scripted { name, .. } => name,
        }
    }

    /// Construct the player; `seed` only affects computer players
    pub fn build(&self, seed: Option<u64>) -> Result<Player, PlayerError> {
        self.build_with(seed, PromptStream::Stdout)
    }

    /// Like [`PlayerSpec::build`], choosing where a human player is prompted
    pub fn build_with(
        &self,
        seed: Option<u64>,
        prompts: PromptStream,
    ) -> Result<Player, PlayerError> {
        let player = match self {
            PlayerSpec::Human { name } => match prompts {
                PromptStream::Stdout => Player::new(name.as_str(), HumanInput::stdio()),
                PromptStream::Stderr => Player::new(name.as_str(), HumanInput::stdin_stderr()),
            },
            PlayerSpec::Computer { name, strategy } => {
                let computer = match seed {
                    Some(s) => Computer::with_seed(*strategy, s),
                    None => Computer::with_strategy(*strategy),
                };
                Player::new(name.as_str(), computer)
            }
            PlayerSpec::Scripted { name, moves } => {
                Player::new(name.as_str(), Scripted::new(moves.clone())?)
            }
        };
        Ok(player)
    }
}

impl FromStr for PlayerSpec {
    type Err = PlayerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(3, ':');
        let kind = parts.next().unwrap_or_default();
        let name = parts.next().filter(|n| !n.is_empty());
        let rest = parts.next();

        let spec = match kind {
            "human" => PlayerSpec::Human {
                name: name.unwrap_or("player").to_string(),
            },
            "computer" => PlayerSpec::Computer {
                name: name.unwrap_or("random").to_string(),
                strategy: Strategy::Uniform,
            },
            "weighted" => PlayerSpec::Computer {
                name: name.unwrap_or("weighted").to_string(),
                strategy: Strategy::Weighted,
            },
            "script" => {
                let moves: Vec<String> = rest
                    .unwrap_or_default()
                    .split(',')
                    .filter(|m| !m.is_empty())
                    .map(str::to_string)
                    .collect();
                if moves.is_empty() {
                    return Err(PlayerError::InvalidSpec(format!(
                        "{} (expected script:NAME:move1,move2,...)",
                        s
                    )));
                }
                PlayerSpec::Scripted {
                    name: name.unwrap_or("script").to_string(),
                    moves,
                }
            }
            _ => return Err(PlayerError::InvalidSpec(s.to_string())),
        };

        if rest.is_some() && !matches!(spec, PlayerSpec::Scripted { .. }) {
            return Err(PlayerError::InvalidSpec(s.to_string()));
        }
        Ok(spec)
    }
}
