//! Pseudo-random move source

use rand::distributions::{Distribution, WeightedIndex};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::game::Game;
use crate::player::{MoveSource, PlayerError, PlayerKind};

/// How a computer player picks its move
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Every selection equally likely
    #[default]
    Uniform,
    /// Proportional to each selection's win rate in the payoff matrix
    Weighted,
}

/// Computer player backed by a ChaCha8 generator
pub struct Computer {
    pub strategy: Strategy,
    rng: ChaCha8Rng,
}

impl Computer {
    /// Uniform strategy, seeded from entropy
    pub fn new() -> Self {
        Self::with_strategy(Strategy::Uniform)
    }

    pub fn with_strategy(strategy: Strategy) -> Self {
        Self {
            strategy,
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    /// Deterministic generator for reproducible play
    pub fn with_seed(strategy: Strategy, seed: u64) -> Self {
        Self {
            strategy,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Pick any selection with equal probability
    pub fn play_uniformly_random(&mut self, game: &Game) -> String {
        let selections = game.selection_set().selections();
        let index = self.rng.gen_range(0..selections.len());
        selections[index].clone()
    }

    /// Pick a selection with probability proportional to its matrix win rate.
    ///
    /// Weights are recomputed from the selection set on every call. If no
    /// selection has any weight the draw is uniform instead.
    pub fn play_weighted_random(&mut self, game: &Game) -> String {
        let set = game.selection_set();
        match WeightedIndex::new(set.win_rate_weights()) {
            Ok(dist) => set.selections()[dist.sample(&mut self.rng)].clone(),
            Err(e) => {
                tracing::warn!("Weighted draw unavailable for {} ({}), using uniform", game.name(), e);
                self.play_uniformly_random(game)
            }
        }
    }
}

impl Default for Computer {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveSource for Computer {
    fn choose(&mut self, game: &Game) -> Result<String, PlayerError> {
        Ok(match self.strategy {
            Strategy::Uniform => self.play_uniformly_random(game),
            Strategy::Weighted => self.play_weighted_random(game),
        })
    }

    fn kind(&self) -> PlayerKind {
        PlayerKind::Computer
    }
}

// ============================================================================
// TESTS
// ============================================================================
