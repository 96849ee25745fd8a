//! Uniform random move selection.

use tracing::debug;

use crate::core::{GameRng, GameState, Move};
use crate::error::SearchError;

use super::stats::SearchStats;
use super::strategy::{playable_moves, SearchStrategy};

/// Picks uniformly among legal moves from a seeded RNG.
#[derive(Clone, Debug)]
pub struct RandomStrategy {
    rng: GameRng,
    stats: SearchStats,
}

impl RandomStrategy {
    /// Create a random player with a deterministic seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::from_rng(GameRng::new(seed))
    }

    /// Create a random player from an existing RNG stream.
    #[must_use]
    pub fn from_rng(rng: GameRng) -> Self {
        Self {
            rng,
            stats: SearchStats::default(),
        }
    }
}

impl SearchStrategy for RandomStrategy {
    fn choose_move(&mut self, state: &GameState) -> Result<Move, SearchError> {
        self.stats.reset();
        let moves = playable_moves(state)?;
        let mv = *self.rng.choose(&moves).ok_or(SearchError::EmptyMoveSet)?;

        self.stats.enter(0);
        debug!(strategy = self.name(), player = %state.turn, %mv, "move chosen");
        Ok(mv)
    }

    fn stats(&self) -> &SearchStats {
        &self.stats
    }

    fn name(&self) -> &'static str {
        "random"
    }
}
