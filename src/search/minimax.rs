//! Depth-limited minimax without pruning.
//!
//! Reference search: alpha-beta must agree with it on every root move.

use std::time::Instant;

use tracing::debug;

use crate::core::{GameState, Move};
use crate::error::SearchError;
use crate::eval::{Evaluator, Material};
use crate::rules::engine::play_unchecked;
use crate::rules::{is_game_over, valid_moves};

use super::config::SearchConfig;
use super::stats::SearchStats;
use super::strategy::{playable_moves, SearchResult, SearchStrategy};

/// Plain minimax over copied states.
pub struct Minimax<E: Evaluator = Material> {
    evaluator: E,
    config: SearchConfig,
    stats: SearchStats,
}

impl Minimax<Material> {
    /// Minimax with the material evaluator at `depth`.
    #[must_use]
    pub fn with_depth(depth: u32) -> Self {
        Self::new(Material, SearchConfig::default().with_depth(depth))
    }
}

impl<E: Evaluator> Minimax<E> {
    /// Create a minimax search with a custom evaluator.
    pub fn new(evaluator: E, config: SearchConfig) -> Self {
        Self {
            evaluator,
            config,
            stats: SearchStats::default(),
        }
    }

    /// Get the configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Search from `state` and return the root score and move.
    ///
    /// Statistics accumulate until the next `choose_move`.
    pub fn search_root(&mut self, state: &GameState) -> SearchResult {
        let maximizing = self
            .config
            .root_policy
            .root_maximizing(self.evaluator.perspective(), state.turn);
        let (score, best_move) =
            self.minimax(state, self.config.effective_depth(), 0, maximizing);
        SearchResult { best_move, score }
    }

    fn minimax(
        &mut self,
        state: &GameState,
        depth: u32,
        ply: u32,
        maximizing: bool,
    ) -> (f64, Option<Move>) {
        self.stats.enter(ply);

        if depth == 0 || is_game_over(state) {
            self.stats.leaves_evaluated += 1;
            return (self.evaluator.evaluate(state), None);
        }

        let mut best_move = None;
        let mut best = if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };

        for mv in valid_moves(state) {
            let mut child = *state;
            play_unchecked(&mut child, mv);
            let (score, _) = self.minimax(&child, depth - 1, ply + 1, !maximizing);

            // Strict comparison keeps the first of equal moves.
            let improves = if maximizing { score > best } else { score < best };
            if improves {
                best = score;
                best_move = Some(mv);
            }
        }

        (best, best_move)
    }
}

impl<E: Evaluator> SearchStrategy for Minimax<E> {
    fn choose_move(&mut self, state: &GameState) -> Result<Move, SearchError> {
        let start = Instant::now();
        self.stats.reset();
        playable_moves(state)?;

        let result = self.search_root(state);
        self.stats.time_us = start.elapsed().as_micros() as u64;

        let mv = result.best_move.ok_or(SearchError::EmptyMoveSet)?;
        debug!(
            strategy = self.name(),
            player = %state.turn,
            depth = self.config.effective_depth(),
            %mv,
            score = result.score,
            nodes = self.stats.nodes_visited,
            "move chosen"
        );
        Ok(mv)
    }

    fn stats(&self) -> &SearchStats {
        &self.stats
    }

    fn name(&self) -> &'static str {
        "minimax"
    }
}
