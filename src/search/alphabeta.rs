//! Depth-limited minimax with alpha-beta pruning.
//!
//! Same recursion, move order, and root convention as [`super::Minimax`],
//! with an `(alpha, beta)` window that skips siblings once `beta <= alpha`.
//! The window starts at `(-inf, +inf)`, so the root score is exact and the
//! root move matches minimax; pruning only reduces the nodes visited.

use std::time::Instant;

use tracing::debug;

use crate::core::{GameState, Move};
use crate::error::SearchError;
use crate::eval::{Advanced, Evaluator, Material};
use crate::rules::engine::play_unchecked;
use crate::rules::{is_game_over, valid_moves};

use super::config::SearchConfig;
use super::stats::SearchStats;
use super::strategy::{playable_moves, SearchResult, SearchStrategy};

/// Alpha-beta search over copied states.
pub struct AlphaBeta<E: Evaluator = Material> {
    evaluator: E,
    config: SearchConfig,
    stats: SearchStats,
    name: &'static str,
}

impl AlphaBeta<Material> {
    /// Alpha-beta with the material evaluator at `depth`.
    #[must_use]
    pub fn with_depth(depth: u32) -> Self {
        Self::new(Material, SearchConfig::default().with_depth(depth))
    }
}

/// Log name of alpha-beta paired with the advanced evaluator.
const ADVANCED_NAME: &str = "advanced-alphabeta";

impl AlphaBeta<Advanced> {
    /// Alpha-beta with the mover-relative advanced evaluator at `depth`.
    #[must_use]
    pub fn advanced(depth: u32) -> Self {
        Self::advanced_with_config(SearchConfig::default().with_depth(depth))
    }

    /// Alpha-beta with the advanced evaluator and a full search config.
    #[must_use]
    pub fn advanced_with_config(config: SearchConfig) -> Self {
        Self::new(Advanced::default(), config).with_name(ADVANCED_NAME)
    }
}

impl<E: Evaluator> AlphaBeta<E> {
    /// Create an alpha-beta search with a custom evaluator.
    pub fn new(evaluator: E, config: SearchConfig) -> Self {
        Self {
            evaluator,
            config,
            stats: SearchStats::default(),
            name: "alphabeta",
        }
    }

    /// Set the name reported in logs.
    #[must_use]
    pub fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Get the configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Get the evaluator.
    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    /// Search from `state` and return the root score and move.
    pub fn search_root(&mut self, state: &GameState) -> SearchResult {
        let maximizing = self
            .config
            .root_policy
            .root_maximizing(self.evaluator.perspective(), state.turn);
        let (score, best_move) = self.alpha_beta(
            state,
            self.config.effective_depth(),
            0,
            f64::NEG_INFINITY,
            f64::INFINITY,
            maximizing,
        );
        SearchResult { best_move, score }
    }

    fn alpha_beta(
        &mut self,
        state: &GameState,
        depth: u32,
        ply: u32,
        mut alpha: f64,
        mut beta: f64,
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
            let (score, _) = self.alpha_beta(&child, depth - 1, ply + 1, alpha, beta, !maximizing);

            if maximizing {
                if score > best {
                    best = score;
                    best_move = Some(mv);
                }
                alpha = alpha.max(score);
            } else {
                if score < best {
                    best = score;
                    best_move = Some(mv);
                }
                beta = beta.min(score);
            }

            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        (best, best_move)
    }
}

impl<E: Evaluator> SearchStrategy for AlphaBeta<E> {
    fn choose_move(&mut self, state: &GameState) -> Result<Move, SearchError> {
        let start = Instant::now();
        self.stats.reset();
        playable_moves(state)?;

        let result = self.search_root(state);
        self.stats.time_us = start.elapsed().as_micros() as u64;

        let mv = result.best_move.ok_or(SearchError::EmptyMoveSet)?;
        debug!(
            strategy = self.name,
            player = %state.turn,
            depth = self.config.effective_depth(),
            %mv,
            score = result.score,
            nodes = self.stats.nodes_visited,
            cutoffs = self.stats.cutoffs,
            "move chosen"
        );
        Ok(mv)
    }

    fn stats(&self) -> &SearchStats {
        &self.stats
    }

    fn name(&self) -> &'static str {
        self.name
    }
}
