//! The move-choosing capability shared by all automated players.

use serde::{Deserialize, Serialize};

use crate::core::{GameState, Move, MoveList};
use crate::error::SearchError;
use crate::rules::{is_game_over, valid_moves};

use super::stats::SearchStats;

/// Chooses a move for the side to move.
///
/// Implementations only ever return a move from `valid_moves(state)`.
pub trait SearchStrategy: Send {
    /// Choose a move for `state.turn`.
    ///
    /// Fails if the position has no legal moves or is already terminal.
    fn choose_move(&mut self, state: &GameState) -> Result<Move, SearchError>;

    /// Statistics from the most recent `choose_move` call.
    fn stats(&self) -> &SearchStats;

    /// Short name for logs.
    fn name(&self) -> &'static str;
}

/// Outcome of a root search.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Best move found; `None` when the root itself was a leaf.
    pub best_move: Option<Move>,

    /// Backed-up score of the root.
    pub score: f64,
}

/// Legal moves of a position a strategy may be asked to play.
pub(crate) fn playable_moves(state: &GameState) -> Result<MoveList, SearchError> {
    let moves = valid_moves(state);
    if moves.is_empty() {
        return Err(SearchError::EmptyMoveSet);
    }
    if is_game_over(state) {
        return Err(SearchError::GameOver);
    }
    Ok(moves)
}
