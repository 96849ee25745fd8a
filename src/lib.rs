//! # rust-mancala
//!
//! A two-row stone-sowing game engine (Kalah variant) with search-based
//! automated players.
//!
//! ## Rules
//!
//! 14 cells: pits 0-5 and store 6 for player 0, pits 7-12 and store 13 for
//! player 1. A move empties one of the mover's pits and sows its stones
//! forward, skipping the opponent's store. A last stone landing in an own
//! empty pit captures the facing pit. The turn always passes. The game ends
//! when either row is empty, and the remaining row is swept into its owner's
//! store.
//!
//! ## Design
//!
//! - **Copy states**: `GameState` is a 14-byte board plus a turn marker, so
//!   every search branch works on its own snapshot.
//! - **Two contracts**: callers only need the state transition functions in
//!   `rules` and `SearchStrategy::choose_move`.
//! - **Deterministic**: random agents draw from a seeded ChaCha8 stream.
//!
//! ## Modules
//!
//! - `core`: Board, players, state, moves, RNG, configuration
//! - `rules`: Move generation, sowing, capture, sweep, winner
//! - `eval`: Static evaluators
//! - `search`: Random, minimax, and alpha-beta strategies
//! - `agent`: Human or automated player seats
//! - `play`: Single-game driver

pub mod agent;
pub mod core;
pub mod error;
pub mod eval;
pub mod play;
pub mod rules;
pub mod search;

// Re-export commonly used types
pub use crate::core::{
    Board, GameConfig, GameRng, GameState, Move, MoveList, MoveRecord, PlayerId, PlayerMap,
    PLAYER_0, PLAYER_1,
};

pub use crate::error::{ConfigError, MoveError, PlayError, SearchError};

pub use crate::rules::{
    apply_move, applied, finish_game, initial_state, is_game_over, valid_moves, winner,
    GameResult, SowOutcome,
};

pub use crate::eval::{Advanced, Evaluator, Material, Perspective};

pub use crate::search::{
    AlphaBeta, Minimax, RandomStrategy, RootPolicy, SearchConfig, SearchResult, SearchStats,
    SearchStrategy,
};

pub use crate::agent::{Agent, AgentKind};
pub use crate::play::{play_game, GameRecord, PlayConfig};
