//! Rules engine for the fixed Kalah variant.
//!
//! Provides:
//! - Legal move enumeration
//! - Move application (sowing, capture, turn switch)
//! - Terminal detection, endgame sweep, and winner determination
//!
//! All functions are free functions over `GameState`; the state itself is
//! plain data.

pub mod engine;
pub mod sowing;

pub use engine::{
    apply_move, applied, check_move, finish_game, initial_state, is_game_over, terminal_result,
    valid_moves, winner, GameResult,
};
pub use sowing::SowOutcome;
