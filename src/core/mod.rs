//! Core types: board, players, state, moves, RNG, configuration.
//!
//! Everything here is plain data. Rules live in `crate::rules`.

pub mod action;
pub mod board;
pub mod config;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Move, MoveList, MoveRecord};
pub use board::{
    opposite, Board, BOARD_SIZE, DEFAULT_STONES_PER_PIT, PITS_PER_SIDE, PLAYER_0_STORE,
    PLAYER_1_STORE,
};
pub use config::GameConfig;
pub use player::{PlayerId, PlayerMap, PLAYER_0, PLAYER_1};
pub use rng::GameRng;
pub use state::GameState;
