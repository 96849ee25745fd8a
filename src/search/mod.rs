//! Move search for automated players.
//!
//! ## Strategies
//!
//! - [`RandomStrategy`]: uniform choice among legal moves
//! - [`Minimax`]: full-width depth-limited minimax
//! - [`AlphaBeta`]: minimax with alpha-beta pruning; `AlphaBeta::advanced`
//!   pairs it with the mover-relative [`crate::eval::Advanced`] evaluator
//!
//! Each explored branch works on its own copy of the `GameState`, so a search
//! never mutates the caller's position.
//!
//! ## Usage
//!
//! ```rust
//! use rust_mancala::rules::{apply_move, initial_state, is_game_over};
//! use rust_mancala::search::{AlphaBeta, SearchStrategy};
//!
//! let mut state = initial_state();
//! let mut search = AlphaBeta::with_depth(4);
//!
//! if !is_game_over(&state) {
//!     let mv = search.choose_move(&state).unwrap();
//!     apply_move(&mut state, mv).unwrap();
//!     println!("played {mv}, {} nodes", search.stats().nodes_visited);
//! }
//! ```

pub mod alphabeta;
pub mod config;
pub mod minimax;
pub mod random;
pub mod stats;
pub mod strategy;

pub use alphabeta::AlphaBeta;
pub use config::{RootPolicy, SearchConfig};
pub use minimax::Minimax;
pub use random::RandomStrategy;
pub use stats::SearchStats;
pub use strategy::{SearchResult, SearchStrategy};
