//! Position evaluation for depth-limited search.

pub mod heuristic;

pub use heuristic::{
    Advanced, Evaluator, Material, Perspective, DEFAULT_ENDGAME_BONUS, DEFAULT_PIT_WEIGHT,
};
