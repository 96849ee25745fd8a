//! Static evaluation functions.
//!
//! An evaluator scores a position without lookahead. The two evaluators do
//! not share a point of view:
//!
//! - [`Material`] always scores from player 0's side
//! - [`Advanced`] scores from the side to move in the evaluated position
//!
//! Search code pairs each with a fixed search (see `crate::search`); they are
//! not interchangeable.

use serde::{Deserialize, Serialize};

use crate::core::{GameState, PlayerId, PLAYER_0};
use crate::rules::is_game_over;

/// Whose advantage a score measures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Perspective {
    /// Positive scores favour this player regardless of whose turn it is.
    Fixed(PlayerId),
    /// Positive scores favour the side to move in the evaluated state.
    Mover,
}

/// Static evaluation function.
pub trait Evaluator: Send + Sync {
    /// Score a position. Higher is better for the evaluator's perspective.
    fn evaluate(&self, state: &GameState) -> f64;

    /// Point of view of the returned scores.
    fn perspective(&self) -> Perspective;
}

/// Store difference from player 0's side: `store[0] - store[1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Material;

impl Evaluator for Material {
    fn evaluate(&self, state: &GameState) -> f64 {
        f64::from(state.board.store(PLAYER_0)) - f64::from(state.board.store(PLAYER_0.opponent()))
    }

    fn perspective(&self) -> Perspective {
        Perspective::Fixed(PLAYER_0)
    }
}

/// Default weight of the pit-stone difference.
pub const DEFAULT_PIT_WEIGHT: f64 = 0.4;

/// Default bonus for a decided terminal position.
pub const DEFAULT_ENDGAME_BONUS: f64 = 20.0;

/// Mover-relative evaluation with pit material and an endgame bonus.
///
/// `(my_store - opp_store) + pit_weight * (my_pits - opp_pits) + bonus`,
/// where `bonus` is `+endgame_bonus` / `-endgame_bonus` when the position is
/// terminal and the mover's store is ahead / behind, and 0 otherwise. Stores
/// are compared before any sweep.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Advanced {
    /// Weight of the difference in stones still in pits.
    pub pit_weight: f64,

    /// Magnitude of the terminal bonus.
    pub endgame_bonus: f64,
}

impl Default for Advanced {
    fn default() -> Self {
        Self {
            pit_weight: DEFAULT_PIT_WEIGHT,
            endgame_bonus: DEFAULT_ENDGAME_BONUS,
        }
    }
}

impl Evaluator for Advanced {
    fn evaluate(&self, state: &GameState) -> f64 {
        let me = state.turn;
        let opp = me.opponent();
        let my_store = i32::from(state.board.store(me));
        let opp_store = i32::from(state.board.store(opp));
        let pit_diff = state.board.row_sum(me) as i32 - state.board.row_sum(opp) as i32;

        let bonus = if is_game_over(state) {
            match my_store.cmp(&opp_store) {
                std::cmp::Ordering::Greater => self.endgame_bonus,
                std::cmp::Ordering::Less => -self.endgame_bonus,
                std::cmp::Ordering::Equal => 0.0,
            }
        } else {
            0.0
        };

        f64::from(my_store - opp_store) + self.pit_weight * f64::from(pit_diff) + bonus
    }

    fn perspective(&self) -> Perspective {
        Perspective::Mover
    }
}
