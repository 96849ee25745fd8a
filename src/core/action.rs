//! Move representation: a pit index on the mover's row.
//!
//! Moves are plain pit indices. Legality (own row, non-empty pit) depends on
//! the position, so it is checked by the rules engine, not here.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::board::BOARD_SIZE;
use super::player::PlayerId;

/// A move: sow the stones of pit `self.0`.
///
/// ```
/// use rust_mancala::core::Move;
///
/// let mv = Move::new(9);
/// assert_eq!(mv.pit(), 9);
/// assert_eq!(mv.to_string(), "pit 9");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Move(pub u8);

impl Move {
    /// Create a move for pit `pit`.
    #[must_use]
    pub const fn new(pit: u8) -> Self {
        Self(pit)
    }

    /// The pit index as a board index.
    #[must_use]
    pub const fn pit(self) -> usize {
        self.0 as usize
    }

    /// Whether the index names a cell at all.
    #[must_use]
    pub const fn is_on_board(self) -> bool {
        (self.0 as usize) < BOARD_SIZE
    }
}

impl From<u8> for Move {
    fn from(pit: u8) -> Self {
        Self(pit)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "pit {}", self.0)
    }
}

/// Legal moves in ascending pit order.
///
/// At most six moves exist, so the list never spills to the heap.
pub type MoveList = SmallVec<[Move; 6]>;

/// A played move with metadata for game history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The player who moved.
    pub player: PlayerId,

    /// The move played.
    pub mv: Move,

    /// Ply number, starting at 0.
    pub ply: u32,

    /// Stones moved into the store by a capture (0 if none).
    pub captured: u8,
}

impl MoveRecord {
    /// Create a new move record.
    #[must_use]
    pub fn new(player: PlayerId, mv: Move, ply: u32, captured: u8) -> Self {
        Self {
            player,
            mv,
            ply,
            captured,
        }
    }
}
