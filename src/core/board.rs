//! Board layout: 14 cells, two rows of six pits and two stores.
//!
//! ```text
//!        12  11  10   9   8   7
//!   13                            6
//!         0   1   2   3   4   5
//! ```
//!
//! Sowing runs counter-clockwise by ascending index, wrapping 13 -> 0.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// Total number of cells (pits and stores).
pub const BOARD_SIZE: usize = 14;

/// Pits in each player's row.
pub const PITS_PER_SIDE: usize = 6;

/// Player 0's store.
pub const PLAYER_0_STORE: usize = 6;

/// Player 1's store.
pub const PLAYER_1_STORE: usize = 13;

/// Stones per pit in a standard setup.
pub const DEFAULT_STONES_PER_PIT: u8 = 4;

/// Stone counts for every cell.
///
/// `Copy` so search branches can snapshot a position without allocating.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [u8; BOARD_SIZE],
}

impl Board {
    /// A board with `stones_per_pit` in every pit and empty stores.
    #[must_use]
    pub fn new(stones_per_pit: u8) -> Self {
        let mut cells = [stones_per_pit; BOARD_SIZE];
        cells[PLAYER_0_STORE] = 0;
        cells[PLAYER_1_STORE] = 0;
        Self { cells }
    }

    /// Wrap an explicit cell layout.
    #[must_use]
    pub const fn from_cells(cells: [u8; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    /// Raw cell contents.
    #[must_use]
    pub fn cells(&self) -> &[u8; BOARD_SIZE] {
        &self.cells
    }

    /// Stones in cell `index`.
    #[must_use]
    pub fn stones(&self, index: usize) -> u8 {
        self.cells[index]
    }

    pub(crate) fn set(&mut self, index: usize, stones: u8) {
        self.cells[index] = stones;
    }

    pub(crate) fn add(&mut self, index: usize, stones: u8) {
        self.cells[index] += stones;
    }

    /// Stones in `player`'s store.
    #[must_use]
    pub fn store(&self, player: PlayerId) -> u8 {
        self.cells[player.store_index()]
    }

    /// `player`'s six pits, left to right from that player's seat.
    #[must_use]
    pub fn row(&self, player: PlayerId) -> &[u8] {
        &self.cells[player.pit_range()]
    }

    /// Sum of `player`'s pits.
    #[must_use]
    pub fn row_sum(&self, player: PlayerId) -> u32 {
        self.row(player).iter().map(|&s| u32::from(s)).sum()
    }

    /// Whether every pit in `player`'s row is empty.
    #[must_use]
    pub fn row_is_empty(&self, player: PlayerId) -> bool {
        self.row(player).iter().all(|&s| s == 0)
    }

    /// Stones on the whole board. Constant across legal transitions.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.cells.iter().map(|&s| u32::from(s)).sum()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_STONES_PER_PIT)
    }
}

/// The pit facing `pit` across the board.
///
/// Only meaningful for pit indices (0-5, 7-12).
#[must_use]
pub const fn opposite(pit: usize) -> usize {
    12 - pit
}
