//! Sowing and capture mechanics.
//!
//! These operate on a board for a given mover and assume the move was already
//! validated. `engine::apply_move` is the checked entry point.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{opposite, Board, PlayerId, BOARD_SIZE};

/// What a single move did to the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SowOutcome {
    /// Index of the cell that received the last stone.
    pub last_index: usize,

    /// Stones moved into the mover's store by a capture, including the
    /// capturing stone itself. 0 when no capture happened.
    pub captured: u8,
}

impl SowOutcome {
    /// Whether the move ended in a capture.
    #[must_use]
    pub fn is_capture(&self) -> bool {
        self.captured > 0
    }
}

/// Empty `pit` and sow its stones forward, skipping the opponent's store,
/// then resolve a capture on the last cell.
pub(crate) fn sow(board: &mut Board, mover: PlayerId, pit: usize) -> SowOutcome {
    let skipped = mover.opponent().store_index();
    let mut stones = board.stones(pit);
    board.set(pit, 0);

    let mut index = pit;
    while stones > 0 {
        index = (index + 1) % BOARD_SIZE;
        if index == skipped {
            continue;
        }
        board.add(index, 1);
        stones -= 1;
    }

    let captured = capture(board, mover, index);
    SowOutcome {
        last_index: index,
        captured,
    }
}

/// A last stone landing in one of the mover's own pits that was empty takes
/// itself and everything in the facing pit into the mover's store.
fn capture(board: &mut Board, mover: PlayerId, last: usize) -> u8 {
    if !mover.owns_pit(last) || board.stones(last) != 1 {
        return 0;
    }

    let across = opposite(last);
    let captured = board.stones(across) + 1;
    board.set(last, 0);
    board.set(across, 0);
    board.add(mover.store_index(), captured);

    trace!(%mover, pit = last, across, captured, "capture");
    captured
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{PLAYER_0, PLAYER_1};

    #[test]
    fn test_sow_without_capture() {
        let mut board = Board::default();
        let outcome = sow(&mut board, PLAYER_0, 0);

        assert_eq!(outcome.last_index, 4);
        assert!(!outcome.is_capture());
        assert_eq!(board.cells(), &[0, 5, 5, 5, 5, 4, 0, 4, 4, 4, 4, 4, 4, 0]);
    }

    #[test]
    fn test_player_1_skips_store_6() {
        // Pit 12 with 9 stones: 13, 0..=5, skip 6, 7, 8.
        let mut board = Board::from_cells([0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 9, 0]);
        let outcome = sow(&mut board, PLAYER_1, 12);

        // Pit 8 was empty before the last stone, so it captures pit 4.
        assert_eq!(outcome.last_index, 8);
        assert_eq!(outcome.captured, 2);
        assert_eq!(board.stones(6), 0);
        assert_eq!(board.cells(), &[1, 1, 1, 1, 0, 1, 0, 1, 0, 0, 0, 0, 0, 3]);
    }

    #[test]
    fn test_capture_takes_opposite_pit() {
        let mut board = Board::from_cells([1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 5, 0, 0]);
        let outcome = sow(&mut board, PLAYER_0, 0);

        assert_eq!(outcome.last_index, 1);
        assert_eq!(outcome.captured, 6);
        assert_eq!(board.cells(), &[0, 0, 0, 0, 0, 0, 6, 0, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_no_capture_on_opponent_row() {
        let mut board = Board::from_cells([0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 3, 0]);
        let outcome = sow(&mut board, PLAYER_0, 5);

        assert_eq!(outcome.last_index, 7);
        assert_eq!(outcome.captured, 0);
        assert_eq!(board.stones(7), 1);
    }

    #[test]
    fn test_full_lap_returns_to_source_pit() {
        // 13 stones make one full lap (13 placements, store 13 skipped) and the
        // last lands back in the emptied source pit.
        let mut board = Board::from_cells([0, 0, 13, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0]);
        let outcome = sow(&mut board, PLAYER_0, 2);

        assert_eq!(outcome.last_index, 2);
        assert_eq!(outcome.captured, 1 + 3);
        assert_eq!(board.stones(2), 0);
        assert_eq!(board.stones(10), 0);
        assert_eq!(board.stones(13), 0);
        assert_eq!(board.total(), 15);
    }
}
