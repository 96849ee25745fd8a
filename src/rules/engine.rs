//! The rules of the fixed Kalah variant.
//!
//! - Moves sow from one of the mover's non-empty pits
//! - The opponent's store is skipped while sowing
//! - A last stone in an own empty pit captures the facing pit
//! - The turn always passes; there is no extra turn for ending in a store
//! - The game ends when either row is empty; the other row is swept into its
//!   owner's store

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{GameState, Move, MoveList, PlayerId, PLAYER_0, PLAYER_1};
use crate::error::MoveError;

use super::sowing::{sow, SowOutcome};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Equal stores after the sweep.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }
}

/// Opening position: four stones per pit, player 0 to move.
#[must_use]
pub fn initial_state() -> GameState {
    GameState::new()
}

/// Legal moves for the side to move, in ascending pit order.
///
/// Empty only when the mover's row is empty, which implies the game is over.
#[must_use]
pub fn valid_moves(state: &GameState) -> MoveList {
    state
        .turn
        .pit_range()
        .filter(|&pit| state.board.stones(pit) > 0)
        .map(|pit| Move(pit as u8))
        .collect()
}

/// Check a move against the current position without applying it.
pub fn check_move(state: &GameState, mv: Move) -> Result<(), MoveError> {
    if !mv.is_on_board() {
        return Err(MoveError::OutOfRange { pit: mv.0 });
    }
    if !state.turn.owns_pit(mv.pit()) {
        return Err(MoveError::NotOwnPit {
            pit: mv.0,
            player: state.turn,
        });
    }
    if state.board.stones(mv.pit()) == 0 {
        return Err(MoveError::EmptyPit { pit: mv.0 });
    }
    Ok(())
}

/// Play `mv` for the side to move.
///
/// Sows, resolves a capture, and passes the turn. On error the state is
/// unchanged.
pub fn apply_move(state: &mut GameState, mv: Move) -> Result<SowOutcome, MoveError> {
    check_move(state, mv)?;
    Ok(play_unchecked(state, mv))
}

/// Play a move taken from `valid_moves(state)` without re-checking it.
pub(crate) fn play_unchecked(state: &mut GameState, mv: Move) -> SowOutcome {
    debug_assert!(
        check_move(state, mv).is_ok(),
        "{mv} is not legal for {}",
        state.turn
    );
    let outcome = sow(&mut state.board, state.turn, mv.pit());
    state.turn = state.turn.opponent();
    outcome
}

/// Functional form of [`apply_move`]: returns the successor position.
pub fn applied(state: &GameState, mv: Move) -> Result<GameState, MoveError> {
    let mut next = *state;
    apply_move(&mut next, mv)?;
    Ok(next)
}

/// Whether either row is empty.
#[must_use]
pub fn is_game_over(state: &GameState) -> bool {
    state.board.row_is_empty(PLAYER_0) || state.board.row_is_empty(PLAYER_1)
}

/// Sweep the remaining row into its owner's store once the other row is empty.
///
/// Returns the number of stones swept. Idempotent, and a no-op on a
/// non-terminal state.
pub fn finish_game(state: &mut GameState) -> u32 {
    let owner = if state.board.row_is_empty(PLAYER_0) {
        PLAYER_1
    } else if state.board.row_is_empty(PLAYER_1) {
        PLAYER_0
    } else {
        return 0;
    };

    let mut swept = 0u32;
    for pit in owner.pit_range() {
        let stones = state.board.stones(pit);
        state.board.set(pit, 0);
        state.board.add(owner.store_index(), stones);
        swept += u32::from(stones);
    }

    if swept > 0 {
        trace!(%owner, swept, "endgame sweep");
    }
    swept
}

/// Compare stores after the endgame sweep.
///
/// The sweep is applied to a copy; `state` is not modified. On a
/// non-terminal state this compares the stores as they stand.
#[must_use]
pub fn winner(state: &GameState) -> GameResult {
    let mut swept = *state;
    finish_game(&mut swept);

    let store_0 = swept.board.store(PLAYER_0);
    let store_1 = swept.board.store(PLAYER_1);
    match store_0.cmp(&store_1) {
        std::cmp::Ordering::Greater => GameResult::Winner(PLAYER_0),
        std::cmp::Ordering::Less => GameResult::Winner(PLAYER_1),
        std::cmp::Ordering::Equal => GameResult::Draw,
    }
}

/// The result if the game is over, `None` while it continues.
#[must_use]
pub fn terminal_result(state: &GameState) -> Option<GameResult> {
    is_game_over(state).then(|| winner(state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Board;

    #[test]
    fn test_game_result_is_winner() {
        let result = GameResult::Winner(PLAYER_1);
        assert!(!result.is_winner(PLAYER_0));
        assert!(result.is_winner(PLAYER_1));

        assert!(!GameResult::Draw.is_winner(PLAYER_0));
        assert!(!GameResult::Draw.is_winner(PLAYER_1));
    }

    #[test]
    fn test_valid_moves_opening() {
        let state = initial_state();
        let moves: Vec<_> = valid_moves(&state).into_iter().map(Move::pit).collect();
        assert_eq!(moves, vec![0, 1, 2, 3, 4, 5]);

        let state = GameState::from_board(Board::default(), PLAYER_1);
        let moves: Vec<_> = valid_moves(&state).into_iter().map(Move::pit).collect();
        assert_eq!(moves, vec![7, 8, 9, 10, 11, 12]);
    }

    #[test]
    fn test_valid_moves_skip_empty_pits() {
        let board = Board::from_cells([0, 3, 0, 0, 1, 0, 10, 4, 4, 4, 4, 4, 4, 10]);
        let state = GameState::from_board(board, PLAYER_0);
        assert_eq!(valid_moves(&state).as_slice(), &[Move(1), Move(4)]);
    }

    #[test]
    fn test_check_move_errors() {
        let board = Board::from_cells([0, 3, 0, 0, 1, 0, 10, 4, 4, 4, 4, 4, 4, 10]);
        let state = GameState::from_board(board, PLAYER_0);

        assert_eq!(
            check_move(&state, Move(14)),
            Err(MoveError::OutOfRange { pit: 14 })
        );
        assert_eq!(
            check_move(&state, Move(6)),
            Err(MoveError::NotOwnPit {
                pit: 6,
                player: PLAYER_0
            })
        );
        assert_eq!(
            check_move(&state, Move(8)),
            Err(MoveError::NotOwnPit {
                pit: 8,
                player: PLAYER_0
            })
        );
        assert_eq!(check_move(&state, Move(0)), Err(MoveError::EmptyPit { pit: 0 }));
        assert_eq!(check_move(&state, Move(4)), Ok(()));
    }

    #[test]
    fn test_play_unchecked_matches_apply_move() {
        let state = initial_state();
        for mv in valid_moves(&state) {
            let mut checked = state;
            let mut unchecked = state;
            let outcome = apply_move(&mut checked, mv).unwrap();
            assert_eq!(play_unchecked(&mut unchecked, mv), outcome);
            assert_eq!(unchecked, checked);
        }
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "pit 8 is not legal for Player 0")]
    fn test_play_unchecked_asserts_legality() {
        let mut state = initial_state();
        play_unchecked(&mut state, Move(8));
    }

    #[test]
    fn test_failed_move_leaves_state_untouched() {
        let mut state = initial_state();
        let before = state;
        assert!(apply_move(&mut state, Move(9)).is_err());
        assert_eq!(state, before);
    }

    #[test]
    fn test_turn_always_passes() {
        // Pit 2 ends exactly in store 6; there is no extra turn.
        let mut state = initial_state();
        let outcome = apply_move(&mut state, Move(2)).unwrap();
        assert_eq!(outcome.last_index, 6);
        assert_eq!(state.turn, PLAYER_1);
    }

    #[test]
    fn test_applied_is_pure() {
        let state = initial_state();
        let next = applied(&state, Move(0)).unwrap();
        assert_eq!(state, initial_state());
        assert_eq!(next.turn, PLAYER_1);
        assert_eq!(next.board.stones(0), 0);
    }

    #[test]
    fn test_finish_game_noop_when_running() {
        let mut state = initial_state();
        assert_eq!(finish_game(&mut state), 0);
        assert_eq!(state, initial_state());
        assert_eq!(terminal_result(&state), None);
    }

    #[test]
    fn test_sweep_player_0_row() {
        let board = Board::from_cells([1, 0, 2, 0, 0, 3, 18, 0, 0, 0, 0, 0, 0, 24]);
        let mut state = GameState::from_board(board, PLAYER_1);

        assert!(is_game_over(&state));
        assert_eq!(finish_game(&mut state), 6);
        assert_eq!(state.board.store(PLAYER_0), 24);
        assert!(state.board.row_is_empty(PLAYER_0));
        assert_eq!(winner(&state), GameResult::Draw);
    }
}
