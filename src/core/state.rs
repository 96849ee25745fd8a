//! Game state: the board and whose turn it is.
//!
//! `GameState` is `Copy`. Search code snapshots it per explored branch by
//! value, so hypothetical moves never touch the caller's position.
//!
//! State changes go through `rules::apply_move`; this module only builds and
//! inspects positions.

use serde::{Deserialize, Serialize};

use super::board::Board;
use super::config::GameConfig;
use super::player::{PlayerId, PLAYER_0};
use crate::error::ConfigError;

/// Complete game position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    /// Stone counts for all 14 cells.
    pub board: Board,

    /// The player to move.
    pub turn: PlayerId,
}

impl GameState {
    /// Standard opening position: four stones per pit, player 0 to move.
    #[must_use]
    pub fn new() -> Self {
        Self::from_board(Board::default(), PLAYER_0)
    }

    /// Opening position for a configured setup.
    ///
    /// Fails if `config` does not validate, so every stone count the game
    /// can reach fits in a cell.
    pub fn from_config(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_board(
            Board::new(config.stones_per_pit),
            config.first_player,
        ))
    }

    /// Arbitrary position, mainly for tests and analysis.
    #[must_use]
    pub const fn from_board(board: Board, turn: PlayerId) -> Self {
        Self { board, turn }
    }

    /// Stones in the mover's store.
    #[must_use]
    pub fn mover_store(&self) -> u8 {
        self.board.store(self.turn)
    }

    /// Stones in the opponent's store.
    #[must_use]
    pub fn opponent_store(&self) -> u8 {
        self.board.store(self.turn.opponent())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::player::PLAYER_1;

    #[test]
    fn test_new_state() {
        let state = GameState::new();
        assert_eq!(state.turn, PLAYER_0);
        assert_eq!(state.board.total(), 48);
        assert_eq!(state.mover_store(), 0);
    }

    #[test]
    fn test_from_config() {
        let config = GameConfig::default()
            .with_stones_per_pit(3)
            .with_first_player(PLAYER_1);
        let state = GameState::from_config(&config).unwrap();

        assert_eq!(state.turn, PLAYER_1);
        assert_eq!(state.board.total(), 36);
        assert_eq!(state.board.stones(7), 3);
    }

    #[test]
    fn test_from_config_rejects_oversized_setup() {
        let config = GameConfig::default().with_stones_per_pit(100);
        assert_eq!(
            GameState::from_config(&config),
            Err(ConfigError::Validation("stones_per_pit must be <= 21".into()))
        );

        let largest = GameConfig::default().with_stones_per_pit(21);
        let state = GameState::from_config(&largest).unwrap();
        assert_eq!(state.board.total(), 252);
    }

    #[test]
    fn test_decoding_rejects_unknown_turn() {
        let state = GameState::from_board(Board::default(), PLAYER_1);
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(serde_json::from_str::<GameState>(&json).unwrap(), state);

        let bad = json.replace(r#""turn":1"#, r#""turn":2"#);
        assert_ne!(bad, json);
        assert!(serde_json::from_str::<GameState>(&bad).is_err());
    }

    #[test]
    fn test_copy_is_independent() {
        let original = GameState::new();
        let mut branch = original;
        branch.board.set(0, 0);
        branch.turn = PLAYER_1;

        assert_eq!(original.board.stones(0), 4);
        assert_eq!(original.turn, PLAYER_0);
    }

    #[test]
    fn test_store_views() {
        let board = Board::from_cells([0, 0, 0, 0, 0, 1, 10, 3, 0, 0, 0, 0, 0, 12]);
        let state = GameState::from_board(board, PLAYER_1);
        assert_eq!(state.mover_store(), 12);
        assert_eq!(state.opponent_store(), 10);
    }
}
