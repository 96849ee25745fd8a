use crate::core::PlayerId;

/// Errors returned when a move is not legal in the current position.
///
/// The position is left untouched; retrying is up to the caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("pit {pit} is off the board (valid cells are 0-13)")]
    OutOfRange { pit: u8 },

    #[error("pit {pit} does not belong to {player}")]
    NotOwnPit { pit: u8, player: PlayerId },

    #[error("pit {pit} is empty")]
    EmptyPit { pit: u8 },
}

/// Errors raised when a search strategy is asked for a move it cannot make.
///
/// Both indicate a caller bug: the driver must check `is_game_over` first.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("no legal moves for the side to move")]
    EmptyMoveSet,

    #[error("the game is already over")]
    GameOver,
}

/// Errors that can occur when validating configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("config validation error: {0}")]
    Validation(String),
}

/// Errors that can occur while driving a game between agents.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlayError {
    #[error("{player} is a human agent and needs an external move source")]
    HumanAgent { player: PlayerId },

    #[error("search error: {0}")]
    Search(#[from] SearchError),

    #[error("illegal move: {0}")]
    Move(#[from] MoveError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PLAYER_1;

    #[test]
    fn test_move_error_display() {
        let err = MoveError::NotOwnPit {
            pit: 3,
            player: PLAYER_1,
        };
        assert_eq!(err.to_string(), "pit 3 does not belong to Player 1");
        assert_eq!(MoveError::EmptyPit { pit: 8 }.to_string(), "pit 8 is empty");
    }

    #[test]
    fn test_play_error_display() {
        let err = PlayError::from(MoveError::OutOfRange { pit: 20 });
        assert_eq!(
            err.to_string(),
            "illegal move: pit 20 is off the board (valid cells are 0-13)"
        );

        let err = PlayError::from(SearchError::EmptyMoveSet);
        assert_eq!(err.to_string(), "search error: no legal moves for the side to move");
    }
}
