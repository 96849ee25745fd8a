//! Game setup configuration.
//!
//! The rule set is fixed. Only the opening layout can be configured: how many
//! stones start in each pit and which side moves first.

use serde::{Deserialize, Serialize};

use super::board::{BOARD_SIZE, DEFAULT_STONES_PER_PIT, PITS_PER_SIDE};
use super::player::{PlayerId, PLAYER_0};
use crate::error::ConfigError;

/// Largest per-pit count whose total still fits a `u8` cell.
pub const MAX_STONES_PER_PIT: u8 = (u8::MAX as usize / (PITS_PER_SIDE * 2)) as u8;

/// Opening position parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Stones placed in each of the 12 pits (default: 4).
    pub stones_per_pit: u8,

    /// Side that makes the first move (default: player 0).
    pub first_player: PlayerId,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            stones_per_pit: DEFAULT_STONES_PER_PIT,
            first_player: PLAYER_0,
        }
    }
}

impl GameConfig {
    /// Set the starting stones per pit.
    #[must_use]
    pub fn with_stones_per_pit(mut self, stones: u8) -> Self {
        self.stones_per_pit = stones;
        self
    }

    /// Set the first player.
    #[must_use]
    pub fn with_first_player(mut self, player: PlayerId) -> Self {
        self.first_player = player;
        self
    }

    /// Total stones on the board for this setup.
    #[must_use]
    pub fn total_stones(&self) -> u32 {
        u32::from(self.stones_per_pit) * (BOARD_SIZE as u32 - 2)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.stones_per_pit == 0 {
            return Err(ConfigError::Validation(
                "stones_per_pit must be > 0".into(),
            ));
        }
        if self.stones_per_pit > MAX_STONES_PER_PIT {
            return Err(ConfigError::Validation(format!(
                "stones_per_pit must be <= {MAX_STONES_PER_PIT}"
            )));
        }
        if self.first_player.0 > 1 {
            return Err(ConfigError::Validation(
                "first_player must be 0 or 1".into(),
            ));
        }
        Ok(())
    }
}
