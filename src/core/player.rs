//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Type-safe identifier for the two sides of the board. Each side owns a row
//! of six pits and the store to the right of that row.
//!
//! ## PlayerMap
//!
//! Fixed two-slot storage indexed by `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut, RangeInclusive};

use super::board::{PITS_PER_SIDE, PLAYER_0_STORE, PLAYER_1_STORE};
use crate::error::ConfigError;

/// One of the two players.
///
/// Player 0 owns pits 0-5 and store 6; player 1 owns pits 7-12 and store 13.
/// Serialized as a bare `0` or `1`; any other value is rejected on decode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PlayerId(pub u8);

/// The side that moves first in a default game.
pub const PLAYER_0: PlayerId = PlayerId(0);

/// The second side.
pub const PLAYER_1: PlayerId = PlayerId(1);

impl PlayerId {
    /// Create a new player ID.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not 0 or 1.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        assert!(id < 2, "Player id must be 0 or 1");
        Self(id)
    }

    /// Get the raw player index (0 or 1).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        Self(1 - self.0)
    }

    /// Board index of this player's store.
    #[must_use]
    pub const fn store_index(self) -> usize {
        if self.0 == 0 {
            PLAYER_0_STORE
        } else {
            PLAYER_1_STORE
        }
    }

    /// Board indices of this player's six pits.
    #[must_use]
    pub fn pit_range(self) -> RangeInclusive<usize> {
        let first = if self.0 == 0 { 0 } else { PLAYER_0_STORE + 1 };
        first..=first + PITS_PER_SIDE - 1
    }

    /// Whether `index` is one of this player's pits (stores excluded).
    #[must_use]
    pub fn owns_pit(self, index: usize) -> bool {
        self.pit_range().contains(&index)
    }

    /// Iterate over both players in seat order.
    pub fn both() -> impl Iterator<Item = PlayerId> {
        [PLAYER_0, PLAYER_1].into_iter()
    }
}

impl TryFrom<u8> for PlayerId {
    type Error = ConfigError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        match id {
            0 | 1 => Ok(Self(id)),
            _ => Err(ConfigError::Validation(format!(
                "player id must be 0 or 1, got {id}"
            ))),
        }
    }
}

impl From<PlayerId> for u8 {
    fn from(player: PlayerId) -> Self {
        player.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player data with O(1) access.
///
/// ## Example
///
/// ```
/// use rust_mancala::core::{PlayerMap, PLAYER_0, PLAYER_1};
///
/// let mut moves: PlayerMap<u32> = PlayerMap::with_value(0);
/// moves[PLAYER_1] += 3;
///
/// assert_eq!(moves[PLAYER_0], 0);
/// assert_eq!(moves[PLAYER_1], 3);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PLAYER_0), factory(PLAYER_1)],
        }
    }

    /// Create a new PlayerMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::both().zip(self.data.iter())
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        assert_eq!(PLAYER_0.index(), 0);
        assert_eq!(PLAYER_1.index(), 1);
        assert_eq!(PLAYER_0.opponent(), PLAYER_1);
        assert_eq!(PLAYER_1.opponent(), PLAYER_0);
        assert_eq!(format!("{}", PLAYER_1), "Player 1");
    }

    #[test]
    fn test_player_layout() {
        assert_eq!(PLAYER_0.store_index(), 6);
        assert_eq!(PLAYER_1.store_index(), 13);
        assert_eq!(PLAYER_0.pit_range(), 0..=5);
        assert_eq!(PLAYER_1.pit_range(), 7..=12);

        assert!(PLAYER_0.owns_pit(5));
        assert!(!PLAYER_0.owns_pit(6));
        assert!(!PLAYER_0.owns_pit(7));
        assert!(PLAYER_1.owns_pit(7));
        assert!(!PLAYER_1.owns_pit(13));
    }

    #[test]
    #[should_panic(expected = "Player id must be 0 or 1")]
    fn test_player_id_out_of_range() {
        let _ = PlayerId::new(2);
    }

    #[test]
    fn test_player_id_decoding_is_checked() {
        assert_eq!(PlayerId::try_from(1), Ok(PLAYER_1));
        assert!(PlayerId::try_from(2).is_err());

        assert_eq!(serde_json::to_string(&PLAYER_1).unwrap(), "1");
        assert_eq!(serde_json::from_str::<PlayerId>("0").unwrap(), PLAYER_0);
        let err = serde_json::from_str::<PlayerId>("2").unwrap_err();
        assert!(err.to_string().contains("player id must be 0 or 1, got 2"));
    }

    #[test]
    fn test_player_map_mutation() {
        let mut map: PlayerMap<i32> = PlayerMap::new(|p| p.index() as i32 * 10);
        assert_eq!(map[PLAYER_1], 10);

        map[PLAYER_0] = 7;
        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(PLAYER_0, &7), (PLAYER_1, &10)]);
    }
}
