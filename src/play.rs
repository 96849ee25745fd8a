//! Single-game driver for automated agents.
//!
//! Asks the agent whose turn it is for a move, applies it, and repeats until
//! the game is over or the turn cap is reached. Rendering, prompting, and
//! multi-game statistics belong to the caller.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::agent::Agent;
use crate::core::{GameState, MoveRecord, PlayerId, PlayerMap, PLAYER_0};
use crate::error::{ConfigError, PlayError};
use crate::rules::{apply_move, finish_game, is_game_over, winner, GameResult};

/// Configuration for the driver.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayConfig {
    /// Maximum moves per game (to stop runaway games).
    pub max_turns: usize,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self { max_turns: 200 }
    }
}

impl PlayConfig {
    /// Set maximum moves per game.
    #[must_use]
    pub fn with_max_turns(mut self, max: usize) -> Self {
        self.max_turns = max;
        self
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_turns == 0 {
            return Err(ConfigError::Validation("max_turns must be > 0".into()));
        }
        Ok(())
    }
}

/// Everything that happened in one game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Position the game started from.
    pub initial_state: GameState,

    /// Position after the last move, before the endgame sweep.
    pub final_state: GameState,

    /// Moves in play order.
    pub moves: Vec<MoveRecord>,

    /// Store comparison after the sweep (also set for capped games).
    pub result: GameResult,

    /// Whether the game reached a terminal position within the turn cap.
    pub completed: bool,
}

impl GameRecord {
    /// Number of moves played.
    #[must_use]
    pub fn turns(&self) -> usize {
        self.moves.len()
    }

    /// Stones each player captured over the game.
    #[must_use]
    pub fn captures(&self) -> PlayerMap<u32> {
        let mut totals = PlayerMap::with_value(0u32);
        for record in &self.moves {
            totals[record.player] += u32::from(record.captured);
        }
        totals
    }

    /// Store totals after the endgame sweep.
    #[must_use]
    pub fn final_scores(&self) -> PlayerMap<u8> {
        let mut swept = self.final_state;
        finish_game(&mut swept);
        PlayerMap::new(|player| swept.board.store(player))
    }
}

/// Play one game from `start` between two automated agents.
///
/// Fails with `PlayError::HumanAgent` when a human seat is asked to move.
pub fn play_game(
    player_0: &mut Agent,
    player_1: &mut Agent,
    start: GameState,
    config: &PlayConfig,
) -> Result<GameRecord, PlayError> {
    let mut state = start;
    let mut moves = Vec::new();

    while !is_game_over(&state) && moves.len() < config.max_turns {
        let mover: PlayerId = state.turn;
        let agent = if mover == PLAYER_0 {
            &mut *player_0
        } else {
            &mut *player_1
        };

        let mv = agent.choose_move(&state)?;
        let outcome = apply_move(&mut state, mv)?;
        moves.push(MoveRecord::new(mover, mv, moves.len() as u32, outcome.captured));
    }

    let record = GameRecord {
        initial_state: start,
        final_state: state,
        result: winner(&state),
        completed: is_game_over(&state),
        moves,
    };

    debug!(
        player_0 = %player_0.kind(),
        player_1 = %player_1.kind(),
        turns = record.turns(),
        result = ?record.result,
        completed = record.completed,
        "game finished"
    );
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Board, Move, PLAYER_1};
    use crate::rules::initial_state;

    #[test]
    fn test_default_config() {
        assert_eq!(PlayConfig::default().max_turns, 200);
        assert!(PlayConfig::default().with_max_turns(0).validate().is_err());
    }

    #[test]
    fn test_random_game_completes() {
        let mut p0 = Agent::random(1);
        let mut p1 = Agent::random(2);
        let record = play_game(&mut p0, &mut p1, initial_state(), &PlayConfig::default()).unwrap();

        assert!(record.completed);
        assert!(is_game_over(&record.final_state));
        assert_eq!(record.initial_state, initial_state());

        let scores = record.final_scores();
        assert_eq!(u32::from(scores[PLAYER_0]) + u32::from(scores[PLAYER_1]), 48);
    }

    #[test]
    fn test_moves_alternate() {
        let mut p0 = Agent::random(5);
        let mut p1 = Agent::alpha_beta(2);
        let record = play_game(&mut p0, &mut p1, initial_state(), &PlayConfig::default()).unwrap();

        for (ply, mv) in record.moves.iter().enumerate() {
            let expected = if ply % 2 == 0 { PLAYER_0 } else { PLAYER_1 };
            assert_eq!(mv.player, expected);
            assert_eq!(mv.ply as usize, ply);
        }
    }

    #[test]
    fn test_turn_cap() {
        let mut p0 = Agent::random(1);
        let mut p1 = Agent::random(2);
        let config = PlayConfig::default().with_max_turns(3);
        let record = play_game(&mut p0, &mut p1, initial_state(), &config).unwrap();

        assert_eq!(record.turns(), 3);
        assert!(!record.completed);
    }

    #[test]
    fn test_human_seat_is_reported() {
        let mut p0 = Agent::random(1);
        let mut p1 = Agent::Human;
        let err = play_game(&mut p0, &mut p1, initial_state(), &PlayConfig::default()).unwrap_err();
        assert_eq!(err, PlayError::HumanAgent { player: PLAYER_1 });
    }

    #[test]
    fn test_capture_totals() {
        // Player 0's only move captures pit 11.
        let board = Board::from_cells([1, 0, 0, 0, 0, 0, 20, 0, 0, 0, 0, 9, 3, 15]);
        let mut p0 = Agent::minimax(1);
        let mut p1 = Agent::minimax(1);
        let config = PlayConfig::default().with_max_turns(1);
        let record =
            play_game(&mut p0, &mut p1, GameState::from_board(board, PLAYER_0), &config).unwrap();

        assert_eq!(record.moves[0].mv, Move(0));
        assert_eq!(record.captures()[PLAYER_0], 10);
        assert_eq!(record.captures()[PLAYER_1], 0);
        // Player 0's row is now empty: the game is over.
        assert!(record.completed);
        assert_eq!(record.result, GameResult::Winner(PLAYER_0));
    }
}
