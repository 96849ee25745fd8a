//! Search configuration parameters.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;
use crate::error::ConfigError;
use crate::eval::Perspective;

/// How the root node of a tree search chooses between maximizing and
/// minimizing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RootPolicy {
    /// The root always maximizes, whichever side is moving. Paired with a
    /// player-0 evaluator this makes a player-1 agent pick moves that favour
    /// player 0.
    #[default]
    AlwaysMaximize,

    /// The root maximizes when the evaluator's fixed perspective is the side
    /// to move and minimizes otherwise. Mover-relative evaluators have no
    /// fixed side and keep maximizing.
    SideToMove,
}

impl RootPolicy {
    /// Whether the root should maximize for `mover` under `perspective`.
    #[must_use]
    pub fn root_maximizing(self, perspective: Perspective, mover: PlayerId) -> bool {
        match (self, perspective) {
            (RootPolicy::AlwaysMaximize, _) => true,
            (RootPolicy::SideToMove, Perspective::Fixed(side)) => side == mover,
            (RootPolicy::SideToMove, Perspective::Mover) => true,
        }
    }
}

/// Search configuration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Plies to look ahead (default: 5). A depth of 0 is searched as 1.
    pub depth: u32,

    /// Seed for strategies that use randomness.
    pub seed: u64,

    /// Root maximization convention.
    pub root_policy: RootPolicy,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 5,
            seed: 42,
            root_policy: RootPolicy::AlwaysMaximize,
        }
    }
}

impl SearchConfig {
    /// Create a config for a given depth with default settings otherwise.
    #[must_use]
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    /// Create a new config with custom seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Create a new config with a custom root policy.
    #[must_use]
    pub fn with_root_policy(mut self, policy: RootPolicy) -> Self {
        self.root_policy = policy;
        self
    }

    /// Depth actually searched.
    #[must_use]
    pub fn effective_depth(&self) -> u32 {
        self.depth.max(1)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.depth == 0 {
            return Err(ConfigError::Validation("depth must be > 0".into()));
        }
        Ok(())
    }
}
