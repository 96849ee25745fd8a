//! Search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected during one `choose_move` call.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Nodes entered, root included.
    pub nodes_visited: u64,

    /// Nodes scored by the static evaluator (depth limit or terminal).
    pub leaves_evaluated: u64,

    /// Sibling loops cut short by alpha-beta.
    pub cutoffs: u64,

    /// Deepest ply reached below the root.
    pub max_depth: u32,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Record entry into a node at `ply`.
    pub(crate) fn enter(&mut self, ply: u32) {
        self.nodes_visited += 1;
        self.max_depth = self.max_depth.max(ply);
    }

    /// Calculate nodes per second.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.nodes_visited as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }
}
