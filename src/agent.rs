//! Players: a human or one of the automated strategies.
//!
//! `Agent::Human` carries no strategy. Whoever drives the game must fetch a
//! pit from outside and check it with `rules::check_move` before applying it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{GameState, Move};
use crate::error::{ConfigError, PlayError};
use crate::eval::{Advanced, Material};
use crate::search::{AlphaBeta, Minimax, RandomStrategy, SearchConfig, SearchStrategy};

/// Default depth for minimax and alpha-beta agents.
pub const DEFAULT_DEPTH: u32 = 5;

/// Default depth for the advanced alpha-beta agent.
pub const DEFAULT_ADVANCED_DEPTH: u32 = 10;

/// Agent description, parseable from strings like `"alphabeta:6"`.
///
/// ```
/// use rust_mancala::agent::AgentKind;
///
/// let kind: AgentKind = "minimax:3".parse().unwrap();
/// assert_eq!(kind, AgentKind::Minimax { depth: 3 });
/// assert_eq!("advanced".parse::<AgentKind>().unwrap().to_string(), "advanced-alphabeta:10");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AgentKind {
    Human,
    Random,
    Minimax { depth: u32 },
    AlphaBeta { depth: u32 },
    AdvancedAlphaBeta { depth: u32 },
}

impl AgentKind {
    /// Search depth, if the agent searches.
    #[must_use]
    pub fn depth(self) -> Option<u32> {
        match self {
            AgentKind::Human | AgentKind::Random => None,
            AgentKind::Minimax { depth }
            | AgentKind::AlphaBeta { depth }
            | AgentKind::AdvancedAlphaBeta { depth } => Some(depth),
        }
    }

    /// Build an agent. `base` supplies the seed and root policy; the depth
    /// comes from `self`.
    #[must_use]
    pub fn build(self, base: &SearchConfig) -> Agent {
        let config = |depth| base.clone().with_depth(depth);
        match self {
            AgentKind::Human => Agent::Human,
            AgentKind::Random => Agent::Random(RandomStrategy::new(base.seed)),
            AgentKind::Minimax { depth } => Agent::Minimax(Minimax::new(Material, config(depth))),
            AgentKind::AlphaBeta { depth } => {
                Agent::AlphaBeta(AlphaBeta::new(Material, config(depth)))
            }
            AgentKind::AdvancedAlphaBeta { depth } => {
                Agent::AdvancedAlphaBeta(AlphaBeta::advanced_with_config(config(depth)))
            }
        }
    }
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgentKind::Human => write!(f, "human"),
            AgentKind::Random => write!(f, "random"),
            AgentKind::Minimax { depth } => write!(f, "minimax:{depth}"),
            AgentKind::AlphaBeta { depth } => write!(f, "alphabeta:{depth}"),
            AgentKind::AdvancedAlphaBeta { depth } => write!(f, "advanced-alphabeta:{depth}"),
        }
    }
}

impl FromStr for AgentKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, depth) = match s.trim().split_once(':') {
            Some((name, depth)) => {
                let depth: u32 = depth.parse().map_err(|_| {
                    ConfigError::Validation(format!("invalid depth in agent '{s}'"))
                })?;
                if depth == 0 {
                    return Err(ConfigError::Validation(format!(
                        "depth must be > 0 in agent '{s}'"
                    )));
                }
                (name, Some(depth))
            }
            None => (s.trim(), None),
        };

        let kind = match name.to_ascii_lowercase().as_str() {
            "human" => AgentKind::Human,
            "random" => AgentKind::Random,
            "minimax" => AgentKind::Minimax {
                depth: depth.unwrap_or(DEFAULT_DEPTH),
            },
            "alphabeta" | "alpha-beta" => AgentKind::AlphaBeta {
                depth: depth.unwrap_or(DEFAULT_DEPTH),
            },
            "advanced" | "advanced-alphabeta" => AgentKind::AdvancedAlphaBeta {
                depth: depth.unwrap_or(DEFAULT_ADVANCED_DEPTH),
            },
            _ => {
                return Err(ConfigError::Validation(format!(
                    "unknown agent kind '{name}'"
                )))
            }
        };

        if depth.is_some() && kind.depth().is_none() {
            return Err(ConfigError::Validation(format!(
                "agent kind '{name}' takes no depth"
            )));
        }
        Ok(kind)
    }
}

/// A player seat.
pub enum Agent {
    /// Moves come from outside the engine.
    Human,
    Random(RandomStrategy),
    Minimax(Minimax<Material>),
    AlphaBeta(AlphaBeta<Material>),
    AdvancedAlphaBeta(AlphaBeta<Advanced>),
}

impl Agent {
    /// Random agent with a seed.
    #[must_use]
    pub fn random(seed: u64) -> Self {
        Agent::Random(RandomStrategy::new(seed))
    }

    /// Minimax agent with the material evaluator.
    #[must_use]
    pub fn minimax(depth: u32) -> Self {
        Agent::Minimax(Minimax::with_depth(depth))
    }

    /// Alpha-beta agent with the material evaluator.
    #[must_use]
    pub fn alpha_beta(depth: u32) -> Self {
        Agent::AlphaBeta(AlphaBeta::with_depth(depth))
    }

    /// Alpha-beta agent with the advanced evaluator.
    #[must_use]
    pub fn advanced_alpha_beta(depth: u32) -> Self {
        Agent::AdvancedAlphaBeta(AlphaBeta::advanced(depth))
    }

    /// Whether this seat needs external input.
    #[must_use]
    pub fn is_human(&self) -> bool {
        matches!(self, Agent::Human)
    }

    /// Describe this agent.
    #[must_use]
    pub fn kind(&self) -> AgentKind {
        match self {
            Agent::Human => AgentKind::Human,
            Agent::Random(_) => AgentKind::Random,
            Agent::Minimax(s) => AgentKind::Minimax {
                depth: s.config().depth,
            },
            Agent::AlphaBeta(s) => AgentKind::AlphaBeta {
                depth: s.config().depth,
            },
            Agent::AdvancedAlphaBeta(s) => AgentKind::AdvancedAlphaBeta {
                depth: s.config().depth,
            },
        }
    }

    /// The automated strategy, or `None` for a human.
    pub fn strategy_mut(&mut self) -> Option<&mut dyn SearchStrategy> {
        match self {
            Agent::Human => None,
            Agent::Random(s) => Some(s),
            Agent::Minimax(s) => Some(s),
            Agent::AlphaBeta(s) => Some(s),
            Agent::AdvancedAlphaBeta(s) => Some(s),
        }
    }

    /// Choose a move for `state.turn`.
    pub fn choose_move(&mut self, state: &GameState) -> Result<Move, PlayError> {
        let strategy = self
            .strategy_mut()
            .ok_or(PlayError::HumanAgent { player: state.turn })?;
        Ok(strategy.choose_move(state)?)
    }
}

impl fmt::Debug for Agent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Agent").field(&self.kind()).finish()
    }
}
