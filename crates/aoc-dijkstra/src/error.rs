//! Typed search failures.
//!
//! Nothing is recovered internally: a search either completes with a
//! [`Solution`](crate::Solution) or stops with one of these errors.

use std::fmt;

/// Which of the engine's two memory regions ran out of room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Arena {
    /// The fixed-capacity frontier heap.
    Frontier,
    /// The node payload pool.
    NodePool,
}

impl fmt::Display for Arena {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Frontier => f.write_str("frontier"),
            Self::NodePool => f.write_str("node pool"),
        }
    }
}

/// Rejected [`SearchConfig`](crate::SearchConfig).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// `complexity` was zero, so not even the start node fits.
    ZeroComplexity,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroComplexity => write!(f, "search complexity must be at least 1"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Errors raised while building or running a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The configuration was rejected before the search started.
    Config(ConfigError),
    /// An arena was full when a node had to be stored. The configured
    /// complexity is too low for the branching the graph actually reaches.
    CapacityExceeded { arena: Arena, capacity: usize },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "invalid search config: {e}"),
            Self::CapacityExceeded { arena, capacity } => {
                write!(f, "{arena} capacity of {capacity} entries exceeded")
            }
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::CapacityExceeded { .. } => None,
        }
    }
}

impl From<ConfigError> for SearchError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
