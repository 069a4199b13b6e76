use crate::ConfigError;

/// Construction-time sizing of a search.
///
/// `complexity` is the expected maximum number of simultaneously queued
/// states. It sizes both the frontier heap and the node pool. Setting it too
/// low for the branching the graph actually reaches makes the search fail
/// with [`SearchError::CapacityExceeded`](crate::SearchError::CapacityExceeded).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// Maximum number of frontier entries (and pooled nodes).
    pub complexity: usize,
    /// Byte allowance reserved for the node's [`Scratch`](crate::Scratch).
    pub extra_mem: usize,
    /// Let the node pool grow past `complexity` instead of failing.
    /// The frontier heap never grows.
    pub growable_pool: bool,
}

impl SearchConfig {
    /// A config for `complexity` entries, no scratch allowance and a fixed
    /// pool.
    pub const fn new(complexity: usize) -> Self {
        Self {
            complexity,
            extra_mem: 0,
            growable_pool: false,
        }
    }

    /// Set the scratch allowance in bytes.
    pub const fn with_extra_mem(mut self, bytes: usize) -> Self {
        self.extra_mem = bytes;
        self
    }

    /// Allow the node pool to grow past `complexity`.
    pub const fn growable(mut self) -> Self {
        self.growable_pool = true;
        self
    }

    /// Check the config can hold at least the start node.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.complexity == 0 {
            return Err(ConfigError::ZeroComplexity);
        }
        Ok(())
    }
}
