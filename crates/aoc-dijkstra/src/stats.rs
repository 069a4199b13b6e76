use std::fmt;

/// Counters collected while a search runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Nodes popped from the frontier and expanded.
    pub expansions: u64,
    /// Successors produced by all expansions.
    pub generated: u64,
    /// Successors discarded because they cost more than the best goal.
    pub pruned: u64,
    /// Goal successors seen, whether or not they improved the best.
    pub goals_seen: u64,
    /// Times the best goal was replaced by a strictly cheaper one.
    pub improvements: u64,
    /// Nodes queued on the frontier, the start node included.
    pub pushed: u64,
    /// Largest frontier size reached.
    pub peak_frontier: usize,
    /// Largest number of pooled nodes held at once.
    pub peak_pool: usize,
}

impl fmt::Display for SearchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} expanded, {} generated, {} pruned, {} queued, {} goals ({} improving), peak frontier {}",
            self.expansions,
            self.generated,
            self.pruned,
            self.pushed,
            self.goals_seen,
            self.improvements,
            self.peak_frontier
        )
    }
}
