use std::mem::size_of;

use crate::Cost;

/// Scratch space owned by the engine and lent to every expansion.
///
/// One value is created per search from [`SearchConfig::extra_mem`] and kept
/// alive until the search ends, so a node can keep buffers (or any other
/// state) between expansions without allocating again.
///
/// [`SearchConfig::extra_mem`]: crate::SearchConfig::extra_mem
pub trait Scratch {
    /// Create the scratch space with roughly `bytes` bytes reserved up front.
    fn with_allowance(bytes: usize) -> Self;
}

impl Scratch for () {
    #[inline]
    fn with_allowance(_bytes: usize) -> Self {}
}

impl<T> Scratch for Vec<T> {
    fn with_allowance(bytes: usize) -> Self {
        Vec::with_capacity(bytes / size_of::<T>().max(1))
    }
}

/// A state in the search graph.
///
/// Nodes are opaque, by-value payloads. The engine never inspects them beyond
/// these two operations and performs no visited-set bookkeeping: if states
/// can be reached along several paths, deduplication is up to the node
/// (the [`Scratch`] space is a natural place to keep that table).
///
/// # Contract
///
/// - Successor costs are absolute accumulated costs, never smaller than the
///   cost of the node being expanded (no negative edges).
/// - Expansion must eventually stop producing states that could still beat
///   the best known goal, otherwise the search does not terminate.
/// - Expanding the same node twice should yield the same successors; the
///   engine does not cache expansions.
pub trait SearchNode: Sized {
    /// Cost type of accumulated paths.
    type Cost: Cost;

    /// Scratch space lent to [`expand`](Self::expand). Use `()` when unused.
    type Scratch: Scratch;

    /// Append the successors of `self` with their accumulated cost to `out`.
    ///
    /// The engine clears `out` before calling. Appending nothing marks a
    /// dead end.
    fn expand(&self, scratch: &mut Self::Scratch, out: &mut Vec<(Self::Cost, Self)>);

    /// Whether this node represents a complete path.
    fn is_goal(&self) -> bool;
}
