//! Slab-backed storage for node payloads.

use log::warn;
use slab::Slab;

use crate::{Arena, SearchError};

/// Stable reference to a node stored in a [`NodePool`].
///
/// Handles are neither `Clone` nor `Copy`: each one is consumed by
/// [`NodePool::take`], so a payload always has exactly one owner.
#[derive(Debug, PartialEq, Eq)]
pub struct NodeHandle(usize);

impl NodeHandle {
    /// The slot index inside the pool.
    #[inline]
    pub fn slot(&self) -> usize {
        self.0
    }
}

/// Pool of node payloads with slot reuse.
///
/// Backed by a single [`Slab`] reserved up front for `capacity` nodes.
/// Freed slots are reused by later inserts, so a search whose live node
/// count stays within `capacity` never touches the global allocator after
/// construction.
pub struct NodePool<N> {
    slab: Slab<N>,
    capacity: usize,
    growable: bool,
    peak: usize,
    warned: bool,
}

impl<N> NodePool<N> {
    /// Create a pool with room for `capacity` nodes.
    ///
    /// A `growable` pool keeps accepting nodes past `capacity` (logging a
    /// warning once); a fixed one rejects them.
    pub fn new(capacity: usize, growable: bool) -> Self {
        Self {
            slab: Slab::with_capacity(capacity),
            capacity,
            growable,
            peak: 0,
            warned: false,
        }
    }

    /// Store `node`, returning its handle.
    pub fn insert(&mut self, node: N) -> Result<NodeHandle, SearchError> {
        if self.slab.len() >= self.capacity {
            if !self.growable {
                return Err(SearchError::CapacityExceeded {
                    arena: Arena::NodePool,
                    capacity: self.capacity,
                });
            }
            if !self.warned {
                warn!(
                    "node pool grew past its configured capacity of {}",
                    self.capacity
                );
                self.warned = true;
            }
        }
        let slot = self.slab.insert(node);
        self.peak = self.peak.max(self.slab.len());
        Ok(NodeHandle(slot))
    }

    /// Move the node out of the pool, freeing its slot.
    ///
    /// Handles are only minted by [`insert`](Self::insert) and consumed
    /// here, so the slot is always occupied.
    pub fn take(&mut self, handle: NodeHandle) -> N {
        self.slab.remove(handle.0)
    }

    /// Borrow a stored node.
    #[inline]
    pub fn get(&self, handle: &NodeHandle) -> Option<&N> {
        self.slab.get(handle.0)
    }

    /// Number of stored nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.slab.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slab.is_empty()
    }

    /// Configured capacity (not the slab's current allocation).
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Largest number of nodes stored at once.
    #[inline]
    pub fn peak(&self) -> usize {
        self.peak
    }
}
