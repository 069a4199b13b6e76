//! Fixed-capacity min-heap of frontier entries.
//!
//! Entries are small `(cost, seq, handle)` records; the node payloads live in
//! the [`NodePool`](crate::NodePool). The whole heap sits in one allocation
//! made at construction, so sift operations stay inside a compact,
//! cache-resident region and never reallocate.

use crate::{Arena, Cost, NodeHandle, SearchError};

/// A queued state: its accumulated cost and the handle of its payload.
#[derive(Debug)]
pub struct FrontierEntry<C> {
    cost: C,
    /// Insertion counter. Lower = queued earlier = popped first on equal cost.
    seq: u64,
    handle: NodeHandle,
}

impl<C: Cost> FrontierEntry<C> {
    #[inline]
    pub fn cost(&self) -> C {
        self.cost
    }

    /// Split into cost and payload handle.
    #[inline]
    pub fn into_parts(self) -> (C, NodeHandle) {
        (self.cost, self.handle)
    }

    #[inline]
    fn precedes(&self, other: &Self) -> bool {
        (self.cost, self.seq) < (other.cost, other.seq)
    }
}

/// Binary min-heap ordered by `(cost, insertion order)`.
///
/// Ties on cost pop in FIFO order, which keeps searches reproducible.
pub struct FrontierArena<C> {
    heap: Vec<FrontierEntry<C>>,
    capacity: usize,
    next_seq: u64,
    peak: usize,
}

impl<C: Cost> FrontierArena<C> {
    /// Allocate a heap for exactly `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            capacity,
            next_seq: 0,
            peak: 0,
        }
    }

    /// Queue `handle` at `cost`.
    ///
    /// On failure the handle is returned alongside the error so the caller
    /// can release the payload.
    pub fn push(
        &mut self,
        cost: C,
        handle: NodeHandle,
    ) -> Result<(), (SearchError, NodeHandle)> {
        if self.heap.len() >= self.capacity {
            let err = SearchError::CapacityExceeded {
                arena: Arena::Frontier,
                capacity: self.capacity,
            };
            return Err((err, handle));
        }
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(FrontierEntry { cost, seq, handle });
        self.sift_up(self.heap.len() - 1);
        self.peak = self.peak.max(self.heap.len());
        Ok(())
    }

    /// The cheapest entry, if any.
    #[inline]
    pub fn peek(&self) -> Option<&FrontierEntry<C>> {
        self.heap.first()
    }

    /// Remove and return the cheapest entry.
    pub fn pop(&mut self) -> Option<FrontierEntry<C>> {
        let last = self.heap.pop()?;
        if self.heap.is_empty() {
            return Some(last);
        }
        let top = std::mem::replace(&mut self.heap[0], last);
        self.sift_down(0);
        Some(top)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.heap.len() >= self.capacity
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// High-water mark of the heap size.
    #[inline]
    pub fn peak(&self) -> usize {
        self.peak
    }

    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if !self.heap[pos].precedes(&self.heap[parent]) {
                break;
            }
            self.heap.swap(pos, parent);
            pos = parent;
        }
    }

    fn sift_down(&mut self, mut pos: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * pos + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let child = if right < len && self.heap[right].precedes(&self.heap[left]) {
                right
            } else {
                left
            };
            if !self.heap[child].precedes(&self.heap[pos]) {
                break;
            }
            self.heap.swap(pos, child);
            pos = child;
        }
    }
}
