//! Best-first (Dijkstra-style) shortest-cost search over lazily expanded
//! state graphs.
//!
//! The engine, [`Dijkstra`], is generic over a user-supplied [`SearchNode`]
//! that knows how to enumerate its weighted successors and whether it is a
//! goal. The engine owns all bookkeeping:
//!
//! - a fixed-capacity [`FrontierArena`], a binary min-heap ordered by
//!   accumulated cost that is allocated once and never grows,
//! - a slab-backed [`NodePool`] holding the node payloads referenced by the
//!   frontier,
//! - a [`Scratch`] value handed to every expansion so nodes can reuse memory
//!   across calls,
//! - the best goal found so far and its cost.
//!
//! Capacity is fixed at construction through [`SearchConfig`]. Running out of
//! room is reported as [`SearchError::CapacityExceeded`] instead of silently
//! reallocating inside the hot loop.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Cost`] | accumulated path cost, with `ZERO` start and `MAX` sentinel |
//! | [`Scratch`] | per-search expansion scratch space |
//! | [`SearchNode`] | the state type driven by [`Dijkstra`] |

mod config;
mod cost;
mod dijkstra;
mod error;
mod frontier;
mod node;
mod pool;
mod stats;

pub use config::SearchConfig;
pub use cost::Cost;
pub use dijkstra::{Dijkstra, Solution};
pub use error::{Arena, ConfigError, SearchError};
pub use frontier::{FrontierArena, FrontierEntry};
pub use node::{Scratch, SearchNode};
pub use pool::{NodeHandle, NodePool};
pub use stats::SearchStats;
