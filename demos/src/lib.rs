//! Puzzles built on the `aoc-*` crates.
//!
//! - [`chiton`]: lowest-risk path through a digit grid, run through the
//!   puzzle runner.
//! - [`cities`]: cheapest route on a small road map, with the route kept in
//!   the search node.

pub mod chiton;
pub mod cities;
