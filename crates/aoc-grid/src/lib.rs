//! Row-major numeric grids.
//!
//! [`NumericGrid`] stores one number per cell in a single flat buffer and is
//! usually parsed from puzzle input where every character is a digit and
//! every line is a row. It carries no search logic; search nodes read from
//! it.

mod column;
mod grid;

pub use column::{Column, ColumnIter};
pub use grid::{GridError, NumericGrid};
