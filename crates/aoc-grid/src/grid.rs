//! The [`NumericGrid`] type.

use std::fmt;
use std::io::{self, BufRead};
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use crate::column::Column;

/// Errors raised while building a grid.
#[derive(Debug)]
pub enum GridError {
    /// A character that is not a decimal digit.
    InvalidDigit { ch: char, row: usize, column: usize },
    /// A row whose width differs from the first row's.
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// Reading the input failed.
    Io(io::Error),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDigit { ch, row, column } => {
                write!(f, "grid: invalid digit {ch:?} at row {row}, column {column}")
            }
            Self::Ragged {
                row,
                expected,
                found,
            } => write!(
                f,
                "grid: row {row} has {found} columns, expected {expected}"
            ),
            Self::Io(e) => write!(f, "grid: read failed: {e}"),
        }
    }
}

impl std::error::Error for GridError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for GridError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// A rectangular grid of numbers stored row-major in one buffer.
///
/// Cells are addressed as `(x, y)`: `x` is the column, `y` the row.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NumericGrid<T = u8> {
    cells: Vec<T>,
    columns: usize,
}

impl<T> Default for NumericGrid<T> {
    fn default() -> Self {
        Self {
            cells: Vec::new(),
            columns: 0,
        }
    }
}

impl<T> NumericGrid<T> {
    /// Build a grid of `columns` x `rows` cells from a function of `(x, y)`.
    pub fn from_fn(columns: usize, rows: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut cells = Vec::with_capacity(columns * rows);
        for y in 0..rows {
            for x in 0..columns {
                cells.push(f(x, y));
            }
        }
        Self { cells, columns }
    }

    /// Build a grid from explicit rows, which must all have the same width.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, GridError> {
        let mut grid = Self::default();
        for row in rows {
            grid.push_row(row)?;
        }
        Ok(grid)
    }

    fn push_row(&mut self, row: Vec<T>) -> Result<(), GridError> {
        if self.cells.is_empty() {
            self.columns = row.len();
        } else if row.len() != self.columns {
            return Err(GridError::Ragged {
                row: self.rows(),
                expected: self.columns,
                found: row.len(),
            });
        }
        self.cells.extend(row);
        Ok(())
    }

    /// Number of rows (height).
    #[inline]
    pub fn rows(&self) -> usize {
        if self.columns == 0 {
            return 0;
        }
        self.cells.len() / self.columns
    }

    /// Number of columns (width).
    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Number of cells.
    #[inline]
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Flat row-major index of `(x, y)`, if inside the grid.
    #[inline]
    pub fn index_of(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.columns && y < self.rows()).then(|| y * self.columns + x)
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<&T> {
        self.index_of(x, y).map(|i| &self.cells[i])
    }

    #[inline]
    pub fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut T> {
        self.index_of(x, y).map(|i| &mut self.cells[i])
    }

    /// Row `y` as a slice.
    pub fn row(&self, y: usize) -> Option<&[T]> {
        if y >= self.rows() {
            return None;
        }
        let start = y * self.columns;
        Some(&self.cells[start..start + self.columns])
    }

    /// View of column `x`.
    pub fn column(&self, x: usize) -> Option<Column<'_, T>> {
        (x < self.columns).then(|| Column::new(&self.cells, self.columns, x))
    }

    /// Row-major iterator over all cells.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.cells.iter()
    }

    /// Iterator over the rows as slices.
    pub fn iter_rows(&self) -> std::slice::ChunksExact<'_, T> {
        // chunks_exact panics on 0; an empty grid yields no rows either way.
        self.cells.chunks_exact(self.columns.max(1))
    }

    /// In-bounds 4-way neighbours of `(x, y)`: up, right, down, left.
    pub fn cardinal_neighbors(&self, x: usize, y: usize) -> impl Iterator<Item = (usize, usize)> {
        const DIRS: [(isize, isize); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];
        let (columns, rows) = (self.columns, self.rows());
        DIRS.into_iter().filter_map(move |(dx, dy)| {
            let nx = x.checked_add_signed(dx)?;
            let ny = y.checked_add_signed(dy)?;
            (nx < columns && ny < rows).then_some((nx, ny))
        })
    }
}

impl<T: From<u8>> NumericGrid<T> {
    /// Parse a grid from line-oriented text, one digit per character.
    ///
    /// Blank lines are skipped and a trailing `\r` is ignored.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, GridError> {
        let mut grid = Self::default();
        for line in reader.lines() {
            grid.push_line(&line?)?;
        }
        Ok(grid)
    }

    fn push_line(&mut self, line: &str) -> Result<(), GridError> {
        let line = line.trim_end_matches('\r');
        if line.is_empty() {
            return Ok(());
        }
        let row_idx = self.rows();
        let row = line
            .chars()
            .enumerate()
            .map(|(column, ch)| match ch.to_digit(10) {
                Some(d) => Ok(T::from(d as u8)),
                None => Err(GridError::InvalidDigit {
                    ch,
                    row: row_idx,
                    column,
                }),
            })
            .collect::<Result<Vec<T>, GridError>>()?;
        self.push_row(row)
    }
}

impl<T: From<u8>> FromStr for NumericGrid<T> {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut grid = Self::default();
        for line in s.lines() {
            grid.push_line(line)?;
        }
        Ok(grid)
    }
}

impl<T> Index<usize> for NumericGrid<T> {
    type Output = [T];

    /// Row `y`.
    fn index(&self, y: usize) -> &[T] {
        let start = y * self.columns;
        &self.cells[start..start + self.columns]
    }
}

impl<T> Index<(usize, usize)> for NumericGrid<T> {
    type Output = T;

    /// Cell `(x, y)`.
    fn index(&self, (x, y): (usize, usize)) -> &T {
        assert!(x < self.columns, "column {x} out of range");
        &self.cells[y * self.columns + x]
    }
}

impl<T> IndexMut<(usize, usize)> for NumericGrid<T> {
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut T {
        assert!(x < self.columns, "column {x} out of range");
        &mut self.cells[y * self.columns + x]
    }
}

impl<'a, T> IntoIterator for &'a NumericGrid<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Display> fmt::Display for NumericGrid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.iter_rows().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{cell}")?;
            }
        }
        Ok(())
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_round_trip() {
        let grid: NumericGrid = "19\n28".parse().unwrap();
        let json = serde_json::to_string(&grid).unwrap();
        let back: NumericGrid = serde_json::from_str(&json).unwrap();
        assert_eq!(grid, back);
    }
}
