use std::iter::StepBy;
use std::slice;

/// Read-only view of one column of a [`NumericGrid`](crate::NumericGrid).
#[derive(Debug, Clone, Copy)]
pub struct Column<'a, T> {
    cells: &'a [T],
    columns: usize,
    x: usize,
}

impl<'a, T> Column<'a, T> {
    pub(crate) fn new(cells: &'a [T], columns: usize, x: usize) -> Self {
        Self { cells, columns, x }
    }

    /// The column index inside the grid.
    #[inline]
    pub fn index(&self) -> usize {
        self.x
    }

    /// Number of cells in the column (the grid's row count).
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len() / self.columns
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The cell in row `y`.
    #[inline]
    pub fn get(&self, y: usize) -> Option<&'a T> {
        if y >= self.len() {
            return None;
        }
        self.cells.get(y * self.columns + self.x)
    }

    /// Iterate the column top to bottom.
    pub fn iter(&self) -> ColumnIter<'a, T> {
        // A grid with columns but no rows has no cell at `x`.
        let cells = self.cells.get(self.x..).unwrap_or(&[]);
        ColumnIter {
            inner: cells.iter().step_by(self.columns),
        }
    }
}

impl<'a, T> IntoIterator for Column<'a, T> {
    type Item = &'a T;
    type IntoIter = ColumnIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the cells of a [`Column`].
#[derive(Debug, Clone)]
pub struct ColumnIter<'a, T> {
    inner: StepBy<slice::Iter<'a, T>>,
}

impl<'a, T> Iterator for ColumnIter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for ColumnIter<'_, T> {}
