//! Square matrix type for the spiral walker.

use std::fmt;

use super::walker::{spiral_order, spiral_positions};
use crate::config::GRID_CELL_WIDTH;
use crate::error::{Result, SnailsplitError};

/// An immutable n×n grid.
///
/// Construction checks that every row has exactly as many cells as there
/// are rows. The empty matrix (n = 0) is valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SquareMatrix<T> {
    rows: Vec<Vec<T>>,
}

impl<T> SquareMatrix<T> {
    /// Create a matrix from rows, rejecting ragged or rectangular input.
    ///
    /// # Errors
    /// Returns `SnailsplitError::NotSquare` for the first offending row.
    pub fn new(rows: Vec<Vec<T>>) -> Result<Self> {
        let n = rows.len();
        if let Some((row, cells)) = rows.iter().enumerate().find(|(_, r)| r.len() != n) {
            return Err(SnailsplitError::NotSquare {
                row,
                expected: n,
                actual: cells.len(),
            });
        }
        Ok(Self { rows })
    }

    /// Side length n.
    #[must_use]
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The rows, top to bottom.
    #[must_use]
    pub fn rows(&self) -> &[Vec<T>] {
        &self.rows
    }

    /// Cell at `(row, col)`, if in range.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.rows.get(row)?.get(col)
    }

    /// Borrowing iterator over the cells in clockwise spiral order.
    pub fn spiral_iter(&self) -> impl Iterator<Item = &T> + '_ {
        spiral_positions(self.size())
            .into_iter()
            .map(move |(row, col)| &self.rows[row][col])
    }
}

impl<T: Clone> SquareMatrix<T> {
    /// Cells in clockwise spiral order.
    #[must_use]
    pub fn spiral(&self) -> Vec<T> {
        spiral_order(&self.rows)
    }
}

impl SquareMatrix<i64> {
    /// The n×n matrix holding `1..=n²` in row-major order.
    ///
    /// # Examples
    /// ```
    /// use snailsplit::spiral::SquareMatrix;
    ///
    /// let m = SquareMatrix::sequential(2);
    /// assert_eq!(m.rows(), &[vec![1, 2], vec![3, 4]]);
    /// ```
    #[must_use]
    pub fn sequential(n: usize) -> Self {
        let mut next = 0i64;
        let rows = (0..n)
            .map(|_| {
                (0..n)
                    .map(|_| {
                        next += 1;
                        next
                    })
                    .collect()
            })
            .collect();
        Self { rows }
    }
}

impl<T: fmt::Display> fmt::Display for SquareMatrix<T> {
    /// Right-aligned grid, one row per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .rows
            .iter()
            .flatten()
            .map(|cell| cell.to_string().len())
            .max()
            .unwrap_or(0)
            .max(GRID_CELL_WIDTH);

        for row in &self.rows {
            let line: Vec<String> = row.iter().map(|cell| format!("{cell:>width$}")).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
