//! Clockwise spiral walk over a square grid.

use super::types::SquareMatrix;
use crate::error::Result;

/// Active boundary of the ring being peeled.
#[derive(Debug, Clone, Copy)]
struct Bounds {
    top: usize,
    bottom: usize,
    left: usize,
    right: usize,
}

impl Bounds {
    fn new(n: usize) -> Option<Self> {
        let last = n.checked_sub(1)?;
        Some(Self {
            top: 0,
            bottom: last,
            left: 0,
            right: last,
        })
    }

    fn is_open(&self) -> bool {
        self.top <= self.bottom && self.left <= self.right
    }
}

/// Cell coordinates `(row, col)` of an n×n grid in clockwise spiral order.
///
/// Each ring is walked right along the top row, down the right column,
/// left along the bottom row and up the left column. The bottom and left
/// legs only run while a row or column remains, so the last ring of an
/// odd-sized grid is never visited twice.
///
/// # Examples
/// ```
/// use snailsplit::spiral::spiral_positions;
///
/// assert_eq!(spiral_positions(2), vec![(0, 0), (0, 1), (1, 1), (1, 0)]);
/// ```
#[must_use]
pub fn spiral_positions(n: usize) -> Vec<(usize, usize)> {
    let mut positions = Vec::with_capacity(n * n);
    let Some(mut b) = Bounds::new(n) else {
        return positions;
    };

    while b.is_open() {
        for col in b.left..=b.right {
            positions.push((b.top, col));
        }
        b.top += 1;

        for row in b.top..=b.bottom {
            positions.push((row, b.right));
        }
        // Column 0 consumed: nothing is left to the left of it
        let Some(right) = b.right.checked_sub(1) else {
            break;
        };
        b.right = right;

        if b.top <= b.bottom {
            for col in (b.left..=b.right).rev() {
                positions.push((b.bottom, col));
            }
            b.bottom -= 1;
        }

        if b.left <= b.right {
            for row in (b.top..=b.bottom).rev() {
                positions.push((row, b.left));
            }
            b.left += 1;
        }
    }

    positions
}

/// Elements of an n×n matrix in clockwise spiral order.
///
/// An empty matrix, or one whose first row is empty, yields an empty
/// result. The matrix is assumed square; cells missing from a short row
/// are skipped rather than reported. Use [`spiral_order_checked`] to reject
/// ragged input.
///
/// # Examples
/// ```
/// use snailsplit::spiral::spiral_order;
///
/// let matrix = vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]];
/// assert_eq!(spiral_order(&matrix), vec![1, 2, 3, 6, 9, 8, 7, 4, 5]);
/// ```
#[must_use]
pub fn spiral_order<T: Clone>(matrix: &[Vec<T>]) -> Vec<T> {
    if matrix.first().map_or(true, Vec::is_empty) {
        return Vec::new();
    }

    let mut missing = 0usize;
    let order: Vec<T> = spiral_positions(matrix.len())
        .into_iter()
        .filter_map(|(row, col)| {
            let cell = matrix.get(row).and_then(|r| r.get(col)).cloned();
            if cell.is_none() {
                missing += 1;
            }
            cell
        })
        .collect();

    if missing > 0 {
        tracing::warn!(missing, size = matrix.len(), "Matrix is not square, skipped missing cells");
    }

    order
}

/// Validate that `rows` form a square matrix, then walk it.
///
/// # Errors
/// Returns `SnailsplitError::NotSquare` for the first row whose length
/// differs from the number of rows.
pub fn spiral_order_checked<T: Clone>(rows: Vec<Vec<T>>) -> Result<Vec<T>> {
    Ok(SquareMatrix::new(rows)?.spiral())
}
