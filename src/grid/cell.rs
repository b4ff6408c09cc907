//! Grid coordinate value type.

use std::fmt;

/// A `(row, col)` coordinate on the grid.
///
/// Cells are plain values: equality, hashing and ordering are structural.
/// Ordering is row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Manhattan distance to another cell.
    pub fn manhattan(&self, other: &Cell) -> u64 {
        (self.row.abs_diff(other.row) + self.col.abs_diff(other.col)) as u64
    }

    /// Orthogonal neighbors in the order up, down, left, right.
    ///
    /// Only underflow is filtered here; the caller checks the upper bounds.
    pub fn orthogonal(&self) -> impl Iterator<Item = Cell> {
        let Cell { row, col } = *self;
        [
            row.checked_sub(1).map(|r| Cell::new(r, col)),
            row.checked_add(1).map(|r| Cell::new(r, col)),
            col.checked_sub(1).map(|c| Cell::new(row, c)),
            col.checked_add(1).map(|c| Cell::new(row, c)),
        ]
        .into_iter()
        .flatten()
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Self {
        Cell::new(row, col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
