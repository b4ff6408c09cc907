//! Facility placement: the mutable state evolved by the search.

use std::collections::BTreeSet;

use super::Cell;

/// An ordered set of facility cells.
///
/// A placement is never edited in place during the search; each move
/// produces a fresh value via [`Placement::relocate`] and the search swaps
/// it in wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    cells: BTreeSet<Cell>,
}

impl Placement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, cell: &Cell) -> bool {
        self.cells.contains(cell)
    }

    /// Iterates facilities in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.cells.iter()
    }

    /// Returns a new placement with `from` replaced by `to`.
    ///
    /// `from` must be a member and `to` must not be; the result has the
    /// same size as `self`.
    pub fn relocate(&self, from: Cell, to: Cell) -> Placement {
        debug_assert!(self.contains(&from), "relocating non-member {from}");
        debug_assert!(!self.contains(&to), "relocating onto member {to}");
        let mut cells = self.cells.clone();
        cells.remove(&from);
        cells.insert(to);
        Placement { cells }
    }
}

impl FromIterator<Cell> for Placement {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Placement {
    type Item = &'a Cell;
    type IntoIter = std::collections::btree_set::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placement(cells: &[(usize, usize)]) -> Placement {
        cells.iter().copied().map(Cell::from).collect()
    }

    #[test]
    fn test_relocate_keeps_size() {
        let p = placement(&[(0, 0), (2, 2)]);
        let q = p.relocate(Cell::new(0, 0), Cell::new(0, 1));
        assert_eq!(q.len(), 2);
        assert!(q.contains(&Cell::new(0, 1)));
        assert!(!q.contains(&Cell::new(0, 0)));
        assert!(q.contains(&Cell::new(2, 2)));
    }

    #[test]
    fn test_relocate_leaves_original_untouched() {
        let p = placement(&[(1, 1)]);
        let _ = p.relocate(Cell::new(1, 1), Cell::new(1, 2));
        assert_eq!(p, placement(&[(1, 1)]));
    }

    #[test]
    fn test_from_iter_dedups() {
        let p = placement(&[(1, 1), (1, 1), (0, 3)]);
        assert_eq!(p.len(), 2);
    }

    #[test]
    fn test_iter_row_major() {
        let p = placement(&[(3, 0), (0, 4), (0, 1)]);
        let cells: Vec<Cell> = p.iter().copied().collect();
        assert_eq!(
            cells,
            vec![Cell::new(0, 1), Cell::new(0, 4), Cell::new(3, 0)]
        );
    }
}
