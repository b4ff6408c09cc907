//! Neighbor generation: single-facility moves to adjacent free cells.

use crate::grid::{Cell, Grid, Placement};

/// Orthogonally adjacent cells of `cell` that are inside the grid, not a
/// house, and not a member of `facilities`.
///
/// Order is up, down, left, right.
///
/// # Examples
///
/// ```
/// use u_facility::grid::{Cell, Grid, Placement};
/// use u_facility::neighbor::neighbors;
///
/// let grid = Grid::new(5, 5, 1).unwrap();
/// let facilities: Placement = [Cell::new(0, 0)].into_iter().collect();
/// assert_eq!(
///     neighbors(&grid, &facilities, Cell::new(0, 0)),
///     vec![Cell::new(1, 0), Cell::new(0, 1)]
/// );
/// ```
pub fn neighbors(grid: &Grid, facilities: &Placement, cell: Cell) -> Vec<Cell> {
    cell.orthogonal()
        .filter(|n| grid.in_bounds(n) && !grid.is_house(n) && !facilities.contains(n))
        .collect()
}

/// Every placement reachable by moving exactly one facility to one of its
/// neighbors.
///
/// Facilities are visited in row-major order and neighbors in the order
/// returned by [`neighbors`], so the result is deterministic.
pub fn relocations(grid: &Grid, placement: &Placement) -> Vec<Placement> {
    placement
        .iter()
        .flat_map(|&from| {
            neighbors(grid, placement, from)
                .into_iter()
                .map(move |to| placement.relocate(from, to))
        })
        .collect()
}
