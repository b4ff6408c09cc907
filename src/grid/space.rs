//! The grid: dimensions, houses and the current facility placement.

use std::collections::BTreeSet;

use rand::Rng;

use super::{Cell, Placement};
use crate::error::{PlacementError, Result};
use crate::random::sample_distinct;

/// A `height` x `width` grid holding fixed houses and `num_facilities`
/// relocatable facilities.
///
/// # Examples
///
/// ```
/// use u_facility::grid::{Cell, Grid};
///
/// let mut grid = Grid::new(3, 3, 1).unwrap();
/// grid.add_house(0, 0);
/// grid.add_house(2, 2);
/// assert_eq!(grid.free_cells().len(), 7);
/// assert!(!grid.free_cells().contains(&Cell::new(0, 0)));
/// ```
#[derive(Debug, Clone)]
pub struct Grid {
    height: usize,
    width: usize,
    num_facilities: usize,
    houses: BTreeSet<Cell>,
    facilities: Placement,
}

impl Grid {
    /// Creates an empty grid. All three values must be positive.
    pub fn new(height: usize, width: usize, num_facilities: usize) -> Result<Self> {
        if height == 0 || width == 0 || num_facilities == 0 {
            return Err(PlacementError::InvalidGrid {
                height,
                width,
                num_facilities,
            });
        }
        Ok(Self {
            height,
            width,
            num_facilities,
            houses: BTreeSet::new(),
            facilities: Placement::new(),
        })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn num_facilities(&self) -> usize {
        self.num_facilities
    }

    /// Total number of cells.
    pub fn capacity(&self) -> usize {
        self.height * self.width
    }

    pub fn in_bounds(&self, cell: &Cell) -> bool {
        cell.row < self.height && cell.col < self.width
    }

    /// Adds a house. Inserting an existing house is a no-op.
    ///
    /// The cell must be in bounds and free of facilities; use
    /// [`Grid::try_add_house`] for checked insertion.
    pub fn add_house(&mut self, row: usize, col: usize) {
        let cell = Cell::new(row, col);
        debug_assert!(self.in_bounds(&cell), "house {cell} out of bounds");
        debug_assert!(!self.facilities.contains(&cell), "house {cell} on a facility");
        self.houses.insert(cell);
    }

    /// Checked variant of [`Grid::add_house`].
    ///
    /// Returns `Ok(true)` if the house was new, `Ok(false)` if it already existed.
    pub fn try_add_house(&mut self, row: usize, col: usize) -> Result<bool> {
        let cell = Cell::new(row, col);
        if !self.in_bounds(&cell) {
            return Err(PlacementError::OutOfBounds {
                cell,
                height: self.height,
                width: self.width,
            });
        }
        if self.facilities.contains(&cell) {
            return Err(PlacementError::InvariantViolation(format!(
                "house {cell} would overlap a facility"
            )));
        }
        Ok(self.houses.insert(cell))
    }

    /// Places `count` houses on distinct random free cells.
    pub fn populate_random_houses<R: Rng>(
        &mut self,
        count: usize,
        rng: &mut R,
    ) -> Result<()> {
        let free: Vec<Cell> = self.free_cells().into_iter().collect();
        let picked = sample_distinct(&free, count, rng).ok_or(PlacementError::Configuration {
            requested: count,
            available: free.len(),
        })?;
        self.houses.extend(picked);
        Ok(())
    }

    pub fn houses(&self) -> &BTreeSet<Cell> {
        &self.houses
    }

    pub fn is_house(&self, cell: &Cell) -> bool {
        self.houses.contains(cell)
    }

    pub fn facilities(&self) -> &Placement {
        &self.facilities
    }

    /// Replaces the current facility placement after validating it.
    pub fn set_facilities(&mut self, placement: Placement) -> Result<()> {
        self.validate_placement(&placement)?;
        self.facilities = placement;
        Ok(())
    }

    pub fn clear_facilities(&mut self) {
        self.facilities = Placement::new();
    }

    /// Iterates every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.height).flat_map(move |row| (0..self.width).map(move |col| Cell::new(row, col)))
    }

    /// All cells that hold neither a house nor a current facility.
    ///
    /// # Panics
    ///
    /// If a facility overlaps a house or lies outside the grid.
    pub fn free_cells(&self) -> BTreeSet<Cell> {
        self.free_cells_excluding(&self.facilities)
    }

    /// All cells that hold neither a house nor a member of `placement`.
    ///
    /// # Panics
    ///
    /// If `placement` overlaps a house or lies outside the grid.
    pub fn free_cells_excluding(&self, placement: &Placement) -> BTreeSet<Cell> {
        for cell in placement {
            assert!(self.in_bounds(cell), "facility {cell} out of bounds");
            assert!(!self.houses.contains(cell), "facility {cell} overlaps a house");
        }
        self.cells()
            .filter(|c| !self.houses.contains(c) && !placement.contains(c))
            .collect()
    }

    /// Checks that `placement` has exactly `num_facilities` in-bounds cells
    /// and none of them is a house.
    pub fn validate_placement(&self, placement: &Placement) -> Result<()> {
        if placement.len() != self.num_facilities {
            return Err(PlacementError::InvariantViolation(format!(
                "placement has {} facilities, expected {}",
                placement.len(),
                self.num_facilities
            )));
        }
        for cell in placement {
            if !self.in_bounds(cell) {
                return Err(PlacementError::InvariantViolation(format!(
                    "facility {cell} outside the {}x{} grid",
                    self.height, self.width
                )));
            }
            if self.houses.contains(cell) {
                return Err(PlacementError::InvariantViolation(format!(
                    "facility {cell} overlaps a house"
                )));
            }
        }
        Ok(())
    }
}
