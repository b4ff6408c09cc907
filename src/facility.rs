//! Facility placement on a grid as a Hill Climbing problem.
//!
//! Minimizes the total Manhattan distance from every house to its nearest
//! facility. A move relocates one facility to an adjacent free cell.

use rand::Rng;

use crate::climb::{ClimbConfig, ClimbObserver, ClimbProblem, ClimbResult, ClimbRunner};
use crate::cost::placement_cost;
use crate::error::{PlacementError, Result};
use crate::grid::{Cell, Grid, Placement};
use crate::neighbor::relocations;
use crate::random::{rng_from_seed, sample_distinct};
use crate::sink::{Snapshot, SnapshotSink};

/// Outcome of [`place_facilities`].
pub type PlacementResult = ClimbResult<Placement, u64>;

/// Hill Climbing view of a grid's houses. The grid's own facility set is
/// ignored; solutions carry their own placement.
pub struct FacilityProblem<'a> {
    grid: &'a Grid,
}

impl<'a> FacilityProblem<'a> {
    pub fn new(grid: &'a Grid) -> Self {
        Self { grid }
    }
}

impl ClimbProblem for FacilityProblem<'_> {
    type Solution = Placement;
    type Cost = u64;

    /// Samples `num_facilities` distinct cells uniformly from the cells
    /// without houses.
    fn initial_solution<R: Rng>(&self, rng: &mut R) -> Result<Placement> {
        let free: Vec<Cell> = self
            .grid
            .free_cells_excluding(&Placement::new())
            .into_iter()
            .collect();
        let requested = self.grid.num_facilities();
        let cells = sample_distinct(&free, requested, rng).ok_or(PlacementError::Configuration {
            requested,
            available: free.len(),
        })?;
        let placement: Placement = cells.into_iter().collect();
        self.grid.validate_placement(&placement)?;
        Ok(placement)
    }

    fn cost(&self, placement: &Placement) -> u64 {
        placement_cost(self.grid.houses(), placement)
    }

    fn neighbors(&self, placement: &Placement) -> Vec<Placement> {
        relocations(self.grid, placement)
    }
}

/// Forwards runner steps to a [`SnapshotSink`] with the grid context attached.
struct SnapshotRelay<'a, K: ?Sized> {
    grid: &'a Grid,
    sink: &'a mut K,
}

impl<K: SnapshotSink + ?Sized> ClimbObserver<Placement, u64> for SnapshotRelay<'_, K> {
    fn on_step(&mut self, iteration: usize, solution: &Placement, cost: u64) -> Result<()> {
        debug_assert!(self.grid.validate_placement(solution).is_ok());
        self.sink.emit(&Snapshot {
            iteration,
            height: self.grid.height(),
            width: self.grid.width(),
            houses: self.grid.houses(),
            facilities: solution,
            cost,
        })
    }
}

/// Places the grid's facilities by Hill Climbing and stores the converged
/// placement back into the grid.
///
/// The sink receives the initial placement and every accepted move. Any
/// previous facility placement on the grid is discarded first.
///
/// # Errors
///
/// [`PlacementError::Configuration`] when there are fewer cells without
/// houses than facilities; sink errors are passed through.
///
/// # Examples
///
/// ```
/// use u_facility::climb::ClimbConfig;
/// use u_facility::facility::place_facilities;
/// use u_facility::grid::Grid;
/// use u_facility::sink::NullSink;
///
/// let mut grid = Grid::new(5, 5, 1).unwrap();
/// grid.add_house(2, 2);
/// let result = place_facilities(&mut grid, &ClimbConfig::default().with_seed(3), &mut NullSink).unwrap();
/// assert_eq!(result.best_cost, 1);
/// assert_eq!(grid.facilities(), &result.best);
/// ```
pub fn place_facilities<K: SnapshotSink + ?Sized>(
    grid: &mut Grid,
    config: &ClimbConfig,
    sink: &mut K,
) -> Result<PlacementResult> {
    let mut rng = rng_from_seed(config.seed);
    place_facilities_with_rng(grid, &mut rng, sink)
}

/// [`place_facilities`] with a caller-supplied random source.
pub fn place_facilities_with_rng<R: Rng, K: SnapshotSink + ?Sized>(
    grid: &mut Grid,
    rng: &mut R,
    sink: &mut K,
) -> Result<PlacementResult> {
    grid.clear_facilities();
    let result = {
        let view: &Grid = grid;
        let problem = FacilityProblem::new(view);
        let mut relay = SnapshotRelay { grid: view, sink };
        ClimbRunner::run_with_rng(&problem, rng, &mut relay)?
    };
    grid.set_facilities(result.best.clone())?;
    Ok(result)
}
