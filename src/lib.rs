//! Grid facility placement by steepest-descent Hill Climbing.
//!
//! Places a fixed number of facilities ("hospitals") on a grid already
//! occupied by fixed demand points ("houses"), minimizing the sum over all
//! houses of the Manhattan distance to the nearest facility.
//!
//! - **Grid model** ([`grid`]): cells, placements, houses, free cells.
//! - **Cost function** ([`cost`]): aggregate nearest-facility distance.
//! - **Neighbor generator** ([`neighbor`]): single-facility moves to
//!   orthogonally adjacent free cells.
//! - **Hill Climbing** ([`climb`]): generic steepest-descent runner with
//!   uniform random tie-breaking, used by [`facility`].
//! - **Snapshot sinks** ([`sink`]): observers for every accepted layout.
//!
//! Hill Climbing finds a local optimum only. All randomness comes from an
//! explicitly passed, seedable RNG ([`random`]), so seeded runs are
//! reproducible.
//!
//! # Example
//!
//! ```
//! use u_facility::climb::ClimbConfig;
//! use u_facility::facility::place_facilities;
//! use u_facility::grid::Grid;
//! use u_facility::random::create_rng;
//! use u_facility::sink::RecordingSink;
//!
//! let mut grid = Grid::new(10, 20, 3).unwrap();
//! grid.populate_random_houses(15, &mut create_rng(0)).unwrap();
//!
//! let mut sink = RecordingSink::new();
//! let result = place_facilities(&mut grid, &ClimbConfig::default().with_seed(42), &mut sink).unwrap();
//! assert!(result.best_cost <= result.initial_cost);
//! assert_eq!(sink.frames.len(), result.iterations + 1);
//! ```

pub mod climb;
pub mod cost;
pub mod error;
pub mod facility;
pub mod grid;
pub mod neighbor;
pub mod random;
pub mod sink;

pub use error::{PlacementError, Result};
