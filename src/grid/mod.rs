//! Grid model: coordinates, facility placements and the house/facility grid.
//!
//! Houses are fixed demand points; facilities are the relocatable supply
//! points the search moves around. Both are stored as ordered sets of
//! [`Cell`]s so that iteration order, and therefore every seeded run, is
//! deterministic.

mod cell;
mod placement;
mod space;

pub use cell::Cell;
pub use placement::Placement;
pub use space::Grid;
