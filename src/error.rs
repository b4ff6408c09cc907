//! Error types for grid construction and facility search.

use thiserror::Error;

use crate::grid::Cell;

/// Errors surfaced by grid setup, placement validation and snapshot sinks.
#[derive(Error, Debug)]
pub enum PlacementError {
    /// Grid dimensions or facility count are zero.
    #[error("invalid grid: height={height}, width={width}, facilities={num_facilities} (all must be positive)")]
    InvalidGrid {
        height: usize,
        width: usize,
        num_facilities: usize,
    },

    /// Not enough free cells to place the requested number of items.
    #[error("configuration error: requested {requested} cells but only {available} are free")]
    Configuration { requested: usize, available: usize },

    /// A cell lies outside the grid.
    #[error("cell {cell} is outside the {height}x{width} grid")]
    OutOfBounds {
        cell: Cell,
        height: usize,
        width: usize,
    },

    /// A placement breaks the grid invariants (size, bounds, overlap).
    #[error("invariant violation: {0}")]
    InvariantViolation(String),

    /// The snapshot sink failed to write.
    #[error("snapshot sink error: {0}")]
    Sink(#[from] std::io::Error),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, PlacementError>;
