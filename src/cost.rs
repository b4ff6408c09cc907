//! Aggregate travel-distance cost of a facility placement.

use std::collections::BTreeSet;

use crate::grid::{Cell, Placement};

/// Manhattan distance from `house` to its closest facility.
///
/// # Panics
///
/// If `facilities` is empty.
pub fn nearest_distance(house: &Cell, facilities: &Placement) -> u64 {
    facilities
        .iter()
        .map(|f| house.manhattan(f))
        .min()
        .expect("cost is undefined for an empty facility set")
}

/// Sum over all houses of the distance to the nearest facility.
///
/// Returns 0 when there are no houses. Recomputes every distance from
/// scratch.
///
/// # Panics
///
/// If `houses` is non-empty and `facilities` is empty.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeSet;
/// use u_facility::cost::placement_cost;
/// use u_facility::grid::{Cell, Placement};
///
/// let houses: BTreeSet<Cell> = [Cell::new(0, 0), Cell::new(0, 5)].into_iter().collect();
/// let facilities: Placement = [Cell::new(0, 2)].into_iter().collect();
/// assert_eq!(placement_cost(&houses, &facilities), 5);
/// ```
pub fn placement_cost(houses: &BTreeSet<Cell>, facilities: &Placement) -> u64 {
    houses.iter().map(|h| nearest_distance(h, facilities)).sum()
}
