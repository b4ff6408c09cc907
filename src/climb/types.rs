//! Core traits for Hill Climbing.

use std::fmt::Debug;

use rand::Rng;

use crate::error::Result;

/// Defines a discrete minimization problem for Hill Climbing.
///
/// The runner handles the loop, tie-breaking and termination; the problem
/// supplies the start, the cost and the full neighborhood.
pub trait ClimbProblem {
    /// The solution representation.
    type Solution: Clone;

    /// Cost of a solution. Lower is better; ties are exact.
    type Cost: Ord + Copy + Debug;

    /// Creates a random initial solution.
    ///
    /// Fails when no valid solution can be constructed.
    fn initial_solution<R: Rng>(&self, rng: &mut R) -> Result<Self::Solution>;

    /// Computes the cost of a solution.
    fn cost(&self, solution: &Self::Solution) -> Self::Cost;

    /// Every neighbor of `solution`. The neighborhood must be exhaustive:
    /// convergence means no listed neighbor is strictly better.
    fn neighbors(&self, solution: &Self::Solution) -> Vec<Self::Solution>;
}

/// Receives the current solution once at initialization (iteration 0) and
/// once after every accepted move.
///
/// Rejected evaluations are never reported. An error aborts the run.
pub trait ClimbObserver<S, C> {
    fn on_step(&mut self, iteration: usize, solution: &S, cost: C) -> Result<()>;
}

impl<S, C> ClimbObserver<S, C> for () {
    fn on_step(&mut self, _iteration: usize, _solution: &S, _cost: C) -> Result<()> {
        Ok(())
    }
}

/// State of the search loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchState {
    /// Still looking for a strictly improving neighbor.
    Searching,
    /// No neighbor is strictly better; the current solution is final.
    Converged,
}
