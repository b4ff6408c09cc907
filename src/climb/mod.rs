//! Steepest-descent Hill Climbing.
//!
//! A single-solution trajectory method: from a random start, evaluate
//! the whole neighborhood, move to the best neighbor if it is strictly
//! better than the current solution, and stop otherwise. Ties among the
//! best neighbors are broken uniformly at random, so different seeds reach
//! different local optima.
//!
//! Only a local optimum is guaranteed. There is a single random start per
//! run; no restarts are performed.
//!
//! # References
//!
//! - Russell, S. & Norvig, P. (2020). *Artificial Intelligence: A Modern
//!   Approach*, 4th ed., §4.1.1 "Hill-climbing search".

mod config;
mod runner;
mod types;

pub use config::ClimbConfig;
pub use runner::{ClimbResult, ClimbRunner};
pub use types::{ClimbObserver, ClimbProblem, SearchState};
