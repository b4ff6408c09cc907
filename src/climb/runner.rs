//! Hill Climbing execution engine.
//!
//! # Algorithm
//!
//! 1. Generate a random initial solution and report it as iteration 0
//! 2. At each iteration:
//!    a. Evaluate every neighbor from scratch
//!    b. Collect all neighbors sharing the minimum cost
//!    c. If that minimum is not strictly below the current cost, stop
//!    d. Otherwise move to one of them chosen uniformly at random and
//!    report it
//! 3. Return the converged solution
//!
//! Costs strictly decrease with every accepted move, so the loop always
//! terminates on a finite neighborhood graph.

use rand::Rng;
use tracing::{info, trace};

use super::config::ClimbConfig;
use super::types::{ClimbObserver, ClimbProblem, SearchState};
use crate::error::Result;
use crate::random::{choose, rng_from_seed};

/// Result of a Hill Climbing run.
#[derive(Debug, Clone)]
pub struct ClimbResult<S: Clone, C> {
    /// The converged solution (a local optimum).
    pub best: S,
    /// Cost of the converged solution.
    pub best_cost: C,
    /// Cost of the random initial solution.
    pub initial_cost: C,
    /// Number of accepted (strictly improving) moves.
    pub iterations: usize,
    /// Total number of neighbor cost evaluations.
    pub evaluations: usize,
    /// Final state of the loop; always [`SearchState::Converged`] on success.
    pub state: SearchState,
    /// Cost after each iteration; index 0 is the initial cost. Strictly
    /// decreasing.
    pub cost_history: Vec<C>,
}

/// Steepest-descent Hill Climbing runner.
pub struct ClimbRunner;

impl ClimbRunner {
    /// Runs Hill Climbing with the RNG described by `config`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_facility::climb::{ClimbConfig, ClimbProblem, ClimbRunner};
    /// use u_facility::error::Result;
    /// use rand::Rng;
    ///
    /// // Minimize |x - 5| over the integers by unit steps.
    /// struct Line;
    /// impl ClimbProblem for Line {
    ///     type Solution = i64;
    ///     type Cost = u64;
    ///     fn initial_solution<R: Rng>(&self, rng: &mut R) -> Result<i64> {
    ///         Ok(rng.random_range(-20..20))
    ///     }
    ///     fn cost(&self, x: &i64) -> u64 { (x - 5).unsigned_abs() }
    ///     fn neighbors(&self, x: &i64) -> Vec<i64> { vec![x - 1, x + 1] }
    /// }
    ///
    /// let result = ClimbRunner::run(&Line, &ClimbConfig::default().with_seed(1)).unwrap();
    /// assert_eq!(result.best, 5);
    /// ```
    pub fn run<P: ClimbProblem>(
        problem: &P,
        config: &ClimbConfig,
    ) -> Result<ClimbResult<P::Solution, P::Cost>> {
        Self::run_with_observer(problem, config, &mut ())
    }

    /// Runs Hill Climbing, reporting the initial and every accepted solution
    /// to `observer`.
    pub fn run_with_observer<P, O>(
        problem: &P,
        config: &ClimbConfig,
        observer: &mut O,
    ) -> Result<ClimbResult<P::Solution, P::Cost>>
    where
        P: ClimbProblem,
        O: ClimbObserver<P::Solution, P::Cost>,
    {
        let mut rng = rng_from_seed(config.seed);
        Self::run_with_rng(problem, &mut rng, observer)
    }

    /// Runs Hill Climbing with a caller-supplied random source.
    pub fn run_with_rng<P, R, O>(
        problem: &P,
        rng: &mut R,
        observer: &mut O,
    ) -> Result<ClimbResult<P::Solution, P::Cost>>
    where
        P: ClimbProblem,
        R: Rng,
        O: ClimbObserver<P::Solution, P::Cost>,
    {
        let mut current = problem.initial_solution(rng)?;
        let mut current_cost = problem.cost(&current);
        let initial_cost = current_cost;
        let mut state = SearchState::Searching;

        info!(cost = ?current_cost, "initial state");
        observer.on_step(0, &current, current_cost)?;

        let mut iterations = 0usize;
        let mut evaluations = 0usize;
        let mut cost_history = vec![current_cost];

        while state == SearchState::Searching {
            let mut best_neighbors: Vec<P::Solution> = Vec::new();
            let mut best_neighbor_cost: Option<P::Cost> = None;

            for neighbor in problem.neighbors(&current) {
                let cost = problem.cost(&neighbor);
                evaluations += 1;
                match best_neighbor_cost {
                    Some(best) if cost > best => {}
                    Some(best) if cost == best => best_neighbors.push(neighbor),
                    _ => {
                        best_neighbor_cost = Some(cost);
                        best_neighbors.clear();
                        best_neighbors.push(neighbor);
                    }
                }
            }

            trace!(
                iteration = iterations + 1,
                best = ?best_neighbor_cost,
                ties = best_neighbors.len(),
                "neighborhood evaluated"
            );

            // Equal cost is not an improvement.
            let improved = match best_neighbor_cost {
                Some(cost) if cost < current_cost => {
                    choose(&best_neighbors, rng).map(|next| (next.clone(), cost))
                }
                _ => None,
            };

            match improved {
                Some((next, cost)) => {
                    current = next;
                    current_cost = cost;
                    iterations += 1;
                    cost_history.push(current_cost);
                    info!(iteration = iterations, cost = ?current_cost, "found better neighbor");
                    observer.on_step(iterations, &current, current_cost)?;
                }
                None => state = SearchState::Converged,
            }
        }

        info!(
            cost = ?current_cost,
            initial = ?initial_cost,
            iterations,
            evaluations,
            "converged"
        );

        Ok(ClimbResult {
            best: current,
            best_cost: current_cost,
            initial_cost,
            iterations,
            evaluations,
            state,
            cost_history,
        })
    }
}
