//! Traveling Salesman Problem solvers over 2D point sets.
//!
//! Provides two interchangeable strategies operating on a shared
//! distance-matrix model:
//!
//! - **Exact solver**: brute-force enumeration of every tour through all
//!   nodes, guaranteed optimal. Factorial complexity; a ground-truth
//!   baseline for small instances (roughly up to 10-12 nodes).
//! - **Colony optimizer (ACO)**: generations of stochastic agents build
//!   candidate tours biased by a shared pheromone field; short tours
//!   reinforce their edges, evaporation keeps old trails from dominating.
//!
//! # Architecture
//!
//! The [`instance`] module holds the immutable problem data (points,
//! distance matrix, tour representation). Each solver lives in its own
//! module with its own runner and result types; the colony optimizer
//! additionally owns the mutable [`aco::PheromoneField`] across
//! iterations, handing agents read-only access during the walk phase.
//!
//! Everything is single-threaded and synchronous. The only external
//! effect is pseudo-random number generation, seedable for reproducible
//! runs.

pub mod aco;
pub mod exact;
pub mod instance;

use aco::{AcoConfig, AcoRunner, PheromoneField};
use exact::ExactRunner;
use instance::{DistanceMatrix, Point, Tour};

/// Which solver to run on an instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverChoice {
    /// Brute-force enumeration of all tours. Optimal, factorial cost.
    Exact,
    /// Ant Colony Optimization. Approximate, fixed work per run.
    ColonyOptimization,
}

/// Outcome of [`solve`]: the best tour found, plus the final pheromone
/// field when the colony optimizer produced it (consumed by external
/// visualization; `None` for the exact solver).
#[derive(Debug, Clone)]
pub struct Solution {
    pub tour: Tour,
    pub pheromone: Option<PheromoneField>,
}

/// Builds the distance matrix from `points` and runs the chosen solver.
///
/// Node 0 is the depot: every returned tour starts and ends there.
/// `config` is read only by [`SolverChoice::ColonyOptimization`].
///
/// # Errors
///
/// Returns an error if `points` has fewer than 2 entries or if `config`
/// is invalid.
pub fn solve(
    points: &[Point],
    choice: SolverChoice,
    config: &AcoConfig,
) -> Result<Solution, String> {
    let distances = DistanceMatrix::from_points(points)?;
    match choice {
        SolverChoice::Exact => {
            let result = ExactRunner::run(&distances);
            Ok(Solution {
                tour: result.best,
                pheromone: None,
            })
        }
        SolverChoice::ColonyOptimization => {
            config.validate()?;
            let result = AcoRunner::run(&distances, config);
            Ok(Solution {
                tour: result.best,
                pheromone: Some(result.pheromone),
            })
        }
    }
}
