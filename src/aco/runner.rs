//! Colony generation loop.

use super::ant::Ant;
use super::config::AcoConfig;
use super::pheromone::PheromoneField;
use crate::instance::{DistanceMatrix, Tour};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// The depot: every tour starts and ends at node 0.
const START_NODE: usize = 0;

/// Result of a colony optimization run.
#[derive(Debug, Clone)]
pub struct AcoResult {
    /// Shortest tour seen across all generations.
    pub best: Tour,

    /// Number of generations executed.
    pub iterations: usize,

    /// Best-so-far length after each generation. Non-increasing, since
    /// the record is only replaced by strictly shorter tours.
    pub length_history: Vec<f64>,

    /// Final trail intensities, for external visualization.
    pub pheromone: PheromoneField,
}

/// Executes the colony optimizer.
///
/// # Usage
///
/// ```no_run
/// use tsp_colony::aco::{AcoConfig, AcoRunner};
/// use tsp_colony::instance::{DistanceMatrix, Point};
///
/// let points = vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(0.0, 1.0)];
/// let distances = DistanceMatrix::from_points(&points).unwrap();
/// let result = AcoRunner::run(&distances, &AcoConfig::default().with_seed(42));
/// println!("best length: {}", result.best.length);
/// ```
pub struct AcoRunner;

impl AcoRunner {
    /// Runs `iteration_count` generations of `ant_count` agents each.
    ///
    /// Each generation has three strictly ordered phases: every agent
    /// walks to completion against a read-only pheromone field, then
    /// every completed tour deposits, then one global evaporation pass
    /// runs. Agents never observe mid-generation trail updates.
    ///
    /// The search is stochastic; a fixed `seed` makes a run reproducible
    /// but different seeds may return different tours.
    ///
    /// # Panics
    ///
    /// Panics if the configuration is invalid (call [`AcoConfig::validate`]
    /// first to get a descriptive error).
    pub fn run(distances: &DistanceMatrix, config: &AcoConfig) -> AcoResult {
        config.validate().expect("invalid AcoConfig");

        let n = distances.len();
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::seed_from_u64(rand::random()),
        };

        let mut pheromone = PheromoneField::new(n, config.initial_pheromone);
        let mut best: Option<Tour> = None;
        let mut length_history = Vec::with_capacity(config.iteration_count);

        for _ in 0..config.iteration_count {
            // Walk phase: the field stays read-only until every agent
            // of this generation has finished its tour.
            let mut tours: Vec<Tour> = Vec::with_capacity(config.ant_count);
            for _ in 0..config.ant_count {
                let mut ant = Ant::new(START_NODE, n);
                while !ant.all_visited() {
                    let draw = rng.random_range(0.0..1.0);
                    let next =
                        ant.select_next(&pheromone, distances, config.alpha, config.beta, draw);
                    ant.move_to(next, distances);
                }
                // Forced closing move back to the depot.
                ant.move_to(START_NODE, distances);
                tours.push(ant.into_tour());
            }

            // Deposit phase: all tours, then exactly one evaporation.
            for tour in &tours {
                pheromone.deposit(tour, config.q);
            }
            pheromone.evaporate(config.evaporation);

            let iteration_best = tours
                .into_iter()
                .min_by(|a, b| {
                    a.length
                        .partial_cmp(&b.length)
                        .unwrap_or(std::cmp::Ordering::Equal)
                })
                .expect("ant_count is at least 1");

            // Replace the record only on strictly shorter.
            if best
                .as_ref()
                .is_none_or(|record| iteration_best.length < record.length)
            {
                best = Some(iteration_best);
            }
            length_history.push(best.as_ref().expect("record set above").length);
        }

        AcoResult {
            best: best.expect("iteration_count is at least 1"),
            iterations: config.iteration_count,
            length_history,
            pheromone,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exact::ExactRunner;
    use crate::instance::Point;

    fn matrix(points: &[(f64, f64)]) -> DistanceMatrix {
        let points: Vec<Point> = points.iter().map(|&(x, y)| Point::new(x, y)).collect();
        DistanceMatrix::from_points(&points).unwrap()
    }

    fn unit_square() -> DistanceMatrix {
        matrix(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)])
    }

    #[test]
    fn test_single_ant_single_iteration_is_the_best() {
        let distances = unit_square();
        let config = AcoConfig::default()
            .with_ant_count(1)
            .with_iteration_count(1)
            .with_seed(42);

        // With one candidate there is nothing to compare against: the
        // lone agent's tour is returned verbatim.
        let result = AcoRunner::run(&distances, &config);
        assert_eq!(result.iterations, 1);
        assert_eq!(result.length_history, vec![result.best.length]);
        assert!(result.best.is_closed_cycle(4));
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let distances = unit_square();
        let config = AcoConfig::default()
            .with_iteration_count(5)
            .with_ant_count(10)
            .with_seed(123);
        let a = AcoRunner::run(&distances, &config);
        let b = AcoRunner::run(&distances, &config);
        assert_eq!(a.best.nodes, b.best.nodes);
        assert_eq!(a.length_history, b.length_history);
    }

    #[test]
    fn test_best_so_far_history_non_increasing() {
        let distances = matrix(&[
            (0.0, 0.0),
            (4.0, 1.0),
            (1.5, 3.5),
            (5.0, 4.0),
            (2.0, 0.5),
            (3.0, 3.0),
        ]);
        let config = AcoConfig::default()
            .with_iteration_count(30)
            .with_ant_count(10)
            .with_seed(7);
        let result = AcoRunner::run(&distances, &config);

        assert_eq!(result.length_history.len(), 30);
        for window in result.length_history.windows(2) {
            assert!(
                window[1] <= window[0],
                "best-so-far regressed: {} then {}",
                window[0],
                window[1]
            );
        }
    }

    #[test]
    fn test_finds_unit_square_perimeter() {
        let distances = unit_square();
        let config = AcoConfig::default().with_seed(42);
        let result = AcoRunner::run(&distances, &config);

        // 50 ants over 100 generations on 4 nodes sample every cycle
        // shape many times over; the perimeter always wins.
        assert!((result.best.length - 4.0).abs() < 1e-9);
        assert!(result.best.is_closed_cycle(4));
    }

    #[test]
    fn test_matches_exact_solver_on_three_nodes() {
        // All closed tours over three nodes traverse the same edges.
        let distances = matrix(&[(0.0, 0.0), (3.0, 0.0), (1.0, 2.0)]);
        let exact = ExactRunner::run(&distances);
        let config = AcoConfig::default()
            .with_iteration_count(1)
            .with_ant_count(1)
            .with_seed(1);
        let aco = AcoRunner::run(&distances, &config);
        assert!((exact.best.length - aco.best.length).abs() < 1e-9);
    }

    #[test]
    fn test_final_field_stays_symmetric_and_positive() {
        let distances = unit_square();
        let config = AcoConfig::default()
            .with_iteration_count(20)
            .with_ant_count(5)
            .with_seed(9);
        let result = AcoRunner::run(&distances, &config);

        let field = &result.pheromone;
        for i in 0..field.len() {
            for j in 0..field.len() {
                assert_eq!(field.get(i, j), field.get(j, i));
                assert!(field.get(i, j) >= 0.0);
            }
        }
    }

    #[test]
    #[should_panic(expected = "invalid AcoConfig")]
    fn test_invalid_config_panics() {
        let distances = unit_square();
        let config = AcoConfig::default().with_ant_count(0);
        AcoRunner::run(&distances, &config);
    }
}
