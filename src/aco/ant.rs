//! One tour-building agent.

use super::pheromone::PheromoneField;
use crate::instance::{DistanceMatrix, Tour};

/// A single walker in the colony.
///
/// An ant lives for exactly one tour: created at the depot at the start
/// of a generation, it repeatedly picks an unvisited node by roulette
/// selection over trail intensity and inverse distance, and is discarded
/// once its completed tour has been deposited. During the walk it only
/// reads the shared pheromone field; all writes happen in the runner
/// after every ant of the generation has finished.
#[derive(Debug, Clone)]
pub struct Ant {
    position: usize,
    nodes: Vec<usize>,
    visited: Vec<bool>,
    length: f64,
}

impl Ant {
    /// Creates an ant at `start` on an instance of `node_count` nodes,
    /// with the start node already visited.
    pub fn new(start: usize, node_count: usize) -> Self {
        let mut visited = vec![false; node_count];
        visited[start] = true;
        Self {
            position: start,
            nodes: vec![start],
            visited,
            length: 0.0,
        }
    }

    /// Whether every node has been visited (the walk is complete and
    /// only the closing move back to the depot remains).
    pub fn all_visited(&self) -> bool {
        self.visited.iter().all(|&v| v)
    }

    /// Current node index.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Accumulated length of the path walked so far.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Picks the next node by roulette-wheel selection against one
    /// uniform `draw` in `[0, 1)`.
    ///
    /// Each unvisited node `i` gets unnormalized desirability
    /// `pheromone[cur][i]^alpha * (1/distance[cur][i])^beta`; the draw is
    /// scaled by the normalizing sum and matched against the cumulative
    /// desirabilities. A pure function of its arguments: the caller owns
    /// the RNG, so a fixed draw sequence makes selection deterministic.
    ///
    /// If every unvisited node has zero desirability (e.g. zeroed trail
    /// with positive `alpha`) the distribution is degenerate; rather than
    /// divide by zero, selection falls back to a uniform choice among the
    /// unvisited nodes using the same draw.
    ///
    /// # Panics
    ///
    /// Panics if every node is already visited.
    pub fn select_next(
        &self,
        pheromone: &PheromoneField,
        distances: &DistanceMatrix,
        alpha: f64,
        beta: f64,
        draw: f64,
    ) -> usize {
        let n = self.visited.len();
        let mut desirability = vec![0.0; n];
        let mut sum = 0.0;
        for i in 0..n {
            if !self.visited[i] {
                desirability[i] = pheromone.get(self.position, i).powf(alpha)
                    * (1.0 / distances.get(self.position, i)).powf(beta);
                sum += desirability[i];
            }
        }

        if !(sum > 0.0 && sum.is_finite()) {
            return self.uniform_fallback(draw);
        }

        let threshold = draw * sum;
        let mut cumulative = 0.0;
        let mut last_unvisited = None;
        for i in 0..n {
            if self.visited[i] {
                continue;
            }
            cumulative += desirability[i];
            last_unvisited = Some(i);
            if threshold < cumulative {
                return i;
            }
        }
        // Rounding can leave the threshold at the very top of the wheel.
        last_unvisited.expect("select_next called with no unvisited node")
    }

    fn uniform_fallback(&self, draw: f64) -> usize {
        let remaining: Vec<usize> = (0..self.visited.len())
            .filter(|&i| !self.visited[i])
            .collect();
        assert!(
            !remaining.is_empty(),
            "select_next called with no unvisited node"
        );
        let idx = ((draw * remaining.len() as f64) as usize).min(remaining.len() - 1);
        remaining[idx]
    }

    /// Moves to `next`: appends it to the tour, marks it visited, and
    /// adds the traversed edge to the running length. Also used for the
    /// forced closing move back to the depot once the walk is complete.
    pub fn move_to(&mut self, next: usize, distances: &DistanceMatrix) {
        self.length += distances.get(self.position, next);
        self.position = next;
        self.visited[next] = true;
        self.nodes.push(next);
    }

    /// Consumes the ant, yielding its completed tour.
    pub fn into_tour(self) -> Tour {
        Tour::new(self.nodes, self.length)
    }
}
