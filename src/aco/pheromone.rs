//! Shared pheromone trail matrix.

use crate::instance::Tour;

/// Trail intensities for every edge, N×N and symmetric: every deposit
/// and evaporation touches `[i][j]` and `[j][i]` identically.
///
/// The runner owns the field and is its only writer; agents get a shared
/// reference during the walk phase. Values never go negative (deposits
/// are positive, evaporation multiplies by a factor in (0, 1)), but can
/// grow without bound if deposits outpace evaporation — an accepted
/// property of the parameterization, not clamped.
#[derive(Debug, Clone)]
pub struct PheromoneField {
    n: usize,
    values: Vec<f64>,
}

impl PheromoneField {
    /// Creates an N×N field with every entry at `initial`.
    pub fn new(n: usize, initial: f64) -> Self {
        Self {
            n,
            values: vec![initial; n * n],
        }
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Trail intensity on the edge between `i` and `j`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i * self.n + j]
    }

    /// Reinforces every edge of a completed tour, closing edge included,
    /// by `q / tour.length` in both directions. Shorter tours therefore
    /// deposit more per edge — the positive-feedback mechanism that
    /// biases later agents toward good edges.
    pub fn deposit(&mut self, tour: &Tour, q: f64) {
        let delta = q / tour.length;
        for w in tour.nodes.windows(2) {
            let (u, v) = (w[0], w[1]);
            self.values[u * self.n + v] += delta;
            self.values[v * self.n + u] += delta;
        }
    }

    /// Multiplies every entry by `rate`. Called exactly once per
    /// generation, after all of that generation's deposits; the
    /// deposit-then-evaporate order affects convergence and is fixed.
    pub fn evaporate(&mut self, rate: f64) {
        for value in &mut self.values {
            *value *= rate;
        }
    }

    /// Row-major copy of the matrix, for external visualization.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        (0..self.n)
            .map(|i| self.values[i * self.n..(i + 1) * self.n].to_vec())
            .collect()
    }
}
