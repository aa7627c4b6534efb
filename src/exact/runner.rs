//! Permutation search execution.

use crate::instance::{DistanceMatrix, Tour};

/// Result of an exact search.
#[derive(Debug, Clone)]
pub struct ExactResult {
    /// The optimal closed tour.
    pub best: Tour,

    /// Number of complete tours scored; always `(N-1)!`.
    pub tours_evaluated: usize,
}

/// Executes the brute-force search.
pub struct ExactRunner;

impl ExactRunner {
    /// Finds the shortest closed tour starting and ending at node 0.
    ///
    /// The depot is fixed at both ends of the path buffer; the remaining
    /// nodes are permuted in place with the classic swap/recurse/swap-back
    /// scheme, and every complete permutation is scored including the
    /// closing edge. Strictly shorter tours replace the running minimum.
    pub fn run(distances: &DistanceMatrix) -> ExactResult {
        let n = distances.len();
        let mut rest: Vec<usize> = (1..n).collect();

        let mut search = Search {
            distances,
            path: vec![0; n + 1],
            best_length: f64::INFINITY,
            best_nodes: Vec::new(),
            tours_evaluated: 0,
        };
        search.permute(&mut rest, 0);

        ExactResult {
            best: Tour::new(search.best_nodes, search.best_length),
            tours_evaluated: search.tours_evaluated,
        }
    }
}

struct Search<'a> {
    distances: &'a DistanceMatrix,
    // Scoring buffer; slots 0 and n are pinned to the depot.
    path: Vec<usize>,
    best_length: f64,
    best_nodes: Vec<usize>,
    tours_evaluated: usize,
}

impl Search<'_> {
    fn permute(&mut self, rest: &mut [usize], index: usize) {
        if index == rest.len() {
            self.path[1..=rest.len()].copy_from_slice(rest);
            let length = self.distances.path_length(&self.path);
            self.tours_evaluated += 1;
            if length < self.best_length {
                self.best_length = length;
                self.best_nodes.clone_from(&self.path);
            }
            return;
        }
        for i in index..rest.len() {
            rest.swap(index, i);
            self.permute(rest, index + 1);
            rest.swap(index, i);
        }
    }
}
