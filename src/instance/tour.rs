//! Closed-cycle tour representation.

/// A closed tour over an N-node instance: `nodes` holds N+1 indices,
/// starting and ending at the depot (node 0), with every other node
/// appearing exactly once in between. `length` is the sum of all edge
/// distances including the closing edge.
///
/// Both solvers uphold this shape for every tour they return.
#[derive(Debug, Clone, PartialEq)]
pub struct Tour {
    pub nodes: Vec<usize>,
    pub length: f64,
}

impl Tour {
    pub fn new(nodes: Vec<usize>, length: f64) -> Self {
        Self { nodes, length }
    }

    /// Checks the closed-cycle invariant against an instance of `n` nodes:
    /// N+1 entries, first and last are the depot, each node visited once.
    pub fn is_closed_cycle(&self, n: usize) -> bool {
        if self.nodes.len() != n + 1 {
            return false;
        }
        if self.nodes[0] != 0 || self.nodes[n] != 0 {
            return false;
        }
        let mut seen = vec![false; n];
        for &node in &self.nodes[..n] {
            if node >= n || seen[node] {
                return false;
            }
            seen[node] = true;
        }
        true
    }
}
