//! Exact brute-force TSP solver.
//!
//! Enumerates every permutation of the non-depot nodes and keeps the
//! shortest closed cycle. O((N-1)!) tours at O(N) per evaluation, with
//! no pruning: this solver exists as a ground-truth baseline for the
//! colony optimizer and is impractical beyond roughly 10-12 nodes.

mod runner;

pub use runner::{ExactResult, ExactRunner};
