//! Problem instance data: points, distances, tours.
//!
//! Everything here is immutable after construction. The distance matrix
//! is built once from the input point list and shared read-only by both
//! solvers; tours are the common output representation.

mod matrix;
mod point;
mod tour;

pub use matrix::DistanceMatrix;
pub use point::Point;
pub use tour::Tour;
