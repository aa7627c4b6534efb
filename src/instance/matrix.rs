//! All-pairs distance table.

use super::point::Point;

/// Precomputed Euclidean distances between every pair of nodes.
///
/// Stored row-major in a flat buffer. Symmetric with a zero diagonal by
/// construction (values are distances of real points), and read-only for
/// the rest of the run: both solvers only ever look distances up.
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    n: usize,
    values: Vec<f64>,
}

impl DistanceMatrix {
    /// Builds the matrix from an ordered point list. Node indices follow
    /// the list order; node 0 is the tour depot.
    ///
    /// # Errors
    ///
    /// A tour is undefined over fewer than 2 points; such input is
    /// rejected rather than producing a degenerate result.
    pub fn from_points(points: &[Point]) -> Result<Self, String> {
        if points.len() < 2 {
            return Err(format!(
                "a TSP instance needs at least 2 points, got {}",
                points.len()
            ));
        }
        let n = points.len();
        let mut values = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = points[i].distance_to(&points[j]);
                values[i * n + j] = d;
                values[j * n + i] = d;
            }
        }
        Ok(Self { n, values })
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Distance between nodes `i` and `j`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i * self.n + j]
    }

    /// Total length of a node sequence: the sum of consecutive edge
    /// distances. Does not close the cycle itself; pass a sequence that
    /// already ends where it started to score a full tour.
    pub fn path_length(&self, nodes: &[usize]) -> f64 {
        nodes.windows(2).map(|w| self.get(w[0], w[1])).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn unit_square() -> DistanceMatrix {
        DistanceMatrix::from_points(&[
            Point::new(0.0, 0.0),
            Point::new(0.0, 1.0),
            Point::new(1.0, 1.0),
            Point::new(1.0, 0.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_rejects_fewer_than_two_points() {
        assert!(DistanceMatrix::from_points(&[]).is_err());
        assert!(DistanceMatrix::from_points(&[Point::new(1.0, 1.0)]).is_err());
    }

    #[test]
    fn test_unit_square_distances() {
        let m = unit_square();
        assert_eq!(m.len(), 4);
        assert!((m.get(0, 1) - 1.0).abs() < 1e-12);
        assert!((m.get(1, 2) - 1.0).abs() < 1e-12);
        assert!((m.get(0, 2) - 2.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_path_length_closes_nothing_implicitly() {
        let m = unit_square();
        // Open path around three sides vs. the explicit closed cycle.
        assert!((m.path_length(&[0, 1, 2, 3]) - 3.0).abs() < 1e-12);
        assert!((m.path_length(&[0, 1, 2, 3, 0]) - 4.0).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn prop_symmetric_with_zero_diagonal(
            coords in prop::collection::vec((-1e3..1e3f64, -1e3..1e3f64), 2..20)
        ) {
            let points: Vec<Point> =
                coords.iter().map(|&(x, y)| Point::new(x, y)).collect();
            let m = DistanceMatrix::from_points(&points).unwrap();
            for i in 0..m.len() {
                prop_assert_eq!(m.get(i, i), 0.0);
                for j in 0..m.len() {
                    prop_assert_eq!(m.get(i, j), m.get(j, i));
                    prop_assert!(m.get(i, j) >= 0.0);
                }
            }
        }
    }
}
