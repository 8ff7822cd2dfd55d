//! Euclidean matrix construction with a connectivity cutoff.

use super::cost::{CostMatrix, UNREACHABLE};
use crate::error::{Error, Result};

impl CostMatrix {
    /// Builds a distance matrix from city coordinates.
    ///
    /// Pairs are enumerated `i` ascending, then `j > i` ascending, with
    /// a running pair counter. While the fraction of pairs considered
    /// so far stays within `connectivity`, the pair gets its Euclidean
    /// distance; once the fraction exceeds the threshold, that pair and
    /// every later pair in the same enumeration order is marked
    /// [`UNREACHABLE`]. The sparsification pattern is therefore
    /// deterministic and driven purely by index order, not randomness.
    ///
    /// `connectivity = 1.0` keeps every edge, `0.0` keeps none.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_toursearch::matrix::CostMatrix;
    ///
    /// let coords = [(0.0, 0.0), (3.0, 4.0), (6.0, 8.0)];
    /// let matrix = CostMatrix::from_coordinates(&coords, 1.0).unwrap();
    /// assert_eq!(matrix.cost(0, 1), 5.0);
    /// assert_eq!(matrix.cost(1, 2), 5.0);
    /// assert_eq!(matrix.cost(0, 2), 10.0);
    /// ```
    pub fn from_coordinates(coords: &[(f64, f64)], connectivity: f64) -> Result<Self> {
        if coords.is_empty() {
            return Err(Error::EmptyMatrix);
        }
        if !(0.0..=1.0).contains(&connectivity) {
            return Err(Error::InvalidConnectivity(connectivity));
        }
        for &(x, y) in coords {
            if !x.is_finite() || !y.is_finite() {
                return Err(Error::invalid_input(format!(
                    "city coordinate ({x}, {y}) is not finite"
                )));
            }
        }

        let n = coords.len();
        let max_pairs = n * (n - 1) / 2;
        let mut costs = vec![0.0; n * n];

        let mut pair = 0usize;
        for i in 0..n {
            for j in (i + 1)..n {
                pair += 1;
                let value = if pair as f64 / max_pairs as f64 > connectivity {
                    UNREACHABLE
                } else {
                    euclidean(coords[i], coords[j])
                };
                costs[i * n + j] = value;
                costs[j * n + i] = value;
            }
        }

        Ok(CostMatrix { n, costs })
    }
}

fn euclidean(a: (f64, f64), b: (f64, f64)) -> f64 {
    let dx = a.0 - b.0;
    let dy = a.1 - b.1;
    (dx * dx + dy * dy).sqrt()
}
