//! Validated symmetric cost table.

use crate::error::{Error, Result};

/// Sentinel cost for a missing edge.
///
/// Positive infinity keeps the two properties the search relies on:
/// adding anything to it stays infinite, and it compares greater than
/// every finite cost.
pub const UNREACHABLE: f64 = f64::INFINITY;

/// Symmetric N×N travel-cost table, immutable once constructed.
///
/// City `i` and city `j` are connected iff `cost(i, j)` is finite.
/// The diagonal is conventionally zero and never traversed by a search
/// (a tour has no self-edges).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostMatrix {
    pub(crate) n: usize,
    /// Row-major `n * n` storage.
    pub(crate) costs: Vec<f64>,
}

impl CostMatrix {
    /// Builds a matrix from explicit rows, validating shape and content.
    ///
    /// Rejects an empty matrix, non-square rows, negative or NaN
    /// entries, and asymmetry. Infinite entries are valid: they mark
    /// absent edges.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_toursearch::matrix::{CostMatrix, UNREACHABLE};
    ///
    /// let matrix = CostMatrix::from_rows(vec![
    ///     vec![0.0, 1.0, UNREACHABLE],
    ///     vec![1.0, 0.0, 2.0],
    ///     vec![UNREACHABLE, 2.0, 0.0],
    /// ]).unwrap();
    /// assert_eq!(matrix.len(), 3);
    /// assert!(!matrix.has_edge(0, 2));
    /// ```
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let n = rows.len();
        if n == 0 {
            return Err(Error::EmptyMatrix);
        }
        for (row, entries) in rows.iter().enumerate() {
            if entries.len() != n {
                return Err(Error::NonSquareMatrix {
                    row,
                    len: entries.len(),
                    n,
                });
            }
        }

        let mut costs = Vec::with_capacity(n * n);
        for row in &rows {
            costs.extend_from_slice(row);
        }
        let matrix = CostMatrix { n, costs };

        for i in 0..n {
            for j in 0..n {
                let cost = matrix.cost(i, j);
                if cost.is_nan() || cost < 0.0 {
                    return Err(Error::InvalidCost { i, j, cost });
                }
                if i < j && matrix.cost(j, i) != cost {
                    return Err(Error::AsymmetricCost { i, j });
                }
            }
        }

        Ok(matrix)
    }

    /// Number of cities.
    pub fn len(&self) -> usize {
        self.n
    }

    /// Always false: construction rejects zero-city matrices.
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Travel cost between cities `i` and `j`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn cost(&self, i: usize, j: usize) -> f64 {
        self.costs[i * self.n + j]
    }

    /// Whether a direct edge exists between `i` and `j`.
    pub fn has_edge(&self, i: usize, j: usize) -> bool {
        self.cost(i, j).is_finite()
    }
}
