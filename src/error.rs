//! Error types for tour search.
//!
//! Structural precondition violations (malformed matrix, bad origin) are
//! reported before any search work starts. Absence of a viable tour is
//! never an error: exhaustive runners return their full result set and
//! the greedy runner returns `Ok` with no tour.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum Error {
    /// The matrix has zero cities. A search over nothing is rejected
    /// outright rather than producing an empty result.
    #[error("cost matrix has no cities")]
    EmptyMatrix,

    /// A row's length does not match the city count.
    #[error("cost matrix is not square: row {row} has {len} entries, expected {n}")]
    NonSquareMatrix { row: usize, len: usize, n: usize },

    /// A cost entry is negative or NaN.
    #[error("invalid cost {cost} at ({i}, {j}): costs must be non-negative and not NaN")]
    InvalidCost { i: usize, j: usize, cost: f64 },

    /// `matrix[i][j] != matrix[j][i]`.
    #[error("cost matrix is not symmetric at ({i}, {j})")]
    AsymmetricCost { i: usize, j: usize },

    /// Connectivity threshold outside `[0, 1]`.
    #[error("connectivity must be in [0, 1], got {0}")]
    InvalidConnectivity(f64),

    /// Origin city index does not address a city in the matrix.
    #[error("origin {origin} out of range for {n} cities")]
    OriginOutOfRange { origin: usize, n: usize },

    /// Malformed input outside the matrix itself (e.g. an instance
    /// generator range that cannot hold the requested city count).
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}
