//! Multi-origin sweeps over a shared matrix (feature = `parallel`).
//!
//! Each search only reads the matrix and owns its partial paths, so
//! searches from different origins run with zero synchronization, one
//! rayon task per origin.

use crate::error::Result;
use crate::exhaustive::{DfsRunner, ExhaustiveConfig, ExhaustiveResult};
use crate::greedy::{GreedyResult, GreedyRunner};
use crate::matrix::CostMatrix;
use rayon::prelude::*;

/// Exhaustive (depth-first) enumeration from every origin in parallel.
///
/// `results[origin]` holds the run started at that origin.
pub fn run_all_origins(
    matrix: &CostMatrix,
    config: &ExhaustiveConfig,
) -> Result<Vec<ExhaustiveResult>> {
    (0..matrix.len())
        .into_par_iter()
        .map(|origin| DfsRunner::run(matrix, origin, config))
        .collect()
}

/// Greedy search from every origin in parallel.
pub fn greedy_all_origins(matrix: &CostMatrix) -> Result<Vec<GreedyResult>> {
    (0..matrix.len())
        .into_par_iter()
        .map(|origin| GreedyRunner::run(matrix, origin))
        .collect()
}
