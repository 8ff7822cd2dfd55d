//! Breadth-first exhaustive enumeration.

use super::config::ExhaustiveConfig;
use super::types::ExhaustiveResult;
use crate::error::{Error, Result};
use crate::matrix::CostMatrix;
use crate::tour::Tour;
use crate::trace::{NoTrace, Trace};

/// Enumerates every closed tour by level-order frontier expansion.
///
/// The frontier starts as the single origin-only path. Each level takes
/// every partial path in the frontier and forms one successor per
/// still-unvisited city; a partial path whose remaining set is empty is
/// closed back to the origin and moved into the result collection
/// instead. All paths of one level are processed before any path of the
/// next level exists.
///
/// The result set is identical to [`DfsRunner`](super::DfsRunner)'s for
/// any matrix and origin; only the order work is performed differs. The
/// price is memory: the frontier peaks at O(N!) partial paths, against
/// the single path the depth-first strategy keeps. Two frontier buffers
/// are reused across levels so each level allocates only its own paths.
pub struct BfsRunner;

impl BfsRunner {
    /// Runs the search from `origin` over all cities in `matrix`.
    pub fn run(
        matrix: &CostMatrix,
        origin: usize,
        config: &ExhaustiveConfig,
    ) -> Result<ExhaustiveResult> {
        Self::run_with_trace(matrix, origin, config, &mut NoTrace)
    }

    /// Like [`run`](Self::run), surfacing every partial path and
    /// completed tour to `trace` as it is produced.
    pub fn run_with_trace<T: Trace>(
        matrix: &CostMatrix,
        origin: usize,
        config: &ExhaustiveConfig,
        trace: &mut T,
    ) -> Result<ExhaustiveResult> {
        let n = matrix.len();
        if origin >= n {
            return Err(Error::OriginOutOfRange { origin, n });
        }
        if n == 1 {
            return Ok(super::types::singleton(origin, trace));
        }

        let mut result = ExhaustiveResult {
            tours: Vec::new(),
            steps: 1,
            truncated: false,
        };
        let mut frontier = vec![PartialPath {
            cost: 0.0,
            path: vec![origin],
        }];
        trace.on_step(&frontier[0].path, 0.0);
        let mut next_frontier: Vec<PartialPath> = Vec::new();

        'level: while !frontier.is_empty() {
            for partial in &frontier {
                if partial.path.len() == n {
                    let last = partial.path[n - 1];
                    let mut path = Vec::with_capacity(n + 1);
                    path.extend_from_slice(&partial.path);
                    path.push(origin);
                    let tour = Tour {
                        path,
                        cost: partial.cost + matrix.cost(last, origin),
                    };
                    trace.on_tour(&tour);
                    result.tours.push(tour);
                    if config.max_tours != 0 && result.tours.len() >= config.max_tours {
                        result.truncated = true;
                        break 'level;
                    }
                } else {
                    let current = partial.path[partial.path.len() - 1];
                    for city in 0..n {
                        if partial.path.contains(&city) {
                            continue;
                        }
                        let mut path = Vec::with_capacity(partial.path.len() + 1);
                        path.extend_from_slice(&partial.path);
                        path.push(city);
                        let cost = partial.cost + matrix.cost(current, city);
                        result.steps += 1;
                        trace.on_step(&path, cost);
                        next_frontier.push(PartialPath { cost, path });
                    }
                }
            }
            frontier.clear();
            std::mem::swap(&mut frontier, &mut next_frontier);
        }

        Ok(result)
    }
}

/// One in-progress path on the frontier.
struct PartialPath {
    cost: f64,
    path: Vec<usize>,
}
