//! Depth-first exhaustive enumeration.

use super::config::ExhaustiveConfig;
use super::types::ExhaustiveResult;
use crate::error::{Error, Result};
use crate::matrix::CostMatrix;
use crate::tour::Tour;
use crate::trace::{NoTrace, Trace};

/// Enumerates every closed tour by pre-order traversal of the
/// permutation tree.
///
/// At each level the unvisited cities are tried in ascending index
/// order, and each branch is followed to completion before its siblings.
/// The search reuses one path buffer and one visited buffer for the
/// whole run; only completed tours are copied out.
pub struct DfsRunner;

impl DfsRunner {
    /// Runs the search from `origin` over all cities in `matrix`.
    ///
    /// Returns one tour per permutation of the non-origin cities. Tours
    /// that traverse a missing edge are kept with infinite cost.
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

        let mut search = Dfs {
            matrix,
            origin,
            max_tours: config.max_tours,
            path: Vec::with_capacity(n + 1),
            visited: vec![false; n],
            result: ExhaustiveResult {
                tours: Vec::new(),
                steps: 1,
                truncated: false,
            },
            trace,
        };
        search.path.push(origin);
        search.visited[origin] = true;
        search.trace.on_step(&search.path, 0.0);
        search.extend(origin, 0.0);
        Ok(search.result)
    }
}

struct Dfs<'a, T: Trace> {
    matrix: &'a CostMatrix,
    origin: usize,
    max_tours: usize,
    path: Vec<usize>,
    visited: Vec<bool>,
    result: ExhaustiveResult,
    trace: &'a mut T,
}

impl<T: Trace> Dfs<'_, T> {
    fn extend(&mut self, current: usize, cost: f64) {
        if self.path.len() == self.matrix.len() {
            self.complete(current, cost);
            return;
        }

        for next in 0..self.matrix.len() {
            if self.visited[next] {
                continue;
            }
            let extended = cost + self.matrix.cost(current, next);
            self.visited[next] = true;
            self.path.push(next);
            self.result.steps += 1;
            self.trace.on_step(&self.path, extended);

            self.extend(next, extended);

            self.path.pop();
            self.visited[next] = false;
            if self.result.truncated {
                return;
            }
        }
    }

    /// Closes the full path back to the origin and records the tour.
    fn complete(&mut self, last: usize, cost: f64) {
        let mut path = Vec::with_capacity(self.path.len() + 1);
        path.extend_from_slice(&self.path);
        path.push(self.origin);
        let tour = Tour {
            path,
            cost: cost + self.matrix.cost(last, self.origin),
        };
        self.trace.on_tour(&tour);
        self.result.tours.push(tour);
        if self.max_tours != 0 && self.result.tours.len() >= self.max_tours {
            self.result.truncated = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::UNREACHABLE;

    /// Four cities where 0-3 is missing: two finite tours of cost 8
    /// exist (0→1→3→2→0 and its reverse), everything else closes
    /// through the missing edge.
    fn diamond() -> CostMatrix {
        CostMatrix::from_rows(vec![
            vec![0.0, 1.0, 4.0, UNREACHABLE],
            vec![1.0, 0.0, 1.0, 2.0],
            vec![4.0, 1.0, 0.0, 1.0],
            vec![UNREACHABLE, 2.0, 1.0, 0.0],
        ])
        .unwrap()
    }

    fn assert_valid_tour(tour: &Tour, origin: usize, matrix: &CostMatrix) {
        let n = matrix.len();
        assert_eq!(tour.path.len(), n + 1);
        assert_eq!(tour.path[0], origin);
        assert_eq!(tour.path[n], origin);
        let mut visited: Vec<usize> = tour.path[..n].to_vec();
        visited.sort_unstable();
        assert_eq!(visited, (0..n).collect::<Vec<_>>());
        let recomputed = tour
            .path
            .windows(2)
            .fold(0.0, |acc, w| acc + matrix.cost(w[0], w[1]));
        assert_eq!(recomputed, tour.cost);
    }

    #[test]
    fn test_enumerates_all_permutations() {
        let matrix = diamond();
        let result = DfsRunner::run(&matrix, 0, &ExhaustiveConfig::default()).unwrap();
        assert_eq!(result.tours.len(), 6);
        assert!(!result.truncated);
        for tour in &result.tours {
            assert_valid_tour(tour, 0, &matrix);
        }
    }

    #[test]
    fn test_emission_is_preorder_ascending() {
        let matrix = diamond();
        let result = DfsRunner::run(&matrix, 0, &ExhaustiveConfig::default()).unwrap();
        assert_eq!(result.tours[0].path, vec![0, 1, 2, 3, 0]);
        assert_eq!(result.tours[1].path, vec![0, 1, 3, 2, 0]);
        assert_eq!(result.tours[5].path, vec![0, 3, 2, 1, 0]);
    }

    #[test]
    fn test_best_is_finite_minimum() {
        let matrix = diamond();
        let result = DfsRunner::run(&matrix, 0, &ExhaustiveConfig::default()).unwrap();
        let best = result.best().unwrap();
        assert_eq!(best.cost, 8.0);
        assert_eq!(result.reachable().count(), 2);
    }

    #[test]
    fn test_keeps_unreachable_tours() {
        let matrix = diamond();
        let result = DfsRunner::run(&matrix, 0, &ExhaustiveConfig::default()).unwrap();
        let infinite = result.tours.iter().filter(|t| !t.is_reachable()).count();
        assert_eq!(infinite, 4);
    }

    #[test]
    fn test_single_city() {
        let matrix = CostMatrix::from_rows(vec![vec![0.0]]).unwrap();
        let result = DfsRunner::run(&matrix, 0, &ExhaustiveConfig::default()).unwrap();
        assert_eq!(result.tours.len(), 1);
        assert_eq!(result.tours[0].path, vec![0, 0]);
        assert_eq!(result.tours[0].cost, 0.0);
    }

    #[test]
    fn test_origin_out_of_range() {
        let matrix = diamond();
        let result = DfsRunner::run(&matrix, 4, &ExhaustiveConfig::default());
        assert_eq!(result, Err(Error::OriginOutOfRange { origin: 4, n: 4 }));
    }

    #[test]
    fn test_budget_truncates() {
        let matrix = diamond();
        let config = ExhaustiveConfig::default().with_max_tours(2);
        let result = DfsRunner::run(&matrix, 0, &config).unwrap();
        assert_eq!(result.tours.len(), 2);
        assert!(result.truncated);
    }

    #[test]
    fn test_repeated_runs_are_identical() {
        let matrix = diamond();
        let config = ExhaustiveConfig::default();
        let first = DfsRunner::run(&matrix, 0, &config).unwrap();
        let second = DfsRunner::run(&matrix, 0, &config).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_trace_sees_every_step_and_tour() {
        #[derive(Default)]
        struct Counter {
            steps: usize,
            tours: usize,
        }
        impl Trace for Counter {
            fn on_step(&mut self, _path: &[usize], _cost: f64) {
                self.steps += 1;
            }
            fn on_tour(&mut self, _tour: &Tour) {
                self.tours += 1;
            }
        }

        let matrix = diamond();
        let mut counter = Counter::default();
        let result =
            DfsRunner::run_with_trace(&matrix, 0, &ExhaustiveConfig::default(), &mut counter)
                .unwrap();
        // Root + 3 + 3*2 + 6 partial paths for four cities.
        assert_eq!(counter.steps, 16);
        assert_eq!(counter.steps, result.steps);
        assert_eq!(counter.tours, result.tours.len());
    }
}
