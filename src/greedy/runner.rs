//! Greedy search execution.

use crate::error::{Error, Result};
use crate::matrix::CostMatrix;
use crate::tour::Tour;
use crate::trace::{NoTrace, Trace};

/// Result of a greedy search run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GreedyResult {
    /// The completed tour, or `None` when no ordering of the remaining
    /// cities closes back to the origin over existing edges.
    pub tour: Option<Tour>,

    /// Number of partial paths formed, the origin-only path included.
    pub steps: usize,

    /// Number of abandoned extensions: a tried city whose branch failed
    /// to complete and was undone.
    pub backtracks: usize,
}

/// Builds one tour by repeated cheapest-next-city selection with
/// backtracking.
///
/// At each level the unvisited cities are ranked by edge cost from the
/// current city, ascending; equal costs rank the lower city index first
/// (candidates are collected in ascending index order and sorted
/// stably), which makes runs deterministic. Cities behind a missing
/// edge are skipped rather than tried. The first candidate whose
/// recursive completion succeeds wins the level for good: once a level
/// has produced a completion, earlier levels are never re-examined.
/// Completion requires a finite closing edge back to the origin;
/// a branch that cannot close fails and the search backtracks to the
/// next candidate in rank order.
pub struct GreedyRunner;

impl GreedyRunner {
    /// Runs the heuristic from `origin` over all cities in `matrix`.
    pub fn run(matrix: &CostMatrix, origin: usize) -> Result<GreedyResult> {
        Self::run_with_trace(matrix, origin, &mut NoTrace)
    }

    /// Like [`run`](Self::run), surfacing every partial path and the
    /// completed tour to `trace` as they are produced.
    pub fn run_with_trace<T: Trace>(
        matrix: &CostMatrix,
        origin: usize,
        trace: &mut T,
    ) -> Result<GreedyResult> {
        let n = matrix.len();
        if origin >= n {
            return Err(Error::OriginOutOfRange { origin, n });
        }
        if n == 1 {
            // A single city has no edges; the tour closes on itself.
            let tour = Tour {
                path: vec![origin, origin],
                cost: 0.0,
            };
            trace.on_step(&tour.path[..1], 0.0);
            trace.on_tour(&tour);
            return Ok(GreedyResult {
                tour: Some(tour),
                steps: 1,
                backtracks: 0,
            });
        }

        let mut search = Greedy {
            matrix,
            origin,
            path: Vec::with_capacity(n + 1),
            visited: vec![false; n],
            ranks: vec![Vec::new(); n],
            steps: 1,
            backtracks: 0,
            trace,
        };
        search.path.push(origin);
        search.visited[origin] = true;
        search.trace.on_step(&search.path, 0.0);
        let tour = search.extend(origin, 0.0);
        Ok(GreedyResult {
            tour,
            steps: search.steps,
            backtracks: search.backtracks,
        })
    }
}

struct Greedy<'a, T: Trace> {
    matrix: &'a CostMatrix,
    origin: usize,
    path: Vec<usize>,
    visited: Vec<bool>,
    /// One candidate-ranking buffer per recursion depth, reused across
    /// backtracks at that depth.
    ranks: Vec<Vec<(usize, f64)>>,
    steps: usize,
    backtracks: usize,
    trace: &'a mut T,
}

impl<T: Trace> Greedy<'_, T> {
    fn extend(&mut self, current: usize, cost: f64) -> Option<Tour> {
        let n = self.matrix.len();
        if self.path.len() == n {
            let closing = self.matrix.cost(current, self.origin);
            if closing.is_infinite() {
                return None;
            }
            let mut path = Vec::with_capacity(n + 1);
            path.extend_from_slice(&self.path);
            path.push(self.origin);
            let tour = Tour {
                path,
                cost: cost + closing,
            };
            self.trace.on_tour(&tour);
            return Some(tour);
        }

        let depth = self.path.len();
        let mut candidates = std::mem::take(&mut self.ranks[depth]);
        candidates.clear();
        candidates.extend(
            (0..n)
                .filter(|&city| !self.visited[city])
                .map(|city| (city, self.matrix.cost(current, city))),
        );
        // Stable sort: equal costs keep the ascending-index collection
        // order, so ties break toward the lower city.
        candidates.sort_by(|a, b| {
            a.1.partial_cmp(&b.1)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let mut found = None;
        for &(city, edge) in &candidates {
            if edge.is_infinite() {
                continue;
            }
            let extended = cost + edge;
            self.visited[city] = true;
            self.path.push(city);
            self.steps += 1;
            self.trace.on_step(&self.path, extended);

            if let Some(tour) = self.extend(city, extended) {
                found = Some(tour);
                break;
            }

            self.path.pop();
            self.visited[city] = false;
            self.backtracks += 1;
        }
        self.ranks[depth] = candidates;
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::UNREACHABLE;

    fn diamond() -> CostMatrix {
        CostMatrix::from_rows(vec![
            vec![0.0, 1.0, 4.0, UNREACHABLE],
            vec![1.0, 0.0, 1.0, 2.0],
            vec![4.0, 1.0, 0.0, 1.0],
            vec![UNREACHABLE, 2.0, 1.0, 0.0],
        ])
        .unwrap()
    }

    #[test]
    fn test_takes_cheapest_then_backtracks_to_close() {
        // From 0 the cheapest edge is city 1; from 1 the cheapest is
        // city 2, but 0→1→2→3 cannot close (3-0 is missing), so the
        // search backs out to 0→1→3→2→0.
        let result = GreedyRunner::run(&diamond(), 0).unwrap();
        let tour = result.tour.unwrap();
        assert_eq!(tour.path, vec![0, 1, 3, 2, 0]);
        assert_eq!(tour.cost, 8.0);
        assert_eq!(tour.path[1], 1);
        assert_eq!(result.backtracks, 2);
    }

    #[test]
    fn test_returned_tour_is_valid() {
        let matrix = diamond();
        let result = GreedyRunner::run(&matrix, 2).unwrap();
        let tour = result.tour.unwrap();
        assert_eq!(tour.path.len(), 5);
        assert_eq!(tour.path[0], 2);
        assert_eq!(tour.path[4], 2);
        let mut cities = tour.path[..4].to_vec();
        cities.sort_unstable();
        assert_eq!(cities, vec![0, 1, 2, 3]);
        assert!(tour.is_reachable());
        let recomputed = tour
            .path
            .windows(2)
            .fold(0.0, |acc, w| acc + matrix.cost(w[0], w[1]));
        assert_eq!(recomputed, tour.cost);
    }

    #[test]
    fn test_no_tour_on_disconnected_graph() {
        let matrix = CostMatrix::from_rows(vec![
            vec![0.0, 1.0, UNREACHABLE],
            vec![1.0, 0.0, UNREACHABLE],
            vec![UNREACHABLE, UNREACHABLE, 0.0],
        ])
        .unwrap();
        let result = GreedyRunner::run(&matrix, 0).unwrap();
        assert_eq!(result.tour, None);
    }

    #[test]
    fn test_ties_break_toward_lower_index() {
        let matrix = CostMatrix::from_rows(vec![
            vec![0.0, 1.0, 1.0],
            vec![1.0, 0.0, 1.0],
            vec![1.0, 1.0, 0.0],
        ])
        .unwrap();
        let result = GreedyRunner::run(&matrix, 0).unwrap();
        assert_eq!(result.tour.unwrap().path, vec![0, 1, 2, 0]);
    }

    #[test]
    fn test_skips_missing_edges_for_cheaper_alternatives() {
        // 0-1 is missing, so the first hop must be the pricier city 2.
        let matrix = CostMatrix::from_rows(vec![
            vec![0.0, UNREACHABLE, 5.0],
            vec![UNREACHABLE, 0.0, 1.0],
            vec![5.0, 1.0, 0.0],
        ])
        .unwrap();
        let result = GreedyRunner::run(&matrix, 0).unwrap();
        // 0→2→1 cannot close (1-0 missing), so no tour exists at all.
        assert_eq!(result.tour, None);
        assert!(result.backtracks > 0);
    }

    #[test]
    fn test_single_city() {
        let matrix = CostMatrix::from_rows(vec![vec![0.0]]).unwrap();
        let result = GreedyRunner::run(&matrix, 0).unwrap();
        let tour = result.tour.unwrap();
        assert_eq!(tour.path, vec![0, 0]);
        assert_eq!(tour.cost, 0.0);
    }

    #[test]
    fn test_origin_out_of_range() {
        let result = GreedyRunner::run(&diamond(), 7);
        assert_eq!(result, Err(Error::OriginOutOfRange { origin: 7, n: 4 }));
    }

    #[test]
    fn test_repeated_runs_are_identical() {
        let matrix = diamond();
        let first = GreedyRunner::run(&matrix, 1).unwrap();
        let second = GreedyRunner::run(&matrix, 1).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_trace_counts_match() {
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

        let mut counter = Counter::default();
        let result = GreedyRunner::run_with_trace(&diamond(), 0, &mut counter).unwrap();
        assert_eq!(counter.steps, result.steps);
        assert_eq!(counter.tours, 1);
    }
}
