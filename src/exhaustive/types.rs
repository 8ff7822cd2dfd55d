//! Result type shared by the exhaustive runners.

use crate::tour::Tour;
use crate::trace::Trace;

/// Result of one exhaustive enumeration run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExhaustiveResult {
    /// Every completed tour, in the strategy's emission order.
    pub tours: Vec<Tour>,

    /// Number of partial paths formed, the origin-only path included.
    pub steps: usize,

    /// Whether enumeration stopped early because the configured tour
    /// budget was reached.
    pub truncated: bool,
}

impl ExhaustiveResult {
    /// The cheapest tour, if any were produced.
    ///
    /// A tour closing through a missing edge has infinite cost and so
    /// only wins when no finite tour exists.
    pub fn best(&self) -> Option<&Tour> {
        self.tours.iter().min_by(|a, b| {
            a.cost
                .partial_cmp(&b.cost)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
    }

    /// Tours whose every edge exists (finite total cost).
    ///
    /// The enumerators themselves never filter; this is the boundary
    /// where a caller opts into strict behavior.
    pub fn reachable(&self) -> impl Iterator<Item = &Tour> {
        self.tours.iter().filter(|t| t.is_reachable())
    }
}

/// The degenerate single-city enumeration: exactly one tour, the origin
/// closing on itself with no edges and zero cost.
pub(crate) fn singleton(origin: usize, trace: &mut impl Trace) -> ExhaustiveResult {
    let tour = Tour {
        path: vec![origin, origin],
        cost: 0.0,
    };
    trace.on_step(&tour.path[..1], 0.0);
    trace.on_tour(&tour);
    ExhaustiveResult {
        tours: vec![tour],
        steps: 1,
        truncated: false,
    }
}
