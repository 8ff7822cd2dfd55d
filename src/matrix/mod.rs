//! Pairwise travel-cost matrices.
//!
//! A [`CostMatrix`] is a validated, immutable, symmetric N×N table of
//! non-negative travel costs. Absent edges are marked with
//! [`UNREACHABLE`] (IEEE-754 positive infinity), which propagates
//! through addition and orders above every finite cost, so a path
//! traversing a missing edge simply accumulates an infinite total.
//!
//! Matrices come from two places: raw rows ([`CostMatrix::from_rows`])
//! or Euclidean distances over city coordinates with an optional
//! connectivity cutoff ([`CostMatrix::from_coordinates`]).

mod builder;
mod cost;

pub use cost::{CostMatrix, UNREACHABLE};
