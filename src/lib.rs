//! Closed-tour search over pairwise cost matrices.
//!
//! Given N cities and a symmetric cost matrix (with missing edges
//! marked unreachable), finds minimum-cost tours that visit every city
//! exactly once and return to the origin. Three strategies:
//!
//! - **Depth-first exhaustive** ([`exhaustive::DfsRunner`]): pre-order
//!   enumeration of every permutation, one path in memory at a time.
//! - **Breadth-first exhaustive** ([`exhaustive::BfsRunner`]): level-order
//!   enumeration of the same tour set, trading frontier memory for
//!   level-at-a-time progress.
//! - **Greedy heuristic** ([`greedy::GreedyRunner`]): cheapest-next-city
//!   construction with backtracking, returning at most one tour.
//!
//! The exhaustive strategies guarantee the optimum is in the result
//! set; they are factorial in N and meant for small instances. Matrices
//! come from explicit rows or from city coordinates via
//! [`matrix::CostMatrix`]; random instances come from
//! [`instance::generate_cities`].
//!
//! # Architecture
//!
//! Every search reads a shared immutable [`matrix::CostMatrix`] and
//! owns its path state, so searches from different origins can run
//! concurrently without synchronization (see the `parallel` feature).
//! Progress observation is available on every runner through the
//! [`trace::Trace`] sink without affecting results.

pub mod error;
pub mod exhaustive;
pub mod greedy;
pub mod instance;
pub mod matrix;
#[cfg(feature = "parallel")]
pub mod parallel;
pub mod tour;
pub mod trace;

pub use error::{Error, Result};
