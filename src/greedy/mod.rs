//! Greedy nearest-city heuristic.
//!
//! Builds at most one tour by always extending with the cheapest
//! reachable unvisited city, backtracking to the next-cheapest
//! alternative when a branch cannot complete. Fast and deterministic,
//! but not globally optimal.
//!
//! # References
//!
//! - Rosenkrantz, Stearns & Lewis (1977), "An Analysis of Several
//!   Heuristics for the Traveling Salesman Problem"

mod runner;

pub use runner::{GreedyResult, GreedyRunner};
