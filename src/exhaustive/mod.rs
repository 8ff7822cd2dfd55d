//! Exhaustive tour enumeration.
//!
//! Two strategies enumerate every closed tour from a fixed origin (one
//! per permutation of the remaining cities) and differ only in the
//! order work is performed:
//!
//! - **[`DfsRunner`]**: pre-order traversal of the permutation tree.
//!   One branch is fully completed before its siblings are tried. Holds
//!   a single path, so memory is O(N) beyond the result set.
//! - **[`BfsRunner`]**: level-order frontier expansion. Every partial
//!   path of length k is formed before any path of length k + 1. The
//!   frontier peaks at O(N!) partial paths, strictly more
//!   memory-intensive than depth-first; that is the inherent price of
//!   level-order enumeration, not a defect.
//!
//! Both strategies produce the identical unordered set of `(cost, path)`
//! pairs for any matrix and origin. Tours that close only through a
//! missing edge are kept in the result set with infinite cost; callers
//! that want reachable tours only filter at the boundary with
//! [`ExhaustiveResult::reachable`].
//!
//! Runs are deterministic: candidate cities are always tried in
//! ascending index order, so repeated invocations yield bit-identical
//! results.
//!
//! # References
//!
//! - Applegate, Bixby, Chvátal & Cook (2006), "The Traveling Salesman
//!   Problem: A Computational Study"

mod bfs;
mod config;
mod dfs;
mod types;

pub use bfs::BfsRunner;
pub use config::ExhaustiveConfig;
pub use dfs::DfsRunner;
pub use types::ExhaustiveResult;
