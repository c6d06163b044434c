//! Conflict-free combination search.
//!
//! Given an ordered list of [`Subject`](crate::model::Subject)s, enumerates
//! every way to choose one section per subject such that no two chosen
//! sections collide.
//!
//! # Key Components
//!
//! - [`Combination`]: one (possibly partial) selection, with the full and
//!   incremental validity checks
//! - [`SearchConfig`]: result limit, time limit, traversal, parallelism
//! - [`CombinationSearch`]: the pruned depth-first enumerator
//! - [`find_combinations`]: default-configuration shorthand
//!
//! # Complexity
//!
//! With `n` subjects, `m` sections per subject and `k` blocks per section,
//! the worst case (nothing pruned) visits `O(m^n)` leaves at `O(n·k²)` per
//! extension check.

mod combination;
mod config;
mod runner;

pub use combination::Combination;
pub use config::{SearchConfig, Traversal};
pub use runner::{find_combinations, CombinationSearch, SearchResult, Termination};
