//! # Change Making
//!
//! Finds the fewest coins, drawn with unlimited supply from a fixed set of
//! denominations, that sum exactly to a target.
//!
//! The main solver, [`BreadthFirstChange`], treats every sum `0..=target` as a
//! node and every denomination as an edge of length one coin. A breadth-first
//! walk from 0 therefore reaches each sum first along a shortest path, and the
//! walk can stop the moment the target is reached. Two steps shrink the walk
//! before it starts:
//!
//! - **Truncation**: denominations are sorted and any larger than the target
//!   are dropped, so the inner loop can stop at the first coin that overshoots.
//! - **Leap forward**: when several denominations remain, the walk starts at a
//!   multiple of the largest coin that every optimal solution is known to
//!   contain (see [`leap`]).
//!
//! [`DynamicProgrammingChange`](crate::cs::dynamic::coin_change::DynamicProgrammingChange)
//! solves the same problem bottom-up and serves as a reference.
//!
//! ## Example
//!
//! ```rust
//! use mincoins::cs::change::{min_coins_to_total, ChangeOutcome};
//!
//! let mut coins = [200, 100, 50, 20, 10, 5, 2, 1];
//! let outcome = min_coins_to_total(&mut coins, 13).unwrap();
//!
//! let ChangeOutcome::Solved(change) = outcome else {
//!     panic!("13 is reachable with a 1 coin available");
//! };
//! assert_eq!(change.coin_count(), 3);
//! assert_eq!(change.to_string(), "1x1 + 1x2 + 1x10 = 13");
//!
//! // The denominations were sorted in place.
//! assert_eq!(coins, [1, 2, 5, 10, 20, 50, 100, 200]);
//! ```

pub mod bfs;
pub mod denominations;
pub mod leap;
pub mod multiset;

#[cfg(test)]
mod tests;

use crate::error::{Error, Result};

pub use bfs::BreadthFirstChange;
pub use denominations::prepare_denominations;
pub use leap::{leap_forward_seed, LeapSeed};
pub use multiset::CoinMultiset;

/// Configuration shared by the change-making solvers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    /// Start the search from a leap-forward seed when one is available.
    pub leap_forward: bool,
    /// Largest number of entries any single working table may hold.
    /// `None` leaves the limit to the allocator.
    pub table_limit: Option<usize>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            leap_forward: true,
            table_limit: None,
        }
    }
}

impl SolverConfig {
    pub fn with_leap_forward(mut self, enabled: bool) -> Self {
        self.leap_forward = enabled;
        self
    }

    pub fn with_table_limit(mut self, limit: usize) -> Self {
        self.table_limit = Some(limit);
        self
    }
}

/// Counters collected during a single solve.
///
/// `compares` tallies every comparison made while sorting, truncating,
/// seeding and searching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub compares: u64,
    /// Sums taken off the frontier and expanded.
    pub expanded: usize,
    /// Sums marked as reached, not counting the root or the seed.
    pub reached: usize,
    /// Sum the search started from when a leap-forward seed was used.
    pub seed: Option<usize>,
}

/// Result of a solve that ran to completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeOutcome {
    /// The fewest coins summing to the target.
    Solved(CoinMultiset),
    /// No combination of the denominations sums to the target.
    Unsatisfiable { target: usize },
}

impl ChangeOutcome {
    pub fn is_solved(&self) -> bool {
        matches!(self, ChangeOutcome::Solved(_))
    }

    /// Number of coins in the solution, if there is one.
    pub fn coin_count(&self) -> Option<usize> {
        self.multiset().map(CoinMultiset::coin_count)
    }

    pub fn multiset(&self) -> Option<&CoinMultiset> {
        match self {
            ChangeOutcome::Solved(change) => Some(change),
            ChangeOutcome::Unsatisfiable { .. } => None,
        }
    }
}

/// Outcome of a solve together with the counters gathered on the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeReport {
    pub outcome: ChangeOutcome,
    pub stats: SearchStats,
}

/// A change-making algorithm.
///
/// Implementations sort `coins` in place; calling again with the sorted
/// slice gives the same answer.
pub trait ChangeSolver {
    fn make_change(&self, coins: &mut [usize], target: usize) -> Result<ChangeReport>;
}

/// Solves with [`BreadthFirstChange`] and the default configuration.
pub fn min_coins_to_total(coins: &mut [usize], target: usize) -> Result<ChangeOutcome> {
    BreadthFirstChange::default()
        .make_change(coins, target)
        .map(|report| report.outcome)
}

/// Number of entries needed to index every sum in `0..=target`.
pub(crate) fn table_len(target: usize) -> Result<usize> {
    target.checked_add(1).ok_or(Error::ResourceExhausted {
        table: "totals",
        len: usize::MAX,
    })
}

/// Allocates an empty table able to hold `len` entries without growing.
pub(crate) fn reserve_table(
    table: &'static str,
    len: usize,
    config: &SolverConfig,
) -> Result<Vec<usize>> {
    if config.table_limit.is_some_and(|limit| len > limit) {
        return Err(Error::ResourceExhausted { table, len });
    }
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|_| Error::ResourceExhausted { table, len })?;
    Ok(buf)
}

/// Allocates a table of `len` entries, each set to `fill`.
pub(crate) fn filled_table(
    table: &'static str,
    len: usize,
    fill: usize,
    config: &SolverConfig,
) -> Result<Vec<usize>> {
    let mut buf = reserve_table(table, len, config)?;
    buf.resize(len, fill);
    Ok(buf)
}
