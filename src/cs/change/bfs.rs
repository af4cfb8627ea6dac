use log::{debug, trace};

use crate::cs::change::{
    filled_table, leap_forward_seed, prepare_denominations, reserve_table, table_len,
    ChangeOutcome, ChangeReport, ChangeSolver, CoinMultiset, SearchStats, SolverConfig,
};
use crate::error::{Error, Result};

/// Minimum-coin change making by breadth-first search over reachable sums.
///
/// Each sum is reached first along a path with the fewest coins, so the
/// search stops as soon as the target is marked. Runs in `O(n * target)` time
/// and `O(target)` space for `n` denominations.
///
/// # Examples
///
/// ```
/// use mincoins::cs::change::{BreadthFirstChange, ChangeSolver, SolverConfig};
///
/// let solver = BreadthFirstChange::new(SolverConfig::default().with_leap_forward(false));
/// let mut coins = vec![4, 3, 1];
/// let report = solver.make_change(&mut coins, 6).unwrap();
///
/// // Greedy would pick 4 + 1 + 1, the search finds 3 + 3
/// assert_eq!(report.outcome.coin_count(), Some(2));
/// ```
#[derive(Debug, Clone, Default)]
pub struct BreadthFirstChange {
    config: SolverConfig,
}

impl BreadthFirstChange {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }
}

impl ChangeSolver for BreadthFirstChange {
    fn make_change(&self, coins: &mut [usize], target: usize) -> Result<ChangeReport> {
        if target == 0 {
            return Err(Error::InvalidTarget(target));
        }

        let mut stats = SearchStats::default();
        let coins = prepare_denominations(coins, target, &mut stats)?;

        let len = table_len(target)?;
        let mut totals = filled_table("totals", len, 0, &self.config)?;
        let mut frontier = reserve_table("frontier", len, &self.config)?;

        let seed = if self.config.leap_forward {
            leap_forward_seed(coins, target, &mut stats)
        } else {
            None
        };
        let origin = match seed {
            Some(seed) => {
                totals[seed.sum] = seed.coin;
                seed.sum
            }
            None => 0,
        };
        stats.seed = seed.map(|seed| seed.sum);
        frontier.push(origin);

        let found = search(coins, target, &mut totals, &mut frontier, &mut stats);
        trace!(
            "search for {} from {} {} after {} expansions, {} compares",
            target,
            origin,
            if found { "reached target" } else { "exhausted" },
            stats.expanded,
            stats.compares
        );

        let outcome = if found {
            ChangeOutcome::Solved(CoinMultiset::from_predecessors(&totals, target, origin))
        } else {
            debug!("no combination of {:?} makes {}", coins, target);
            ChangeOutcome::Unsatisfiable { target }
        };

        Ok(ChangeReport { outcome, stats })
    }
}

/// Expands `frontier` in FIFO order until `target` is marked in `totals`.
///
/// `coins` must be sorted ascending. Returns whether the target was reached.
fn search(
    coins: &[usize],
    target: usize,
    totals: &mut [usize],
    frontier: &mut Vec<usize>,
    stats: &mut SearchStats,
) -> bool {
    let mut cursor = 0;
    while cursor < frontier.len() {
        let sum = frontier[cursor];
        cursor += 1;
        stats.expanded += 1;

        for &coin in coins {
            stats.compares += 1;
            let candidate = match sum.checked_add(coin) {
                Some(candidate) if candidate <= target => candidate,
                // Sorted ascending, every later coin overshoots too
                _ => break,
            };
            if totals[candidate] == 0 {
                totals[candidate] = coin;
                frontier.push(candidate);
                stats.reached += 1;
            }
            if candidate == target {
                return true;
            }
        }
    }
    false
}
