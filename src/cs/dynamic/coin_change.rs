use crate::cs::change::{
    filled_table, prepare_denominations, table_len, ChangeOutcome, ChangeReport, ChangeSolver,
    CoinMultiset, SearchStats, SolverConfig,
};
use crate::error::{Error, Result};

/// Computes the minimum number of coins needed to form the target `amount`.
///
/// The coin change problem here is the "unbounded" variant, meaning each coin
/// can be used any number of times. Returns `None` if it's impossible to form
/// the `amount` using the given `coins`.
///
/// # Examples
///
/// ```
/// use mincoins::cs::dynamic::min_coins_for_change;
///
/// // Minimum 3 coins: 6 + 6 + 6 = 18
/// let coins = vec![1, 6, 10];
/// assert_eq!(min_coins_for_change(&coins, 18), Some(3));
///
/// // Impossible to form 7 from [2,4], so returns None
/// let coins2 = vec![2, 4];
/// assert_eq!(min_coins_for_change(&coins2, 7), None);
/// ```
pub fn min_coins_for_change(coins: &[usize], amount: usize) -> Option<usize> {
    if amount == 0 {
        return Some(0);
    }

    // dp[i] holds the minimum number of coins to form amount i, usize::MAX if unreachable
    let mut dp = vec![usize::MAX; amount + 1];
    dp[0] = 0;

    for &coin in coins.iter().filter(|&&coin| coin > 0) {
        for curr_amount in coin..=amount {
            if dp[curr_amount - coin] != usize::MAX {
                dp[curr_amount] = dp[curr_amount].min(dp[curr_amount - coin] + 1);
            }
        }
    }

    match dp[amount] {
        usize::MAX => None,
        count => Some(count),
    }
}

/// Bottom-up dynamic programming solver, used as a reference for
/// [`BreadthFirstChange`](crate::cs::change::BreadthFirstChange).
///
/// Always fills the whole table up to the target, so it does the full
/// `O(n * target)` work even when the answer is found early. Ignores
/// [`SolverConfig::leap_forward`].
#[derive(Debug, Clone, Default)]
pub struct DynamicProgrammingChange {
    config: SolverConfig,
}

impl DynamicProgrammingChange {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }
}

impl ChangeSolver for DynamicProgrammingChange {
    fn make_change(&self, coins: &mut [usize], target: usize) -> Result<ChangeReport> {
        if target == 0 {
            return Err(Error::InvalidTarget(target));
        }

        let mut stats = SearchStats::default();
        let coins = prepare_denominations(coins, target, &mut stats)?;

        let len = table_len(target)?;
        let mut best = filled_table("best", len, usize::MAX, &self.config)?;
        // last[i] is the coin added to reach i along a best path
        let mut last = filled_table("last", len, 0, &self.config)?;
        best[0] = 0;

        for curr_amount in 1..=target {
            stats.expanded += 1;
            for &coin in coins {
                stats.compares += 1;
                if coin > curr_amount {
                    break;
                }
                let prev = best[curr_amount - coin];
                if prev != usize::MAX && prev + 1 < best[curr_amount] {
                    best[curr_amount] = prev + 1;
                    last[curr_amount] = coin;
                }
            }
            if best[curr_amount] != usize::MAX {
                stats.reached += 1;
            }
        }

        let outcome = if best[target] == usize::MAX {
            ChangeOutcome::Unsatisfiable { target }
        } else {
            ChangeOutcome::Solved(CoinMultiset::from_predecessors(&last, target, 0))
        };

        Ok(ChangeReport { outcome, stats })
    }
}
