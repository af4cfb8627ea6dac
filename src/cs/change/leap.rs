//! # Leap-Forward Seeding
//!
//! Lets the breadth-first search skip its earliest layers by starting from a
//! sum made purely of the largest denomination.
//!
//! Let `c < d` be two denominations. An optimal solution never holds
//! `lcm(c, d) / c` or more copies of `c`: that many `c` coins are worth exactly
//! `lcm(c, d) / d` copies of `d`, which is strictly fewer coins. Every optimal
//! solution therefore spends at most
//!
//! ```text
//! exchange_bound = Σ (min over d > c of lcm(c, d)) - c   over distinct c < max
//! ```
//!
//! on coins other than the largest denomination `m`, so it holds at least
//! `(target - exchange_bound) / m` copies of `m`. Those copies can be laid
//! down up front and the search only has to cover what remains above them.
//!
//! The seed keeps a reserve of at least one LCM of the whole set below the
//! target, and more when the exchange bound is larger. For the usual currency
//! sets the two are close; sets such as `{6, 10, 15, 30}` need the larger
//! exchange bound to stay exact.

use log::debug;
use num_integer::Integer;

use crate::cs::change::SearchStats;

/// A starting sum reachable with the largest denomination alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeapSeed {
    /// The seeded sum, a positive multiple of `coin`.
    pub sum: usize,
    /// The largest usable denomination.
    pub coin: usize,
    /// Distance kept between the seed and the target.
    pub reserve: usize,
}

impl LeapSeed {
    /// Number of `coin`s making up the seeded sum.
    pub fn repeats(&self) -> usize {
        self.sum / self.coin
    }
}

/// Least common multiple of `a` and `b`, or `None` if either is zero or the
/// result does not fit in a `usize`.
pub fn checked_lcm(a: usize, b: usize) -> Option<usize> {
    if a == 0 || b == 0 {
        return None;
    }
    (a / a.gcd(&b)).checked_mul(b)
}

/// Least common multiple of every denomination, `None` on overflow, on a zero
/// denomination or on an empty set.
pub fn lcm_of(coins: &[usize]) -> Option<usize> {
    let (&first, rest) = coins.split_first()?;
    rest.iter()
        .try_fold(first, |acc, &coin| checked_lcm(acc, coin))
}

/// Upper bound on the value an optimal solution spends on denominations
/// other than the largest. `coins` must be sorted ascending.
pub fn exchange_bound(coins: &[usize]) -> Option<usize> {
    let mut bound: usize = 0;
    for (i, &coin) in coins.iter().enumerate() {
        if i > 0 && coins[i - 1] == coin {
            continue;
        }
        let larger = &coins[i + 1..];
        if larger.last().map_or(true, |&max_coin| max_coin == coin) {
            break;
        }
        let cheapest = larger
            .iter()
            .filter(|&&other| other > coin)
            .filter_map(|&other| checked_lcm(coin, other))
            .min()?;
        bound = bound.checked_add(cheapest - coin)?;
    }
    Some(bound)
}

/// Computes the leap-forward seed for sorted, truncated `coins`.
///
/// Returns `None` when the leap does not apply: the target is below the
/// largest denomination, fewer than two distinct denominations remain, the
/// LCM overflows, or the reserve leaves no room for even one coin.
pub fn leap_forward_seed(
    coins: &[usize],
    target: usize,
    stats: &mut SearchStats,
) -> Option<LeapSeed> {
    let (&min_coin, &max_coin) = (coins.first()?, coins.last()?);

    stats.compares += 1;
    if target < max_coin || min_coin == max_coin {
        return None;
    }

    let Some(lcm) = lcm_of(coins) else {
        debug!("lcm of {} denominations overflows, leap disabled", coins.len());
        return None;
    };
    let Some(bound) = exchange_bound(coins) else {
        debug!("exchange bound overflows, leap disabled");
        return None;
    };
    let reserve = lcm.max(bound);

    stats.compares += 1;
    let room = target.checked_sub(reserve)?;
    let sum = room - room % max_coin;
    if sum == 0 {
        return None;
    }

    debug!(
        "leaping to {} ({} x {}), reserve {} below target {}",
        sum,
        sum / max_coin,
        max_coin,
        reserve,
        target
    );
    Some(LeapSeed {
        sum,
        coin: max_coin,
        reserve,
    })
}
