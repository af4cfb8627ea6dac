use std::fmt;

/// A multiset of coins, stored as `(denomination, multiplicity)` pairs in
/// ascending denomination order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CoinMultiset {
    target: usize,
    counts: Vec<(usize, usize)>,
}

impl CoinMultiset {
    /// Builds a multiset from individual coins in any order.
    pub fn from_coins(mut coins: Vec<usize>) -> Self {
        coins.sort_unstable();
        let target: usize = coins.iter().sum();

        let mut counts: Vec<(usize, usize)> = Vec::new();
        for coin in coins {
            match counts.last_mut() {
                Some((last, count)) if *last == coin => *count += 1,
                _ => counts.push((coin, 1)),
            }
        }
        Self { target, counts }
    }

    /// Walks a predecessor table back from `target` to `origin`.
    ///
    /// `totals[s]` holds the coin that first reached `s`. A non-zero `origin`
    /// is a leap-forward seed made of `origin / totals[origin]` copies of
    /// `totals[origin]`.
    pub(crate) fn from_predecessors(totals: &[usize], target: usize, origin: usize) -> Self {
        let mut path_len = 0;
        let mut sum = target;
        while sum > origin {
            sum -= totals[sum];
            path_len += 1;
        }

        let (seed_coin, seed_repeats) = match origin {
            0 => (0, 0),
            _ => (totals[origin], origin / totals[origin]),
        };

        let mut coins = Vec::with_capacity(path_len + seed_repeats);
        let mut sum = target;
        while sum > origin {
            coins.push(totals[sum]);
            sum -= totals[sum];
        }
        coins.extend(std::iter::repeat(seed_coin).take(seed_repeats));

        Self::from_coins(coins)
    }

    /// The sum of every coin.
    pub fn target(&self) -> usize {
        self.target
    }

    /// Total number of coins.
    pub fn coin_count(&self) -> usize {
        self.counts.iter().map(|&(_, count)| count).sum()
    }

    /// How many times `denomination` is used.
    pub fn multiplicity(&self, denomination: usize) -> usize {
        self.counts
            .binary_search_by_key(&denomination, |&(coin, _)| coin)
            .map(|i| self.counts[i].1)
            .unwrap_or(0)
    }

    /// `(denomination, multiplicity)` pairs, smallest denomination first.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.counts.iter().copied()
    }

    /// Every coin individually, in ascending order.
    pub fn coins(&self) -> Vec<usize> {
        self.counts
            .iter()
            .flat_map(|&(coin, count)| std::iter::repeat(coin).take(count))
            .collect()
    }
}

impl fmt::Display for CoinMultiset {
    /// Formats as `3x1 + 2x5 = 13`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (coin, count)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " + ")?;
            }
            write!(f, "{}x{}", count, coin)?;
        }
        write!(f, " = {}", self.target)
    }
}
