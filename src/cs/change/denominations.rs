use log::debug;

use crate::cs::change::SearchStats;
use crate::error::{Error, Result};

/// Sorts `coins` ascending in place and returns the prefix usable for `target`.
///
/// Denominations strictly greater than `target` can never be part of a
/// solution and are cut off. A denomination equal to `target` is kept. The
/// returned slice may be empty when every denomination exceeds the target.
///
/// # Errors
///
/// Returns [`Error::NoDenominations`] for an empty set and
/// [`Error::InvalidDenomination`] if any denomination is zero, since zero is
/// the "unreached" marker in the search tables.
///
/// # Examples
///
/// ```
/// use mincoins::cs::change::{prepare_denominations, SearchStats};
///
/// let mut coins = [50, 5, 20, 1, 10];
/// let mut stats = SearchStats::default();
/// let usable = prepare_denominations(&mut coins, 20, &mut stats).unwrap();
/// assert_eq!(usable, &[1, 5, 10, 20]);
/// ```
pub fn prepare_denominations<'a>(
    coins: &'a mut [usize],
    target: usize,
    stats: &mut SearchStats,
) -> Result<&'a [usize]> {
    if coins.is_empty() {
        return Err(Error::NoDenominations);
    }
    if let Some(position) = coins.iter().position(|&coin| coin == 0) {
        return Err(Error::InvalidDenomination { position });
    }

    coins.sort_unstable_by(|a, b| {
        stats.compares += 1;
        a.cmp(b)
    });

    let mut usable = coins.len();
    if target < coins[usable - 1] {
        for (i, &coin) in coins.iter().enumerate() {
            stats.compares += 1;
            if coin > target {
                usable = i;
                break;
            }
        }
        debug!(
            "dropped {} denominations larger than target {}",
            coins.len() - usable,
            target
        );
    }

    Ok(&coins[..usable])
}
