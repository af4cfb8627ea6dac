pub mod coin_change;

pub use coin_change::{min_coins_for_change, DynamicProgrammingChange};
