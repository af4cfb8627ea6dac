pub mod change;
pub mod dynamic;

pub use change::{
    min_coins_to_total, BreadthFirstChange, ChangeOutcome, ChangeReport, ChangeSolver,
    CoinMultiset, SearchStats, SolverConfig,
};
pub use dynamic::*;
