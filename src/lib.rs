pub mod cs;
pub mod error;

pub use cs::{change, dynamic};
pub use cs::{
    min_coins_to_total, BreadthFirstChange, ChangeOutcome, ChangeReport, ChangeSolver,
    CoinMultiset, DynamicProgrammingChange, SearchStats, SolverConfig,
};
pub use error::{Error, Result};
