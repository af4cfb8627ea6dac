use thiserror::Error;

/// Errors raised by the change-making solvers.
///
/// An unreachable target is not an error; it is reported as
/// [`ChangeOutcome::Unsatisfiable`](crate::cs::change::ChangeOutcome::Unsatisfiable).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("target must be a positive number, got {0}")]
    InvalidTarget(usize),

    #[error("at least one denomination is required")]
    NoDenominations,

    #[error("denomination at position {position} is zero; denominations must be positive")]
    InvalidDenomination { position: usize },

    /// A working table could not be allocated, either because the allocator
    /// refused or because it would exceed the configured table limit.
    #[error("out of memory allocating {table} table of {len} entries")]
    ResourceExhausted { table: &'static str, len: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
