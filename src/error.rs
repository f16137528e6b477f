//! Error types for the Budget Engine.

use thiserror::Error;

/// Validation and configuration failures surfaced by the engine.
///
/// All failures are synchronous and local: the computation has no
/// I/O, so there are no partial results or retries.  Unrecognised
/// interests and destinations are not errors; they fall back to the
/// `Cultural` allocation and the tier-2 profile respectively.
#[derive(Error, Debug)]
pub enum BudgetError {
    #[error("trip duration must be at least one day, got {0}")]
    InvalidDuration(u32),

    #[error("total budget must be a positive amount of rupees, got {0}")]
    InvalidBudget(f64),

    #[error("allocation tables yielded a non-positive weight sum ({weight_sum})")]
    InvalidTables { weight_sum: f64 },
}
