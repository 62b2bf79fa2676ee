//! Simulation-related error types.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised while validating simulation inputs.
///
/// All of these reject the run before any state is built; per-day anomalies
/// (a non-positive price on a contribution day) are absorbed by the engine
/// and never surface here.
#[derive(Error, Debug)]
pub enum SimulationError {
    #[error("Fixed-income fraction {0} is outside the valid range 0..=1")]
    InvalidAllocationFraction(Decimal),

    #[error("{field} must not be negative (got {amount})")]
    NegativeContribution { field: &'static str, amount: Decimal },

    #[error("Cannot simulate over an empty series")]
    EmptySeries,

    #[error("{contributions} contributions cannot be scheduled across {days} days")]
    ScheduleExceedsSeries { contributions: usize, days: usize },
}
