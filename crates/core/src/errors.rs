//! Core error types for the simulation library.
//!
//! Module-specific errors (series assembly, simulation runs) are defined next
//! to the code that raises them and wrapped into the root [`Error`] here.

use thiserror::Error;

use crate::series::SeriesError;
use crate::simulation::SimulationError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the simulation library.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Series assembly failed: {0}")]
    Series(#[from] SeriesError),

    #[error("Simulation failed: {0}")]
    Simulation(#[from] SimulationError),
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
