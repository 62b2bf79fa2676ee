//! Series-related error types.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors that can occur while assembling or validating an aligned daily series.
#[derive(Error, Debug)]
pub enum SeriesError {
    #[error("Record at position {position} ({date}) does not strictly follow its predecessor")]
    UnsortedDates { position: usize, date: NaiveDate },

    #[error("No aligned rows: the supplied observations never overlap into a complete day")]
    NoAlignedRows,
}
