//! Aligned daily market series.
//!
//! - [`series_model`] - The rectangular day-by-day table the engine consumes
//! - [`series_builder`] - Assembly of that table from raw per-column observations
//! - [`series_errors`] - Series-specific error types

pub mod series_builder;
pub mod series_errors;
pub mod series_model;

#[cfg(test)]
mod series_builder_tests;

// Re-export commonly used types for convenience
pub use series_builder::SeriesBuilder;
pub use series_errors::SeriesError;
pub use series_model::{AlignedSeries, DailyRecord};
