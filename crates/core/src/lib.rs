//! Foliosim Core - Contribution-plan portfolio simulation.
//!
//! This crate simulates the day-by-day evolution of a portfolio that
//! receives an initial plus periodically scheduled contributions, split
//! between a fixed-income leg and a basket of assets, and compares it
//! against a pure rate benchmark and an inflation benchmark. Data
//! acquisition and presentation live outside this crate; it consumes an
//! aligned daily series and produces one valuation point per day.

pub mod constants;
pub mod errors;
pub mod series;
pub mod simulation;

// Re-export common types from the series and simulation modules
pub use series::*;
pub use simulation::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
