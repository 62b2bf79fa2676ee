//! Portfolio simulation.
//!
//! - [`simulation_model`] - Parameters, output points and the run summary
//! - [`contribution_schedule`] - Placement of periodic contribution events
//! - [`simulation_engine`] - The day-by-day accumulation walk
//! - [`simulation_errors`] - Simulation-specific error types

pub mod contribution_schedule;
pub mod simulation_engine;
pub mod simulation_errors;
pub mod simulation_model;


// Re-export commonly used types for convenience
pub use contribution_schedule::contribution_indices;
pub use simulation_engine::simulate_portfolio;
pub use simulation_errors::SimulationError;
pub use simulation_model::{
    SimulatedPoint, SimulationParameters, SimulationResult, SimulationSummary,
};
