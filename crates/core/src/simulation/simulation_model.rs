use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::simulation_errors::SimulationError;
use crate::constants::DECIMAL_PRECISION;

/// Inputs of a simulation run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SimulationParameters {
    /// Share of every contribution routed to the fixed-income leg (0..=1).
    /// The remainder is split equally across the tracked assets.
    pub fixed_income_fraction: Decimal,
    /// Asset identifiers bought with the non-fixed-income share. May be
    /// empty, in which case that share is simply never invested.
    pub tracked_assets: HashSet<String>,
    /// Principal injected on day zero.
    pub initial_contribution: Decimal,
    /// Principal injected at every periodic contribution event.
    pub periodic_contribution_amount: Decimal,
    /// Number of periodic contribution events spread across the series.
    pub periodic_contribution_count: usize,
}

impl SimulationParameters {
    /// Checks the range invariants that do not depend on the series.
    pub fn validate(&self) -> Result<(), SimulationError> {
        if self.fixed_income_fraction < Decimal::ZERO || self.fixed_income_fraction > Decimal::ONE
        {
            return Err(SimulationError::InvalidAllocationFraction(
                self.fixed_income_fraction,
            ));
        }
        if self.initial_contribution < Decimal::ZERO {
            return Err(SimulationError::NegativeContribution {
                field: "initial_contribution",
                amount: self.initial_contribution,
            });
        }
        if self.periodic_contribution_amount < Decimal::ZERO {
            return Err(SimulationError::NegativeContribution {
                field: "periodic_contribution_amount",
                amount: self.periodic_contribution_amount,
            });
        }
        Ok(())
    }

    /// Total principal injected over a full run.
    pub fn total_contributed(&self) -> Decimal {
        self.initial_contribution
            + self.periodic_contribution_amount * Decimal::from(self.periodic_contribution_count)
    }
}

/// One output row of a simulation run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SimulatedPoint {
    pub date: NaiveDate,
    /// Fixed-income capital plus asset market value.
    pub portfolio_value: Decimal,
    /// Same contributions, fully compounded by the daily rate factor.
    pub rate_benchmark_value: Decimal,
    /// Same contributions, compounded once per month by the inflation factor.
    pub inflation_benchmark_value: Decimal,
}

/// Full output of a run: one point per input day, in input order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    pub points: Vec<SimulatedPoint>,
    /// Principal injected over the run (initial + periodic amount x count).
    pub total_contributed: Decimal,
}

impl SimulationResult {
    /// Digest of the final day: ledger values and return rates over the
    /// contributed principal. None only for a result without points, which
    /// [`simulate_portfolio`](crate::simulation::simulate_portfolio) never
    /// produces.
    pub fn summary(&self) -> Option<SimulationSummary> {
        let last = self.points.last()?;
        Some(SimulationSummary {
            final_portfolio_value: last.portfolio_value,
            final_rate_benchmark_value: last.rate_benchmark_value,
            final_inflation_benchmark_value: last.inflation_benchmark_value,
            total_contributed: self.total_contributed,
            portfolio_return: return_rate(last.portfolio_value, self.total_contributed),
            rate_benchmark_return: return_rate(last.rate_benchmark_value, self.total_contributed),
            inflation_benchmark_return: return_rate(
                last.inflation_benchmark_value,
                self.total_contributed,
            ),
        })
    }
}

/// Final-state digest of a simulation run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SimulationSummary {
    pub final_portfolio_value: Decimal,
    pub final_rate_benchmark_value: Decimal,
    pub final_inflation_benchmark_value: Decimal,
    pub total_contributed: Decimal,
    /// `final / contributed - 1`; None when nothing was contributed.
    pub portfolio_return: Option<Decimal>,
    pub rate_benchmark_return: Option<Decimal>,
    pub inflation_benchmark_return: Option<Decimal>,
}

fn return_rate(final_value: Decimal, total_contributed: Decimal) -> Option<Decimal> {
    if total_contributed.is_zero() {
        return None;
    }
    Some((final_value / total_contributed - Decimal::ONE).round_dp(DECIMAL_PRECISION))
}
