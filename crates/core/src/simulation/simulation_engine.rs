//! Contribution-plan simulation engine.
//!
//! Walks an aligned daily series once and maintains three ledgers in
//! lockstep: the strategy portfolio (fixed-income capital plus asset units),
//! a benchmark fully compounded by the daily rate factor, and a benchmark
//! compounded once per month by the inflation factor. Both benchmarks
//! receive the same contributions as the portfolio, unsplit.

use chrono::Datelike;
use log::{debug, warn};
use rust_decimal::Decimal;
use std::collections::{HashMap, HashSet};

use super::contribution_schedule::contribution_indices;
use super::simulation_errors::SimulationError;
use super::simulation_model::{SimulatedPoint, SimulationParameters, SimulationResult};
use crate::errors::Result;
use crate::series::{AlignedSeries, DailyRecord};

/// Running ledgers of one simulation, created fresh per run.
struct PortfolioState {
    fixed_income_capital: Decimal,
    asset_units: HashMap<String, Decimal>,
    rate_benchmark_capital: Decimal,
    inflation_benchmark_capital: Decimal,
    last_observed_month: Option<(i32, u32)>,
}

impl PortfolioState {
    fn new() -> Self {
        PortfolioState {
            fixed_income_capital: Decimal::ZERO,
            asset_units: HashMap::new(),
            rate_benchmark_capital: Decimal::ZERO,
            inflation_benchmark_capital: Decimal::ZERO,
            last_observed_month: None,
        }
    }

    /// Applies one contribution at the given day's prices.
    ///
    /// The fixed-income share goes to the fixed-income ledger; the remainder
    /// is divided equally across the tracked assets and converted into units.
    /// Assets priced at or below zero that day receive no units. Both
    /// benchmarks receive the full unsplit amount.
    fn contribute(
        &mut self,
        amount: Decimal,
        params: &SimulationParameters,
        record: &DailyRecord,
    ) {
        self.fixed_income_capital += amount * params.fixed_income_fraction;

        let asset_bound = amount * (Decimal::ONE - params.fixed_income_fraction);
        if !params.tracked_assets.is_empty() && asset_bound > Decimal::ZERO {
            let per_asset = asset_bound / Decimal::from(params.tracked_assets.len());
            for asset_id in &params.tracked_assets {
                match record.price(asset_id) {
                    Some(price) if price > Decimal::ZERO => {
                        *self
                            .asset_units
                            .entry(asset_id.clone())
                            .or_insert(Decimal::ZERO) += per_asset / price;
                    }
                    _ => {
                        debug!(
                            "Non-positive or missing price for asset {} on {}. \
                             Contribution share not converted into units.",
                            asset_id, record.date
                        );
                    }
                }
            }
        }

        self.rate_benchmark_capital += amount;
        self.inflation_benchmark_capital += amount;
    }

    /// Daily compounding of the rate-driven ledgers.
    fn compound_daily_rate(&mut self, factor: Decimal) {
        self.fixed_income_capital *= factor;
        self.rate_benchmark_capital *= factor;
    }

    /// Monthly compounding of the inflation ledger, fired once per observed
    /// calendar month change. The factor applied is the one attached to the
    /// day on which the change is first observed.
    fn compound_inflation_on_month_change(&mut self, record: &DailyRecord) {
        let month = (record.date.year(), record.date.month());
        if let Some(previous) = self.last_observed_month {
            if month != previous {
                self.inflation_benchmark_capital *= record.monthly_inflation_factor;
            }
        }
        self.last_observed_month = Some(month);
    }

    /// Portfolio value at the day's prices: asset market value plus
    /// fixed-income capital.
    fn portfolio_value(&self, record: &DailyRecord) -> Decimal {
        let mut asset_market_value = Decimal::ZERO;
        for (asset_id, units) in &self.asset_units {
            match record.price(asset_id) {
                Some(price) => asset_market_value += *units * price,
                None => {
                    debug!(
                        "Missing price for asset {} on {}. Market value treated as ZERO.",
                        asset_id, record.date
                    );
                }
            }
        }
        asset_market_value + self.fixed_income_capital
    }
}

/// Runs the contribution-plan simulation over an aligned daily series.
///
/// Produces exactly one [`SimulatedPoint`] per input day, in input order.
/// Each day is processed in a fixed sequence: contribution event (if the day
/// index is scheduled), daily rate compounding, month-change inflation
/// compounding, valuation. Day zero additionally receives the initial
/// contribution before the loop, at the first day's prices; with a non-zero
/// contribution count, index 0 is also the first scheduled event, so both
/// land on the same day.
///
/// # Arguments
///
/// * `series` - Rectangular daily table of prices, rate factors and
///   inflation factors.
/// * `params` - Allocation fraction, tracked assets and contribution plan.
pub fn simulate_portfolio(
    series: &AlignedSeries,
    params: &SimulationParameters,
) -> Result<SimulationResult> {
    params.validate()?;
    if series.is_empty() {
        return Err(SimulationError::EmptySeries.into());
    }
    if params.periodic_contribution_count > series.len() {
        return Err(SimulationError::ScheduleExceedsSeries {
            contributions: params.periodic_contribution_count,
            days: series.len(),
        }
        .into());
    }

    debug!(
        "Simulating {} contribution events across {} days ({} tracked assets)",
        params.periodic_contribution_count,
        series.len(),
        params.tracked_assets.len()
    );

    if params.fixed_income_fraction < Decimal::ONE
        && params.tracked_assets.is_empty()
        && params.total_contributed() > Decimal::ZERO
    {
        warn!(
            "No tracked assets with fixed-income fraction {}. The asset-bound share \
             of every contribution will remain uninvested.",
            params.fixed_income_fraction
        );
    }

    let contribution_days: HashSet<usize> =
        contribution_indices(params.periodic_contribution_count, series.len())
            .into_iter()
            .collect();

    let mut state = PortfolioState::new();
    let mut points: Vec<SimulatedPoint> = Vec::with_capacity(series.len());

    // Day zero: the initial principal is invested at the first day's prices
    if let Some(first) = series.first() {
        state.contribute(params.initial_contribution, params, first);
    }

    for (index, record) in series.iter().enumerate() {
        if contribution_days.contains(&index) {
            state.contribute(params.periodic_contribution_amount, params, record);
        }

        state.compound_daily_rate(record.daily_rate_factor);
        state.compound_inflation_on_month_change(record);

        points.push(SimulatedPoint {
            date: record.date,
            portfolio_value: state.portfolio_value(record),
            rate_benchmark_value: state.rate_benchmark_capital,
            inflation_benchmark_value: state.inflation_benchmark_capital,
        });
    }

    if let Some(last) = points.last() {
        debug!(
            "Simulation complete: portfolio {}, rate benchmark {}, inflation benchmark {}",
            last.portfolio_value, last.rate_benchmark_value, last.inflation_benchmark_value
        );
    }

    Ok(SimulationResult {
        points,
        total_contributed: params.total_contributed(),
    })
}
