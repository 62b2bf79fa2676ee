use chrono::{Datelike, NaiveDate};
use log::debug;
use rust_decimal::Decimal;
use std::collections::{BTreeMap, BTreeSet, HashMap};

use super::series_errors::SeriesError;
use super::series_model::{AlignedSeries, DailyRecord};

/// Assembles an [`AlignedSeries`] from raw per-column observations.
///
/// The trading calendar is the union of the asset price dates (or the rate
/// factor dates when no asset series were supplied). Each column is
/// forward-filled from its last observation on or before the row date; the
/// monthly inflation factor resolves by the row's calendar month, falling back
/// to the latest earlier month (a month whose index is not published yet
/// carries the previous month's factor). Leading rows on which some column has
/// no observation yet are dropped.
///
/// # Example
///
/// ```
/// use foliosim_core::series::SeriesBuilder;
/// use rust_decimal::Decimal;
///
/// let series = SeriesBuilder::new()
///     .with_asset_prices("VALE3", vec![
///         ("2024-01-02".parse().unwrap(), Decimal::new(6850, 2)),
///         ("2024-01-03".parse().unwrap(), Decimal::new(6912, 2)),
///     ])
///     .with_daily_rate_factors(vec![
///         ("2024-01-02".parse().unwrap(), Decimal::new(10004, 4)),
///         ("2024-01-03".parse().unwrap(), Decimal::new(10004, 4)),
///     ])
///     .with_monthly_inflation_factor(2024, 1, Decimal::new(10042, 4))
///     .build()
///     .unwrap();
///
/// assert_eq!(series.len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct SeriesBuilder {
    asset_prices: HashMap<String, BTreeMap<NaiveDate, Decimal>>,
    daily_rate_factors: BTreeMap<NaiveDate, Decimal>,
    monthly_inflation_factors: BTreeMap<(i32, u32), Decimal>,
}

impl SeriesBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or extends) the daily closing price series of one asset.
    pub fn with_asset_prices(
        mut self,
        asset_id: impl Into<String>,
        prices: impl IntoIterator<Item = (NaiveDate, Decimal)>,
    ) -> Self {
        self.asset_prices
            .entry(asset_id.into())
            .or_default()
            .extend(prices);
        self
    }

    /// Adds (or extends) the daily growth factors of the reference rate.
    pub fn with_daily_rate_factors(
        mut self,
        factors: impl IntoIterator<Item = (NaiveDate, Decimal)>,
    ) -> Self {
        self.daily_rate_factors.extend(factors);
        self
    }

    /// Sets the inflation growth factor of one calendar month.
    pub fn with_monthly_inflation_factor(
        mut self,
        year: i32,
        month: u32,
        factor: Decimal,
    ) -> Self {
        self.monthly_inflation_factors.insert((year, month), factor);
        self
    }

    /// Builds the aligned series, or [`SeriesError::NoAlignedRows`] when the
    /// observations never overlap into a single complete day.
    pub fn build(self) -> Result<AlignedSeries, SeriesError> {
        let calendar = self.calendar();
        let asset_count = self.asset_prices.len();

        let mut records: Vec<DailyRecord> = Vec::with_capacity(calendar.len());
        let mut last_prices: HashMap<String, Decimal> = HashMap::new();
        let mut dropped = 0usize;

        for date in calendar {
            // Update last known prices with any actual observations for this day
            for (asset_id, series) in &self.asset_prices {
                if let Some(price) = series.get(&date) {
                    last_prices.insert(asset_id.clone(), *price);
                }
            }

            let rate_factor = self
                .daily_rate_factors
                .range(..=date)
                .next_back()
                .map(|(_, factor)| *factor);
            let inflation_factor = self.inflation_factor_for(date);

            match (rate_factor, inflation_factor) {
                (Some(daily_rate_factor), Some(monthly_inflation_factor))
                    if last_prices.len() == asset_count =>
                {
                    records.push(DailyRecord {
                        date,
                        prices: last_prices.clone(),
                        daily_rate_factor,
                        monthly_inflation_factor,
                    });
                }
                // Some column has no observation yet on this day
                _ => dropped += 1,
            }
        }

        if records.is_empty() {
            return Err(SeriesError::NoAlignedRows);
        }

        debug!(
            "Aligned {} rows across {} assets ({} incomplete leading rows dropped)",
            records.len(),
            asset_count,
            dropped
        );

        AlignedSeries::from_records(records)
    }

    /// Row dates: the union of asset price dates, or the rate factor dates
    /// when no asset series were supplied.
    fn calendar(&self) -> BTreeSet<NaiveDate> {
        if self.asset_prices.is_empty() {
            return self.daily_rate_factors.keys().copied().collect();
        }
        self.asset_prices
            .values()
            .flat_map(|series| series.keys().copied())
            .collect()
    }

    /// Inflation factor for the date's calendar month, falling back to the
    /// latest earlier month.
    fn inflation_factor_for(&self, date: NaiveDate) -> Option<Decimal> {
        self.monthly_inflation_factors
            .range(..=(date.year(), date.month()))
            .next_back()
            .map(|(_, factor)| *factor)
    }
}
