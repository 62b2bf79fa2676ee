use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::series_errors::SeriesError;

/// One trading day of aligned market observations.
///
/// A record carries everything the simulation needs for that day: one closing
/// price per tracked asset, the day's fixed-income growth factor, and the
/// inflation growth factor of the day's calendar month (broadcast onto every
/// day of the month, applied once per month by the engine).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DailyRecord {
    pub date: NaiveDate,
    /// Closing price per asset identifier.
    pub prices: HashMap<String, Decimal>,
    /// Multiplicative daily growth factor of the reference rate (e.g. 1.0003).
    pub daily_rate_factor: Decimal,
    /// Multiplicative growth factor of the inflation index for this day's month.
    pub monthly_inflation_factor: Decimal,
}

impl DailyRecord {
    /// Price of the given asset on this day, if the column is present.
    pub fn price(&self, asset_id: &str) -> Option<Decimal> {
        self.prices.get(asset_id).copied()
    }
}

/// A date-sorted sequence of [`DailyRecord`]s, one per trading day in range.
///
/// Strict date ordering is checked at construction, so every value of this
/// type is sorted. Gap-freeness (no trading day missing in between) is the
/// supplier's contract and cannot be verified without a trading calendar.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "Vec<DailyRecord>", into = "Vec<DailyRecord>")]
pub struct AlignedSeries {
    records: Vec<DailyRecord>,
}

impl AlignedSeries {
    /// Wraps the given records, rejecting out-of-order or duplicate dates.
    pub fn from_records(records: Vec<DailyRecord>) -> Result<Self, SeriesError> {
        for (position, pair) in records.windows(2).enumerate() {
            if pair[1].date <= pair[0].date {
                return Err(SeriesError::UnsortedDates {
                    position: position + 1,
                    date: pair[1].date,
                });
            }
        }
        Ok(AlignedSeries { records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn first(&self) -> Option<&DailyRecord> {
        self.records.first()
    }

    pub fn records(&self) -> &[DailyRecord] {
        self.records.as_slice()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DailyRecord> {
        self.records.iter()
    }
}

impl TryFrom<Vec<DailyRecord>> for AlignedSeries {
    type Error = SeriesError;

    fn try_from(records: Vec<DailyRecord>) -> Result<Self, Self::Error> {
        Self::from_records(records)
    }
}

impl From<AlignedSeries> for Vec<DailyRecord> {
    fn from(series: AlignedSeries) -> Self {
        series.records
    }
}

impl<'a> IntoIterator for &'a AlignedSeries {
    type Item = &'a DailyRecord;
    type IntoIter = std::slice::Iter<'a, DailyRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
