//! Contains the [`ForecastAggregator`], which derives the dashboard's three views
//! from a [`ForecastSet`].
//!
//! Every derivation is a pure function of the borrowed set (and, for the
//! next-day series, of an explicit reference instant). Nothing here performs
//! I/O, reads the clock or fails.

use crate::types::forecast_record::ForecastSet;
use crate::types::projections::{CategoryCount, ForecastProjections, MonthlyAverage, TimePoint};
use crate::utils::{short_month_label, MONTHS_PER_YEAR};
use chrono::{Datelike, NaiveDateTime, TimeDelta};
use log::debug;
use std::collections::HashMap;

/// Width of the next-day window, in hours.
pub const NEXT_DAY_WINDOW_HOURS: i64 = 24;

/// Read-only view over a [`ForecastSet`] producing the dashboard projections.
///
/// The aggregator only borrows the set, so the projections can be derived in any
/// order, repeatedly, or from several threads at once.
///
/// # Examples
///
/// ```
/// use forecast_dashboard::{ForecastAggregator, ForecastRecord, ForecastSet};
/// use chrono::NaiveDateTime;
///
/// let set = ForecastSet::new(vec![
///     ForecastRecord::parse("2024-07-01 12:00:00", 25.0, "clear sky").unwrap(),
///     ForecastRecord::parse("2024-07-01 15:00:00", 27.0, "clear sky").unwrap(),
///     ForecastRecord::parse("2024-07-02 09:00:00", 20.0, "rain").unwrap(),
/// ]);
/// let now = NaiveDateTime::parse_from_str("2024-07-01 10:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
///
/// let aggregator = ForecastAggregator::new(&set);
/// assert_eq!(aggregator.derive_category_distribution()[0].count, 2);
/// assert_eq!(aggregator.derive_next_day_time_series(now).len(), 3);
/// assert_eq!(aggregator.derive_monthly_averages()[6].avg_temperature, 24.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ForecastAggregator<'a> {
    set: &'a ForecastSet,
}

impl<'a> ForecastAggregator<'a> {
    pub fn new(set: &'a ForecastSet) -> Self {
        Self { set }
    }

    /// Counts each record's condition label.
    ///
    /// Rows come out in the order labels are first seen in the set, neither
    /// alphabetical nor by frequency. An empty set yields no rows.
    pub fn derive_category_distribution(&self) -> Vec<CategoryCount> {
        count_labels(
            self.set
                .iter()
                .map(|record| record.condition_description.as_str()),
        )
    }

    /// Temperatures of the slots in `(now, now + 24h]`, in input order.
    ///
    /// The lower bound is exclusive and the upper bound inclusive. Each row is
    /// labelled with the slot's `HH:MM` time of day. Returns an empty vector once
    /// the forecast horizon lies entirely at or before `now`.
    ///
    /// # Arguments
    ///
    /// * `now` - Reference instant, in the same clock frame as the record timestamps.
    pub fn derive_next_day_time_series(&self, now: NaiveDateTime) -> Vec<TimePoint> {
        let window_end = now
            .checked_add_signed(TimeDelta::hours(NEXT_DAY_WINDOW_HOURS))
            .unwrap_or(NaiveDateTime::MAX);

        self.set
            .iter()
            .filter(|record| record.timestamp > now && record.timestamp <= window_end)
            .map(|record| TimePoint {
                hour_minute: record.hour_minute(),
                temperature: record.temperature,
            })
            .collect()
    }

    /// Average temperature per calendar month, always 12 rows from Jan to Dec.
    ///
    /// Months without records get an average of `0.0` and a `sample_count` of 0.
    pub fn derive_monthly_averages(&self) -> Vec<MonthlyAverage> {
        let mut accumulators = [(0.0_f64, 0_usize); MONTHS_PER_YEAR];

        for record in self.set {
            let (sum, count) = &mut accumulators[record.timestamp.month0() as usize];
            *sum += record.temperature;
            *count += 1;
        }

        accumulators
            .iter()
            .enumerate()
            .map(|(month0, &(sum, count))| MonthlyAverage {
                month_label: short_month_label(month0).unwrap_or_default().to_string(),
                avg_temperature: if count > 0 { sum / count as f64 } else { 0.0 },
                sample_count: count,
            })
            .collect()
    }

    /// Runs all three derivations against the same set.
    ///
    /// # Arguments
    ///
    /// * `city` - City the set was fetched for, copied into the result.
    /// * `now` - Reference instant for the next-day series.
    pub fn project(&self, city: &str, now: NaiveDateTime) -> ForecastProjections {
        let projections = ForecastProjections {
            city: city.to_string(),
            distribution: self.derive_category_distribution(),
            next_day: self.derive_next_day_time_series(now),
            monthly: self.derive_monthly_averages(),
        };
        debug!(
            "Projected {} records for {}: {} labels, {} next-day points",
            self.set.len(),
            city,
            projections.distribution.len(),
            projections.next_day.len()
        );
        projections
    }
}

/// Counts labels in first-seen order.
pub fn count_labels<'s>(labels: impl IntoIterator<Item = &'s str>) -> Vec<CategoryCount> {
    let mut rows: Vec<CategoryCount> = Vec::new();
    let mut positions: HashMap<&'s str, usize> = HashMap::new();

    for label in labels {
        match positions.get(label) {
            Some(&position) => rows[position].count += 1,
            None => {
                positions.insert(label, rows.len());
                rows.push(CategoryCount {
                    label: label.to_string(),
                    count: 1,
                });
            }
        }
    }

    rows
}
