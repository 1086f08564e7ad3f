//! Output rows of the forecast aggregator.
//!
//! Field names are serialized in camelCase; they are the contract a chart
//! renderer binds to (`label`/`count`, `hourMinute`/`temperature`,
//! `monthLabel`/`avgTemperature`).

use serde::Serialize;

/// Number of occurrences of one weather label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub label: String,
    pub count: usize,
}

/// One forecast slot inside the next-24-hour window.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimePoint {
    /// `HH:MM` time of day of the slot.
    pub hour_minute: String,
    pub temperature: f64,
}

/// Average forecasted temperature of one calendar month.
///
/// Months without any record carry an `avg_temperature` of `0.0`. That value is a
/// "no data" sentinel, not a measurement; use [`MonthlyAverage::has_data`] to tell
/// it apart from a real 0 °C average.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyAverage {
    /// Short English month name, `"Jan"` to `"Dec"`.
    pub month_label: String,
    pub avg_temperature: f64,
    #[serde(skip)]
    pub sample_count: usize,
}

impl MonthlyAverage {
    pub fn has_data(&self) -> bool {
        self.sample_count > 0
    }
}

/// The three projections of one forecast set.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastProjections {
    /// City the underlying forecast was fetched for.
    pub city: String,
    pub distribution: Vec<CategoryCount>,
    pub next_day: Vec<TimePoint>,
    pub monthly: Vec<MonthlyAverage>,
}
