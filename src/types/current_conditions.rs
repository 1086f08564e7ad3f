//! Current weather of a city, as shown on the overview cards.

use crate::aggregator::count_labels;
use crate::types::projections::CategoryCount;
use chrono::{DateTime, Local};
use serde::Serialize;

/// Observed weather for a city at request time.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentConditions {
    pub city: String,
    /// Degrees Celsius.
    pub temperature: f64,
    /// Relative humidity in percent.
    pub humidity: f64,
    /// Sea-level pressure in hPa.
    pub pressure: f64,
    /// Metres per second.
    pub wind_speed: f64,
    /// All weather labels reported for the observation, in payload order.
    pub descriptions: Vec<String>,
    /// When the observation was requested.
    pub requested_at: DateTime<Local>,
}

impl CurrentConditions {
    /// Counts the reported weather labels in first-seen order.
    pub fn description_summary(&self) -> Vec<CategoryCount> {
        count_labels(self.descriptions.iter().map(String::as_str))
    }
}
