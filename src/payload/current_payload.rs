//! Serde model of the `/weather` (current conditions) response.

use crate::payload::error::PayloadError;
use crate::payload::forecast_payload::{MainReadings, WeatherLabel};
use crate::types::current_conditions::CurrentConditions;
use chrono::Local;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct WindReadings {
    pub speed: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CurrentResponse {
    /// City name as resolved by the provider.
    pub name: Option<String>,
    pub main: Option<MainReadings>,
    pub wind: Option<WindReadings>,
    pub weather: Option<Vec<WeatherLabel>>,
}

impl CurrentResponse {
    pub fn from_json(json: &str) -> Result<Self, PayloadError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validates the response into [`CurrentConditions`].
    ///
    /// `requested_city` is used when the provider does not echo a city name.
    /// Labels without a description are skipped.
    pub fn into_conditions(self, requested_city: &str) -> Result<CurrentConditions, PayloadError> {
        let main = self.main.ok_or(PayloadError::MissingCurrentField("main"))?;

        Ok(CurrentConditions {
            city: self
                .name
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| requested_city.to_string()),
            temperature: main
                .temp
                .ok_or(PayloadError::MissingCurrentField("main.temp"))?,
            humidity: main
                .humidity
                .ok_or(PayloadError::MissingCurrentField("main.humidity"))?,
            pressure: main
                .pressure
                .ok_or(PayloadError::MissingCurrentField("main.pressure"))?,
            wind_speed: self
                .wind
                .and_then(|wind| wind.speed)
                .ok_or(PayloadError::MissingCurrentField("wind.speed"))?,
            descriptions: self
                .weather
                .unwrap_or_default()
                .into_iter()
                .filter_map(|label| label.description)
                .collect(),
            requested_at: Local::now(),
        })
    }
}

/// Parses and validates a current-weather response body in one step.
pub fn parse_current(json: &str, requested_city: &str) -> Result<CurrentConditions, PayloadError> {
    CurrentResponse::from_json(json)?.into_conditions(requested_city)
}
