//! Serde model of the `/forecast` response and its validation into a [`ForecastSet`].
//!
//! Every field is optional at the serde level so that a missing field surfaces as a
//! precise [`PayloadError`] naming the entry and field, instead of a generic
//! deserialization failure.

use crate::payload::error::PayloadError;
use crate::types::forecast_record::{ForecastRecord, ForecastSet};
use log::debug;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct MainReadings {
    pub temp: Option<f64>,
    pub humidity: Option<f64>,
    pub pressure: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeatherLabel {
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ForecastEntry {
    pub dt_txt: Option<String>,
    pub main: Option<MainReadings>,
    pub weather: Option<Vec<WeatherLabel>>,
}

/// The forecast payload: `{ list: [ { dt_txt, main: { temp }, weather: [ { description } ] } ] }`.
///
/// Fields beyond those are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    pub list: Option<Vec<ForecastEntry>>,
}

impl ForecastResponse {
    pub fn from_json(json: &str) -> Result<Self, PayloadError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validates every entry and maps it to a [`ForecastRecord`].
    ///
    /// `dt_txt` becomes the timestamp, `main.temp` the temperature and the first
    /// `weather[].description` the condition label. Entry order is kept.
    ///
    /// # Errors
    ///
    /// * [`PayloadError::MissingList`] if there is no `list` array.
    /// * [`PayloadError::MissingField`] if an entry lacks `dt_txt`, `main.temp` or
    ///   `weather[0].description`.
    /// * [`PayloadError::InvalidTimestamp`] if `dt_txt` is not `YYYY-MM-DD HH:MM:SS`.
    /// * [`PayloadError::NoConditions`] if an entry's `weather` array is empty.
    pub fn into_forecast_set(self) -> Result<ForecastSet, PayloadError> {
        let entries = self.list.ok_or(PayloadError::MissingList)?;

        let records = entries
            .into_iter()
            .enumerate()
            .map(|(index, entry)| entry.into_record(index))
            .collect::<Result<Vec<_>, _>>()?;

        debug!("Validated {} forecast entries", records.len());
        Ok(ForecastSet::new(records))
    }
}

impl ForecastEntry {
    fn into_record(self, index: usize) -> Result<ForecastRecord, PayloadError> {
        let missing = |field| PayloadError::MissingField { index, field };

        let timestamp_text = self.dt_txt.ok_or_else(|| missing("dt_txt"))?;
        let temperature = self
            .main
            .and_then(|main| main.temp)
            .ok_or_else(|| missing("main.temp"))?;
        let first_label = self
            .weather
            .ok_or_else(|| missing("weather"))?
            .into_iter()
            .next()
            .ok_or(PayloadError::NoConditions { index })?;
        let description = first_label
            .description
            .ok_or_else(|| missing("weather[0].description"))?;

        ForecastRecord::parse(&timestamp_text, temperature, description).map_err(|source| {
            PayloadError::InvalidTimestamp {
                index,
                value: timestamp_text.clone(),
                source,
            }
        })
    }
}

/// Parses and validates a forecast response body in one step.
pub fn parse_forecast(json: &str) -> Result<ForecastSet, PayloadError> {
    ForecastResponse::from_json(json)?.into_forecast_set()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse_value(value: serde_json::Value) -> Result<ForecastSet, PayloadError> {
        parse_forecast(&value.to_string())
    }

    #[test]
    fn test_parse_openweather_shaped_body() {
        let body = json!({
            "cod": "200",
            "cnt": 2,
            "list": [
                {
                    "dt": 1719835200,
                    "main": { "temp": 25.0, "feels_like": 24.6, "humidity": 40 },
                    "weather": [
                        { "id": 800, "main": "Clear", "description": "clear sky", "icon": "01d" },
                        { "id": 701, "main": "Mist", "description": "mist", "icon": "50d" }
                    ],
                    "dt_txt": "2024-07-01 12:00:00"
                },
                {
                    "dt": 1719846000,
                    "main": { "temp": 27.5 },
                    "weather": [ { "description": "few clouds" } ],
                    "dt_txt": "2024-07-01 15:00:00"
                }
            ],
            "city": { "name": "São Paulo", "country": "BR" }
        });

        let set = parse_value(body).unwrap();
        assert_eq!(set.len(), 2);
        let first = &set.records()[0];
        assert_eq!(first.timestamp_text(), "2024-07-01 12:00:00");
        assert_eq!(first.temperature, 25.0);
        assert_eq!(first.condition_description, "clear sky");
        assert_eq!(set.records()[1].condition_description, "few clouds");
    }

    #[test]
    fn test_empty_list_is_valid() {
        let set = parse_value(json!({ "list": [] })).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn test_missing_list() {
        let err = parse_value(json!({ "cod": "200" })).unwrap_err();
        assert!(matches!(err, PayloadError::MissingList));
    }

    #[test]
    fn test_missing_temperature_names_entry() {
        let body = json!({
            "list": [
                { "dt_txt": "2024-07-01 12:00:00", "main": { "temp": 1.0 }, "weather": [ { "description": "rain" } ] },
                { "dt_txt": "2024-07-01 15:00:00", "main": { "humidity": 80 }, "weather": [ { "description": "rain" } ] }
            ]
        });
        match parse_value(body).unwrap_err() {
            PayloadError::MissingField { index, field } => {
                assert_eq!(index, 1);
                assert_eq!(field, "main.temp");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_missing_main_and_timestamp() {
        let no_main = json!({ "list": [ { "dt_txt": "2024-07-01 12:00:00", "weather": [ { "description": "rain" } ] } ] });
        assert!(matches!(
            parse_value(no_main).unwrap_err(),
            PayloadError::MissingField { index: 0, field: "main.temp" }
        ));

        let no_dt = json!({ "list": [ { "main": { "temp": 1.0 }, "weather": [ { "description": "rain" } ] } ] });
        assert!(matches!(
            parse_value(no_dt).unwrap_err(),
            PayloadError::MissingField { index: 0, field: "dt_txt" }
        ));
    }

    #[test]
    fn test_empty_weather_array() {
        let body = json!({ "list": [ { "dt_txt": "2024-07-01 12:00:00", "main": { "temp": 1.0 }, "weather": [] } ] });
        assert!(matches!(
            parse_value(body).unwrap_err(),
            PayloadError::NoConditions { index: 0 }
        ));
    }

    #[test]
    fn test_missing_description() {
        let body = json!({ "list": [ { "dt_txt": "2024-07-01 12:00:00", "main": { "temp": 1.0 }, "weather": [ { "main": "Rain" } ] } ] });
        assert!(matches!(
            parse_value(body).unwrap_err(),
            PayloadError::MissingField { index: 0, field: "weather[0].description" }
        ));
    }

    #[test]
    fn test_invalid_timestamp() {
        let body = json!({ "list": [ { "dt_txt": "01/07/2024 12:00", "main": { "temp": 1.0 }, "weather": [ { "description": "rain" } ] } ] });
        match parse_value(body).unwrap_err() {
            PayloadError::InvalidTimestamp { index, value, .. } => {
                assert_eq!(index, 0);
                assert_eq!(value, "01/07/2024 12:00");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_wrong_type_is_json_error() {
        let body = json!({ "list": [ { "dt_txt": "2024-07-01 12:00:00", "main": { "temp": "warm" }, "weather": [] } ] });
        assert!(matches!(parse_value(body).unwrap_err(), PayloadError::Json(_)));
        assert!(matches!(parse_forecast("not json").unwrap_err(), PayloadError::Json(_)));
    }

    #[test]
    fn test_order_is_not_changed() {
        let body = json!({
            "list": [
                { "dt_txt": "2024-07-02 00:00:00", "main": { "temp": 2.0 }, "weather": [ { "description": "b" } ] },
                { "dt_txt": "2024-07-01 00:00:00", "main": { "temp": 1.0 }, "weather": [ { "description": "a" } ] }
            ]
        });
        let set = parse_value(body).unwrap();
        assert_eq!(set.records()[0].condition_description, "b");
        assert_eq!(set.records()[1].condition_description, "a");
    }
}
