//! Configuration of the fetch layer and the dashboard.
//!
//! Both structs are built with `bon` builders. Every field except the API key has
//! a default: metric units, `pt_br` condition labels and "São Paulo" as the city
//! shown first.

use crate::types::clock_frame::ClockFrame;
use bon::Builder;
use std::env;
use std::time::Duration;
use thiserror::Error;

/// Environment variable read by [`FetcherConfig::from_env`].
pub const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";
pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";
pub const DEFAULT_UNITS: &str = "metric";
pub const DEFAULT_LANGUAGE: &str = "pt_br";
pub const DEFAULT_CITY: &str = "São Paulo";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Environment variable '{0}' with the OpenWeatherMap API key is not set")]
    MissingApiKey(&'static str),

    #[error("Default city must not be blank")]
    EmptyDefaultCity,

    #[error("Failed to build HTTP client")]
    ClientBuild(#[source] reqwest::Error),
}

/// Settings for [`crate::OpenWeatherFetcher`].
///
/// # Examples
///
/// ```
/// use forecast_dashboard::FetcherConfig;
/// use std::time::Duration;
///
/// let config = FetcherConfig::builder()
///     .api_key("my-key")
///     .language("en")
///     .timeout(Duration::from_secs(5))
///     .build();
/// assert_eq!(config.units, "metric");
/// assert_eq!(config.language, "en");
/// ```
#[derive(Debug, Clone, Builder)]
pub struct FetcherConfig {
    #[builder(into)]
    pub api_key: String,
    #[builder(into, default = DEFAULT_BASE_URL.to_string())]
    pub base_url: String,
    /// Unit system requested from the provider; the aggregator assumes Celsius.
    #[builder(into, default = DEFAULT_UNITS.to_string())]
    pub units: String,
    #[builder(into, default = DEFAULT_LANGUAGE.to_string())]
    pub language: String,
    #[builder(default = DEFAULT_TIMEOUT)]
    pub timeout: Duration,
}

impl FetcherConfig {
    /// Default settings with the API key taken from [`API_KEY_ENV`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingApiKey`] if the variable is unset or blank.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey(API_KEY_ENV))?;
        Ok(Self::builder().api_key(api_key.trim()).build())
    }
}

/// Settings for [`crate::Dashboard`].
#[derive(Debug, Clone, Builder)]
pub struct DashboardConfig {
    /// City loaded by [`crate::Dashboard::load_default`].
    #[builder(into, default = DEFAULT_CITY.to_string())]
    pub default_city: String,
    /// Frame in which "now" is read for the next-day series.
    #[builder(default)]
    pub clock: ClockFrame,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}
