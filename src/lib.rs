mod aggregator;
mod config;
mod dashboard;
mod error;
mod fetcher;
mod payload;
mod types;
mod utils;

pub use aggregator::{count_labels, ForecastAggregator, NEXT_DAY_WINDOW_HOURS};
pub use config::{
    ConfigError, DashboardConfig, FetcherConfig, API_KEY_ENV, DEFAULT_BASE_URL, DEFAULT_CITY,
    DEFAULT_LANGUAGE, DEFAULT_UNITS,
};
pub use dashboard::{Dashboard, RequestTicket, SearchOutcome};
pub use error::DashboardError;

pub use fetcher::error::FetchError;
pub use fetcher::open_weather::OpenWeatherFetcher;
pub use fetcher::source::ForecastSource;

pub use payload::current_payload::{parse_current, CurrentResponse, WindReadings};
pub use payload::error::PayloadError;
pub use payload::forecast_payload::{
    parse_forecast, ForecastEntry, ForecastResponse, MainReadings, WeatherLabel,
};

pub use types::clock_frame::ClockFrame;
pub use types::current_conditions::CurrentConditions;
pub use types::forecast_record::{ForecastRecord, ForecastSet, TIMESTAMP_FORMAT};
pub use types::projections::{CategoryCount, ForecastProjections, MonthlyAverage, TimePoint};
