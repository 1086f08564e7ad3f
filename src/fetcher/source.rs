use crate::fetcher::error::FetchError;
use crate::types::current_conditions::CurrentConditions;
use crate::types::forecast_record::ForecastSet;
use std::future::Future;

/// Provider of forecast data for a city.
///
/// Implementations validate the provider's payload before returning, so a
/// returned [`ForecastSet`] is always well formed. [`crate::OpenWeatherFetcher`]
/// is the HTTP implementation; tests and alternative providers can implement the
/// trait directly.
pub trait ForecastSource {
    /// Multi-day forecast for `city`.
    ///
    /// Fails with [`FetchError::CityNotFound`] when the provider does not know the city.
    fn fetch_forecast(
        &self,
        city: &str,
    ) -> impl Future<Output = Result<ForecastSet, FetchError>> + Send;

    /// Observed weather for `city` right now.
    fn fetch_current(
        &self,
        city: &str,
    ) -> impl Future<Output = Result<CurrentConditions, FetchError>> + Send;
}
