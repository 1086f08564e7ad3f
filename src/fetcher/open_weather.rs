use crate::config::{ConfigError, FetcherConfig};
use crate::fetcher::error::FetchError;
use crate::fetcher::source::ForecastSource;
use crate::payload::current_payload::parse_current;
use crate::payload::forecast_payload::parse_forecast;
use crate::types::current_conditions::CurrentConditions;
use crate::types::forecast_record::ForecastSet;
use log::{info, warn};
use reqwest::{Client, StatusCode};

const FORECAST_ENDPOINT: &str = "forecast";
const CURRENT_ENDPOINT: &str = "weather";

/// [`ForecastSource`] backed by the OpenWeatherMap REST API.
pub struct OpenWeatherFetcher {
    config: FetcherConfig,
    client: Client,
}

impl OpenWeatherFetcher {
    pub fn new(config: FetcherConfig) -> Result<Self, ConfigError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .gzip(true)
            .build()
            .map_err(ConfigError::ClientBuild)?;
        Ok(Self { config, client })
    }

    /// Fetcher with default settings and the API key from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::new(FetcherConfig::from_env()?)
    }

    pub fn config(&self) -> &FetcherConfig {
        &self.config
    }

    fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), endpoint)
    }

    /// Requests `endpoint` for `city` and returns the raw body.
    ///
    /// A 404 maps to [`FetchError::CityNotFound`]. The API key travels in the
    /// query string, so only the endpoint URL appears in logs and errors.
    async fn get_body(&self, endpoint: &str, city: &str) -> Result<String, FetchError> {
        let url = self.endpoint_url(endpoint);
        info!("Requesting {} for city '{}'", url, city);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", city),
                ("appid", self.config.api_key.as_str()),
                ("units", self.config.units.as_str()),
                ("lang", self.config.language.as_str()),
            ])
            .send()
            .await
            .map_err(|e| FetchError::NetworkRequest(url.clone(), e.without_url()))?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                return Err(match e.status() {
                    Some(StatusCode::NOT_FOUND) => {
                        warn!("City '{}' not found at {}", city, url);
                        FetchError::CityNotFound(city.to_string())
                    }
                    Some(status) => {
                        warn!("HTTP error {} for {}", status, url);
                        FetchError::HttpStatus {
                            url,
                            status,
                            source: e.without_url(),
                        }
                    }
                    None => FetchError::NetworkRequest(url, e.without_url()),
                });
            }
        };

        response
            .text()
            .await
            .map_err(|e| FetchError::BodyRead(url, e.without_url()))
    }
}

impl ForecastSource for OpenWeatherFetcher {
    async fn fetch_forecast(&self, city: &str) -> Result<ForecastSet, FetchError> {
        let body = self.get_body(FORECAST_ENDPOINT, city).await?;
        let set = parse_forecast(&body)?;
        info!("Received {} forecast records for '{}'", set.len(), city);
        Ok(set)
    }

    async fn fetch_current(&self, city: &str) -> Result<CurrentConditions, FetchError> {
        let body = self.get_body(CURRENT_ENDPOINT, city).await?;
        Ok(parse_current(&body, city)?)
    }
}
