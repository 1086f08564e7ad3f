use crate::config::ConfigError;
use crate::fetcher::error::FetchError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("No city has been loaded yet")]
    NoCitySelected,
}

impl DashboardError {
    /// True if the provider reported the requested city as unknown.
    pub fn is_city_not_found(&self) -> bool {
        matches!(self, DashboardError::Fetch(FetchError::CityNotFound(_)))
    }
}
