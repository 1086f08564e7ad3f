use crate::payload::error::PayloadError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("City '{0}' not found")]
    CityNotFound(String),

    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to read response body from {0}")]
    BodyRead(String, #[source] reqwest::Error),

    #[error("Invalid payload")]
    InvalidPayload(#[from] PayloadError),
}
