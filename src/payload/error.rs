use thiserror::Error;

#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("Failed to parse response body as JSON")]
    Json(#[from] serde_json::Error),

    #[error("Forecast response has no 'list' array")]
    MissingList,

    #[error("Forecast entry {index} is missing '{field}'")]
    MissingField { index: usize, field: &'static str },

    #[error("Forecast entry {index} has an unreadable timestamp '{value}'")]
    InvalidTimestamp {
        index: usize,
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    // An empty 'weather' array leaves nothing to take the first label from
    #[error("Forecast entry {index} has no weather conditions")]
    NoConditions { index: usize },

    #[error("Current weather response is missing '{0}'")]
    MissingCurrentField(&'static str),
}
