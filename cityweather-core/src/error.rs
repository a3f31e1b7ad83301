/// Message shown when a failure carries no text of its own.
pub const FALLBACK_MESSAGE: &str = "Failed to fetch weather data";

/// Everything a search can end with besides a result.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("Please enter a city name")]
    EmptyQuery,

    #[error("City not found")]
    CityNotFound,

    /// Transport failure, non-success status or unexpected body on either call.
    #[error("{0}")]
    Request(String),
}

impl From<anyhow::Error> for SearchError {
    fn from(err: anyhow::Error) -> Self {
        let message = err.to_string();
        if message.trim().is_empty() {
            SearchError::Request(FALLBACK_MESSAGE.to_string())
        } else {
            SearchError::Request(message)
        }
    }
}
