//! Maps error types

use thiserror::Error;

/// Errors that can occur while calling the Google Maps web services
///
/// Provider statuses such as `ZERO_RESULTS` or `REQUEST_DENIED` are not errors
/// at this level; they are returned inside the response.
#[derive(Debug, Error)]
pub enum MapsError {
    /// Connection to the maps service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// HTTP request to the maps service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from the maps service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded, retry after {retry_after_secs:?} seconds")]
    RateLimitExceeded {
        /// Seconds to wait before retrying (if provided by API)
        retry_after_secs: Option<u64>,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Request timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },
}

impl MapsError {
    pub(crate) fn from_reqwest(e: &reqwest::Error, timeout_secs: u64) -> Self {
        if e.is_timeout() {
            Self::Timeout { timeout_secs }
        } else {
            Self::ConnectionFailed(e.to_string())
        }
    }
}
