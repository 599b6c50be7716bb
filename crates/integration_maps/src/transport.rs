//! Shared HTTP plumbing for the maps clients

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use crate::config::MapsConfig;
use crate::error::MapsError;

/// Build the HTTP client and extract the API key
pub(crate) fn build(config: &MapsConfig) -> Result<(Client, String), MapsError> {
    let api_key = config
        .api_key
        .clone()
        .filter(|k| !k.trim().is_empty())
        .ok_or_else(|| MapsError::ConfigurationError("Google Maps API key required".to_string()))?;

    let client = Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .user_agent("RouteView/1.0")
        .build()
        .map_err(|e| MapsError::ConnectionFailed(e.to_string()))?;

    Ok((client, api_key))
}

/// GET `url` with `params` and decode the JSON body
pub(crate) async fn get_json<T: DeserializeOwned>(
    client: &Client,
    url: &str,
    params: &[(&str, String)],
    timeout_secs: u64,
) -> Result<T, MapsError> {
    let response = client
        .get(url)
        .query(params)
        .send()
        .await
        .map_err(|e| MapsError::from_reqwest(&e, timeout_secs))?;

    let status = response.status();
    if status == StatusCode::TOO_MANY_REQUESTS {
        return Err(MapsError::RateLimitExceeded {
            retry_after_secs: response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok()),
        });
    }

    if !status.is_success() {
        return Err(MapsError::RequestFailed(format!("HTTP {status}")));
    }

    let body = response
        .text()
        .await
        .map_err(|e| MapsError::ParseError(e.to_string()))?;

    serde_json::from_str(&body).map_err(|e| MapsError::ParseError(e.to_string()))
}
