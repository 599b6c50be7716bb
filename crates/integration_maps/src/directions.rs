//! Google Directions client
//!
//! Routes between two free-text locations using the
//! [Directions API](https://developers.google.com/maps/documentation/directions/get-directions).

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument, warn};

use crate::config::MapsConfig;
use crate::error::MapsError;
use crate::models::DirectionsResponse;
use crate::transport;

/// Parameters of one directions request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectionsQuery {
    /// Address or place name, passed through unchanged
    pub origin: String,
    pub destination: String,
    /// Provider travel mode, e.g. `driving`
    pub mode: String,
    /// Provider unit system, e.g. `metric`
    pub units: String,
}

impl DirectionsQuery {
    /// Driving directions in metric units
    #[must_use]
    pub fn driving(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            mode: "driving".to_string(),
            units: "metric".to_string(),
        }
    }
}

/// Trait for directions clients
#[async_trait]
pub trait DirectionsClient: Send + Sync {
    /// Request directions; non-OK provider statuses are returned, not raised
    async fn directions(&self, query: &DirectionsQuery) -> Result<DirectionsResponse, MapsError>;

    /// Check if the directions service is reachable
    async fn is_healthy(&self) -> bool;
}

/// Directions client for the Google Maps web service
pub struct GoogleDirectionsClient {
    client: Client,
    config: MapsConfig,
    api_key: String,
}

impl std::fmt::Debug for GoogleDirectionsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleDirectionsClient")
            .field("base_url", &self.config.base_url)
            .field("api_key", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

impl GoogleDirectionsClient {
    /// Create a new directions client
    ///
    /// # Errors
    ///
    /// Returns an error if no API key is configured or the HTTP client cannot
    /// be initialized.
    pub fn new(config: &MapsConfig) -> Result<Self, MapsError> {
        let (client, api_key) = transport::build(config)?;
        Ok(Self {
            client,
            config: config.clone(),
            api_key,
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/maps/api/directions/json",
            self.config.base_url.trim_end_matches('/')
        )
    }

    fn params(&self, query: &DirectionsQuery) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("origin", query.origin.clone()),
            ("destination", query.destination.clone()),
            ("mode", query.mode.clone()),
            ("units", query.units.clone()),
            ("language", self.config.language.clone()),
        ];
        if let Some(region) = &self.config.region {
            params.push(("region", region.clone()));
        }
        params.push(("key", self.api_key.clone()));
        params
    }
}

#[async_trait]
impl DirectionsClient for GoogleDirectionsClient {
    #[instrument(skip(self, query), fields(origin = %query.origin, destination = %query.destination, mode = %query.mode))]
    async fn directions(&self, query: &DirectionsQuery) -> Result<DirectionsResponse, MapsError> {
        let url = self.endpoint();
        debug!(?url, "Requesting directions");

        let response: DirectionsResponse =
            transport::get_json(&self.client, &url, &self.params(query), self.config.timeout_secs)
                .await?;

        if response.status == "OK" {
            debug!(routes = response.routes.len(), "Directions received");
        } else {
            warn!(
                status = %response.status,
                message = response.error_message.as_deref().unwrap_or_default(),
                "Directions request not OK"
            );
        }

        Ok(response)
    }

    async fn is_healthy(&self) -> bool {
        self.client.get(self.endpoint()).send().await.is_ok()
    }
}
