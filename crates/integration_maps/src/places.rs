//! Google Places client
//!
//! Address autocomplete and place details via the
//! [Places API](https://developers.google.com/maps/documentation/places/web-service/autocomplete).

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument, warn};

use crate::config::MapsConfig;
use crate::error::MapsError;
use crate::models::{Bounds, PlaceDetailsResponse, PredictionsResponse};
use crate::transport;

/// Fields requested from place details
const DETAIL_FIELDS: &str = "formatted_address,geometry";

/// Parameters of one autocomplete request
#[derive(Debug, Clone, PartialEq)]
pub struct AutocompleteQuery {
    /// Text typed so far
    pub input: String,
    /// Area results are biased towards
    pub bounds: Bounds,
    /// Only return results inside `bounds`
    pub strict_bounds: bool,
}

impl AutocompleteQuery {
    fn rectangle(&self) -> String {
        format!(
            "rectangle:{},{}|{},{}",
            self.bounds.southwest.lat,
            self.bounds.southwest.lng,
            self.bounds.northeast.lat,
            self.bounds.northeast.lng
        )
    }
}

/// Trait for place lookup clients
#[async_trait]
pub trait PlacesClient: Send + Sync {
    /// Geocode-type predictions for the query text
    async fn autocomplete(&self, query: &AutocompleteQuery)
    -> Result<PredictionsResponse, MapsError>;

    /// Formatted address and location of a place
    async fn place_details(&self, place_id: &str) -> Result<PlaceDetailsResponse, MapsError>;
}

/// Places client for the Google Maps web service
pub struct GooglePlacesClient {
    client: Client,
    config: MapsConfig,
    api_key: String,
}

impl std::fmt::Debug for GooglePlacesClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GooglePlacesClient")
            .field("base_url", &self.config.base_url)
            .field("api_key", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

impl GooglePlacesClient {
    /// Create a new places client
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

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/maps/api/place/{path}/json",
            self.config.base_url.trim_end_matches('/')
        )
    }

    fn autocomplete_params(&self, query: &AutocompleteQuery) -> Vec<(&'static str, String)> {
        let area = if query.strict_bounds {
            "locationrestriction"
        } else {
            "locationbias"
        };
        let mut params = vec![
            ("input", query.input.clone()),
            ("types", "geocode".to_string()),
            (area, query.rectangle()),
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
impl PlacesClient for GooglePlacesClient {
    #[instrument(skip(self, query), fields(input = %query.input, strict = query.strict_bounds))]
    async fn autocomplete(
        &self,
        query: &AutocompleteQuery,
    ) -> Result<PredictionsResponse, MapsError> {
        let url = self.endpoint("autocomplete");
        debug!(?url, "Requesting place predictions");

        let response: PredictionsResponse = transport::get_json(
            &self.client,
            &url,
            &self.autocomplete_params(query),
            self.config.timeout_secs,
        )
        .await?;

        if !matches!(response.status.as_str(), "OK" | "ZERO_RESULTS") {
            warn!(status = %response.status, "Autocomplete request not OK");
        }
        Ok(response)
    }

    #[instrument(skip(self))]
    async fn place_details(&self, place_id: &str) -> Result<PlaceDetailsResponse, MapsError> {
        let url = self.endpoint("details");
        let mut params = vec![
            ("place_id", place_id.to_string()),
            ("fields", DETAIL_FIELDS.to_string()),
            ("language", self.config.language.clone()),
        ];
        params.push(("key", self.api_key.clone()));

        debug!(?url, "Requesting place details");
        let response: PlaceDetailsResponse =
            transport::get_json(&self.client, &url, &params, self.config.timeout_secs).await?;

        if response.status != "OK" {
            warn!(status = %response.status, "Place details request not OK");
        }
        Ok(response)
    }
}
