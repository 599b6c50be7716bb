//! Places adapter - Implements PlaceSuggestionPort using integration_maps

use application::error::ApplicationError;
use application::ports::{PlaceDetails, PlaceSuggestion, PlaceSuggestionPort, SuggestionQuery};
use async_trait::async_trait;
use domain::{BoundingBox, GeoLocation};
use integration_maps::{
    AutocompleteQuery, Bounds, GooglePlacesClient, LatLng, PlaceDetailsResponse, PlacesClient,
    PredictionsResponse,
};
use tracing::{debug, instrument};

/// Adapter for location autocomplete using the Google Places API
pub struct PlacesAdapter {
    client: GooglePlacesClient,
}

impl std::fmt::Debug for PlacesAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlacesAdapter")
            .field("client", &"GooglePlacesClient")
            .finish()
    }
}

impl PlacesAdapter {
    /// Create a new places adapter
    pub const fn new(client: GooglePlacesClient) -> Self {
        Self { client }
    }

    fn convert_bounds(bounds: &BoundingBox) -> Bounds {
        let corner = |loc: GeoLocation| LatLng {
            lat: loc.latitude(),
            lng: loc.longitude(),
        };
        Bounds {
            southwest: corner(bounds.south_west()),
            northeast: corner(bounds.north_east()),
        }
    }

    fn convert_predictions(
        raw: PredictionsResponse,
    ) -> Result<Vec<PlaceSuggestion>, ApplicationError> {
        match raw.status.as_str() {
            "OK" => Ok(raw
                .predictions
                .into_iter()
                .map(|p| PlaceSuggestion {
                    place_id: p.place_id,
                    description: p.description,
                })
                .collect()),
            "ZERO_RESULTS" => Ok(Vec::new()),
            status => Err(Self::status_error("Autocomplete", status, raw.error_message)),
        }
    }

    fn convert_details(
        place_id: &str,
        raw: PlaceDetailsResponse,
    ) -> Result<PlaceDetails, ApplicationError> {
        match raw.status.as_str() {
            "OK" => {
                let result = raw.result;
                Ok(PlaceDetails {
                    place_id: place_id.to_string(),
                    formatted_address: result
                        .as_ref()
                        .and_then(|r| r.formatted_address.clone()),
                    location: result
                        .as_ref()
                        .and_then(integration_maps::PlaceResult::location)
                        .and_then(|l| GeoLocation::new(l.lat, l.lng).ok()),
                })
            },
            "NOT_FOUND" | "INVALID_REQUEST" => {
                Err(ApplicationError::NotFound(format!("Place {place_id}")))
            },
            status => Err(Self::status_error("Place details", status, raw.error_message)),
        }
    }

    fn status_error(what: &str, status: &str, message: Option<String>) -> ApplicationError {
        match message {
            Some(message) => {
                ApplicationError::ExternalService(format!("{what} failed: {status} ({message})"))
            },
            None => ApplicationError::ExternalService(format!("{what} failed: {status}")),
        }
    }
}

#[async_trait]
impl PlaceSuggestionPort for PlacesAdapter {
    #[instrument(skip(self, query), fields(input = %query.input))]
    async fn suggest(
        &self,
        query: &SuggestionQuery,
    ) -> Result<Vec<PlaceSuggestion>, ApplicationError> {
        let request = AutocompleteQuery {
            input: query.input.clone(),
            bounds: Self::convert_bounds(&query.bounds),
            strict_bounds: query.strict_bounds,
        };

        let raw = self.client.autocomplete(&request).await.map_err(|e| {
            ApplicationError::ExternalService(format!("Autocomplete request failed: {e}"))
        })?;

        let suggestions = Self::convert_predictions(raw)?;
        debug!(count = suggestions.len(), "Suggestions received");
        Ok(suggestions)
    }

    #[instrument(skip(self))]
    async fn place_details(&self, place_id: &str) -> Result<PlaceDetails, ApplicationError> {
        let raw = self.client.place_details(place_id).await.map_err(|e| {
            ApplicationError::ExternalService(format!("Place details request failed: {e}"))
        })?;

        Self::convert_details(place_id, raw)
    }
}
