//! Google Maps web service integration for RouteView
//!
//! Provides driving directions via the
//! [Directions API](https://developers.google.com/maps/documentation/directions)
//! and location autocomplete via the
//! [Places API](https://developers.google.com/maps/documentation/places/web-service).
//!
//! # Architecture
//!
//! [`DirectionsClient`] is implemented by [`GoogleDirectionsClient`] and
//! [`PlacesClient`] by [`GooglePlacesClient`]. Both return provider statuses
//! verbatim; only transport and decoding failures become [`MapsError`].
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_maps::{DirectionsClient, DirectionsQuery, GoogleDirectionsClient, MapsConfig};
//!
//! let config = MapsConfig {
//!     api_key: Some("...".to_string()),
//!     ..MapsConfig::default()
//! };
//! let client = GoogleDirectionsClient::new(&config)?;
//!
//! let response = client
//!     .directions(&DirectionsQuery::driving("Clock Tower, Dehradun", "FRI Dehradun"))
//!     .await?;
//! ```

mod config;
mod directions;
mod error;
mod models;
mod places;
mod transport;
pub mod polyline;

pub use config::MapsConfig;
pub use directions::{DirectionsClient, DirectionsQuery, GoogleDirectionsClient};
pub use error::MapsError;
pub use models::{
    Bounds, DirectionsLeg, DirectionsResponse, DirectionsRoute, EncodedPolyline, LatLng,
    PlaceDetailsResponse, PlaceGeometry, PlacePrediction, PlaceResult, PredictionsResponse,
    TextValue,
};
pub use places::{AutocompleteQuery, GooglePlacesClient, PlacesClient};
