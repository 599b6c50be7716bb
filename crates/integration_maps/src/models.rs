//! Google Maps response models
//!
//! Field names follow the provider's JSON. Optional fields default so that a
//! partial response still decodes.

use serde::{Deserialize, Serialize};

/// Coordinate pair as used by the provider
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// Rectangular viewport
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub northeast: LatLng,
    pub southwest: LatLng,
}

/// Display text plus its numeric value (meters or seconds)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextValue {
    pub text: String,
    pub value: u64,
}

/// Top-level directions response
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DirectionsResponse {
    /// `OK`, `ZERO_RESULTS`, `NOT_FOUND`, `REQUEST_DENIED`, ...
    pub status: String,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub routes: Vec<DirectionsRoute>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DirectionsRoute {
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub bounds: Option<Bounds>,
    #[serde(default)]
    pub legs: Vec<DirectionsLeg>,
    #[serde(default)]
    pub overview_polyline: Option<EncodedPolyline>,
}

impl DirectionsRoute {
    /// Encoded overview geometry, if present
    #[must_use]
    pub fn overview_points(&self) -> Option<&str> {
        self.overview_polyline.as_ref().map(|p| p.points.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EncodedPolyline {
    pub points: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DirectionsLeg {
    pub distance: TextValue,
    pub duration: TextValue,
    pub start_location: LatLng,
    pub end_location: LatLng,
    #[serde(default)]
    pub start_address: String,
    #[serde(default)]
    pub end_address: String,
}

/// Autocomplete response
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PredictionsResponse {
    pub status: String,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub predictions: Vec<PlacePrediction>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PlacePrediction {
    pub place_id: String,
    pub description: String,
}

/// Place details response
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlaceDetailsResponse {
    pub status: String,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub result: Option<PlaceResult>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlaceResult {
    #[serde(default)]
    pub formatted_address: Option<String>,
    #[serde(default)]
    pub geometry: Option<PlaceGeometry>,
}

impl PlaceResult {
    /// Point location of the place
    #[must_use]
    pub fn location(&self) -> Option<LatLng> {
        self.geometry.as_ref().map(|g| g.location)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct PlaceGeometry {
    pub location: LatLng,
}
