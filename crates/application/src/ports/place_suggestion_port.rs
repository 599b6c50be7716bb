//! Place suggestion port
//!
//! Location autocomplete for the start/end inputs and resolution of a
//! selected suggestion into a provider-normalized place.

use async_trait::async_trait;
use domain::value_objects::{BoundingBox, GeoLocation};
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::error::ApplicationError;

/// Autocomplete query for one input
#[derive(Debug, Clone, PartialEq)]
pub struct SuggestionQuery {
    /// Text typed so far
    pub input: String,
    /// Area to prefer (or restrict to, when `strict_bounds` is set)
    pub bounds: BoundingBox,
    /// Drop suggestions outside `bounds` instead of deprioritizing them
    pub strict_bounds: bool,
}

/// A selectable prediction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceSuggestion {
    /// Provider place identifier, used to resolve the selection
    pub place_id: String,
    /// Human-readable prediction text
    pub description: String,
}

/// A resolved place
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceDetails {
    pub place_id: String,
    /// Canonical address; may be missing for some place types
    pub formatted_address: Option<String>,
    pub location: Option<GeoLocation>,
}

/// Port for location suggestions
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PlaceSuggestionPort: Send + Sync {
    /// Predictions for the typed text
    async fn suggest(&self, query: &SuggestionQuery)
    -> Result<Vec<PlaceSuggestion>, ApplicationError>;

    /// Resolve a selected prediction
    async fn place_details(&self, place_id: &str) -> Result<PlaceDetails, ApplicationError>;
}
