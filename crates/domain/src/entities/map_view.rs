//! Map view entity - the state rendered by the map surface
//!
//! Invariant: at most one rendered route and at most [`MAX_CUSTOM_MARKERS`]
//! custom markers exist at any time.

use serde::{Deserialize, Serialize};

use super::{Marker, MarkerId, RouteResult};
use crate::errors::DomainError;
use crate::value_objects::{BoundingBox, GeoLocation};

/// Maximum number of custom markers on the map (route start and end)
pub const MAX_CUSTOM_MARKERS: usize = 2;

/// Highest zoom level supported by the tile providers
const MAX_ZOOM: u8 = 22;

/// Route geometry currently drawn on the map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedRoute {
    pub summary: String,
    pub path: Vec<GeoLocation>,
    pub bounds: Option<BoundingBox>,
}

impl From<&RouteResult> for RenderedRoute {
    fn from(result: &RouteResult) -> Self {
        Self {
            summary: result.summary.clone(),
            path: result.path.clone(),
            bounds: result.bounds,
        }
    }
}

/// Pan/zoom state plus the route layer and custom markers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapView {
    /// DOM identifier of the map container
    pub container: String,
    pub center: GeoLocation,
    pub zoom: u8,
    /// Viewport the page should fit, set when a route with bounds is drawn
    pub viewport: Option<BoundingBox>,
    pub route: Option<RenderedRoute>,
    pub markers: Vec<Marker>,
    #[serde(skip)]
    next_marker_id: u64,
}

impl MapView {
    /// Create an empty map centered on `center`
    #[must_use]
    pub fn new(container: impl Into<String>, center: GeoLocation, zoom: u8) -> Self {
        Self {
            container: container.into(),
            center,
            zoom: zoom.min(MAX_ZOOM),
            viewport: None,
            route: None,
            markers: Vec::new(),
            next_marker_id: 1,
        }
    }

    /// Replace any drawn route with `route`, fitting the viewport to its bounds
    pub fn replace_route(&mut self, route: RenderedRoute) {
        if let Some(bounds) = route.bounds {
            self.viewport = Some(bounds);
            self.center = bounds.center();
        }
        self.route = Some(route);
    }

    /// Remove the drawn route and every custom marker
    pub fn clear_route(&mut self) {
        self.route = None;
        self.markers.clear();
    }

    /// Add a custom marker and return its handle
    ///
    /// # Errors
    ///
    /// Returns `DomainError::MarkerLimitReached` when the map already shows
    /// [`MAX_CUSTOM_MARKERS`] markers.
    pub fn add_marker(
        &mut self,
        position: GeoLocation,
        label: impl Into<String>,
        tooltip: impl Into<String>,
    ) -> Result<MarkerId, DomainError> {
        if self.markers.len() >= MAX_CUSTOM_MARKERS {
            return Err(DomainError::MarkerLimitReached {
                max: MAX_CUSTOM_MARKERS,
            });
        }

        let id = MarkerId::new(self.next_marker_id);
        self.next_marker_id += 1;
        self.markers.push(Marker {
            id,
            position,
            label: label.into(),
            tooltip: tooltip.into(),
        });
        Ok(id)
    }

    /// Remove a marker by handle; returns whether it was present
    pub fn remove_marker(&mut self, id: MarkerId) -> bool {
        let before = self.markers.len();
        self.markers.retain(|m| m.id != id);
        self.markers.len() != before
    }

    /// Pan and zoom the map
    pub fn set_view(&mut self, center: GeoLocation, zoom: u8) {
        self.center = center;
        self.zoom = zoom.min(MAX_ZOOM);
    }

    /// Whether a route is currently drawn
    #[must_use]
    pub const fn has_route(&self) -> bool {
        self.route.is_some()
    }
}
