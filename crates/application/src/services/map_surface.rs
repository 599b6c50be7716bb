//! Map surface - the drawn route, custom markers and pan/zoom state
//!
//! The page renders whatever [`MapView`] is published here.

use std::fmt;

use domain::{DomainError, GeoLocation, MapView, MarkerId, RenderedRoute, RouteResult};
use tokio::sync::watch;
use tracing::{debug, instrument, warn};

/// Owner of one page's map state
pub struct MapSurface {
    view: watch::Sender<MapView>,
}

impl fmt::Debug for MapSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = self.view.borrow();
        f.debug_struct("MapSurface")
            .field("container", &view.container)
            .field("has_route", &view.has_route())
            .field("markers", &view.markers.len())
            .finish()
    }
}

impl MapSurface {
    /// Create the map in `container`, centered on `center`
    #[must_use]
    pub fn initialize(container: impl Into<String>, center: GeoLocation, zoom: u8) -> Self {
        let view = MapView::new(container, center, zoom);
        debug!(container = %view.container, %center, zoom = view.zoom, "Map initialized");
        let (view, _) = watch::channel(view);
        Self { view }
    }

    /// Draw `route`, replacing any route (and its markers) already shown
    #[instrument(skip(self, route), fields(points = route.path.len()))]
    pub fn render_route(&self, route: &RouteResult) {
        let rendered = RenderedRoute::from(route);
        self.view.send_modify(|view| {
            view.clear_route();
            view.replace_route(rendered);
        });
    }

    /// Draw `route` with an `A` marker at its start and a `B` marker at its end
    ///
    /// Observers see the route and both markers in a single update.
    #[instrument(skip(self, route), fields(points = route.path.len()))]
    pub fn show_route(&self, route: &RouteResult) {
        let rendered = RenderedRoute::from(route);
        let endpoints = [
            (route.start_location, "A", route.start_address.as_str()),
            (route.end_location, "B", route.end_address.as_str()),
        ];
        self.view.send_modify(|view| {
            view.clear_route();
            view.replace_route(rendered);
            for (position, label, tooltip) in endpoints {
                if let Err(e) = view.add_marker(position, label, tooltip) {
                    warn!(error = %e, %label, "Could not place route marker");
                }
            }
        });
    }

    /// Remove the current route and all custom markers
    pub fn clear_route(&self) {
        self.view.send_if_modified(|view| {
            if !view.has_route() && view.markers.is_empty() {
                return false;
            }
            view.clear_route();
            true
        });
    }

    /// Add a labeled point annotation and return its handle
    ///
    /// # Errors
    ///
    /// Returns `DomainError::MarkerLimitReached` if the map already carries the
    /// maximum number of custom markers.
    pub fn add_marker(
        &self,
        position: GeoLocation,
        label: &str,
        tooltip: &str,
    ) -> Result<MarkerId, DomainError> {
        let mut outcome = Err(DomainError::MarkerLimitReached {
            max: domain::MAX_CUSTOM_MARKERS,
        });
        self.view.send_if_modified(|view| {
            outcome = view.add_marker(position, label, tooltip);
            outcome.is_ok()
        });
        if let Ok(id) = outcome {
            debug!(%id, %label, %position, "Marker added");
        }
        outcome
    }

    /// Remove one marker; returns whether it was present
    pub fn remove_marker(&self, id: MarkerId) -> bool {
        self.view.send_if_modified(|view| view.remove_marker(id))
    }

    /// Pan and zoom
    pub fn set_view(&self, center: GeoLocation, zoom: u8) {
        self.view.send_modify(|view| view.set_view(center, zoom));
    }

    /// Current map state
    #[must_use]
    pub fn snapshot(&self) -> MapView {
        self.view.borrow().clone()
    }

    /// Receiver notified on every map change
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<MapView> {
        self.view.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use domain::{BoundingBox, Distance, TravelTime};

    use super::*;

    fn result(summary: &str) -> RouteResult {
        RouteResult {
            distance: Distance {
                text: "7.2 km".to_string(),
                meters: 7200,
            },
            duration: TravelTime {
                text: "18 mins".to_string(),
                seconds: 1080,
            },
            start_location: GeoLocation::new_unchecked(30.3244, 78.0418),
            end_location: GeoLocation::new_unchecked(30.3415, 77.9993),
            start_address: "Clock Tower".to_string(),
            end_address: "FRI".to_string(),
            summary: summary.to_string(),
            path: vec![GeoLocation::new_unchecked(30.3244, 78.0418)],
            bounds: Some(BoundingBox::dehradun()),
        }
    }

    #[test]
    fn initialize_sets_center_and_zoom() {
        let map = MapSurface::initialize("map", GeoLocation::dehradun(), 13);
        let view = map.snapshot();
        assert_eq!(view.center, GeoLocation::dehradun());
        assert_eq!(view.zoom, 13);
        assert!(!view.has_route());
    }

    #[test]
    fn render_replaces_previous_route_and_its_markers() {
        let map = MapSurface::initialize("map", GeoLocation::dehradun(), 13);
        map.render_route(&result("first"));
        map.add_marker(GeoLocation::dehradun(), "A", "start").expect("marker");
        map.render_route(&result("second"));
        let view = map.snapshot();
        assert_eq!(view.route.map(|r| r.summary).as_deref(), Some("second"));
        assert!(view.markers.is_empty());
        assert_eq!(view.viewport, Some(BoundingBox::dehradun()));
    }

    #[tokio::test]
    async fn show_route_publishes_route_and_both_markers_at_once() {
        let map = MapSurface::initialize("map", GeoLocation::dehradun(), 13);
        map.add_marker(GeoLocation::dehradun(), "X", "stale").expect("marker");
        let mut rx = map.subscribe();

        map.show_route(&result("Chakrata Rd"));

        rx.changed().await.expect("map update");
        let view = rx.borrow_and_update().clone();
        assert_eq!(view.route.map(|r| r.summary).as_deref(), Some("Chakrata Rd"));
        let markers: Vec<_> = view
            .markers
            .iter()
            .map(|m| (m.label.as_str(), m.tooltip.as_str(), m.position))
            .collect();
        assert_eq!(
            markers,
            vec![
                ("A", "Clock Tower", GeoLocation::new_unchecked(30.3244, 78.0418)),
                ("B", "FRI", GeoLocation::new_unchecked(30.3415, 77.9993)),
            ]
        );
        assert!(!rx.has_changed().unwrap_or(true));
    }

    #[test]
    fn clear_route_only_notifies_on_change() {
        let map = MapSurface::initialize("map", GeoLocation::dehradun(), 13);
        let mut rx = map.subscribe();
        map.clear_route();
        assert!(!rx.has_changed().unwrap_or(true));

        map.render_route(&result("r"));
        let _ = rx.borrow_and_update();
        map.clear_route();
        assert!(rx.has_changed().unwrap_or(false));
        assert!(!map.snapshot().has_route());
    }

    #[test]
    fn marker_lifecycle() {
        let map = MapSurface::initialize("map", GeoLocation::dehradun(), 13);
        let a = map.add_marker(GeoLocation::dehradun(), "A", "start").expect("A");
        let _b = map.add_marker(GeoLocation::dehradun(), "B", "end").expect("B");
        assert!(map.add_marker(GeoLocation::dehradun(), "C", "extra").is_err());
        assert!(map.remove_marker(a));
        assert_eq!(map.snapshot().markers.len(), 1);
    }

    #[test]
    fn set_view_pans_and_zooms() {
        let map = MapSurface::initialize("map", GeoLocation::dehradun(), 13);
        let target = GeoLocation::new_unchecked(30.4, 78.1);
        map.set_view(target, 15);
        let view = map.snapshot();
        assert_eq!(view.center, target);
        assert_eq!(view.zoom, 15);
    }
}
