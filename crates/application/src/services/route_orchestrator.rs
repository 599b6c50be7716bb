//! Route orchestrator - the calculate-route use case
//!
//! Validates the two inputs, asks the routing provider for driving directions,
//! draws the first path with "A"/"B" markers and reports the outcome through
//! the UI state controller.

use std::fmt;
use std::sync::Arc;

use domain::{LocationInput, RouteResult};
use tracing::{info, instrument, warn};

use super::map_surface::MapSurface;
use super::ui_state::{ResultPanel, UiStateController};
use crate::error::{ApplicationError, RouteError};
use crate::ports::{DirectionsStatus, RouteRequest, RoutingPort};

/// Coordinates routing, map rendering and status display for one page
pub struct RouteOrchestrator {
    routing: Arc<dyn RoutingPort>,
    map: Arc<MapSurface>,
    ui: Arc<UiStateController>,
}

impl fmt::Debug for RouteOrchestrator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteOrchestrator")
            .field("map", &self.map)
            .field("ui", &self.ui)
            .finish_non_exhaustive()
    }
}

impl RouteOrchestrator {
    /// Create a new orchestrator
    pub fn new(
        routing: Arc<dyn RoutingPort>,
        map: Arc<MapSurface>,
        ui: Arc<UiStateController>,
    ) -> Self {
        Self { routing, map, ui }
    }

    /// Compute and display a driving route between `start` and `end`
    ///
    /// The loading indicator is shown for the whole call and hidden on every
    /// exit path. On success the result panel is filled; on failure the error
    /// area receives the error's display text and the result panel is hidden.
    /// Overlapping calls are not cancelled; whichever response arrives last
    /// determines what the map shows.
    ///
    /// # Errors
    ///
    /// - `RouteError::EmptyInput` if either input is blank (no request is made)
    /// - `RouteError::NoRouteFound` if the provider answered `ZERO_RESULTS`
    /// - `RouteError::Provider` for any other status or a transport failure
    #[instrument(skip(self, start, end), fields(start = %start, end = %end))]
    pub async fn calculate_route(
        &self,
        start: &LocationInput,
        end: &LocationInput,
    ) -> Result<RouteResult, RouteError> {
        let _loading = self.ui.begin_loading();

        match self.run(start, end).await {
            Ok(route) => {
                info!(
                    distance = %route.distance.text,
                    duration = %route.duration.text,
                    "Route displayed"
                );
                self.ui.show_result(ResultPanel {
                    distance_text: route.distance.text.clone(),
                    duration_text: route.duration.text.clone(),
                });
                Ok(route)
            },
            Err(e) => {
                if e.is_expected() {
                    info!(outcome = e.code(), "Route not displayed");
                } else {
                    warn!(error = %e, "Route calculation failed");
                }
                self.ui.show_error(e.to_string());
                Err(e)
            },
        }
    }

    async fn run(
        &self,
        start: &LocationInput,
        end: &LocationInput,
    ) -> Result<RouteResult, RouteError> {
        if start.is_blank() || end.is_blank() {
            return Err(RouteError::EmptyInput);
        }

        self.map.clear_route();

        let request = RouteRequest::driving(start.as_str(), end.as_str());
        let reply = self.routing.route(&request).await.map_err(|e| match e {
            ApplicationError::ExternalService(message) => RouteError::Provider(message),
            other => RouteError::Provider(other.to_string()),
        })?;

        match reply.status {
            DirectionsStatus::Ok => {
                let route = RouteResult::from_candidates(&reply.routes).ok_or_else(|| {
                    RouteError::Provider("Directions response contained no route legs".to_string())
                })?;
                self.map.show_route(&route);
                Ok(route)
            },
            DirectionsStatus::ZeroResults => Err(RouteError::NoRouteFound),
            DirectionsStatus::Other(status) => Err(RouteError::from_status(
                &status,
                reply.error_message.as_deref(),
            )),
        }
    }
}
