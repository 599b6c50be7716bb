//! Directions adapter - Implements RoutingPort using integration_maps

use application::error::ApplicationError;
use application::ports::{DirectionsReply, DirectionsStatus, RouteRequest, RoutingPort};
use async_trait::async_trait;
use domain::{BoundingBox, Distance, GeoLocation, RouteLeg, RoutePath, TravelTime};
use integration_maps::{
    Bounds, DirectionsClient, DirectionsLeg, DirectionsQuery, DirectionsResponse, DirectionsRoute,
    GoogleDirectionsClient, LatLng, polyline,
};
use tracing::{instrument, warn};

/// Adapter for driving directions using the Google Directions API
pub struct DirectionsAdapter {
    client: GoogleDirectionsClient,
}

impl std::fmt::Debug for DirectionsAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DirectionsAdapter")
            .field("client", &"GoogleDirectionsClient")
            .finish()
    }
}

impl DirectionsAdapter {
    /// Create a new directions adapter
    pub const fn new(client: GoogleDirectionsClient) -> Self {
        Self { client }
    }

    fn convert_response(raw: DirectionsResponse) -> Result<DirectionsReply, ApplicationError> {
        let routes = raw
            .routes
            .into_iter()
            .map(Self::convert_route)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(DirectionsReply {
            status: DirectionsStatus::parse(&raw.status),
            error_message: raw.error_message,
            routes,
        })
    }

    fn convert_route(raw: DirectionsRoute) -> Result<RoutePath, ApplicationError> {
        let path = match raw.overview_points().map(polyline::decode) {
            Some(Ok(points)) => points
                .into_iter()
                .map(|p| GeoLocation::new(p.lat, p.lng))
                .collect::<Result<Vec<_>, _>>()
                .unwrap_or_else(|e| {
                    warn!(error = %e, "Overview polyline out of range, drawing endpoints only");
                    Vec::new()
                }),
            Some(Err(e)) => {
                warn!(error = %e, "Undecodable overview polyline, drawing endpoints only");
                Vec::new()
            },
            None => Vec::new(),
        };

        let legs = raw
            .legs
            .into_iter()
            .map(Self::convert_leg)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(RoutePath {
            summary: raw.summary,
            legs,
            path,
            bounds: raw.bounds.and_then(Self::convert_bounds),
        })
    }

    fn convert_leg(raw: DirectionsLeg) -> Result<RouteLeg, ApplicationError> {
        Ok(RouteLeg {
            distance: Distance {
                text: raw.distance.text,
                meters: raw.distance.value,
            },
            duration: TravelTime {
                text: raw.duration.text,
                seconds: raw.duration.value,
            },
            start_location: Self::convert_location(raw.start_location)?,
            end_location: Self::convert_location(raw.end_location)?,
            start_address: raw.start_address,
            end_address: raw.end_address,
        })
    }

    fn convert_location(raw: LatLng) -> Result<GeoLocation, ApplicationError> {
        GeoLocation::new(raw.lat, raw.lng).map_err(|e| {
            ApplicationError::ExternalService(format!("Invalid location in directions response: {e}"))
        })
    }

    fn convert_bounds(raw: Bounds) -> Option<BoundingBox> {
        let south_west = GeoLocation::new(raw.southwest.lat, raw.southwest.lng).ok()?;
        let north_east = GeoLocation::new(raw.northeast.lat, raw.northeast.lng).ok()?;
        BoundingBox::new(south_west, north_east).ok()
    }
}

#[async_trait]
impl RoutingPort for DirectionsAdapter {
    #[instrument(skip(self, request), fields(origin = %request.origin, destination = %request.destination))]
    async fn route(&self, request: &RouteRequest) -> Result<DirectionsReply, ApplicationError> {
        let query = DirectionsQuery::driving(request.origin.as_str(), request.destination.as_str());

        let raw = self.client.directions(&query).await.map_err(|e| {
            ApplicationError::ExternalService(format!("Directions request failed: {e}"))
        })?;

        Self::convert_response(raw)
    }

    async fn is_available(&self) -> bool {
        self.client.is_healthy().await
    }
}
