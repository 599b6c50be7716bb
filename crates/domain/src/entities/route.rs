//! Route entities - candidate paths returned by the routing provider

use serde::{Deserialize, Serialize};

use crate::value_objects::{BoundingBox, GeoLocation};

/// Route distance as display text plus numeric meters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Distance {
    /// Provider-formatted text (e.g. "7.2 km")
    pub text: String,
    /// Distance in meters
    pub meters: u64,
}

/// Travel duration as display text plus numeric seconds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelTime {
    /// Provider-formatted text (e.g. "18 mins")
    pub text: String,
    /// Duration in seconds
    pub seconds: u64,
}

/// A single segment of a candidate path between two waypoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteLeg {
    pub distance: Distance,
    pub duration: TravelTime,
    pub start_location: GeoLocation,
    pub end_location: GeoLocation,
    /// Provider-normalized address of the start point
    pub start_address: String,
    /// Provider-normalized address of the end point
    pub end_address: String,
}

/// One candidate path as returned by the provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutePath {
    /// Short provider description (usually the main road)
    pub summary: String,
    /// Ordered segments
    pub legs: Vec<RouteLeg>,
    /// Decoded overview geometry
    pub path: Vec<GeoLocation>,
    /// Viewport enclosing the whole path
    pub bounds: Option<BoundingBox>,
}

impl RoutePath {
    /// First leg of the path, if any
    #[must_use]
    pub fn first_leg(&self) -> Option<&RouteLeg> {
        self.legs.first()
    }
}

/// The route selected for display: the first leg of the first candidate path
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteResult {
    pub distance: Distance,
    pub duration: TravelTime,
    pub start_location: GeoLocation,
    pub end_location: GeoLocation,
    pub start_address: String,
    pub end_address: String,
    /// Provider description of the selected path
    pub summary: String,
    /// Geometry to draw
    pub path: Vec<GeoLocation>,
    /// Viewport to fit, when the provider supplied one
    pub bounds: Option<BoundingBox>,
}

impl RouteResult {
    /// Select the displayed route from the provider's candidate paths
    ///
    /// Only the first path and its first leg are used. Returns `None` when the
    /// provider returned no path or the first path has no legs. When the path
    /// carries no geometry a straight segment between the leg endpoints is used.
    #[must_use]
    pub fn from_candidates(candidates: &[RoutePath]) -> Option<Self> {
        let path = candidates.first()?;
        let leg = path.first_leg()?;

        let geometry = if path.path.is_empty() {
            vec![leg.start_location, leg.end_location]
        } else {
            path.path.clone()
        };

        Some(Self {
            distance: leg.distance.clone(),
            duration: leg.duration.clone(),
            start_location: leg.start_location,
            end_location: leg.end_location,
            start_address: leg.start_address.clone(),
            end_address: leg.end_address.clone(),
            summary: path.summary.clone(),
            path: geometry,
            bounds: path.bounds,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leg(distance: &str, meters: u64) -> RouteLeg {
        RouteLeg {
            distance: Distance {
                text: distance.to_string(),
                meters,
            },
            duration: TravelTime {
                text: "18 mins".to_string(),
                seconds: 1080,
            },
            start_location: GeoLocation::new_unchecked(30.3244, 78.0418),
            end_location: GeoLocation::new_unchecked(30.3415, 77.9993),
            start_address: "Clock Tower, Dehradun".to_string(),
            end_address: "Forest Research Institute, Dehradun".to_string(),
        }
    }

    fn path(legs: Vec<RouteLeg>, geometry: Vec<GeoLocation>) -> RoutePath {
        RoutePath {
            summary: "Chakrata Rd".to_string(),
            legs,
            path: geometry,
            bounds: None,
        }
    }

    #[test]
    fn selects_first_leg_of_first_path() {
        let candidates = vec![
            path(vec![leg("7.2 km", 7200), leg("1.0 km", 1000)], vec![]),
            path(vec![leg("9.9 km", 9900)], vec![]),
        ];
        let result = RouteResult::from_candidates(&candidates).expect("route");
        assert_eq!(result.distance.text, "7.2 km");
        assert_eq!(result.distance.meters, 7200);
        assert_eq!(result.duration.text, "18 mins");
        assert_eq!(result.summary, "Chakrata Rd");
    }

    #[test]
    fn no_candidates_or_legs_yields_none() {
        assert!(RouteResult::from_candidates(&[]).is_none());
        assert!(RouteResult::from_candidates(&[path(vec![], vec![])]).is_none());
    }

    #[test]
    fn falls_back_to_leg_endpoints_without_geometry() {
        let result = RouteResult::from_candidates(&[path(vec![leg("7.2 km", 7200)], vec![])])
            .expect("route");
        assert_eq!(result.path, vec![result.start_location, result.end_location]);
    }

    #[test]
    fn keeps_provider_geometry() {
        let geometry = vec![
            GeoLocation::new_unchecked(30.3244, 78.0418),
            GeoLocation::new_unchecked(30.33, 78.02),
            GeoLocation::new_unchecked(30.3415, 77.9993),
        ];
        let result =
            RouteResult::from_candidates(&[path(vec![leg("7.2 km", 7200)], geometry.clone())])
                .expect("route");
        assert_eq!(result.path, geometry);
    }
}
