//! Rectangular geographic area used to bias place suggestions and fit the viewport

use serde::{Deserialize, Serialize};

use super::GeoLocation;
use crate::errors::DomainError;

/// An axis-aligned latitude/longitude rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    south_west: GeoLocation,
    north_east: GeoLocation,
}

impl BoundingBox {
    /// Create a bounding box from its south-west and north-east corners
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidBoundingBox` if the south-west corner lies
    /// north of the north-east corner. Boxes crossing the antimeridian
    /// (west longitude greater than east longitude) are accepted.
    pub fn new(south_west: GeoLocation, north_east: GeoLocation) -> Result<Self, DomainError> {
        if south_west.latitude() > north_east.latitude() {
            return Err(DomainError::InvalidBoundingBox(format!(
                "south-west latitude {} is north of north-east latitude {}",
                south_west.latitude(),
                north_east.latitude()
            )));
        }
        Ok(Self {
            south_west,
            north_east,
        })
    }

    /// South-west corner
    #[must_use]
    pub const fn south_west(&self) -> GeoLocation {
        self.south_west
    }

    /// North-east corner
    #[must_use]
    pub const fn north_east(&self) -> GeoLocation {
        self.north_east
    }

    /// Whether the box wraps over the 180° meridian
    #[must_use]
    pub fn crosses_antimeridian(&self) -> bool {
        self.south_west.longitude() > self.north_east.longitude()
    }

    /// Check whether a location falls inside the box (edges inclusive)
    #[must_use]
    pub fn contains(&self, location: &GeoLocation) -> bool {
        let lat = location.latitude();
        let lon = location.longitude();
        let within_lat = (self.south_west.latitude()..=self.north_east.latitude()).contains(&lat);
        let within_lon = if self.crosses_antimeridian() {
            lon >= self.south_west.longitude() || lon <= self.north_east.longitude()
        } else {
            (self.south_west.longitude()..=self.north_east.longitude()).contains(&lon)
        };
        within_lat && within_lon
    }

    /// Geometric center of the box
    #[must_use]
    pub fn center(&self) -> GeoLocation {
        let lat = f64::midpoint(self.south_west.latitude(), self.north_east.latitude());
        let mut lon = f64::midpoint(self.south_west.longitude(), self.north_east.longitude());
        if self.crosses_antimeridian() {
            lon = if lon > 0.0 { lon - 180.0 } else { lon + 180.0 };
        }
        GeoLocation::new_unchecked(lat, lon)
    }

    /// Dehradun region, the default autocomplete bias
    #[must_use]
    pub const fn dehradun() -> Self {
        Self {
            south_west: GeoLocation::new_unchecked(30.2000, 77.8500),
            north_east: GeoLocation::new_unchecked(30.4500, 78.2000),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(lat: f64, lon: f64) -> GeoLocation {
        GeoLocation::new(lat, lon).expect("valid")
    }

    #[test]
    fn rejects_inverted_latitudes() {
        let result = BoundingBox::new(loc(31.0, 77.0), loc(30.0, 78.0));
        assert!(matches!(result, Err(DomainError::InvalidBoundingBox(_))));
    }

    #[test]
    fn dehradun_contains_clock_tower() {
        let bounds = BoundingBox::dehradun();
        assert!(bounds.contains(&loc(30.3244, 78.0418)));
        assert!(!bounds.contains(&loc(28.6139, 77.2090)));
    }

    #[test]
    fn contains_is_edge_inclusive() {
        let bounds = BoundingBox::dehradun();
        assert!(bounds.contains(&bounds.south_west()));
        assert!(bounds.contains(&bounds.north_east()));
    }

    #[test]
    fn antimeridian_box() {
        let bounds = BoundingBox::new(loc(-20.0, 170.0), loc(-10.0, -170.0)).expect("valid");
        assert!(bounds.crosses_antimeridian());
        assert!(bounds.contains(&loc(-15.0, 179.5)));
        assert!(bounds.contains(&loc(-15.0, -175.0)));
        assert!(!bounds.contains(&loc(-15.0, 0.0)));
        assert!((bounds.center().longitude().abs() - 180.0).abs() < 1e-9);
    }

    #[test]
    fn center_of_dehradun_region() {
        let center = BoundingBox::dehradun().center();
        assert!((center.latitude() - 30.325).abs() < 1e-9);
        assert!((center.longitude() - 78.025).abs() < 1e-9);
    }
}
