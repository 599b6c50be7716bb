//! Google Maps and page configuration.

use application::PageConfig;
use domain::{BoundingBox, DomainError, GeoLocation};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

// ==============================
// Maps Configuration
// ==============================

/// Google Maps web service configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct MapsAppConfig {
    /// Base URL of the Google Maps web services
    #[serde(default = "default_maps_base_url")]
    pub base_url: String,

    /// API key (sensitive - uses `SecretString`)
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// Request timeout in seconds (default: 10)
    #[serde(default = "default_maps_timeout")]
    pub timeout_secs: u64,

    /// Language of provider texts
    #[serde(default = "default_language")]
    pub language: String,

    /// Region bias (ccTLD code)
    #[serde(default)]
    pub region: Option<String>,
}

impl std::fmt::Debug for MapsAppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapsAppConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("timeout_secs", &self.timeout_secs)
            .field("language", &self.language)
            .field("region", &self.region)
            .finish()
    }
}

fn default_maps_base_url() -> String {
    "https://maps.googleapis.com".to_string()
}

const fn default_maps_timeout() -> u64 {
    10
}

fn default_language() -> String {
    "en".to_string()
}

impl Default for MapsAppConfig {
    fn default() -> Self {
        Self {
            base_url: default_maps_base_url(),
            api_key: None,
            timeout_secs: default_maps_timeout(),
            language: default_language(),
            region: None,
        }
    }
}

impl MapsAppConfig {
    /// Convert to `integration_maps`'s `MapsConfig`
    #[must_use]
    pub fn to_maps_config(&self) -> integration_maps::MapsConfig {
        integration_maps::MapsConfig {
            base_url: self.base_url.clone(),
            api_key: self.api_key.as_ref().map(|k| k.expose_secret().to_string()),
            timeout_secs: self.timeout_secs,
            language: self.language.clone(),
            region: self.region.clone(),
        }
    }
}

// ==============================
// Page Configuration
// ==============================

/// Geographic location configuration (latitude/longitude pair)
///
/// Configured as inline table: `{ latitude = 30.3256, longitude = 78.0419 }`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocationConfig {
    /// Latitude (-90.0 to 90.0)
    pub latitude: f64,
    /// Longitude (-180.0 to 180.0)
    pub longitude: f64,
}

impl GeoLocationConfig {
    /// Convert to domain `GeoLocation` value object
    ///
    /// # Errors
    ///
    /// Returns an error if the coordinates are out of range.
    pub fn to_geo_location(self) -> Result<GeoLocation, DomainError> {
        GeoLocation::new(self.latitude, self.longitude)
    }
}

/// Rectangle given by its south-west and north-east corners
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundsConfig {
    pub south_west: GeoLocationConfig,
    pub north_east: GeoLocationConfig,
}

/// Initial map view and autocomplete area
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageAppConfig {
    /// Element identifier of the map container
    #[serde(default = "default_map_container")]
    pub map_container: String,

    #[serde(default = "default_center")]
    pub center: GeoLocationConfig,

    #[serde(default = "default_zoom")]
    pub zoom: u8,

    /// Area place suggestions are biased towards
    #[serde(default = "default_autocomplete_bounds")]
    pub autocomplete_bounds: BoundsConfig,

    /// Restrict suggestions to `autocomplete_bounds` instead of preferring them
    #[serde(default)]
    pub strict_bounds: bool,
}

fn default_map_container() -> String {
    "map".to_string()
}

const fn default_center() -> GeoLocationConfig {
    GeoLocationConfig {
        latitude: 30.3256,
        longitude: 78.0419,
    }
}

const fn default_zoom() -> u8 {
    13
}

const fn default_autocomplete_bounds() -> BoundsConfig {
    BoundsConfig {
        south_west: GeoLocationConfig {
            latitude: 30.2,
            longitude: 77.85,
        },
        north_east: GeoLocationConfig {
            latitude: 30.45,
            longitude: 78.2,
        },
    }
}

impl Default for PageAppConfig {
    fn default() -> Self {
        Self {
            map_container: default_map_container(),
            center: default_center(),
            zoom: default_zoom(),
            autocomplete_bounds: default_autocomplete_bounds(),
            strict_bounds: false,
        }
    }
}

impl PageAppConfig {
    /// Convert to the application's `PageConfig`
    ///
    /// # Errors
    ///
    /// Returns an error if the center or a bounds corner is out of range, or
    /// the bounds are inverted.
    pub fn to_page_config(&self) -> Result<PageConfig, DomainError> {
        let bounds = BoundingBox::new(
            self.autocomplete_bounds.south_west.to_geo_location()?,
            self.autocomplete_bounds.north_east.to_geo_location()?,
        )?;

        Ok(PageConfig {
            map_container: self.map_container.clone(),
            center: self.center.to_geo_location()?,
            zoom: self.zoom,
            autocomplete_bounds: bounds,
            strict_bounds: self.strict_bounds,
        })
    }
}
