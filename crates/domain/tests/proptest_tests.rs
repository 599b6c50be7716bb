//! Property-based tests for domain value objects
//!
//! These tests use proptest to verify invariants across many random inputs.

use domain::value_objects::{BoundingBox, GeoLocation, LocationInput};
use domain::{MAX_CUSTOM_MARKERS, MapView};
use proptest::prelude::*;

// ============================================================================
// GeoLocation Property Tests
// ============================================================================

mod geo_location_tests {
    use super::*;

    proptest! {
        #[test]
        fn valid_coordinates_create_location(
            lat in -90.0f64..=90.0f64,
            lon in -180.0f64..=180.0f64
        ) {
            let result = GeoLocation::new(lat, lon);
            prop_assert!(result.is_ok());
        }

        #[test]
        fn invalid_latitude_rejected(
            lat in prop_oneof![
                (-1000.0f64..-90.1f64),
                (90.1f64..1000.0f64)
            ],
            lon in -180.0f64..=180.0f64
        ) {
            prop_assert!(GeoLocation::new(lat, lon).is_err());
        }
    }
}

// ============================================================================
// BoundingBox Property Tests
// ============================================================================

mod bounding_box_tests {
    use super::*;

    proptest! {
        #[test]
        fn box_contains_its_center(
            south in -80.0f64..0.0f64,
            height in 0.0f64..80.0f64,
            west in -170.0f64..0.0f64,
            width in 0.0f64..170.0f64
        ) {
            let sw = GeoLocation::new(south, west).unwrap();
            let ne = GeoLocation::new(south + height, west + width).unwrap();
            let bounds = BoundingBox::new(sw, ne).unwrap();
            prop_assert!(bounds.contains(&bounds.center()));
        }
    }
}

// ============================================================================
// MapView Property Tests
// ============================================================================

mod map_view_tests {
    use super::*;

    proptest! {
        #[test]
        fn never_more_than_two_markers(attempts in 0usize..10) {
            let mut map = MapView::new("map", GeoLocation::dehradun(), 13);
            for i in 0..attempts {
                let _ = map.add_marker(GeoLocation::dehradun(), i.to_string(), "");
            }
            prop_assert!(map.markers.len() <= MAX_CUSTOM_MARKERS);
            prop_assert_eq!(map.markers.len(), attempts.min(MAX_CUSTOM_MARKERS));
        }

        #[test]
        fn blank_means_whitespace_only(text in "[ \t\n]*") {
            prop_assert!(LocationInput::new(text).is_blank());
        }

        #[test]
        fn non_whitespace_is_not_blank(prefix in "[ ]*", word in "[A-Za-z]{1,12}") {
            let text = format!("{prefix}{word}");
            prop_assert!(!LocationInput::new(text).is_blank());
        }
    }
}
