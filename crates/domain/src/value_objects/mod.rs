//! Value Objects - Immutable, identity-less domain primitives

mod bounding_box;
mod geo_location;
mod location_input;

pub use bounding_box::BoundingBox;
pub use geo_location::GeoLocation;
pub use location_input::LocationInput;
