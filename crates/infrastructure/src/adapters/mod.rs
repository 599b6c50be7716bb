//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod directions_adapter;
mod places_adapter;

pub use directions_adapter::DirectionsAdapter;
pub use places_adapter::PlacesAdapter;
