//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod place_suggestion_port;
mod routing_port;

#[cfg(test)]
pub use place_suggestion_port::MockPlaceSuggestionPort;
pub use place_suggestion_port::{PlaceDetails, PlaceSuggestion, PlaceSuggestionPort, SuggestionQuery};
#[cfg(test)]
pub use routing_port::MockRoutingPort;
pub use routing_port::{DirectionsReply, DirectionsStatus, RouteRequest, RoutingPort};
