//! Domain entities - Objects with identity and lifecycle

mod map_view;
mod marker;
mod route;

pub use map_view::{MAX_CUSTOM_MARKERS, MapView, RenderedRoute};
pub use marker::{Marker, MarkerId};
pub use route::{Distance, RouteLeg, RoutePath, RouteResult, TravelTime};
