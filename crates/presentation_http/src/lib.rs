//! RouteView HTTP presentation layer
//!
//! Serves the route page and a session API through which the page drives its
//! `PageContext`: typing, autocomplete, route calculation and state streaming.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;
pub mod tasks;

pub use error::ApiError;
pub use routes::create_router;
pub use state::{AppState, SessionRegistry};
pub use tasks::spawn_session_expiry_task;
