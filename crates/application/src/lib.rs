//! Application layer - Use cases and orchestration
//!
//! Contains the page components (map surface, inputs, autocomplete, UI state),
//! the route orchestrator, and the port definitions for the mapping provider.
//! Everything a page needs is owned by an explicit [`PageContext`].

pub mod error;
pub mod ports;
pub mod services;

pub use error::{ApplicationError, RouteError};
pub use ports::*;
pub use services::*;
