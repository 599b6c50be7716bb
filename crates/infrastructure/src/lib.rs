//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer.
//! Contains the Google Maps adapters, configuration loading and tracing setup.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::*;
pub use config::{AppConfig, MapsAppConfig, PageAppConfig, ServerConfig};
pub use telemetry::{LogFormat, init_tracing};
