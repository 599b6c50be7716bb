//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server settings
//! - `maps`: Google Maps credentials and the page's initial view

mod maps;
mod server;

use serde::{Deserialize, Serialize};

pub use maps::{BoundsConfig, GeoLocationConfig, MapsAppConfig, PageAppConfig};
pub use server::ServerConfig;

/// Shared default for boolean `true` fields across config structs
pub(crate) const fn default_true() -> bool {
    true
}

/// Environment variable prefix, e.g. `ROUTEVIEW_MAPS__API_KEY`
const ENV_PREFIX: &str = "ROUTEVIEW";

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Google Maps configuration
    #[serde(default)]
    pub maps: MapsAppConfig,

    /// Initial page state
    #[serde(default)]
    pub page: PageAppConfig,
}

impl AppConfig {
    /// Load configuration from defaults, `config.toml` (optional) and the
    /// environment
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_with(config::File::with_name("config").required(false))
    }

    fn load_with<S>(file: S) -> Result<Self, config::ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let builder = config::Config::builder()
            // Start with defaults
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            // Load from file if exists
            .add_source(file)
            // Override with environment variables (e.g., ROUTEVIEW_SERVER__PORT)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }
}
