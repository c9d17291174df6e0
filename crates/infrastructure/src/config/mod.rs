//! Application configuration
//!
//! Split into focused sub-modules by domain:
//! - `server`: HTTP server settings
//! - `forecast`: Forecast source selection and client settings
//! - `storage`: Record storage backend selection
//! - `assets`: Static asset root and precache list

mod assets;
mod forecast;
mod server;
mod storage;

use integration_nominatim::NominatimConfig;
use serde::{Deserialize, Serialize};

pub use assets::AssetSettings;
pub use forecast::{ForecastSettings, GeoLocationConfig};
pub use server::ServerConfig;
pub use storage::{StorageBackend, StorageConfig};

/// Shared default for boolean `true` fields across config structs
pub(crate) const fn default_true() -> bool {
    true
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Forecast source configuration
    #[serde(default)]
    pub forecast: ForecastSettings,

    /// Reverse geocoding configuration (optional; place names are
    /// skipped entirely when absent)
    #[serde(default)]
    pub geocoding: Option<NominatimConfig>,

    /// Record storage configuration
    #[serde(default)]
    pub storage: StorageConfig,

    /// Static asset configuration
    #[serde(default)]
    pub assets: AssetSettings,
}

impl AppConfig {
    /// Load configuration from environment and optional file
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // Start with defaults
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            // Load from file if exists
            .add_source(config::File::with_name("config").required(false))
            // Override with environment variables (e.g., HEARTH_SERVER_PORT)
            .add_source(
                config::Environment::with_prefix("HEARTH")
                    .separator("_")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }
}
