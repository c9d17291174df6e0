//! Forecast source configuration.

use domain::value_objects::GeoLocation;
use integration_forecast::{ForecastSourceKind, OpenMeteoConfig, ProxyConfig};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// A latitude/longitude pair as it appears in config files
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GeoLocationConfig {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
}

impl GeoLocationConfig {
    /// Convert to a validated domain location, `None` when out of range
    #[must_use]
    pub fn to_geo_location(&self) -> Option<GeoLocation> {
        GeoLocation::new(self.latitude, self.longitude).ok()
    }
}

impl Default for GeoLocationConfig {
    // Sydney CBD
    fn default() -> Self {
        Self {
            latitude: -33.8688,
            longitude: 151.2093,
        }
    }
}

/// Forecast source configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ForecastSettings {
    /// Which source to construct at startup
    #[serde(default)]
    pub source: ForecastSourceKind,

    /// Direct Open-Meteo client settings
    #[serde(default)]
    pub open_meteo: OpenMeteoConfig,

    /// Proxy-contract client settings, for split deployments
    #[serde(default)]
    pub proxy: ProxyConfig,

    /// Location used when a request carries no coordinates
    #[serde(default)]
    pub fallback_location: GeoLocationConfig,
}

impl ForecastSettings {
    /// The validated fallback location, degrading to Sydney when the
    /// configured coordinates are out of range.
    #[must_use]
    pub fn fallback_geo_location(&self) -> GeoLocation {
        self.fallback_location.to_geo_location().unwrap_or_else(|| {
            warn!(
                latitude = self.fallback_location.latitude,
                longitude = self.fallback_location.longitude,
                "Configured fallback location is out of range, using Sydney"
            );
            GeoLocation::sydney()
        })
    }
}
