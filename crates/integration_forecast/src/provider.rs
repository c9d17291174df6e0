//! Forecast provider abstraction
//!
//! Selects between the direct Open-Meteo client and the proxy-contract
//! client used by split deployments.

use async_trait::async_trait;
use domain::value_objects::GeoLocation;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::client::ForecastError;
use crate::models::ParsedForecast;

/// A source of forecast data
#[async_trait]
pub trait ForecastProvider: Send + Sync {
    /// Fetch and parse a forecast for a location
    async fn fetch(&self, location: &GeoLocation) -> Result<ParsedForecast, ForecastError>;

    /// Fetch the provider's raw JSON payload for a location, untouched
    async fn fetch_raw(&self, location: &GeoLocation)
    -> Result<serde_json::Value, ForecastError>;
}

/// Which forecast source to construct at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ForecastSourceKind {
    /// Talk to Open-Meteo directly (default)
    #[default]
    OpenMeteo,
    /// Talk to another instance's passthrough proxy endpoint
    Proxy,
}

impl fmt::Display for ForecastSourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OpenMeteo => write!(f, "openmeteo"),
            Self::Proxy => write!(f, "proxy"),
        }
    }
}
