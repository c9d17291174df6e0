//! Open-Meteo forecast client
//!
//! HTTP client for the Open-Meteo forecast API. The upstream call is
//! bounded by a hard timeout (8 seconds by default) and is attempted
//! exactly once; no retry.

use async_trait::async_trait;
use domain::value_objects::GeoLocation;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::{OpenMeteoPayload, ParsedForecast};
use crate::provider::ForecastProvider;

/// Forecast client errors
#[derive(Debug, Error)]
pub enum ForecastError {
    /// Connection to the forecast service failed (includes timeouts)
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the forecast service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse the forecast response
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Invalid coordinates provided
    #[error("Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180")]
    InvalidCoordinates,

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),
}

/// Open-Meteo client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenMeteoConfig {
    /// Open-Meteo API base URL (default: <https://api.open-meteo.com/v1>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Hard timeout for the upstream call in seconds (default: 8)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Number of forecast days (1-16, default: 7)
    #[serde(default = "default_forecast_days")]
    pub forecast_days: u8,
}

fn default_base_url() -> String {
    "https://api.open-meteo.com/v1".to_string()
}

const fn default_timeout() -> u64 {
    8
}

const fn default_forecast_days() -> u8 {
    7
}

impl Default for OpenMeteoConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            forecast_days: default_forecast_days(),
        }
    }
}

/// Open-Meteo HTTP client
#[derive(Debug)]
pub struct OpenMeteoClient {
    client: Client,
    config: OpenMeteoConfig,
}

impl OpenMeteoClient {
    /// Create a new Open-Meteo client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: OpenMeteoConfig) -> Result<Self, ForecastError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ForecastError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Create a new client with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_defaults() -> Result<Self, ForecastError> {
        Self::new(OpenMeteoConfig::default())
    }

    /// Build the API URL for a forecast request
    ///
    /// Times are requested in the location's own timezone so the local
    /// hour can be read straight off the current block.
    fn build_url(&self, location: &GeoLocation) -> String {
        let days = self.config.forecast_days.clamp(1, 16);
        format!(
            "{}/forecast?latitude={}&longitude={}&current={}&hourly={}&daily={}&timezone=auto&forecast_days={}",
            self.config.base_url,
            location.latitude(),
            location.longitude(),
            "temperature_2m,apparent_temperature,wind_speed_10m,is_day",
            "temperature_2m,precipitation_probability",
            "temperature_2m_max,temperature_2m_min,precipitation_probability_max,uv_index_max",
            days
        )
    }

    async fn request(&self, location: &GeoLocation) -> Result<reqwest::Response, ForecastError> {
        if GeoLocation::new(location.latitude(), location.longitude()).is_err() {
            return Err(ForecastError::InvalidCoordinates);
        }

        let url = self.build_url(location);
        debug!(url = %url, "Fetching forecast");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ForecastError::ConnectionFailed(e.to_string()))?;

        let status = response.status();
        if status.is_server_error() {
            return Err(ForecastError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            return Err(ForecastError::RequestFailed(format!("HTTP {status}")));
        }
        Ok(response)
    }
}

#[async_trait]
impl ForecastProvider for OpenMeteoClient {
    #[instrument(skip(self), fields(lat = %location.latitude(), lon = %location.longitude()))]
    async fn fetch(&self, location: &GeoLocation) -> Result<ParsedForecast, ForecastError> {
        let payload: OpenMeteoPayload = self
            .request(location)
            .await?
            .json()
            .await
            .map_err(|e| ForecastError::ParseError(e.to_string()))?;

        payload.into_parsed()
    }

    #[instrument(skip(self), fields(lat = %location.latitude(), lon = %location.longitude()))]
    async fn fetch_raw(
        &self,
        location: &GeoLocation,
    ) -> Result<serde_json::Value, ForecastError> {
        self.request(location)
            .await?
            .json()
            .await
            .map_err(|e| ForecastError::ParseError(e.to_string()))
    }
}
