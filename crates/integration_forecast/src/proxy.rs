//! Proxy-contract forecast client
//!
//! For split deployments where a thin front-end instance fetches its
//! forecast from another instance's `/api/weather` passthrough endpoint
//! instead of Open-Meteo directly. The proxy already enforces the hard
//! 8-second upstream bound, so this client's own timeout is deliberately
//! looser; its job is only to rule out an infinite hang.

use async_trait::async_trait;
use domain::value_objects::GeoLocation;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::client::ForecastError;
use crate::models::{OpenMeteoPayload, ParsedForecast};
use crate::provider::ForecastProvider;

/// Proxy client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProxyConfig {
    /// Base URL of the instance hosting the proxy endpoint
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds (default: 30, looser than the proxy's
    /// own 8-second upstream bound so its error mapping surfaces first)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://127.0.0.1:3000".to_string()
}

const fn default_timeout() -> u64 {
    30
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

/// Client for the `/api/weather` proxy contract
#[derive(Debug)]
pub struct ForecastProxyClient {
    client: Client,
    config: ProxyConfig,
}

impl ForecastProxyClient {
    /// Create a new proxy client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: ProxyConfig) -> Result<Self, ForecastError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ForecastError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn build_url(&self, location: &GeoLocation) -> String {
        format!(
            "{}/api/weather?latitude={}&longitude={}",
            self.config.base_url,
            location.latitude(),
            location.longitude()
        )
    }

    async fn request(&self, location: &GeoLocation) -> Result<reqwest::Response, ForecastError> {
        let url = self.build_url(location);
        debug!(url = %url, "Fetching forecast via proxy");

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
impl ForecastProvider for ForecastProxyClient {
    #[instrument(skip(self), fields(lat = %location.latitude(), lon = %location.longitude()))]
    async fn fetch(&self, location: &GeoLocation) -> Result<ParsedForecast, ForecastError> {
        // The proxy passes Open-Meteo's payload through (plus a
        // confidence label, which the model ignores)
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = ProxyConfig::default();
        assert_eq!(config.base_url, "http://127.0.0.1:3000");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn url_targets_the_proxy_endpoint() {
        let client = ForecastProxyClient::new(ProxyConfig::default()).unwrap();
        let url = client.build_url(&GeoLocation::melbourne());

        assert!(url.starts_with("http://127.0.0.1:3000/api/weather?"));
        assert!(url.contains("latitude=-37.8136"));
        assert!(url.contains("longitude=144.9631"));
    }
}
