//! Forecast port adapter
//!
//! Bridges any `ForecastProvider` (direct Open-Meteo or proxy-contract
//! client) into the application's `ForecastPort`.

use std::sync::Arc;

use application::error::ApplicationError;
use application::ports::{ForecastBundle, ForecastPort};
use async_trait::async_trait;
use domain::value_objects::GeoLocation;
use integration_forecast::{ForecastError, ForecastProvider};

/// Adapter wrapping a forecast provider as a `ForecastPort`
pub struct ForecastAdapter {
    provider: Arc<dyn ForecastProvider>,
}

impl std::fmt::Debug for ForecastAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ForecastAdapter").finish_non_exhaustive()
    }
}

impl ForecastAdapter {
    /// Create a new adapter around a provider
    #[must_use]
    pub fn new(provider: Arc<dyn ForecastProvider>) -> Self {
        Self { provider }
    }
}

fn map_error(e: ForecastError) -> ApplicationError {
    ApplicationError::ExternalService(e.to_string())
}

#[async_trait]
impl ForecastPort for ForecastAdapter {
    async fn forecast(&self, location: &GeoLocation) -> Result<ForecastBundle, ApplicationError> {
        let parsed = self.provider.fetch(location).await.map_err(map_error)?;
        Ok(ForecastBundle {
            location: parsed.location,
            current: parsed.current,
            hourly: parsed.hourly,
            daily: parsed.daily,
            local_hour: parsed.local_hour,
        })
    }

    async fn forecast_raw(
        &self,
        location: &GeoLocation,
    ) -> Result<serde_json::Value, ApplicationError> {
        self.provider.fetch_raw(location).await.map_err(map_error)
    }
}
