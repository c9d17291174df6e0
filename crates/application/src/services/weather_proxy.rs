//! Weather proxy service
//!
//! Passes the forecast provider's JSON through untouched apart from an
//! injected confidence label, so a thin front-end can consume the
//! provider's format without talking to it directly.

use std::{fmt, sync::Arc};

use domain::value_objects::{Confidence, GeoLocation};
use serde_json::Value;
use tracing::instrument;

use crate::{error::ApplicationError, ports::ForecastPort};

/// Service backing the passthrough forecast endpoint
pub struct WeatherProxyService {
    forecast: Arc<dyn ForecastPort>,
}

impl fmt::Debug for WeatherProxyService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeatherProxyService").finish_non_exhaustive()
    }
}

impl WeatherProxyService {
    /// Create a new proxy service
    #[must_use]
    pub fn new(forecast: Arc<dyn ForecastPort>) -> Self {
        Self { forecast }
    }

    /// The provider's payload for a location, with `confidence_level`
    /// injected at the top level. Everything else is passed through
    /// unmodified.
    #[instrument(skip(self))]
    pub async fn proxy(&self, location: &GeoLocation) -> Result<Value, ApplicationError> {
        let mut payload = self.forecast.forecast_raw(location).await?;
        match payload.as_object_mut() {
            Some(object) => {
                object.insert(
                    "confidence_level".to_string(),
                    Value::String(Confidence::High.as_str().to_string()),
                );
                Ok(payload)
            },
            None => Err(ApplicationError::ExternalService(
                "forecast payload was not a JSON object".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::MockForecastPort;
    use serde_json::json;

    #[tokio::test]
    async fn proxy_injects_confidence_level() {
        let mut forecast = MockForecastPort::new();
        forecast.expect_forecast_raw().returning(|_| {
            Ok(json!({
                "latitude": -33.87,
                "longitude": 151.21,
                "current": { "temperature_2m": 22.5 }
            }))
        });

        let service = WeatherProxyService::new(Arc::new(forecast));
        let payload = service.proxy(&GeoLocation::sydney()).await.unwrap();

        assert_eq!(payload["confidence_level"], "High");
        // Upstream fields survive untouched
        assert_eq!(payload["current"]["temperature_2m"], 22.5);
        assert_eq!(payload["latitude"], -33.87);
    }

    #[tokio::test]
    async fn proxy_rejects_non_object_payload() {
        let mut forecast = MockForecastPort::new();
        forecast
            .expect_forecast_raw()
            .returning(|_| Ok(json!([1, 2, 3])));

        let service = WeatherProxyService::new(Arc::new(forecast));
        assert!(service.proxy(&GeoLocation::sydney()).await.is_err());
    }

    #[tokio::test]
    async fn proxy_propagates_upstream_failure() {
        let mut forecast = MockForecastPort::new();
        forecast
            .expect_forecast_raw()
            .returning(|_| Err(ApplicationError::ExternalService("timeout".to_string())));

        let service = WeatherProxyService::new(Arc::new(forecast));
        let result = service.proxy(&GeoLocation::sydney()).await;
        assert!(matches!(
            result,
            Err(ApplicationError::ExternalService(_))
        ));
    }
}
