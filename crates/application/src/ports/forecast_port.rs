//! Forecast provider port
//!
//! Defines the interface for fetching forecast data, both in the parsed
//! form the snapshot service consumes and as the provider's raw JSON for
//! the passthrough proxy endpoint.

use async_trait::async_trait;
use domain::entities::{CurrentConditions, DailyEntry, HourlyEntry};
use domain::value_objects::GeoLocation;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Parsed forecast data for one location, not yet classified
#[derive(Debug, Clone)]
pub struct ForecastBundle {
    /// The location the forecast is for
    pub location: GeoLocation,
    /// Current conditions
    pub current: CurrentConditions,
    /// Hour-by-hour forecast
    pub hourly: Vec<HourlyEntry>,
    /// Day-by-day forecast
    pub daily: Vec<DailyEntry>,
    /// Hour of day at the location, for time-of-day bucketing
    pub local_hour: u32,
}

/// Port for forecast retrieval
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ForecastPort: Send + Sync {
    /// Fetch and parse a forecast for a location
    async fn forecast(&self, location: &GeoLocation) -> Result<ForecastBundle, ApplicationError>;

    /// Fetch the provider's raw JSON payload for a location, untouched
    async fn forecast_raw(
        &self,
        location: &GeoLocation,
    ) -> Result<serde_json::Value, ApplicationError>;
}
