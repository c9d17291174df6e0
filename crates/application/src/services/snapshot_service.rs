//! Weather snapshot service
//!
//! Derives renderable snapshots and keeps the last good one in storage.
//! The refresh path degrades fresh -> cached -> hardcoded, so a caller
//! always gets something to render.

use std::{fmt, sync::Arc};

use chrono::Utc;
use domain::entities::WeatherSnapshot;
use domain::value_objects::{Confidence, GeoLocation};
use tracing::{debug, info, instrument, warn};

use crate::{
    error::ApplicationError,
    loaded::Loaded,
    ports::{ForecastPort, ReverseGeocodePort, StoragePort, StoragePortExt, keys},
};

/// Configuration for the snapshot service
#[derive(Debug, Clone)]
pub struct SnapshotServiceConfig {
    /// Location used when the caller does not provide one
    pub fallback_location: GeoLocation,
}

impl Default for SnapshotServiceConfig {
    fn default() -> Self {
        Self {
            fallback_location: GeoLocation::sydney(),
        }
    }
}

/// Service that derives and caches weather snapshots
pub struct SnapshotService {
    forecast: Arc<dyn ForecastPort>,
    geocoder: Option<Arc<dyn ReverseGeocodePort>>,
    storage: Arc<dyn StoragePort>,
    config: SnapshotServiceConfig,
}

impl fmt::Debug for SnapshotService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SnapshotService")
            .field("has_geocoder", &self.geocoder.is_some())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl SnapshotService {
    /// Create a new snapshot service
    #[must_use]
    pub fn new(
        forecast: Arc<dyn ForecastPort>,
        storage: Arc<dyn StoragePort>,
        config: SnapshotServiceConfig,
    ) -> Self {
        Self {
            forecast,
            geocoder: None,
            storage,
            config,
        }
    }

    /// Attach a reverse geocoder for place names
    #[must_use]
    pub fn with_geocoder(mut self, geocoder: Arc<dyn ReverseGeocodePort>) -> Self {
        self.geocoder = Some(geocoder);
        self
    }

    /// The last persisted snapshot, if any.
    ///
    /// A corrupt stored snapshot is logged and reported as absent.
    #[instrument(skip(self))]
    pub async fn cached(&self) -> Result<Option<WeatherSnapshot>, ApplicationError> {
        let loaded = self
            .storage
            .get_json::<WeatherSnapshot>(keys::WEATHER_SNAPSHOT)
            .await?;
        if let Loaded::Corrupt { error } = &loaded {
            warn!(%error, "Cached snapshot is corrupt, treating as absent");
        }
        Ok(loaded.into_option())
    }

    /// Fetch a fresh snapshot for a location, or the configured fallback
    /// location when none is given.
    ///
    /// Never fails: a fetch failure degrades to the cached snapshot, and
    /// an empty cache degrades to the hardcoded fallback.
    #[instrument(skip(self))]
    pub async fn refresh(&self, location: Option<GeoLocation>) -> WeatherSnapshot {
        let location = location.unwrap_or(self.config.fallback_location);
        match self.fetch(location).await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!(error = %e, "Forecast fetch failed, degrading to cached snapshot");
                match self.cached().await {
                    Ok(Some(cached)) => cached,
                    Ok(None) => {
                        info!("No cached snapshot, serving hardcoded fallback");
                        WeatherSnapshot::fallback()
                    },
                    Err(storage_err) => {
                        warn!(error = %storage_err, "Cache read failed, serving hardcoded fallback");
                        WeatherSnapshot::fallback()
                    },
                }
            },
        }
    }

    async fn fetch(&self, location: GeoLocation) -> Result<WeatherSnapshot, ApplicationError> {
        let bundle = self.forecast.forecast(&location).await?;
        let (condition, time_of_day) =
            WeatherSnapshot::classify(&bundle.current, bundle.local_hour);

        // Best-effort; a snapshot without a place name is still a snapshot
        let place_name = match &self.geocoder {
            Some(geocoder) => geocoder.place_name(&location).await,
            None => None,
        };

        let snapshot = WeatherSnapshot {
            location: bundle.location,
            place_name,
            current: bundle.current,
            hourly: bundle.hourly,
            daily: bundle.daily,
            condition,
            time_of_day,
            confidence: Confidence::High,
            fetched_at: Utc::now(),
        };

        if let Err(e) = self
            .storage
            .set_json(keys::WEATHER_SNAPSHOT, &snapshot)
            .await
        {
            warn!(error = %e, "Failed to persist snapshot");
        }

        debug!(condition = %snapshot.condition, time_of_day = %snapshot.time_of_day, "Snapshot derived");
        Ok(snapshot)
    }
}
