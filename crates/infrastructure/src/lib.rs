//! Infrastructure layer
//!
//! Configuration loading, key-value persistence, the static asset cache
//! and the adapters that plug integration clients into application ports.

pub mod adapters;
pub mod assets;
pub mod config;
pub mod persistence;

use std::sync::Arc;

use application::error::ApplicationError;
use application::ports::StoragePort;
use integration_forecast::{
    ForecastProvider, ForecastProxyClient, ForecastSourceKind, OpenMeteoClient,
};
use tracing::info;

use crate::config::{ForecastSettings, StorageBackend, StorageConfig};

/// Construct the storage backend selected in config
///
/// # Errors
///
/// Returns an error if the file backend's data directory cannot be created.
pub fn build_storage(config: &StorageConfig) -> Result<Arc<dyn StoragePort>, ApplicationError> {
    info!(backend = %config.backend, "Building storage backend");
    match config.backend {
        StorageBackend::File => Ok(Arc::new(persistence::JsonFileStore::new(
            config.data_dir.clone(),
        )?)),
        StorageBackend::Memory => Ok(Arc::new(persistence::MemoryStore::new())),
    }
}

/// Construct the forecast provider selected in config
///
/// # Errors
///
/// Returns an error if the underlying HTTP client cannot be initialized.
pub fn build_forecast_provider(
    settings: &ForecastSettings,
) -> Result<Arc<dyn ForecastProvider>, ApplicationError> {
    info!(source = %settings.source, "Building forecast provider");
    let provider: Arc<dyn ForecastProvider> = match settings.source {
        ForecastSourceKind::OpenMeteo => Arc::new(
            OpenMeteoClient::new(settings.open_meteo.clone())
                .map_err(|e| ApplicationError::Configuration(e.to_string()))?,
        ),
        ForecastSourceKind::Proxy => Arc::new(
            ForecastProxyClient::new(settings.proxy.clone())
                .map_err(|e| ApplicationError::Configuration(e.to_string()))?,
        ),
    };
    Ok(provider)
}
