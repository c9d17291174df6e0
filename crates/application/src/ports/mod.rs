//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod forecast_port;
mod geocoding_port;
mod storage_port;

#[cfg(test)]
pub use forecast_port::MockForecastPort;
pub use forecast_port::{ForecastBundle, ForecastPort};
#[cfg(test)]
pub use geocoding_port::MockReverseGeocodePort;
pub use geocoding_port::ReverseGeocodePort;
#[cfg(test)]
pub use storage_port::MockStoragePort;
pub use storage_port::{StoragePort, StoragePortExt, keys};
