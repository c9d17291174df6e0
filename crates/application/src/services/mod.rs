//! Application services - Use case implementations

mod ledger_service;
mod snapshot_service;
mod weather_proxy;

pub use ledger_service::LedgerService;
pub use snapshot_service::{SnapshotService, SnapshotServiceConfig};
pub use weather_proxy::WeatherProxyService;
