//! Application state shared across handlers

use std::sync::Arc;

use application::{LedgerService, SnapshotService, WeatherProxyService};
use domain::display::SceneTable;
use infrastructure::assets::AssetCache;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Passthrough forecast proxy
    pub proxy: Arc<WeatherProxyService>,
    /// Snapshot derivation and caching
    pub snapshots: Arc<SnapshotService>,
    /// Tax profile, category and expense records
    pub ledger: Arc<LedgerService>,
    /// Cache-first static assets
    pub assets: Arc<AssetCache>,
    /// Scene copy lookup for rendered snapshots
    pub scenes: Arc<SceneTable>,
}
