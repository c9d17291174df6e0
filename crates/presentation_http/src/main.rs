//! Hearth HTTP Server
//!
//! Main entry point for the HTTP API server.

use std::{sync::Arc, time::Duration};

use application::{
    LedgerService, SnapshotService, SnapshotServiceConfig, WeatherProxyService,
    ports::ReverseGeocodePort,
};
use domain::display::SceneTable;
use infrastructure::{
    adapters::{ForecastAdapter, GeocodingAdapter},
    assets::AssetCache,
    build_forecast_provider, build_storage,
    config::{AppConfig, ServerConfig},
};
use integration_nominatim::NominatimClient;
use presentation_http::{routes, state::AppState};
use tokio::{net::TcpListener, signal};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let (config, load_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    init_tracing(&config.server.log_format);

    if let Some(e) = load_error {
        warn!(error = %e, "Failed to load config, using defaults");
    }

    info!("Hearth v{} starting...", env!("CARGO_PKG_VERSION"));
    info!(
        host = %config.server.host,
        port = %config.server.port,
        forecast_source = %config.forecast.source,
        storage = %config.storage.backend,
        "Configuration loaded"
    );

    // Build the storage backend and forecast source
    let storage = build_storage(&config.storage)
        .map_err(|e| anyhow::anyhow!("Failed to initialize storage: {e}"))?;
    let provider = build_forecast_provider(&config.forecast)
        .map_err(|e| anyhow::anyhow!("Failed to initialize forecast provider: {e}"))?;
    let forecast = Arc::new(ForecastAdapter::new(provider));

    // Reverse geocoding is optional; a failed client build only costs
    // place names, not startup
    let geocoder: Option<Arc<dyn ReverseGeocodePort>> = match &config.geocoding {
        Some(geocoding) => match NominatimClient::new(geocoding) {
            Ok(client) => Some(Arc::new(GeocodingAdapter::new(client))),
            Err(e) => {
                warn!(error = %e, "Geocoding client failed to initialize, place names disabled");
                None
            },
        },
        None => None,
    };

    // Initialize services
    let proxy = WeatherProxyService::new(forecast.clone());

    let snapshot_config = SnapshotServiceConfig {
        fallback_location: config.forecast.fallback_geo_location(),
    };
    let mut snapshots = SnapshotService::new(forecast, Arc::clone(&storage), snapshot_config);
    if let Some(geocoder) = geocoder {
        snapshots = snapshots.with_geocoder(geocoder);
    }

    let ledger = LedgerService::new(storage);
    ledger
        .initialize_if_needed()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to seed tax store: {e}"))?;

    let assets = AssetCache::preload(&config.assets).await;

    let state = AppState {
        proxy: Arc::new(proxy),
        snapshots: Arc::new(snapshots),
        ledger: Arc::new(ledger),
        assets: Arc::new(assets),
        scenes: Arc::new(SceneTable::builtin()),
    };

    // Build router
    let app = routes::create_router(state);

    // Add middleware (order matters: first added = outermost)
    let app = app.layer(TraceLayer::new_for_http());
    let app = match cors_layer(&config.server) {
        Some(cors) => app.layer(cors),
        None => app,
    };

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;

    info!("Server listening on http://{addr}");

    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_secs.unwrap_or(30));

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown_timeout))
        .await?;

    info!("Server shutdown complete");

    Ok(())
}

/// CORS layer per server config: `None` when CORS is disabled, wide open
/// when no origins are listed, locked to the listed origins otherwise
fn cors_layer(server: &ServerConfig) -> Option<CorsLayer> {
    use axum::http::{HeaderValue, Method};

    if !server.cors_enabled {
        return None;
    }

    if server.allowed_origins.is_empty() {
        return Some(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );
    }

    let origins: Vec<HeaderValue> = server
        .allowed_origins
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();
    Some(
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::PATCH,
            ])
            .allow_headers(Any),
    )
}

fn init_tracing(log_format: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "hearth_server=debug,tower_http=debug,info".into());

    if log_format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

/// Wait for shutdown signals (SIGINT, SIGTERM) and handle graceful shutdown
async fn shutdown_signal(timeout: Duration) {
    let ctrl_c = async {
        // Log error but continue waiting - this is a best-effort signal handler
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }

    info!("Waiting up to {timeout:?} for connections to close...");
    // The actual connection draining is handled by axum's graceful_shutdown
}
