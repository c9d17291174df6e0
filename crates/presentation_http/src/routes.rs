//! Route definitions

use axum::{
    Router,
    routing::{get, post},
};

use crate::{handlers, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health endpoint
        .route("/health", get(handlers::health::health_check))
        // Weather proxy
        .route("/api/weather", get(handlers::weather::weather_proxy))
        // Snapshot API
        .route("/api/snapshot", get(handlers::snapshot::get_snapshot))
        .route(
            "/api/snapshot/cached",
            get(handlers::snapshot::get_cached_snapshot),
        )
        // Tax ledger API
        .route(
            "/api/tax/profile",
            get(handlers::tax::get_profile).patch(handlers::tax::update_profile),
        )
        .route(
            "/api/tax/categories",
            get(handlers::tax::list_categories).put(handlers::tax::replace_categories),
        )
        .route(
            "/api/tax/expenses",
            get(handlers::tax::list_expenses).post(handlers::tax::add_expense),
        )
        .route(
            "/api/tax/expenses/{id}",
            axum::routing::patch(handlers::tax::update_expense)
                .delete(handlers::tax::delete_expense),
        )
        .route("/api/tax/reset", post(handlers::tax::reset))
        // Static assets
        .route("/assets/{*path}", get(handlers::assets::serve_asset))
        // Attach state
        .with_state(state)
}
