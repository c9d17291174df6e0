//! Passthrough weather proxy handler
//!
//! The response contract is fixed: missing coordinates are a 400 with
//! exactly `{"error":"Missing coordinates"}`, any upstream failure is a
//! 500 with exactly `{"error":"Weather data unavailable"}`, and success
//! is the upstream payload plus a top-level confidence label. Upstream
//! error detail goes to the logs, never to the caller.

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use domain::value_objects::GeoLocation;
use serde::Deserialize;
use serde_json::json;
use tracing::warn;

use crate::state::AppState;

/// Query parameters for the proxy endpoint
#[derive(Debug, Deserialize)]
pub struct WeatherQuery {
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

/// `GET /api/weather?latitude=&longitude=`
pub async fn weather_proxy(
    State(state): State<AppState>,
    Query(query): Query<WeatherQuery>,
) -> Response {
    let (Some(latitude), Some(longitude)) = (query.latitude, query.longitude) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "Missing coordinates"})),
        )
            .into_response();
    };

    let location = match GeoLocation::new(latitude, longitude) {
        Ok(location) => location,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({"error": e.to_string()})),
            )
                .into_response();
        },
    };

    match state.proxy.proxy(&location).await {
        Ok(payload) => Json(payload).into_response(),
        Err(e) => {
            warn!(error = %e, "Weather proxy upstream failure");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "Weather data unavailable"})),
            )
                .into_response()
        },
    }
}
