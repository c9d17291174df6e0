//! Static asset handler

use axum::{
    body::Body,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::state::AppState;

/// `GET /assets/{*path}`
pub async fn serve_asset(State(state): State<AppState>, Path(path): Path<String>) -> Response {
    match state.assets.get(&path).await {
        Some(asset) => (
            [(header::CONTENT_TYPE, asset.content_type)],
            Body::from(asset.bytes.as_ref().clone()),
        )
            .into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
