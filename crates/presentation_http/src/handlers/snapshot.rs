//! Snapshot handlers
//!
//! `GET /api/snapshot` never fails for weather reasons: the service
//! degrades fresh -> cached -> hardcoded, and the handler decorates
//! whatever it gets with the matching scene copy.

use axum::{
    Json,
    extract::{Query, State},
};
use domain::display::{SceneCopy, SceneTable};
use domain::entities::WeatherSnapshot;
use domain::value_objects::GeoLocation;
use serde::{Deserialize, Serialize};

use crate::{error::ApiError, state::AppState};

/// Query parameters for the snapshot endpoint
#[derive(Debug, Deserialize)]
pub struct SnapshotQuery {
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

/// A snapshot with its rendering copy attached
#[derive(Debug, Serialize)]
pub struct SnapshotResponse {
    #[serde(flatten)]
    pub snapshot: WeatherSnapshot,
    pub scene: SceneCopy,
}

impl SnapshotResponse {
    fn render(snapshot: WeatherSnapshot, scenes: &SceneTable) -> Self {
        let scene = scenes
            .scene(snapshot.condition, snapshot.time_of_day)
            .clone();
        Self { snapshot, scene }
    }
}

fn parse_location(query: &SnapshotQuery) -> Result<Option<GeoLocation>, ApiError> {
    match (query.latitude, query.longitude) {
        (Some(latitude), Some(longitude)) => GeoLocation::new(latitude, longitude)
            .map(Some)
            .map_err(|e| ApiError::BadRequest(e.to_string())),
        (None, None) => Ok(None),
        _ => Err(ApiError::BadRequest(
            "Both latitude and longitude are required".to_string(),
        )),
    }
}

/// `GET /api/snapshot[?latitude=&longitude=]`
pub async fn get_snapshot(
    State(state): State<AppState>,
    Query(query): Query<SnapshotQuery>,
) -> Result<Json<SnapshotResponse>, ApiError> {
    let location = parse_location(&query)?;
    let snapshot = state.snapshots.refresh(location).await;
    Ok(Json(SnapshotResponse::render(snapshot, &state.scenes)))
}

/// `GET /api/snapshot/cached`
pub async fn get_cached_snapshot(
    State(state): State<AppState>,
) -> Result<Json<SnapshotResponse>, ApiError> {
    match state.snapshots.cached().await? {
        Some(snapshot) => Ok(Json(SnapshotResponse::render(snapshot, &state.scenes))),
        None => Err(ApiError::NotFound("No cached snapshot".to_string())),
    }
}
