//! # Map Data API
//!
//! Serves every known node with its coordinates and every adjacency list.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use crate::query::{map_data, MapData};
use crate::state::AppState;

/// Build the topology router.
pub fn router() -> Router<AppState> {
    Router::new().route("/map-data", get(get_map_data))
}

/// GET /map-data — Nodes (id → `{lat, lng, city}`) and edges
/// (id → `[[neighbor, cost], ...]`).
#[utoipa::path(
    get,
    path = "/map-data",
    responses(
        (status = 200, description = "Full topology", body = MapData),
    ),
    tag = "topology"
)]
pub async fn get_map_data(State(state): State<AppState>) -> Json<MapData> {
    Json(map_data(&state.topology))
}
