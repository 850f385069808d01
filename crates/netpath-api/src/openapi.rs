//! # OpenAPI Specification Assembly
//!
//! Assembles the utoipa-documented routes into a single OpenAPI document,
//! served at `/openapi.json`.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::state::AppState;

/// Assembled OpenAPI spec for the API surface.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "netpath API",
        version = "0.1.0",
        description = "Network topology map data and least-cost paths to the gateway.",
        license(name = "MIT")
    ),
    paths(
        crate::routes::topology::get_map_data,
        crate::routes::path::find_path,
    ),
    components(schemas(
        crate::query::MapData,
        crate::query::PathRequest,
        crate::query::PathPoint,
        crate::error::ErrorBody,
        crate::error::ErrorDetail,
    )),
    tags(
        (name = "topology", description = "Graph nodes and edges"),
        (name = "path", description = "Gateway path queries"),
    )
)]
pub struct ApiDoc;

/// Router serving the OpenAPI document.
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi_json))
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
