//! # Gateway Path API
//!
//! Computes the least-cost route from a caller-supplied start node to the
//! configured gateway. The gateway itself is not a request parameter.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};

use crate::error::AppError;
use crate::extractors::extract_json;
use crate::query::{resolve_path, PathOutcome, PathPoint, PathRequest};
use crate::state::AppState;

/// Build the path router.
pub fn router() -> Router<AppState> {
    Router::new().route("/path", post(find_path))
}

/// POST /path — Route from `startIP` to the gateway.
///
/// Empty or unknown start nodes are rejected before any search runs.
/// An unreachable gateway is a 404, distinct from validation failures.
#[utoipa::path(
    post,
    path = "/path",
    request_body = PathRequest,
    responses(
        (status = 200, description = "Route found", body = Vec<PathPoint>),
        (status = 400, description = "Empty or unknown start node", body = crate::error::ErrorBody),
        (status = 404, description = "No path to gateway", body = crate::error::ErrorBody),
        (status = 500, description = "Route contains nodes without coordinates", body = crate::error::ErrorBody),
    ),
    tag = "path"
)]
pub async fn find_path(
    State(state): State<AppState>,
    body: Result<Json<PathRequest>, JsonRejection>,
) -> Result<Json<Vec<PathPoint>>, AppError> {
    let req = extract_json(body)?;
    let outcome = resolve_path(&state.path_finder(), &req.start_ip);

    match &outcome {
        PathOutcome::Found(points) => {
            tracing::debug!(start = %req.start_ip.trim(), hops = points.len().saturating_sub(1), "path resolved");
        }
        PathOutcome::NoPath { start, gateway } => {
            tracing::info!(%start, %gateway, "no path to gateway");
        }
        PathOutcome::InvalidStart(_) | PathOutcome::MissingCoordinates(_) => {}
    }

    outcome.into_result().map(Json)
}
