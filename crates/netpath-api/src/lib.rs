//! # netpath-api — Axum Query Service
//!
//! HTTP surface over a loaded [`TopologyStore`] and the gateway
//! [`PathFinder`].
//!
//! ## API Surface
//!
//! | Route                  | Module                   | Purpose                       |
//! |------------------------|--------------------------|-------------------------------|
//! | `GET /`                | this module              | Banner                        |
//! | `GET /map-data`        | [`routes::topology`]     | All nodes and edges           |
//! | `POST /path`           | [`routes::path`]         | Route from `startIP` to gateway |
//! | `GET /openapi.json`    | [`openapi`]              | OpenAPI document              |
//! | `GET /health/*`        | this module              | Liveness / readiness probes   |
//!
//! Every request runs under `tower_http`'s `TraceLayer`.
//!
//! [`TopologyStore`]: netpath_topology::TopologyStore
//! [`PathFinder`]: netpath_routing::PathFinder

pub mod config;
pub mod error;
pub mod extractors;
pub mod openapi;
pub mod query;
pub mod routes;
pub mod state;

use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Banner returned by `GET /`.
pub const BANNER: &str = "Network Graph Backend is Running";

/// Assemble the full application router with all routes and middleware.
pub fn app(state: AppState) -> Router {
    let api = Router::new()
        .route("/", get(index))
        .merge(routes::topology::router())
        .merge(routes::path::router())
        .merge(openapi::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let health = Router::new()
        .route("/health/liveness", get(liveness))
        .route("/health/readiness", get(readiness));

    Router::new().merge(health).merge(api)
}

async fn index() -> &'static str {
    BANNER
}

/// Liveness probe: always returns 200 if the process is running.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness probe: the topology is loaded before the listener binds, so
/// a serving process is always ready.
async fn readiness() -> &'static str {
    "ready"
}
