//! # API Route Modules
//!
//! - `topology` — `GET /map-data`, the full graph for the map view.
//! - `path` — `POST /path`, least-cost route from a start node to the gateway.

pub mod path;
pub mod topology;
