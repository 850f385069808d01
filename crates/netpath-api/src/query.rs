//! # Query Operations
//!
//! The two operations behind the HTTP surface, kept free of Axum so they
//! can be exercised directly:
//!
//! - [`map_data`] — serialize the whole topology for the map view.
//! - [`resolve_path`] — validate a start node, search to the gateway, and
//!   attach display coordinates to every node on the route.
//!
//! [`resolve_path`] returns a [`PathOutcome`] with one variant per result
//! class, so the handler maps each case to a response exhaustively.

use indexmap::IndexMap;
use netpath_core::{NodeId, NodeMetadata, ValidationError};
use netpath_routing::PathFinder;
use netpath_topology::TopologyStore;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::AppError;

/// Request body of `POST /path`.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct PathRequest {
    /// Start node id. A missing field is treated as empty.
    #[serde(rename = "startIP", default)]
    pub start_ip: String,
}

/// One node of a resolved path with its display data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PathPoint {
    pub ip: String,
    pub lat: f64,
    pub lng: f64,
    pub city: String,
}

/// Full topology for the map view.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MapData {
    /// Node id → `{lat, lng, city}`, for nodes seen as a source endpoint.
    #[schema(value_type = Object)]
    pub nodes: IndexMap<NodeId, NodeMetadata>,
    /// Node id → list of `[neighbor, cost]` pairs.
    #[schema(value_type = Object)]
    pub edges: IndexMap<NodeId, Vec<(NodeId, f64)>>,
}

/// Result of a path query.
#[derive(Debug, Clone, PartialEq)]
pub enum PathOutcome {
    /// The start node is empty or unknown. The search was not run.
    InvalidStart(ValidationError),
    /// The gateway is unreachable from the start node.
    NoPath { start: NodeId, gateway: NodeId },
    /// A route exists but these nodes on it have no coordinates.
    MissingCoordinates(Vec<NodeId>),
    /// The route, start to gateway, with display data.
    Found(Vec<PathPoint>),
}

impl PathOutcome {
    /// Map the outcome to the handler's response type.
    pub fn into_result(self) -> Result<Vec<PathPoint>, AppError> {
        match self {
            Self::Found(points) => Ok(points),
            Self::InvalidStart(err) => Err(err.into()),
            Self::NoPath { start, gateway } => Err(AppError::NotFound(format!(
                "no path from {start} to gateway {gateway}"
            ))),
            Self::MissingCoordinates(ids) => Err(AppError::MissingCoordinates(ids)),
        }
    }
}

/// Snapshot the store's adjacency and metadata.
pub fn map_data(store: &TopologyStore) -> MapData {
    let nodes = store
        .nodes()
        .map(|(id, meta)| (id.clone(), meta.clone()))
        .collect();
    let edges = store
        .adjacency()
        .map(|(id, neighbors)| {
            let pairs = neighbors
                .iter()
                .map(|n| (n.node.clone(), n.cost))
                .collect();
            (id.clone(), pairs)
        })
        .collect();
    MapData { nodes, edges }
}

/// Resolve a path query from `raw_start` to the finder's gateway.
pub fn resolve_path(finder: &PathFinder<'_>, raw_start: &str) -> PathOutcome {
    let store = finder.store();
    let start = NodeId::new(raw_start);

    if start.is_empty() {
        return PathOutcome::InvalidStart(ValidationError::EmptyNodeId);
    }
    if !store.has_node(start.as_str()) {
        return PathOutcome::InvalidStart(ValidationError::UnknownNode(start));
    }

    let Some(route) = finder.route_from(start.as_str()) else {
        return PathOutcome::NoPath {
            start,
            gateway: finder.gateway().clone(),
        };
    };

    let missing: Vec<NodeId> = route
        .nodes
        .iter()
        .filter(|id| store.metadata(id.as_str()).is_none())
        .cloned()
        .collect();
    if !missing.is_empty() {
        return PathOutcome::MissingCoordinates(missing);
    }

    let points = route
        .nodes
        .iter()
        .filter_map(|id| {
            store.metadata(id.as_str()).map(|meta| PathPoint {
                ip: id.to_string(),
                lat: meta.lat,
                lng: meta.lng,
                city: meta.city.clone(),
            })
        })
        .collect();
    PathOutcome::Found(points)
}
