//! # Route
//!
//! Result of a successful path search.

use netpath_core::NodeId;
use serde::{Deserialize, Serialize};

/// A least-cost path, start to destination inclusive, in traversal order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    /// Nodes along the path. Never empty.
    pub nodes: Vec<NodeId>,
    /// Sum of the traversed edge costs.
    pub cost: f64,
}

impl Route {
    /// Number of nodes on the route.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the route holds no nodes. Routes produced by the search
    /// always hold at least the start node.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of edges traversed.
    pub fn hop_count(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    /// First node of the route.
    pub fn start(&self) -> Option<&NodeId> {
        self.nodes.first()
    }

    /// Last node of the route.
    pub fn end(&self) -> Option<&NodeId> {
        self.nodes.last()
    }

    /// Iterate node ids as string slices.
    pub fn node_ids(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(NodeId::as_str)
    }
}
