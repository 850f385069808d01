//! # Dijkstra Search
//!
//! Uniform-cost search over the topology store's adjacency.
//!
//! ## Frontier
//!
//! A binary min-heap of `(cumulative cost, push sequence, step)` entries.
//! `step` indexes a per-search arena of `(node, parent step)` links, so the
//! path-so-far of every entry is shared with its ancestors and each push is
//! O(1). The push sequence breaks cost ties first-pushed-first, which makes
//! results deterministic for a given store. Which of several equal-cost
//! paths is returned is otherwise unspecified.
//!
//! ## Stale Entries
//!
//! There is no decrease-key. A node may sit in the frontier several times;
//! the first pop finalizes it and later pops are discarded. This is sound
//! because every edge cost is non-negative. Each adjacency entry is pushed
//! at most once per finalization of its owner, giving O((V + E) log E).

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet};

use netpath_core::NodeId;
use netpath_topology::TopologyStore;
use ordered_float::OrderedFloat;

use crate::route::Route;

/// Compute the least-cost path from `start` to `destination`.
///
/// Returns `Some` with the single-node route `[start]` when the two are
/// equal, even if `start` is not in the store. Returns `None` when `start`
/// is unknown or `destination` is unreachable from it.
pub fn shortest_path(start: &str, destination: &str, store: &TopologyStore) -> Option<Route> {
    let start = start.trim();
    let destination = destination.trim();

    if start == destination {
        return Some(Route {
            nodes: vec![NodeId::new(start)],
            cost: 0.0,
        });
    }
    if !store.has_node(start) {
        tracing::debug!(start, "start node not in topology");
        return None;
    }

    let mut arena: Vec<(&str, Option<usize>)> = vec![(start, None)];
    let mut frontier = BinaryHeap::new();
    let mut finalized: HashSet<&str> = HashSet::new();
    let mut seq: u64 = 0;

    frontier.push(Reverse((OrderedFloat(0.0_f64), seq, 0_usize)));

    while let Some(Reverse((OrderedFloat(cost), _, step))) = frontier.pop() {
        let node = arena[step].0;
        if !finalized.insert(node) {
            continue;
        }

        if node == destination {
            tracing::debug!(
                start,
                destination,
                cost,
                finalized = finalized.len(),
                pushed = seq,
                "route found"
            );
            return Some(Route {
                nodes: unwind(&arena, step),
                cost,
            });
        }

        for neighbor in store.neighbors(node) {
            let next = neighbor.node.as_str();
            if finalized.contains(next) {
                continue;
            }
            seq += 1;
            arena.push((next, Some(step)));
            frontier.push(Reverse((
                OrderedFloat(cost + neighbor.cost),
                seq,
                arena.len() - 1,
            )));
        }
    }

    tracing::debug!(
        start,
        destination,
        finalized = finalized.len(),
        "destination unreachable"
    );
    None
}

/// Follow parent links from `step` back to the start and return the path
/// in traversal order.
fn unwind(arena: &[(&str, Option<usize>)], step: usize) -> Vec<NodeId> {
    let mut nodes = Vec::new();
    let mut cursor = Some(step);
    while let Some(i) = cursor {
        let (node, parent) = arena[i];
        nodes.push(NodeId::new(node));
        cursor = parent;
    }
    nodes.reverse();
    nodes
}

/// Path finder bound to a store and a fixed gateway destination.
#[derive(Debug, Clone)]
pub struct PathFinder<'a> {
    store: &'a TopologyStore,
    gateway: NodeId,
}

impl<'a> PathFinder<'a> {
    /// Create a path finder routing every query to `gateway`.
    pub fn new(store: &'a TopologyStore, gateway: impl Into<NodeId>) -> Self {
        Self {
            store,
            gateway: gateway.into(),
        }
    }

    /// The fixed destination of every query.
    pub fn gateway(&self) -> &NodeId {
        &self.gateway
    }

    /// The store searched by this finder.
    pub fn store(&self) -> &'a TopologyStore {
        self.store
    }

    /// Least-cost route from `start` to the gateway.
    pub fn route_from(&self, start: &str) -> Option<Route> {
        shortest_path(start, self.gateway.as_str(), self.store)
    }
}
