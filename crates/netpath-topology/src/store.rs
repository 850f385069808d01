//! # Topology Store
//!
//! Adjacency map and node metadata for the network topology.
//!
//! ## Invariants
//!
//! - Every accepted edge `(a, b, c)` appears as `(b, c)` in `neighbors(a)`
//!   and as `(a, c)` in `neighbors(b)`. A self-loop therefore appears twice
//!   in its node's list.
//! - Parallel edges are all retained; the adjacency list is a multiset.
//! - Every edge cost is finite and non-negative (enforced by
//!   [`EdgeRecord::from_fields`]).
//! - Metadata is recorded only for source endpoints, and the first record
//!   naming a node as source wins.
//!
//! Both maps preserve insertion order, so iteration (and therefore the
//! map-data payload) follows the order of the edge feed.

use indexmap::map::Entry;
use indexmap::IndexMap;
use netpath_core::{EdgeRecord, NodeId, NodeMetadata, RecordError};
use serde::{Deserialize, Serialize};

/// One entry of a node's adjacency list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Neighbor {
    /// The node at the other end of the edge.
    pub node: NodeId,
    /// Cost of traversing the edge.
    pub cost: f64,
}

/// Counters recorded while a store is built.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestSummary {
    /// Records accepted as edges.
    pub accepted: usize,
    /// Records rejected and skipped.
    pub skipped: usize,
}

/// Immutable, read-only network topology.
#[derive(Debug, Clone, Default)]
pub struct TopologyStore {
    adjacency: IndexMap<NodeId, Vec<Neighbor>>,
    metadata: IndexMap<NodeId, NodeMetadata>,
    summary: IngestSummary,
}

impl TopologyStore {
    /// Build a store from raw records, skipping any record that fails to parse.
    ///
    /// Each record is a sequence of string fields in edge-feed column order.
    /// Header rows must be removed by the caller; a header that does reach
    /// this function is rejected like any other malformed record.
    pub fn build<I, R, S>(records: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        let mut builder = TopologyBuilder::new();
        for (index, record) in records.into_iter().enumerate() {
            // Positions are 1-based to match how operators count rows.
            let _ = builder.push_fields(index as u64 + 1, record.as_ref());
        }
        builder.finish()
    }

    /// Adjacency of `node`, in insertion order. Empty for unknown nodes.
    pub fn neighbors(&self, node: &str) -> &[Neighbor] {
        self.adjacency.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether `node` appears as an adjacency key.
    pub fn has_node(&self, node: &str) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Display metadata of `node`, if it was ever seen as a source endpoint.
    pub fn metadata(&self, node: &str) -> Option<&NodeMetadata> {
        self.metadata.get(node)
    }

    /// All nodes carrying metadata, in first-seen order.
    pub fn nodes(&self) -> impl Iterator<Item = (&NodeId, &NodeMetadata)> {
        self.metadata.iter()
    }

    /// The full adjacency map, in first-seen order.
    pub fn adjacency(&self) -> impl Iterator<Item = (&NodeId, &[Neighbor])> {
        self.adjacency.iter().map(|(k, v)| (k, v.as_slice()))
    }

    /// Number of distinct nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of accepted edges (not adjacency entries).
    pub fn edge_count(&self) -> usize {
        self.summary.accepted
    }

    /// Number of records skipped during ingestion.
    pub fn skipped_records(&self) -> usize {
        self.summary.skipped
    }

    /// Ingestion counters.
    pub fn summary(&self) -> IngestSummary {
        self.summary
    }

    /// Whether the store holds no edges.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}

/// Incremental constructor for a [`TopologyStore`].
///
/// The builder is the only way to add edges; [`TopologyBuilder::finish`]
/// hands back a store with no mutating API.
#[derive(Debug, Default)]
pub struct TopologyBuilder {
    store: TopologyStore,
}

impl TopologyBuilder {
    /// Start an empty topology.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and insert one raw record.
    ///
    /// A rejected record is logged at `warn`, counted as skipped, and its
    /// error returned. The builder is left unchanged apart from the counter.
    pub fn push_fields<S: AsRef<str>>(
        &mut self,
        position: u64,
        fields: &[S],
    ) -> Result<(), RecordError> {
        match EdgeRecord::from_fields(fields) {
            Ok(record) => {
                self.insert_edge(&record);
                Ok(())
            }
            Err(err) => {
                self.record_skip(position, &err);
                Err(err)
            }
        }
    }

    /// Insert an accepted edge symmetrically.
    pub fn insert_edge(&mut self, record: &EdgeRecord) {
        self.store
            .adjacency
            .entry(record.source.clone())
            .or_default()
            .push(Neighbor {
                node: record.destination.clone(),
                cost: record.cost,
            });
        self.store
            .adjacency
            .entry(record.destination.clone())
            .or_default()
            .push(Neighbor {
                node: record.source.clone(),
                cost: record.cost,
            });

        if let Entry::Vacant(slot) = self.store.metadata.entry(record.source.clone()) {
            slot.insert(record.source_metadata());
        }

        self.store.summary.accepted += 1;
    }

    /// Count a record rejected before it reached the parser (e.g. a row the
    /// CSV layer could not decode).
    pub fn record_skip(&mut self, position: u64, reason: &dyn std::fmt::Display) {
        tracing::warn!(row = position, error = %reason, "skipping edge record");
        self.store.summary.skipped += 1;
    }

    /// Finish ingestion and return the read-only store.
    pub fn finish(self) -> TopologyStore {
        let store = self.store;
        tracing::info!(
            nodes = store.node_count(),
            edges = store.summary.accepted,
            skipped = store.summary.skipped,
            "topology loaded"
        );
        store
    }
}
