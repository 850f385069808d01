//! # netpath-topology — Topology Store
//!
//! An in-memory undirected weighted graph keyed by [`NodeId`], plus a side
//! table of display metadata per node.
//!
//! - **Store** (`store.rs`): [`TopologyStore`] and its [`TopologyBuilder`].
//!   Edges are inserted symmetrically and kept as a multiset; node metadata
//!   is first-write-wins.
//!
//! - **Loader** (`loader.rs`): reads a comma-delimited edge feed with the
//!   `csv` crate, skipping the header row and any malformed data rows.
//!
//! ## Lifecycle
//!
//! A store is built once and never mutated afterwards. It exposes no
//! mutating methods, so a `&TopologyStore` (or an `Arc<TopologyStore>`) can
//! be shared by any number of concurrent readers without locking.
//!
//! [`NodeId`]: netpath_core::NodeId

pub mod loader;
pub mod store;

pub use loader::{from_reader, load_csv, LoadError};
pub use store::{IngestSummary, Neighbor, TopologyBuilder, TopologyStore};
