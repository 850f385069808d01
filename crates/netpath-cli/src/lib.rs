//! # netpath-cli — Operator CLI
//!
//! Loads an edge feed with the same loader the service uses and answers
//! questions about it without starting a server.
//!
//! ## Subcommands
//!
//! - `netpath summary` — node, edge, and skipped-row counts.
//! - `netpath neighbors --node <id>` — adjacency of one node.
//! - `netpath route --start <id>` — least-cost route to the gateway.
//!
//! ```bash
//! netpath --data Updated_DSADataset.csv route --start 10.0.0.1
//! netpath --data edges.csv route --start 10.0.0.1 --gateway 10.0.0.254 --json
//! ```

pub mod neighbors;
pub mod route;
pub mod summary;

use std::path::Path;

use anyhow::{Context, Result};
use netpath_topology::TopologyStore;

/// Default edge-feed path, matching the service default.
pub const DEFAULT_DATA_PATH: &str = "Updated_DSADataset.csv";

/// Default gateway, matching the service default.
pub const DEFAULT_GATEWAY: &str = "1.99.185.142";

/// Load the topology from `path`.
pub fn load_topology(path: &Path) -> Result<TopologyStore> {
    netpath_topology::load_csv(path)
        .with_context(|| format!("failed to load edge feed {}", path.display()))
}
