//! # Summary Subcommand
//!
//! Counts what the loader accepted and rejected.

use std::io::Write;

use anyhow::Result;
use clap::Args;
use netpath_topology::TopologyStore;
use serde::Serialize;

/// Arguments for the `netpath summary` subcommand.
#[derive(Args, Debug)]
pub struct SummaryArgs {
    /// Print the summary as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Counts reported by `netpath summary`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopologySummary {
    pub nodes: usize,
    pub edges: usize,
    pub skipped_rows: usize,
    /// Nodes that never appear in a source column and so have no coordinates.
    pub nodes_without_metadata: usize,
}

impl TopologySummary {
    /// Compute the summary for a store.
    pub fn of(store: &TopologyStore) -> Self {
        let nodes_without_metadata = store
            .adjacency()
            .filter(|(id, _)| store.metadata(id.as_str()).is_none())
            .count();
        Self {
            nodes: store.node_count(),
            edges: store.edge_count(),
            skipped_rows: store.skipped_records(),
            nodes_without_metadata,
        }
    }
}

/// Execute the summary subcommand. Always returns exit code 0.
pub fn run_summary(args: &SummaryArgs, store: &TopologyStore, out: &mut dyn Write) -> Result<u8> {
    let summary = TopologySummary::of(store);
    if args.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&summary)?)?;
    } else {
        writeln!(out, "nodes:                  {}", summary.nodes)?;
        writeln!(out, "edges:                  {}", summary.edges)?;
        writeln!(out, "skipped rows:           {}", summary.skipped_rows)?;
        writeln!(out, "nodes without metadata: {}", summary.nodes_without_metadata)?;
    }
    Ok(0)
}
