//! # Neighbors Subcommand
//!
//! Prints one node's adjacency list and metadata.

use std::io::Write;

use anyhow::Result;
use clap::Args;
use netpath_topology::TopologyStore;

/// Arguments for the `netpath neighbors` subcommand.
#[derive(Args, Debug)]
pub struct NeighborsArgs {
    /// Node whose adjacency to print.
    #[arg(long)]
    pub node: String,
}

/// Execute the neighbors subcommand.
///
/// Returns exit code 0 when the node exists, 2 when it does not.
pub fn run_neighbors(
    args: &NeighborsArgs,
    store: &TopologyStore,
    out: &mut dyn Write,
) -> Result<u8> {
    let node = args.node.trim();
    if !store.has_node(node) {
        writeln!(out, "{node}: not in topology")?;
        return Ok(2);
    }

    match store.metadata(node) {
        Some(meta) => writeln!(
            out,
            "{node} ({}, lat {}, lng {})",
            meta.city, meta.lat, meta.lng
        )?,
        None => writeln!(out, "{node} (no coordinates)")?,
    }
    for neighbor in store.neighbors(node) {
        writeln!(out, "  -> {} cost {}", neighbor.node, neighbor.cost)?;
    }
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    fn run(node: &str) -> (u8, String) {
        let mut out = Vec::new();
        let code = run_neighbors(
            &NeighborsArgs {
                node: node.to_string(),
            },
            &fixtures::store(),
            &mut out,
        )
        .unwrap();
        (code, String::from_utf8(out).unwrap())
    }

    #[test]
    fn lists_both_directions() {
        let (code, text) = run("10.0.0.2");
        assert_eq!(code, 0);
        assert!(text.contains("-> 10.0.0.1 cost 4"));
        assert!(text.contains("-> 1.99.185.142 cost 6"));
        assert!(text.contains("Gateway"));
    }

    #[test]
    fn destination_only_node_has_no_coordinates() {
        let (_, text) = run("10.9.0.2");
        assert!(text.contains("no coordinates"));
    }

    #[test]
    fn unknown_node_exits_2() {
        let (code, text) = run("nowhere");
        assert_eq!(code, 2);
        assert!(text.contains("not in topology"));
    }
}
