//! # Route Subcommand
//!
//! Computes the least-cost route from a start node to the gateway.
//!
//! Exit codes: 0 when a route is found, 2 when the start node is unknown
//! or the gateway is unreachable.

use std::io::Write;

use anyhow::Result;
use clap::Args;
use netpath_core::NodeId;
use netpath_routing::PathFinder;
use netpath_topology::TopologyStore;

use crate::DEFAULT_GATEWAY;

/// Arguments for the `netpath route` subcommand.
#[derive(Args, Debug)]
pub struct RouteArgs {
    /// Start node id.
    #[arg(long)]
    pub start: String,

    /// Destination gateway node id.
    #[arg(long, default_value = DEFAULT_GATEWAY)]
    pub gateway: String,

    /// Print the route as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Execute the route subcommand.
pub fn run_route(args: &RouteArgs, store: &TopologyStore, out: &mut dyn Write) -> Result<u8> {
    let start = NodeId::new(&args.start);
    if !store.has_node(start.as_str()) && start != NodeId::new(&args.gateway) {
        writeln!(out, "{start}: not in topology")?;
        return Ok(2);
    }

    let finder = PathFinder::new(store, NodeId::new(&args.gateway));
    let Some(route) = finder.route_from(start.as_str()) else {
        tracing::info!(%start, gateway = %finder.gateway(), "gateway unreachable");
        writeln!(out, "no path from {start} to {}", finder.gateway())?;
        return Ok(2);
    };

    if args.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&route)?)?;
    } else {
        let hops: Vec<&str> = route.node_ids().collect();
        writeln!(out, "{}", hops.join(" -> "))?;
        writeln!(out, "cost: {}  hops: {}", route.cost, route.hop_count())?;
    }
    Ok(0)
}
