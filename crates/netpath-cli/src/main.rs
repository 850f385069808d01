//! # netpath CLI entry point
//!
//! Parses command-line arguments, loads the edge feed, and dispatches to
//! subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use netpath_cli::neighbors::{run_neighbors, NeighborsArgs};
use netpath_cli::route::{run_route, RouteArgs};
use netpath_cli::summary::{run_summary, SummaryArgs};
use netpath_cli::{load_topology, DEFAULT_DATA_PATH};

/// netpath: inspect a network edge feed and compute gateway routes.
#[derive(Parser, Debug)]
#[command(name = "netpath", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to the CSV edge feed.
    #[arg(long, global = true, default_value = DEFAULT_DATA_PATH)]
    data: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Node, edge, and skipped-row counts for the feed.
    Summary(SummaryArgs),

    /// Adjacency list of a single node.
    Neighbors(NeighborsArgs),

    /// Least-cost route from a start node to the gateway.
    Route(RouteArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let store = match load_topology(&cli.data) {
        Ok(store) => store,
        Err(e) => {
            tracing::error!("{e:#}");
            return ExitCode::from(1);
        }
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let result = match &cli.command {
        Commands::Summary(args) => run_summary(args, &store, &mut out),
        Commands::Neighbors(args) => run_neighbors(args, &store, &mut out),
        Commands::Route(args) => run_route(args, &store, &mut out),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
