//! # netpath-api — Binary Entry Point
//!
//! Loads the edge feed, then starts the Axum HTTP server.
//! Configuration comes from the environment (see [`netpath_api::config`]).

use netpath_api::config::AppConfig;
use netpath_api::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured tracing.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env().map_err(|e| {
        tracing::error!("Invalid configuration: {e}");
        e
    })?;
    tracing::info!(?config, "configuration loaded");

    // The feed is read exactly once; the store is immutable from here on.
    let topology = netpath_topology::load_csv(&config.data_path).map_err(|e| {
        tracing::error!("Edge feed could not be loaded: {e}");
        e
    })?;

    if !topology.has_node(config.gateway.as_str()) {
        tracing::warn!(
            gateway = %config.gateway,
            "gateway is not in the topology; path queries will return 404"
        );
    }

    let addr = config.socket_addr();
    let app = netpath_api::app(AppState::new(topology, config));

    tracing::info!("netpath API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
