//! # Application State
//!
//! Shared state for the Axum application, passed to all route handlers
//! via the `State` extractor.
//!
//! The topology is loaded once before the server starts and is never
//! mutated afterwards, so it is shared behind a plain `Arc` with no lock.

use std::sync::Arc;

use netpath_routing::PathFinder;
use netpath_topology::TopologyStore;

use crate::config::AppConfig;

/// Application state shared across all request handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Read-only network topology.
    pub topology: Arc<TopologyStore>,
    /// Service configuration, including the gateway.
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Create state from a loaded topology and configuration.
    pub fn new(topology: TopologyStore, config: AppConfig) -> Self {
        Self {
            topology: Arc::new(topology),
            config: Arc::new(config),
        }
    }

    /// Path finder over the shared topology, bound to the configured gateway.
    pub fn path_finder(&self) -> PathFinder<'_> {
        PathFinder::new(&self.topology, self.config.gateway.clone())
    }
}
