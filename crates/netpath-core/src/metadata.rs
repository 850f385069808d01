//! # Node Metadata
//!
//! Display data attached to a node: geo-coordinates and a human label.

use serde::{Deserialize, Serialize};

/// City label used when a feed row carries no (or an empty) city column.
pub const UNKNOWN_CITY: &str = "Unknown";

/// Geo-coordinates and label of a node, as shown on the map.
///
/// Only nodes seen in the source column of an edge record carry metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeMetadata {
    /// Latitude in decimal degrees.
    pub lat: f64,
    /// Longitude in decimal degrees.
    pub lng: f64,
    /// Human-readable location label.
    pub city: String,
}

impl NodeMetadata {
    /// Create metadata, substituting [`UNKNOWN_CITY`] for a blank city.
    pub fn new(lat: f64, lng: f64, city: impl Into<String>) -> Self {
        let city = city.into();
        let city = if city.trim().is_empty() {
            UNKNOWN_CITY.to_string()
        } else {
            city.trim().to_string()
        };
        Self { lat, lng, city }
    }
}
