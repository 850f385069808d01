//! # Error Hierarchy
//!
//! Structured error types for netpath, built with `thiserror`.
//!
//! The taxonomy follows how each failure is handled:
//!
//! - [`RecordError`] — a malformed edge record. Recovered locally by the
//!   loader: the record is skipped and ingestion continues.
//! - [`ValidationError`] — a query named an empty or unknown start node.
//!   Surfaced to the caller as a rejected request.
//!
//! "No path" is not an error at all; the path finder returns `None`.

use thiserror::Error;

use crate::identity::NodeId;
use crate::record::Column;

/// Top-level error type for netpath.
#[derive(Error, Debug)]
pub enum NetpathError {
    /// An edge record was rejected during ingestion.
    #[error("record error: {0}")]
    Record(#[from] RecordError),

    /// A query failed input validation.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Reasons an edge record is rejected.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecordError {
    /// The record has fewer than the five mandatory columns.
    #[error("expected at least 5 fields, found {found}")]
    MissingFields {
        /// Number of fields actually present.
        found: usize,
    },

    /// A numeric column could not be parsed as a real number.
    #[error("column {column} is not a number: {value:?}")]
    InvalidNumber {
        /// The offending column.
        column: Column,
        /// The raw (trimmed) value.
        value: String,
    },

    /// A numeric column parsed to NaN or infinity.
    #[error("column {column} is not finite")]
    NonFinite {
        /// The offending column.
        column: Column,
    },

    /// The edge cost is negative.
    #[error("edge cost must be non-negative, got {cost}")]
    NegativeCost {
        /// The parsed cost.
        cost: f64,
    },
}

/// Validation failures for a path query's start node.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The start node is empty after trimming.
    #[error("start node id must not be empty")]
    EmptyNodeId,

    /// The start node does not appear in the topology.
    #[error("unknown node: {0}")]
    UnknownNode(NodeId),
}
