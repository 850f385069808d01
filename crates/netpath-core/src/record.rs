//! # Edge Records
//!
//! Parsing of one raw feed row into a typed [`EdgeRecord`].
//!
//! ## Column Layout
//!
//! | Index | Column            | Required |
//! |-------|-------------------|----------|
//! | 0     | source id         | yes      |
//! | 1     | destination id    | yes      |
//! | 2     | source longitude  | yes      |
//! | 3     | source latitude   | yes      |
//! | 4     | cost              | yes      |
//! | 5     | city              | no       |
//!
//! Only the source endpoint carries coordinates. Columns past the sixth are
//! ignored.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::RecordError;
use crate::identity::NodeId;
use crate::metadata::{NodeMetadata, UNKNOWN_CITY};

/// Minimum number of fields for a row to be considered an edge record.
pub const MIN_FIELDS: usize = 5;

/// Numeric columns of an edge record, used in error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Column {
    /// Source longitude (index 2).
    Longitude,
    /// Source latitude (index 3).
    Latitude,
    /// Edge cost (index 4).
    Cost,
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Longitude => "longitude",
            Self::Latitude => "latitude",
            Self::Cost => "cost",
        })
    }
}

/// An accepted edge record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    /// First-mentioned endpoint; the one the coordinates belong to.
    pub source: NodeId,
    /// Second endpoint.
    pub destination: NodeId,
    /// Longitude of `source`.
    pub source_lng: f64,
    /// Latitude of `source`.
    pub source_lat: f64,
    /// Non-negative, finite traversal cost.
    pub cost: f64,
    /// City label of `source`; [`UNKNOWN_CITY`] when absent.
    pub city: String,
}

impl EdgeRecord {
    /// Parse a raw row of string fields.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError`] when the row has fewer than [`MIN_FIELDS`]
    /// fields, a numeric column fails to parse or is not finite, or the
    /// cost is negative.
    pub fn from_fields<S: AsRef<str>>(fields: &[S]) -> Result<Self, RecordError> {
        if fields.len() < MIN_FIELDS {
            return Err(RecordError::MissingFields {
                found: fields.len(),
            });
        }

        let source_lng = parse_number(fields[2].as_ref(), Column::Longitude)?;
        let source_lat = parse_number(fields[3].as_ref(), Column::Latitude)?;
        let cost = parse_number(fields[4].as_ref(), Column::Cost)?;
        if cost < 0.0 {
            return Err(RecordError::NegativeCost { cost });
        }

        let city = fields
            .get(5)
            .map(|c| c.as_ref().trim())
            .filter(|c| !c.is_empty())
            .unwrap_or(UNKNOWN_CITY)
            .to_string();

        Ok(Self {
            source: NodeId::new(fields[0].as_ref()),
            destination: NodeId::new(fields[1].as_ref()),
            source_lng,
            source_lat,
            cost,
            city,
        })
    }

    /// Metadata this record contributes for its source node.
    pub fn source_metadata(&self) -> NodeMetadata {
        NodeMetadata::new(self.source_lat, self.source_lng, self.city.clone())
    }
}

fn parse_number(raw: &str, column: Column) -> Result<f64, RecordError> {
    let value = raw.trim();
    let parsed: f64 = value.parse().map_err(|_| RecordError::InvalidNumber {
        column,
        value: value.to_string(),
    })?;
    if !parsed.is_finite() {
        return Err(RecordError::NonFinite { column });
    }
    Ok(parsed)
}
