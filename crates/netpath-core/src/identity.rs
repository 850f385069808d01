//! # Node Identity
//!
//! [`NodeId`] is the opaque, address-like label of a node in the topology.
//! Identity is exact string equality after trimming surrounding whitespace;
//! no further normalisation (case folding, address parsing) is applied.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a node in the network topology.
///
/// Constructed through [`NodeId::new`], which trims the input. The wrapped
/// string may be empty; rejecting empty identifiers is a query-layer concern
/// (see [`crate::ValidationError::EmptyNodeId`]).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct NodeId(String);

impl NodeId {
    /// Create a node identifier, trimming surrounding whitespace.
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(raw.as_ref().trim().to_string())
    }

    /// Access the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the identifier is empty after trimming.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for NodeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for NodeId {
    fn from(raw: String) -> Self {
        // Avoid reallocating when the input is already trimmed.
        if raw.trim().len() == raw.len() {
            Self(raw)
        } else {
            Self::new(raw)
        }
    }
}

impl From<&str> for NodeId {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<NodeId> for String {
    fn from(id: NodeId) -> Self {
        id.0
    }
}

impl PartialEq<str> for NodeId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for NodeId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn new_trims_whitespace() {
        assert_eq!(NodeId::new("  10.0.0.1\t").as_str(), "10.0.0.1");
    }

    #[test]
    fn trimmed_variants_are_equal() {
        assert_eq!(NodeId::new(" 10.0.0.1"), NodeId::new("10.0.0.1 "));
        assert_ne!(NodeId::new("10.0.0.1"), NodeId::new("10.0.0.10"));
    }

    #[test]
    fn from_string_trims() {
        let id: NodeId = String::from(" gw ").into();
        assert_eq!(id, "gw");
    }

    #[test]
    fn empty_after_trim() {
        assert!(NodeId::new("   ").is_empty());
        assert!(!NodeId::new("a").is_empty());
    }

    #[test]
    fn borrow_allows_str_lookup() {
        let mut map = HashMap::new();
        map.insert(NodeId::new("10.0.0.1"), 7);
        assert_eq!(map.get("10.0.0.1"), Some(&7));
    }

    #[test]
    fn serializes_as_plain_string() {
        let json = serde_json::to_string(&NodeId::new("10.0.0.1")).unwrap();
        assert_eq!(json, "\"10.0.0.1\"");
        let back: NodeId = serde_json::from_str("\" 10.0.0.1 \"").unwrap();
        assert_eq!(back, "10.0.0.1");
    }

    #[test]
    fn display_matches_inner() {
        assert_eq!(NodeId::new("1.99.185.142").to_string(), "1.99.185.142");
    }
}
