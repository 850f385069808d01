#![deny(missing_docs)]

//! # netpath-core — Foundational Types for netpath
//!
//! This crate defines the types every other crate in the workspace depends
//! on. It has no internal crate dependencies; only `serde` and `thiserror`
//! from the external ecosystem.
//!
//! ## Design Principles
//!
//! 1. **Newtype for node identity.** A [`NodeId`] is always trimmed, so two
//!    feed rows naming `" 10.0.0.1"` and `"10.0.0.1"` address the same node.
//!
//! 2. **Typed records at the boundary.** Raw feed rows become an
//!    [`EdgeRecord`] through [`EdgeRecord::from_fields`] or are rejected with
//!    a [`RecordError`]. Nothing downstream sees unparsed strings.
//!
//! 3. **Structured errors.** [`NetpathError`] and its children are built with
//!    `thiserror`. No `Box<dyn Error>`, no `.unwrap()` outside tests.

pub mod error;
pub mod identity;
pub mod metadata;
pub mod record;

pub use error::{NetpathError, RecordError, ValidationError};
pub use identity::NodeId;
pub use metadata::{NodeMetadata, UNKNOWN_CITY};
pub use record::{Column, EdgeRecord, MIN_FIELDS};
