//! # netpath-routing — Gateway Path Finder
//!
//! Computes least-cost paths over a [`TopologyStore`] with a uniform-cost
//! (Dijkstra) search.
//!
//! - **Dijkstra** (`dijkstra.rs`): [`shortest_path`] between any two nodes,
//!   and [`PathFinder`], which binds the fixed gateway destination.
//!
//! - **Route** (`route.rs`): the [`Route`] value returned by a successful
//!   search: the ordered node sequence and its total cost.
//!
//! The search is a pure function of its inputs. It allocates its own
//! frontier and finalized set per call and holds no state between calls,
//! so concurrent searches over a shared store need no coordination.
//!
//! [`TopologyStore`]: netpath_topology::TopologyStore

pub mod dijkstra;
pub mod route;

pub use dijkstra::{shortest_path, PathFinder};
pub use route::Route;
