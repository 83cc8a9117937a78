//! Trellis
//!
//! An in-memory weighted graph with classic graph algorithms: depth/breadth-first
//! search, transitive closure, strongly connected and connected components,
//! topological sorting, minimum spanning trees and single-source shortest paths.
//!
//! # Architecture
//!
//! - [`graph`]: the `GraphStore`, the only mutable piece. Caller node ids map
//!   to dense indices; arrows and edges share one weight table.
//! - [`algo`]: adapter exposing each algorithm as a `GraphStore` method. The
//!   algorithms themselves live in the `trellis-algorithms` crate and run on an
//!   immutable dense view, so they never touch the store.
//! - [`snapshot`]: JSON exchange format for saving and restoring a graph.
//!
//! ## Example Usage
//!
//! ```rust
//! use trellis::GraphStore;
//!
//! let mut graph = GraphStore::new();
//! graph.add_nodes(["A", "B", "C", "D"]);
//! graph.add_edge(&"A", &"B", 1.0).unwrap();
//! graph.add_edge(&"B", &"C", 2.0).unwrap();
//! graph.add_edge(&"A", &"C", 4.0).unwrap();
//! graph.add_edge(&"C", &"D", 1.0).unwrap();
//!
//! let paths = graph.shortest_path(&"A").unwrap();
//! assert_eq!(paths.distances[&"D"], 4.0);
//! assert_eq!(paths.predecessors[&"C"], "B");
//!
//! let mst = graph.minimal_spanning_tree();
//! assert_eq!(mst.total_weight, 4.0);
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod algo;
pub mod graph;
pub mod snapshot;

// Re-export main types for convenience
pub use graph::{
    GraphError, GraphResult, GraphStore, Link, LinkKind, NodeKey, Weight, DEFAULT_WEIGHT,
};

pub use algo::{DepthFirstSearch, MinimalSpanningTree, MutualAccessibility, ShortestPaths};

pub use snapshot::{GraphSnapshot, LinkRecord, SnapshotError, SnapshotResult};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        let ver = version();
        assert!(!ver.is_empty());
        assert_eq!(ver, "0.3.0");
    }
}
