//! Graph algorithms module
//!
//! Algorithms are implemented in the `trellis-algorithms` crate over dense
//! index views. This module provides the integration/adapter layer: it builds
//! a view from the store, runs the algorithm and maps indices back to the
//! caller's node identifiers. Each algorithm is exposed as a `GraphStore`
//! method.

pub mod common;
pub mod community;
pub mod mst;
pub mod pathfinding;
pub mod topology;
pub mod traversal;

pub use common::IndexedView;
pub use community::MutualAccessibility;
pub use mst::MinimalSpanningTree;
pub use pathfinding::ShortestPaths;
pub use traversal::DepthFirstSearch;

// Re-export the index-space algorithms for callers that build their own views
pub use trellis_algorithms::{
    accessibility, breadth_first_search, connected_components, depth_first_search, dijkstra,
    prim_spanning_forest, strongly_connected_components, topological_sort, AlgoError,
    AlgoResult, GraphView, NodeIndex,
};
