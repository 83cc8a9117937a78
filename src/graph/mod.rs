//! Core graph storage
//!
//! This module implements the weighted graph data model with:
//! - Caller-supplied node identifiers mapped to dense indices
//! - Directed arrows and undirected edges sharing one weight table
//! - Deterministic, insertion-ordered neighbor lists

pub mod store;
pub mod types;

// Re-export main types
pub use store::{GraphError, GraphResult, GraphStore};
pub use types::{Link, LinkKind, NodeKey, Weight, DEFAULT_WEIGHT};
