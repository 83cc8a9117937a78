//! Core type definitions for the graph store

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;

pub use trellis_algorithms::common::DEFAULT_WEIGHT;

/// Numeric weight carried by every arrow and edge
pub type Weight = f64;

/// Requirements on caller-supplied node identifiers.
///
/// `Ord` fixes the root order of whole-graph traversals; `Debug` is used to
/// name nodes in errors.
pub trait NodeKey: Clone + Eq + Hash + Ord + fmt::Debug {}

impl<T: Clone + Eq + Hash + Ord + fmt::Debug> NodeKey for T {}

/// Whether a stored link is one half of an undirected edge or a plain arrow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    Edge,
    Arrow,
}

impl fmt::Display for LinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkKind::Edge => write!(f, "edge"),
            LinkKind::Arrow => write!(f, "arrow"),
        }
    }
}

/// Weight-table entry for one ordered node pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub weight: Weight,
    pub kind: LinkKind,
}

impl Link {
    pub fn edge(weight: Weight) -> Self {
        Link { weight, kind: LinkKind::Edge }
    }

    pub fn arrow(weight: Weight) -> Self {
        Link { weight, kind: LinkKind::Arrow }
    }

    pub fn is_edge(&self) -> bool {
        self.kind == LinkKind::Edge
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_node_key<N: NodeKey>() {}

    #[test]
    fn test_node_key_blanket_impl() {
        assert_node_key::<u64>();
        assert_node_key::<String>();
        assert_node_key::<&str>();
        assert_node_key::<(u32, char)>();
    }

    #[test]
    fn test_link_constructors() {
        let edge = Link::edge(2.5);
        assert!(edge.is_edge());
        assert_eq!(edge.weight, 2.5);

        let arrow = Link::arrow(DEFAULT_WEIGHT);
        assert!(!arrow.is_edge());
        assert_eq!(arrow.weight, 1.0);
    }

    #[test]
    fn test_link_kind_display() {
        assert_eq!(format!("{}", LinkKind::Edge), "edge");
        assert_eq!(format!("{}", LinkKind::Arrow), "arrow");
    }
}
