//! Minimum Spanning Tree algorithms

use super::common::IndexedView;
use crate::graph::{GraphStore, NodeKey, Weight};
use indexmap::IndexMap;
use serde::Serialize;
use tracing::debug;
use trellis_algorithms::prim_spanning_forest;

/// Minimum spanning forest: one tree per connected component
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MinimalSpanningTree<N: NodeKey> {
    /// Node -> tree parent (`None` for roots), in the order nodes joined
    pub spanning_tree: IndexMap<N, Option<N>>,
    pub total_weight: Weight,
}

impl<N: NodeKey> MinimalSpanningTree<N> {
    pub fn roots(&self) -> impl Iterator<Item = &N> + '_ {
        self.spanning_tree
            .iter()
            .filter(|(_, parent)| parent.is_none())
            .map(|(node, _)| node)
    }

    /// True when the input graph was connected (a single tree)
    pub fn is_spanning_tree(&self) -> bool {
        self.roots().count() <= 1
    }

    /// (parent, child) pairs of the forest
    pub fn edges(&self) -> impl Iterator<Item = (&N, &N)> + '_ {
        self.spanning_tree
            .iter()
            .filter_map(|(child, parent)| parent.as_ref().map(|p| (p, child)))
    }
}

impl<N: NodeKey> GraphStore<N> {
    /// Minimum spanning tree of a weighted undirected graph (Prim).
    ///
    /// Grows from the smallest node, always taking the cheapest edge across
    /// the cut; equal weights go to the edge found first in neighbor-list
    /// order. A disconnected graph yields a spanning forest rather than an
    /// error, so check [`MinimalSpanningTree::is_spanning_tree`] when
    /// connectivity matters.
    pub fn minimal_spanning_tree(&self) -> MinimalSpanningTree<N> {
        let indexed = IndexedView::new(self);
        debug!("Building minimal spanning tree over {} nodes", indexed.node_count());

        let result = prim_spanning_forest(&indexed.view);
        let spanning_tree = result
            .order
            .iter()
            .map(|&idx| (indexed.owned(idx), result.parents[idx].map(|p| indexed.owned(p))))
            .collect();

        MinimalSpanningTree {
            spanning_tree,
            total_weight: result.total_weight,
        }
    }
}
