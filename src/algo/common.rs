//! Shared utilities for graph algorithms
//!
//! Provides a read-only, optimized view of the graph topology for algorithm execution.

use crate::graph::store::render;
use crate::graph::{GraphError, GraphResult, GraphStore, NodeKey};
use trellis_algorithms::{AlgoError, GraphView, NodeIndex};

/// A dense, integer-indexed view of a [`GraphStore`].
///
/// The store keeps nodes in insertion order; algorithms need them in
/// ascending node order so that forests and component ids come out the same
/// regardless of how the graph was built. This view renumbers nodes by rank
/// and keeps each neighbor list in its stored order.
pub struct IndexedView<'a, N: NodeKey> {
    pub view: GraphView,
    /// Mapping from dense view index back to the node
    index_to_node: Vec<&'a N>,
    /// Mapping from store index to dense view index
    store_to_view: Vec<NodeIndex>,
    store: &'a GraphStore<N>,
}

impl<'a, N: NodeKey> IndexedView<'a, N> {
    /// Snapshot the store's topology. O(V log V + E).
    pub fn new(store: &'a GraphStore<N>) -> Self {
        let mut ranked: Vec<(usize, &'a N, &'a [usize])> = store.entries().collect();
        ranked.sort_by(|a, b| a.1.cmp(b.1));

        let node_count = ranked.len();
        let mut store_to_view = vec![0; node_count];
        for (view_idx, &(store_idx, _, _)) in ranked.iter().enumerate() {
            store_to_view[store_idx] = view_idx;
        }

        let mut outgoing = Vec::with_capacity(node_count);
        let mut weights = Vec::with_capacity(node_count);
        for &(tail, _, adjacency) in &ranked {
            // every neighbor-list entry has a link; an orphan is dropped rather than weighted
            let (row, row_weights): (Vec<NodeIndex>, Vec<f64>) = adjacency
                .iter()
                .filter_map(|&head| {
                    let link = store.link(tail, head);
                    debug_assert!(link.is_some(), "no link for neighbor {} of {}", head, tail);
                    link.map(|l| (store_to_view[head], l.weight))
                })
                .unzip();
            outgoing.push(row);
            weights.push(row_weights);
        }

        IndexedView {
            view: GraphView::from_adjacency_list(outgoing, Some(weights)),
            index_to_node: ranked.into_iter().map(|(_, node, _)| node).collect(),
            store_to_view,
            store,
        }
    }

    pub fn node_count(&self) -> usize {
        self.view.node_count
    }

    /// Node at a dense view index
    pub fn node(&self, idx: NodeIndex) -> &'a N {
        self.index_to_node[idx]
    }

    /// Owned node at a dense view index
    pub fn owned(&self, idx: NodeIndex) -> N {
        self.index_to_node[idx].clone()
    }

    /// Dense view index of a node, or `MissingNode`
    pub fn locate(&self, node: &N) -> GraphResult<NodeIndex> {
        self.store.require(node).map(|store_idx| self.store_to_view[store_idx])
    }

    /// Translate an index-space algorithm error into caller terms
    pub fn translate_error(&self, err: AlgoError) -> GraphError {
        match err {
            AlgoError::CycleDetected { node } => GraphError::CycleDetected(render(self.node(node))),
            AlgoError::NegativeWeight { tail, head, weight } => GraphError::InvalidWeight {
                tail: render(self.node(tail)),
                head: render(self.node(head)),
                weight,
            },
        }
    }
}
