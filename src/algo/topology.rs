//! Topological sorting

use super::common::IndexedView;
use crate::graph::{GraphResult, GraphStore, NodeKey};
use tracing::{debug, warn};
use trellis_algorithms::topological_sort;

impl<N: NodeKey> GraphStore<N> {
    /// Topological ordering of a directed acyclic graph.
    ///
    /// Every arrow `u -> v` has `u` before `v` in the result. A cyclic graph
    /// fails with `CycleDetected`, naming a node on the cycle.
    pub fn topological_sorting(&self) -> GraphResult<Vec<N>> {
        let indexed = IndexedView::new(self);
        debug!("Sorting {} nodes topologically", indexed.node_count());

        match topological_sort(&indexed.view) {
            Ok(order) => Ok(order.into_iter().map(|idx| indexed.owned(idx)).collect()),
            Err(err) => {
                let err = indexed.translate_error(err);
                warn!("Topological sort aborted: {}", err);
                Err(err)
            }
        }
    }
}
