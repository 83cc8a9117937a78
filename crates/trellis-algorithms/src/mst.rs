//! Minimum Spanning Tree algorithms
//!
//! Implements Prim's algorithm, growing one tree per connected component.

use super::common::{GraphView, NodeIndex};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MSTResult {
    pub total_weight: f64,
    /// (parent, child, weight) in the order the child joined the forest
    pub edges: Vec<(NodeIndex, NodeIndex, f64)>,
    /// Tree parent of every node; `None` for tree roots
    pub parents: Vec<Option<NodeIndex>>,
    /// Every node in the order it joined the forest, roots included
    pub order: Vec<NodeIndex>,
}

impl MSTResult {
    /// Roots of the forest, one per connected component
    pub fn roots(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.order
            .iter()
            .copied()
            .filter(move |&idx| self.parents[idx].is_none())
    }
}

#[derive(Copy, Clone, PartialEq)]
struct EdgeState {
    weight: f64,
    /// Discovery sequence, breaks weight ties in favor of the earliest edge
    seq: usize,
    source: NodeIndex,
    target: NodeIndex,
}

impl Eq for EdgeState {}

impl Ord for EdgeState {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse for min-heap
        other
            .weight
            .total_cmp(&self.weight)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for EdgeState {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Prim's Algorithm for Minimum Spanning Forest
///
/// Expects an undirected view (every edge stored in both directions).
/// Starts from node 0; whenever the frontier runs dry with nodes left over,
/// a new tree is started from the smallest unvisited index, so a disconnected
/// graph yields one tree per component.
pub fn prim_spanning_forest(view: &GraphView) -> MSTResult {
    let n = view.node_count;
    let mut visited = vec![false; n];
    let mut heap = BinaryHeap::new();
    let mut seq = 0;
    let mut result = MSTResult {
        total_weight: 0.0,
        edges: Vec::with_capacity(n.saturating_sub(1)),
        parents: vec![None; n],
        order: Vec::with_capacity(n),
    };

    for start in 0..n {
        if visited[start] {
            continue;
        }
        visited[start] = true;
        result.order.push(start);
        add_edges(view, start, &mut heap, &visited, &mut seq);

        while let Some(EdgeState { weight, source, target, .. }) = heap.pop() {
            if visited[target] {
                continue;
            }

            visited[target] = true;
            result.parents[target] = Some(source);
            result.order.push(target);
            result.edges.push((source, target, weight));
            result.total_weight += weight;

            add_edges(view, target, &mut heap, &visited, &mut seq);
        }
    }

    result
}

fn add_edges(
    view: &GraphView,
    u: NodeIndex,
    heap: &mut BinaryHeap<EdgeState>,
    visited: &[bool],
    seq: &mut usize,
) {
    for (v, weight) in view.weighted_successors(u) {
        if !visited[v] {
            heap.push(EdgeState { weight, seq: *seq, source: u, target: v });
            *seq += 1;
        }
    }
}
