//! Pathfinding algorithms
//!
//! Single-source shortest paths with Dijkstra's algorithm.

use super::common::{GraphView, NodeIndex};
use super::error::{AlgoError, AlgoResult};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Result of a single-source shortest path search
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShortestPathResult {
    pub source: NodeIndex,
    /// Previous node on the shortest path; `None` for the source and unreachable nodes
    pub predecessors: Vec<Option<NodeIndex>>,
    /// Total weight from the source; `None` when unreachable
    pub distances: Vec<Option<f64>>,
    /// Reachable nodes other than the source, in the order they were settled
    pub settled: Vec<NodeIndex>,
}

impl ShortestPathResult {
    /// Node sequence from the source to `target`, if reachable
    pub fn path_to(&self, target: NodeIndex) -> Option<Vec<NodeIndex>> {
        self.distances.get(target).copied().flatten()?;
        let mut path = vec![target];
        let mut curr = target;
        while let Some(prev) = self.predecessors[curr] {
            path.push(prev);
            curr = prev;
        }
        path.reverse();
        Some(path)
    }
}

/// State for Dijkstra priority queue
#[derive(Copy, Clone, PartialEq)]
struct State {
    cost: f64,
    seq: usize,
    node_idx: NodeIndex,
}

impl Eq for State {}

impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        // Compare costs reversed for min-heap, then earliest push first
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Dijkstra's Algorithm (Weighted Shortest Paths from one source)
///
/// Every arrow leaving a settled node must carry a nonnegative weight; the
/// first negative (or NaN) one fails the whole search with
/// [`AlgoError::NegativeWeight`]. A distance is only updated when strictly
/// shorter, so equal-cost alternatives keep the first predecessor found.
///
/// # Panics
/// If `source` is not a valid index of `view`.
pub fn dijkstra(view: &GraphView, source: NodeIndex) -> AlgoResult<ShortestPathResult> {
    let n = view.node_count;
    let mut result = ShortestPathResult {
        source,
        predecessors: vec![None; n],
        distances: vec![None; n],
        settled: Vec::new(),
    };
    let mut done = vec![false; n];
    let mut heap = BinaryHeap::new();
    let mut seq = 0;

    result.distances[source] = Some(0.0);
    heap.push(State { cost: 0.0, seq, node_idx: source });

    while let Some(State { cost, node_idx, .. }) = heap.pop() {
        if done[node_idx] {
            continue;
        }
        done[node_idx] = true;
        if node_idx != source {
            result.settled.push(node_idx);
        }

        for (next_idx, weight) in view.weighted_successors(node_idx) {
            if !(weight >= 0.0) {
                return Err(AlgoError::NegativeWeight {
                    tail: node_idx,
                    head: next_idx,
                    weight,
                });
            }
            if done[next_idx] {
                continue;
            }

            let next_cost = cost + weight;
            let shorter = result.distances[next_idx].map_or(true, |d| next_cost < d);
            if shorter {
                result.distances[next_idx] = Some(next_cost);
                result.predecessors[next_idx] = Some(node_idx);
                seq += 1;
                heap.push(State { cost: next_cost, seq, node_idx: next_idx });
            }
        }
    }

    Ok(result)
}
