//! Pathfinding algorithms
//!
//! Single-source shortest paths (Dijkstra).

use super::common::IndexedView;
use crate::graph::{GraphResult, GraphStore, NodeKey, Weight};
use indexmap::IndexMap;
use serde::Serialize;
use tracing::{debug, warn};
use trellis_algorithms::dijkstra;

/// Shortest paths from one source.
///
/// Only nodes reachable from the source appear, and the source itself is in
/// neither map: it has no predecessor and its distance is trivially zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortestPaths<N: NodeKey> {
    pub source: N,
    /// Node -> previous node on its shortest path, in settle order
    pub predecessors: IndexMap<N, N>,
    /// Node -> total weight from the source, in settle order
    pub distances: IndexMap<N, Weight>,
}

impl<N: NodeKey> ShortestPaths<N> {
    /// Distance to `target`; zero for the source, `None` when unreachable
    pub fn distance_to(&self, target: &N) -> Option<Weight> {
        if *target == self.source {
            return Some(0.0);
        }
        self.distances.get(target).copied()
    }

    /// Node sequence from the source to `target`, both ends included
    pub fn path_to(&self, target: &N) -> Option<Vec<N>> {
        if *target != self.source && !self.predecessors.contains_key(target) {
            return None;
        }
        let mut path = vec![target.clone()];
        let mut curr = target;
        while let Some(prev) = self.predecessors.get(curr) {
            path.push(prev.clone());
            curr = prev;
        }
        path.reverse();
        Some(path)
    }
}

impl<N: NodeKey> GraphStore<N> {
    /// Dijkstra's shortest paths from `source`.
    ///
    /// All weights reachable from `source` must be nonnegative; the first
    /// negative one relaxed fails the call with `InvalidWeight`.
    pub fn shortest_path(&self, source: &N) -> GraphResult<ShortestPaths<N>> {
        let indexed = IndexedView::new(self);
        let source_idx = indexed.locate(source)?;
        debug!("Running Dijkstra from {:?} over {} nodes", source, indexed.node_count());

        let result = dijkstra(&indexed.view, source_idx).map_err(|err| {
            let err = indexed.translate_error(err);
            warn!("Shortest path search aborted: {}", err);
            err
        })?;

        let mut predecessors = IndexMap::with_capacity(result.settled.len());
        let mut distances = IndexMap::with_capacity(result.settled.len());
        for &idx in &result.settled {
            if let (Some(prev), Some(dist)) = (result.predecessors[idx], result.distances[idx]) {
                predecessors.insert(indexed.owned(idx), indexed.owned(prev));
                distances.insert(indexed.owned(idx), dist);
            }
        }

        Ok(ShortestPaths {
            source: source.clone(),
            predecessors,
            distances,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::{GraphError, GraphStore};

    fn sample() -> GraphStore<&'static str> {
        let mut store = GraphStore::new();
        store.add_nodes(["A", "B", "C", "D", "E"]);
        store.add_edge(&"A", &"B", 1.0).unwrap();
        store.add_edge(&"B", &"C", 2.0).unwrap();
        store.add_edge(&"A", &"C", 4.0).unwrap();
        store.add_edge(&"C", &"D", 1.0).unwrap();
        store
    }

    #[test]
    fn test_shortest_path() {
        let store = sample();
        let paths = store.shortest_path(&"A").unwrap();

        assert_eq!(paths.distances[&"B"], 1.0);
        assert_eq!(paths.distances[&"C"], 3.0);
        assert_eq!(paths.distances[&"D"], 4.0);
        assert_eq!(paths.predecessors[&"C"], "B");
        assert!(!paths.distances.contains_key(&"A"));
        assert!(!paths.predecessors.contains_key(&"A"));
        // E is unreachable
        assert!(!paths.distances.contains_key(&"E"));
        assert_eq!(paths.distance_to(&"E"), None);
        assert_eq!(paths.distance_to(&"A"), Some(0.0));
    }

    #[test]
    fn test_path_to() {
        let store = sample();
        let paths = store.shortest_path(&"A").unwrap();
        assert_eq!(paths.path_to(&"D"), Some(vec!["A", "B", "C", "D"]));
        assert_eq!(paths.path_to(&"A"), Some(vec!["A"]));
        assert_eq!(paths.path_to(&"E"), None);
    }

    #[test]
    fn test_negative_weight() {
        let mut store = sample();
        store.add_arrow(&"D", &"E", -1.0).unwrap();
        assert_eq!(
            store.shortest_path(&"A").unwrap_err(),
            GraphError::InvalidWeight {
                tail: "\"D\"".to_string(),
                head: "\"E\"".to_string(),
                weight: -1.0,
            }
        );
    }

    #[test]
    fn test_unknown_source() {
        let store = sample();
        assert_eq!(
            store.shortest_path(&"Z").unwrap_err(),
            GraphError::MissingNode("\"Z\"".to_string())
        );
    }
}
