//! Depth-first and breadth-first search over a [`GraphStore`]

use super::common::IndexedView;
use crate::graph::{GraphResult, GraphStore, NodeKey};
use indexmap::IndexMap;
use serde::Serialize;
use tracing::debug;
use trellis_algorithms::{breadth_first_search, depth_first_search, NodeIndex};

/// Spanning tree (or forest) with its visit orders
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepthFirstSearch<N: NodeKey> {
    /// Visited node -> node that discovered it (`None` for roots), in preorder
    pub spanning_tree: IndexMap<N, Option<N>>,
    pub preorder: Vec<N>,
    pub postorder: Vec<N>,
}

impl<N: NodeKey> DepthFirstSearch<N> {
    pub fn visited_count(&self) -> usize {
        self.preorder.len()
    }

    pub fn roots(&self) -> impl Iterator<Item = &N> + '_ {
        self.spanning_tree
            .iter()
            .filter(|(_, parent)| parent.is_none())
            .map(|(node, _)| node)
    }
}

fn tree_from<N: NodeKey>(
    indexed: &IndexedView<'_, N>,
    order: &[NodeIndex],
    parents: &[Option<NodeIndex>],
) -> IndexMap<N, Option<N>> {
    order
        .iter()
        .map(|&idx| (indexed.owned(idx), parents[idx].map(|p| indexed.owned(p))))
        .collect()
}

impl<N: NodeKey> GraphStore<N> {
    /// Depth-first search.
    ///
    /// With `root`, explores only what `root` reaches; otherwise covers the
    /// whole graph, restarting from each unvisited node in ascending order.
    pub fn depth_first_search(&self, root: Option<&N>) -> GraphResult<DepthFirstSearch<N>> {
        let indexed = IndexedView::new(self);
        let root = root.map(|node| indexed.locate(node)).transpose()?;
        debug!("Running DFS over {} nodes (rooted: {})", indexed.node_count(), root.is_some());

        let result = depth_first_search(&indexed.view, root);
        Ok(DepthFirstSearch {
            spanning_tree: tree_from(&indexed, &result.preorder, &result.parents),
            preorder: result.preorder.iter().map(|&idx| indexed.owned(idx)).collect(),
            postorder: result.postorder.iter().map(|&idx| indexed.owned(idx)).collect(),
        })
    }

    /// Breadth-first search, returning the spanning tree in level order
    pub fn breadth_first_search(&self, root: Option<&N>) -> GraphResult<IndexMap<N, Option<N>>> {
        let indexed = IndexedView::new(self);
        let root = root.map(|node| indexed.locate(node)).transpose()?;
        debug!("Running BFS over {} nodes (rooted: {})", indexed.node_count(), root.is_some());

        let result = breadth_first_search(&indexed.view, root);
        Ok(tree_from(&indexed, &result.order, &result.parents))
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::{GraphError, GraphStore};

    fn sample() -> GraphStore<u32> {
        // 1->2, 1->3, 2->4, 3->4, 5->1 ; 6 isolated
        let mut store = GraphStore::new();
        store.add_nodes([5, 1, 2, 3, 4, 6]);
        for (u, v) in [(1, 2), (1, 3), (2, 4), (3, 4), (5, 1)] {
            store.add_arrow(&u, &v, 1.0).unwrap();
        }
        store
    }

    #[test]
    fn test_dfs_from_root() {
        let store = sample();
        let dfs = store.depth_first_search(Some(&1)).unwrap();

        assert_eq!(dfs.preorder, vec![1, 2, 4, 3]);
        assert_eq!(dfs.postorder, vec![4, 2, 3, 1]);
        assert_eq!(dfs.spanning_tree.get(&1), Some(&None));
        assert_eq!(dfs.spanning_tree.get(&4), Some(&Some(2)));
        assert_eq!(dfs.spanning_tree.get(&5), None);
        assert_eq!(dfs.roots().collect::<Vec<_>>(), vec![&1]);
    }

    #[test]
    fn test_dfs_forest_roots_ascending() {
        let store = sample();
        let dfs = store.depth_first_search(None).unwrap();

        assert_eq!(dfs.visited_count(), 6);
        assert_eq!(dfs.preorder, vec![1, 2, 4, 3, 5, 6]);
        assert_eq!(dfs.roots().copied().collect::<Vec<_>>(), vec![1, 5, 6]);
        assert_eq!(dfs.postorder.len(), dfs.preorder.len());
    }

    #[test]
    fn test_bfs() {
        let store = sample();
        let tree = store.breadth_first_search(Some(&5)).unwrap();

        assert_eq!(tree.keys().copied().collect::<Vec<_>>(), vec![5, 1, 2, 3, 4]);
        assert_eq!(tree[&4], Some(2));
        assert_eq!(tree[&5], None);
    }

    #[test]
    fn test_unknown_root() {
        let store = sample();
        assert_eq!(
            store.depth_first_search(Some(&42)).unwrap_err(),
            GraphError::MissingNode("42".to_string())
        );
        assert!(store.breadth_first_search(Some(&42)).is_err());
    }
}
