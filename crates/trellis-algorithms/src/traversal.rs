//! Graph traversal algorithms
//!
//! Depth-first and breadth-first search producing spanning trees (or forests
//! when no root is given). Successors are always explored in neighbor-list
//! order, and forest roots are taken in ascending index order.

use super::common::{GraphView, NodeIndex};
use std::collections::VecDeque;

/// Result of a depth-first search
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DfsResult {
    /// Discovering node for every visited non-root; `None` for roots and unvisited nodes
    pub parents: Vec<Option<NodeIndex>>,
    /// Nodes in the order they were first visited
    pub preorder: Vec<NodeIndex>,
    /// Nodes in the order their exploration completed
    pub postorder: Vec<NodeIndex>,
}

impl DfsResult {
    pub fn visited_count(&self) -> usize {
        self.preorder.len()
    }
}

/// Result of a breadth-first search
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BfsResult {
    pub parents: Vec<Option<NodeIndex>>,
    /// Nodes in level order
    pub order: Vec<NodeIndex>,
}

/// Depth-First Search
///
/// With `root`, explores only the nodes reachable from it. Without, restarts
/// from every unvisited node so the result is a spanning forest.
///
/// # Panics
/// If `root` is not a valid index of `view`.
pub fn depth_first_search(view: &GraphView, root: Option<NodeIndex>) -> DfsResult {
    let n = view.node_count;
    let mut visited = vec![false; n];
    let mut result = DfsResult {
        parents: vec![None; n],
        preorder: Vec::with_capacity(n),
        postorder: Vec::with_capacity(n),
    };

    match root {
        Some(root) => dfs_from(view, root, &mut visited, &mut result),
        None => {
            for root in 0..n {
                if !visited[root] {
                    dfs_from(view, root, &mut visited, &mut result);
                }
            }
        }
    }

    result
}

fn dfs_from(view: &GraphView, root: NodeIndex, visited: &mut [bool], result: &mut DfsResult) {
    visited[root] = true;
    result.preorder.push(root);

    // (node, position of the next successor to look at)
    let mut stack = vec![(root, 0usize)];

    while let Some(frame) = stack.last_mut() {
        let (node, cursor) = *frame;
        match view.successors(node).get(cursor) {
            Some(&next) => {
                frame.1 += 1;
                if !visited[next] {
                    visited[next] = true;
                    result.parents[next] = Some(node);
                    result.preorder.push(next);
                    stack.push((next, 0));
                }
            }
            None => {
                stack.pop();
                result.postorder.push(node);
            }
        }
    }
}

/// Breadth-First Search
///
/// Level-order counterpart of [`depth_first_search`]; only the spanning
/// tree (and visit order) is produced.
///
/// # Panics
/// If `root` is not a valid index of `view`.
pub fn breadth_first_search(view: &GraphView, root: Option<NodeIndex>) -> BfsResult {
    let n = view.node_count;
    let mut visited = vec![false; n];
    let mut result = BfsResult {
        parents: vec![None; n],
        order: Vec::with_capacity(n),
    };

    match root {
        Some(root) => bfs_from(view, root, &mut visited, &mut result),
        None => {
            for root in 0..n {
                if !visited[root] {
                    bfs_from(view, root, &mut visited, &mut result);
                }
            }
        }
    }

    result
}

fn bfs_from(view: &GraphView, root: NodeIndex, visited: &mut [bool], result: &mut BfsResult) {
    let mut queue = VecDeque::new();
    visited[root] = true;
    queue.push_back(root);

    while let Some(current) = queue.pop_front() {
        result.order.push(current);
        for &next in view.successors(current) {
            if !visited[next] {
                visited[next] = true;
                result.parents[next] = Some(current);
                queue.push_back(next);
            }
        }
    }
}
