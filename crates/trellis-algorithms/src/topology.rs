//! Graph topology analysis algorithms
//!
//! Topological sorting of directed acyclic graphs.

use super::common::{GraphView, NodeIndex};
use super::error::{AlgoError, AlgoResult};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    Active,
    Done,
}

/// Topological Sort
///
/// Reverse postorder of a full-graph depth-first search (roots ascending).
/// Reaching a node that is still on the active exploration stack means the
/// graph has a cycle, reported as [`AlgoError::CycleDetected`] with that node.
pub fn topological_sort(view: &GraphView) -> AlgoResult<Vec<NodeIndex>> {
    let n = view.node_count;
    let mut marks = vec![Mark::Unvisited; n];
    let mut postorder = Vec::with_capacity(n);
    let mut frames: Vec<(NodeIndex, usize)> = Vec::new();

    for root in 0..n {
        if marks[root] != Mark::Unvisited {
            continue;
        }
        marks[root] = Mark::Active;
        frames.push((root, 0));

        while let Some(frame) = frames.last_mut() {
            let (node, cursor) = *frame;
            match view.successors(node).get(cursor) {
                Some(&next) => {
                    frame.1 += 1;
                    match marks[next] {
                        Mark::Unvisited => {
                            marks[next] = Mark::Active;
                            frames.push((next, 0));
                        }
                        Mark::Active => return Err(AlgoError::CycleDetected { node: next }),
                        Mark::Done => {}
                    }
                }
                None => {
                    frames.pop();
                    marks[node] = Mark::Done;
                    postorder.push(node);
                }
            }
        }
    }

    postorder.reverse();
    Ok(postorder)
}
