//! Reachability and component algorithms
//!
//! Transitive closure, strongly connected components (Tarjan) and
//! connected components of undirected graphs.

use super::common::{GraphView, NodeIndex};

/// Result of Tarjan's SCC algorithm
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SccResult {
    /// Components in discovery order; members in visit order
    pub components: Vec<Vec<NodeIndex>>,
    /// Node index -> position in `components`
    pub node_component: Vec<usize>,
}

/// Result of connected component labeling
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComponentResult {
    /// Node index -> component id
    pub node_component: Vec<usize>,
    pub component_count: usize,
}

/// Transitive closure
///
/// For each node, every node reachable through one or more arrows, in
/// discovery order. A node always reaches itself and is listed first.
/// Cost is O(V * (V + E)).
pub fn accessibility(view: &GraphView) -> Vec<Vec<NodeIndex>> {
    let n = view.node_count;
    let mut closure = Vec::with_capacity(n);
    let mut seen = vec![usize::MAX; n];
    let mut stack = Vec::new();

    for source in 0..n {
        let mut reached = vec![source];
        // `seen[v] == source` marks v as reached in this round, no clearing needed
        seen[source] = source;
        stack.push(source);

        while let Some(node) = stack.pop() {
            for &next in view.successors(node) {
                if seen[next] != source {
                    seen[next] = source;
                    reached.push(next);
                    stack.push(next);
                }
            }
        }
        closure.push(reached);
    }

    closure
}

const UNVISITED: usize = usize::MAX;

struct Tarjan<'a> {
    view: &'a GraphView,
    index: Vec<usize>,
    lowlink: Vec<usize>,
    on_stack: Vec<bool>,
    stack: Vec<NodeIndex>,
    next_index: usize,
    result: SccResult,
}

impl<'a> Tarjan<'a> {
    fn new(view: &'a GraphView) -> Self {
        let n = view.node_count;
        Tarjan {
            view,
            index: vec![UNVISITED; n],
            lowlink: vec![0; n],
            on_stack: vec![false; n],
            stack: Vec::new(),
            next_index: 0,
            result: SccResult {
                components: Vec::new(),
                node_component: vec![0; n],
            },
        }
    }

    fn discover(&mut self, node: NodeIndex) {
        self.index[node] = self.next_index;
        self.lowlink[node] = self.next_index;
        self.next_index += 1;
        self.stack.push(node);
        self.on_stack[node] = true;
    }

    fn run_from(&mut self, root: NodeIndex) {
        self.discover(root);
        let mut frames = vec![(root, 0usize)];

        while let Some(frame) = frames.last_mut() {
            let (node, cursor) = *frame;
            match self.view.successors(node).get(cursor) {
                Some(&next) => {
                    frame.1 += 1;
                    if self.index[next] == UNVISITED {
                        self.discover(next);
                        frames.push((next, 0));
                    } else if self.on_stack[next] {
                        self.lowlink[node] = self.lowlink[node].min(self.index[next]);
                    }
                }
                None => {
                    frames.pop();
                    if let Some(&(parent, _)) = frames.last() {
                        self.lowlink[parent] = self.lowlink[parent].min(self.lowlink[node]);
                    }
                    if self.lowlink[node] == self.index[node] {
                        self.close_component(node);
                    }
                }
            }
        }
    }

    fn close_component(&mut self, root: NodeIndex) {
        let id = self.result.components.len();
        let mut members = Vec::new();
        while let Some(member) = self.stack.pop() {
            self.on_stack[member] = false;
            self.result.node_component[member] = id;
            members.push(member);
            if member == root {
                break;
            }
        }
        members.reverse();
        self.result.components.push(members);
    }
}

/// Strongly Connected Components (Tarjan, single pass)
///
/// Components are numbered in the order they are completed.
pub fn strongly_connected_components(view: &GraphView) -> SccResult {
    let mut tarjan = Tarjan::new(view);
    for root in 0..view.node_count {
        if tarjan.index[root] == UNVISITED {
            tarjan.run_from(root);
        }
    }
    tarjan.result
}

/// Connected Components
///
/// Each unvisited node (ascending) starts a new traversal; everything it
/// reaches shares its component id. Ids count up from 0. Arrows are followed
/// in their stored direction, so the labeling is only meaningful for
/// undirected graphs.
pub fn connected_components(view: &GraphView) -> ComponentResult {
    let n = view.node_count;
    let mut node_component = vec![UNVISITED; n];
    let mut component_count = 0;
    let mut stack = Vec::new();

    for root in 0..n {
        if node_component[root] != UNVISITED {
            continue;
        }
        node_component[root] = component_count;
        stack.push(root);
        while let Some(node) = stack.pop() {
            for &next in view.successors(node) {
                if node_component[next] == UNVISITED {
                    node_component[next] = component_count;
                    stack.push(next);
                }
            }
        }
        component_count += 1;
    }

    ComponentResult {
        node_component,
        component_count,
    }
}
