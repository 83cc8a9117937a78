//! In-memory graph storage implementation
//!
//! Nodes are kept in an insertion-ordered table that doubles as the
//! node -> dense index mapping. Adjacency lists hold dense indices in
//! first-insertion order, and a separate weight table is keyed by ordered
//! index pairs.

use super::types::{Link, LinkKind, NodeKey, Weight};
use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during graph operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("Node {0} not found")]
    MissingNode(String),

    #[error("Edge ({0}, {1}) not found")]
    MissingEdge(String, String),

    #[error("Arrow ({0}, {1}) not found")]
    MissingArrow(String, String),

    #[error("Graph is not acyclic: cycle detected through node {0}")]
    CycleDetected(String),

    #[error("Invalid weight {weight} on arrow ({tail}, {head})")]
    InvalidWeight {
        tail: String,
        head: String,
        weight: Weight,
    },
}

pub type GraphResult<T> = Result<T, GraphError>;

/// Render a node identifier for error messages
pub(crate) fn render<N: fmt::Debug>(node: &N) -> String {
    format!("{:?}", node)
}

/// In-memory graph storage
///
/// - nodes: N -> neighbor list (dense indices, insertion order)
/// - links: (tail index, head index) -> weight and edge/arrow tag
///
/// The same store holds directed graphs (built with arrows) and undirected
/// graphs (built with edges). Keeping the two apart on a given node pair is
/// up to the caller.
#[derive(Debug, Clone)]
pub struct GraphStore<N: NodeKey> {
    /// Node table; the position of a node is its dense index
    nodes: IndexMap<N, Vec<usize>>,

    /// Weight table for every stored arrow (edges store both directions)
    links: FxHashMap<(usize, usize), Link>,
}

impl<N: NodeKey> GraphStore<N> {
    /// Create a new empty graph store
    pub fn new() -> Self {
        GraphStore {
            nodes: IndexMap::new(),
            links: FxHashMap::default(),
        }
    }

    /// Create a store pre-sized for `nodes` nodes and `links` arrows
    pub fn with_capacity(nodes: usize, links: usize) -> Self {
        GraphStore {
            nodes: IndexMap::with_capacity(nodes),
            links: FxHashMap::with_capacity_and_hasher(links, Default::default()),
        }
    }

    /// Add a batch of nodes.
    ///
    /// A node that is already present gets its neighbor list reset to empty:
    /// its outgoing arrows are dropped, and so is the far half of every edge
    /// it took part in. Arrows pointing at it from other nodes are kept.
    pub fn add_nodes<I>(&mut self, nodes: I)
    where
        I: IntoIterator<Item = N>,
    {
        for node in nodes {
            self.add_node(node);
        }
    }

    /// Add a single node, with the same reset rule as [`GraphStore::add_nodes`]
    pub fn add_node(&mut self, node: N) {
        match self.nodes.get_index_of(&node) {
            Some(idx) => self.reset_node(idx),
            None => {
                self.nodes.insert(node, Vec::new());
            }
        }
    }

    fn reset_node(&mut self, idx: usize) {
        let neighbors = match self.nodes.get_index_mut(idx) {
            Some((_, adj)) => std::mem::take(adj),
            None => return,
        };

        for &head in &neighbors {
            let Some(link) = self.links.remove(&(idx, head)) else {
                continue;
            };
            if link.is_edge() && head != idx {
                self.links.remove(&(head, idx));
                remove_neighbor(self.adjacency_mut(head), idx);
            }
        }

        debug!("Reset node at index {}, dropped {} outgoing links", idx, neighbors.len());
    }

    /// Add an undirected edge between `u` and `v`.
    ///
    /// Does nothing if `v` is already a neighbor of `u`. The weight must be
    /// finite.
    pub fn add_edge(&mut self, u: &N, v: &N, weight: Weight) -> GraphResult<()> {
        let ui = self.require(u)?;
        let vi = self.require(v)?;
        check_weight(u, v, weight)?;

        if self.adjacency(ui).contains(&vi) {
            return Ok(());
        }

        self.push_neighbor(ui, vi);
        if ui != vi && !self.adjacency(vi).contains(&ui) {
            self.push_neighbor(vi, ui);
        }
        self.links.insert((ui, vi), Link::edge(weight));
        self.links.insert((vi, ui), Link::edge(weight));
        Ok(())
    }

    /// Add a directed arrow from `u` to `v`.
    ///
    /// Does nothing (weight included) if the arrow already exists. The
    /// weight must be finite.
    pub fn add_arrow(&mut self, u: &N, v: &N, weight: Weight) -> GraphResult<()> {
        let ui = self.require(u)?;
        let vi = self.require(v)?;
        check_weight(u, v, weight)?;

        if self.adjacency(ui).contains(&vi) {
            return Ok(());
        }

        self.push_neighbor(ui, vi);
        self.links.insert((ui, vi), Link::arrow(weight));
        Ok(())
    }

    /// Remove the edge between `u` and `v`. Returns whether anything was removed.
    pub fn del_edge(&mut self, u: &N, v: &N) -> bool {
        let (Some(ui), Some(vi)) = (self.index_of(u), self.index_of(v)) else {
            return false;
        };
        if !remove_neighbor(self.adjacency_mut(ui), vi) {
            return false;
        }
        if ui != vi {
            remove_neighbor(self.adjacency_mut(vi), ui);
        }
        self.links.remove(&(ui, vi));
        self.links.remove(&(vi, ui));
        true
    }

    /// Remove the arrow from `u` to `v`. Returns whether anything was removed.
    ///
    /// Removing one half of an edge leaves the other half behind as an arrow.
    pub fn del_arrow(&mut self, u: &N, v: &N) -> bool {
        let (Some(ui), Some(vi)) = (self.index_of(u), self.index_of(v)) else {
            return false;
        };
        if !remove_neighbor(self.adjacency_mut(ui), vi) {
            return false;
        }
        if let Some(link) = self.links.remove(&(ui, vi)) {
            if link.is_edge() && ui != vi {
                if let Some(mirror) = self.links.get_mut(&(vi, ui)) {
                    mirror.kind = LinkKind::Arrow;
                }
            }
        }
        true
    }

    /// Check if a node exists
    pub fn has_node(&self, node: &N) -> bool {
        self.nodes.contains_key(node)
    }

    /// Check if an arrow from `u` to `v` exists
    pub fn has_arrow(&self, u: &N, v: &N) -> bool {
        self.link_between(u, v).is_some()
    }

    /// Check if an edge between `u` and `v` exists (both directions carry a weight)
    pub fn has_edge(&self, u: &N, v: &N) -> bool {
        self.has_arrow(u, v) && self.has_arrow(v, u)
    }

    /// Weight of the edge between `u` and `v`
    pub fn edge_weight(&self, u: &N, v: &N) -> GraphResult<Weight> {
        match (self.link_between(u, v), self.link_between(v, u)) {
            (Some(link), Some(_)) => Ok(link.weight),
            _ => Err(GraphError::MissingEdge(render(u), render(v))),
        }
    }

    /// Weight of the arrow from `u` to `v`
    pub fn arrow_weight(&self, u: &N, v: &N) -> GraphResult<Weight> {
        self.link_between(u, v)
            .map(|link| link.weight)
            .ok_or_else(|| GraphError::MissingArrow(render(u), render(v)))
    }

    /// Edge/arrow tag of the link from `u` to `v`, if any
    pub fn link_kind(&self, u: &N, v: &N) -> Option<LinkKind> {
        self.link_between(u, v).map(|link| link.kind)
    }

    /// Neighbors of `node` in insertion order.
    ///
    /// Returns an owned copy; mutating it does not touch the store.
    pub fn neighbors(&self, node: &N) -> GraphResult<Vec<N>> {
        let idx = self.require(node)?;
        Ok(self
            .adjacency(idx)
            .iter()
            .filter_map(|&head| self.node_at(head).cloned())
            .collect())
    }

    /// All nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &N> + '_ {
        self.nodes.keys()
    }

    /// Get total number of nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get total number of stored arrows (an edge counts as two)
    pub fn arrow_count(&self) -> usize {
        self.links.len()
    }

    pub(crate) fn index_of(&self, node: &N) -> Option<usize> {
        self.nodes.get_index_of(node)
    }

    pub(crate) fn require(&self, node: &N) -> GraphResult<usize> {
        self.index_of(node)
            .ok_or_else(|| GraphError::MissingNode(render(node)))
    }

    pub(crate) fn node_at(&self, idx: usize) -> Option<&N> {
        self.nodes.get_index(idx).map(|(node, _)| node)
    }

    pub(crate) fn link(&self, tail: usize, head: usize) -> Option<&Link> {
        self.links.get(&(tail, head))
    }

    /// (dense index, node, neighbor indices) for every node in insertion order
    pub(crate) fn entries(&self) -> impl Iterator<Item = (usize, &N, &[usize])> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .map(|(idx, (node, adj))| (idx, node, adj.as_slice()))
    }

    fn link_between(&self, u: &N, v: &N) -> Option<&Link> {
        let ui = self.index_of(u)?;
        let vi = self.index_of(v)?;
        self.link(ui, vi)
    }

    fn adjacency(&self, idx: usize) -> &[usize] {
        self.nodes
            .get_index(idx)
            .map(|(_, adj)| adj.as_slice())
            .unwrap_or(&[])
    }

    fn adjacency_mut(&mut self, idx: usize) -> Option<&mut Vec<usize>> {
        self.nodes.get_index_mut(idx).map(|(_, adj)| adj)
    }

    fn push_neighbor(&mut self, tail: usize, head: usize) {
        if let Some(adj) = self.adjacency_mut(tail) {
            adj.push(head);
        }
    }
}

/// Reject infinite and NaN weights; negative ones are stored as given
pub(crate) fn check_weight<N: fmt::Debug>(u: &N, v: &N, weight: Weight) -> GraphResult<()> {
    if weight.is_finite() {
        Ok(())
    } else {
        Err(GraphError::InvalidWeight {
            tail: render(u),
            head: render(v),
            weight,
        })
    }
}

/// Remove `target` from a neighbor list, preserving the order of the rest
fn remove_neighbor(adj: Option<&mut Vec<usize>>, target: usize) -> bool {
    let Some(adj) = adj else {
        return false;
    };
    match adj.iter().position(|&x| x == target) {
        Some(pos) => {
            adj.remove(pos);
            true
        }
        None => false,
    }
}

impl<N: NodeKey> Default for GraphStore<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: NodeKey> fmt::Display for GraphStore<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<graph {} nodes, {} arrows>", self.len(), self.arrow_count())
    }
}
