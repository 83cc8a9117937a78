//! Shared utilities for graph algorithms
//!
//! Provides a read-only, optimized view of the graph topology for algorithm execution.

/// Dense node index (0..node_count)
pub type NodeIndex = usize;

/// Weight used when an arrow carries none
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// A dense, integer-indexed view of the graph topology using Compressed Sparse Row (CSR) format.
///
/// The order of targets inside a row is the neighbor-list order of the source
/// node; every algorithm in this crate relies on it for deterministic output.
#[derive(Debug, Clone, Default)]
pub struct GraphView {
    /// Number of nodes
    pub node_count: usize,

    /// Outgoing arrows CSR structure
    /// Offsets into `out_targets`. Size = node_count + 1
    pub out_offsets: Vec<usize>,
    /// Contiguous array of target node indices
    pub out_targets: Vec<NodeIndex>,

    /// Arrow weights: aligned with `out_targets`
    pub weights: Vec<f64>,
}

impl GraphView {
    /// Get the out-degree of a node (by index)
    pub fn out_degree(&self, idx: NodeIndex) -> usize {
        self.out_offsets[idx + 1] - self.out_offsets[idx]
    }

    /// Total number of arrows (an undirected edge counts twice)
    pub fn arrow_count(&self) -> usize {
        self.out_targets.len()
    }

    /// Get outgoing neighbors (successors) of a node
    pub fn successors(&self, idx: NodeIndex) -> &[NodeIndex] {
        let start = self.out_offsets[idx];
        let end = self.out_offsets[idx + 1];
        &self.out_targets[start..end]
    }

    /// Get weights for outgoing arrows of a node
    pub fn weights(&self, idx: NodeIndex) -> &[f64] {
        let start = self.out_offsets[idx];
        let end = self.out_offsets[idx + 1];
        &self.weights[start..end]
    }

    /// Successors paired with the weight of the arrow leading to them
    pub fn weighted_successors(&self, idx: NodeIndex) -> impl Iterator<Item = (NodeIndex, f64)> + '_ {
        self.successors(idx)
            .iter()
            .copied()
            .zip(self.weights(idx).iter().copied())
    }

    /// Build a view from per-node adjacency lists.
    ///
    /// `weights`, when given, must be shaped like `outgoing`; missing weights
    /// default to [`DEFAULT_WEIGHT`].
    pub fn from_adjacency_list(
        outgoing: Vec<Vec<NodeIndex>>,
        weights: Option<Vec<Vec<f64>>>,
    ) -> Self {
        let node_count = outgoing.len();
        let mut out_offsets = Vec::with_capacity(node_count + 1);
        let mut out_targets = Vec::new();
        let mut flat_weights = Vec::new();

        out_offsets.push(0);
        for (i, neighbors) in outgoing.into_iter().enumerate() {
            let row = weights.as_ref().and_then(|w| w.get(i));
            for (j, &target) in neighbors.iter().enumerate() {
                let weight = row.and_then(|r| r.get(j)).copied().unwrap_or(DEFAULT_WEIGHT);
                flat_weights.push(weight);
                out_targets.push(target);
            }
            out_offsets.push(out_targets.len());
        }

        GraphView {
            node_count,
            out_offsets,
            out_targets,
            weights: flat_weights,
        }
    }

    /// Build an undirected view: each `(u, v, w)` becomes arrows `u->v` and `v->u`.
    pub fn from_edges(node_count: usize, edges: &[(NodeIndex, NodeIndex, f64)]) -> Self {
        let mut outgoing = vec![Vec::new(); node_count];
        let mut weights = vec![Vec::new(); node_count];
        for &(u, v, w) in edges {
            outgoing[u].push(v);
            weights[u].push(w);
            if u != v {
                outgoing[v].push(u);
                weights[v].push(w);
            }
        }
        Self::from_adjacency_list(outgoing, Some(weights))
    }
}
