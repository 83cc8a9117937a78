//! Reachability algorithms
//!
//! Transitive closure, strongly connected components and connected components.

use super::common::IndexedView;
use crate::graph::{GraphStore, NodeKey};
use indexmap::{IndexMap, IndexSet};
use serde::Serialize;
use tracing::debug;
use trellis_algorithms::{accessibility, connected_components, strongly_connected_components};

/// Strongly connected components of a directed graph
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MutualAccessibility<N: NodeKey> {
    /// Components in discovery order
    pub components: Vec<Vec<N>>,
    /// Node -> position in `components`
    pub node_component: IndexMap<N, usize>,
}

impl<N: NodeKey> MutualAccessibility<N> {
    /// Members of the component containing `node`
    pub fn component_of(&self, node: &N) -> Option<&[N]> {
        let id = *self.node_component.get(node)?;
        self.components.get(id).map(Vec::as_slice)
    }

    /// Whether `u` and `v` reach each other
    pub fn mutually_accessible(&self, u: &N, v: &N) -> bool {
        match (self.node_component.get(u), self.node_component.get(v)) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

impl<N: NodeKey> GraphStore<N> {
    /// Transitive closure.
    ///
    /// Every node maps to the set of nodes it reaches through one or more
    /// arrows, itself included. Nodes are listed in ascending order, each set
    /// in discovery order. Cost is O(V * (V + E)).
    pub fn accessibility(&self) -> IndexMap<N, IndexSet<N>> {
        let indexed = IndexedView::new(self);
        debug!("Computing accessibility over {} nodes", indexed.node_count());

        accessibility(&indexed.view)
            .iter()
            .enumerate()
            .map(|(idx, reached)| {
                let set = reached.iter().map(|&r| indexed.owned(r)).collect();
                (indexed.owned(idx), set)
            })
            .collect()
    }

    /// Strongly connected components (Tarjan, linear time)
    pub fn mutual_accessibility(&self) -> MutualAccessibility<N> {
        let indexed = IndexedView::new(self);
        debug!("Computing strongly connected components over {} nodes", indexed.node_count());

        let result = strongly_connected_components(&indexed.view);
        let components: Vec<Vec<N>> = result
            .components
            .iter()
            .map(|members| members.iter().map(|&m| indexed.owned(m)).collect())
            .collect();
        let node_component = components
            .iter()
            .enumerate()
            .flat_map(|(id, members)| members.iter().map(move |m| (m.clone(), id)))
            .collect();

        MutualAccessibility {
            components,
            node_component,
        }
    }

    /// Connected components of an undirected graph.
    ///
    /// Node -> component id; ids count up from 0 in ascending order of each
    /// component's smallest node.
    pub fn connected_components(&self) -> IndexMap<N, usize> {
        let indexed = IndexedView::new(self);
        debug!("Labeling connected components over {} nodes", indexed.node_count());

        let result = connected_components(&indexed.view);
        result
            .node_component
            .iter()
            .enumerate()
            .map(|(idx, &component)| (indexed.owned(idx), component))
            .collect()
    }
}
