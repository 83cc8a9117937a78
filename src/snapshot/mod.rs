//! Graph snapshots
//!
//! A snapshot lists every node once, every edge once and every arrow once,
//! each link with its weight. It is the exchange format used to save a
//! [`GraphStore`] and to load one back:
//!
//! ```json
//! { "nodes": ["a", "b", "c"],
//!   "edges": [{"from": "a", "to": "b", "weight": 2.0}],
//!   "arrows": [{"from": "c", "to": "a"}] }
//! ```
//!
//! `weight` defaults to 1 and both link lists default to empty.

use crate::graph::store::{check_weight, render};
use crate::graph::{GraphError, GraphStore, LinkKind, NodeKey, Weight, DEFAULT_WEIGHT};
use rustc_hash::FxHashSet;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

/// Snapshot errors
#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed snapshot: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),
}

pub type SnapshotResult<T> = Result<T, SnapshotError>;

fn default_weight() -> Weight {
    DEFAULT_WEIGHT
}

/// One edge or arrow in a snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkRecord<N> {
    pub from: N,
    pub to: N,
    #[serde(default = "default_weight")]
    pub weight: Weight,
}

/// Serializable image of a whole graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "N: Deserialize<'de>"))]
pub struct GraphSnapshot<N> {
    pub nodes: Vec<N>,
    #[serde(default)]
    pub edges: Vec<LinkRecord<N>>,
    #[serde(default)]
    pub arrows: Vec<LinkRecord<N>>,
}

impl<N: NodeKey> GraphStore<N> {
    /// Capture the store. Nodes keep insertion order, links follow neighbor-list order.
    pub fn snapshot(&self) -> GraphSnapshot<N> {
        let keys: Vec<&N> = self.nodes().collect();
        let mut snapshot = GraphSnapshot {
            nodes: keys.iter().map(|&n| n.clone()).collect(),
            edges: Vec::new(),
            arrows: Vec::new(),
        };

        for (tail, from, adjacency) in self.entries() {
            for &head in adjacency {
                let Some(link) = self.link(tail, head) else {
                    continue;
                };
                let record = LinkRecord {
                    from: from.clone(),
                    to: keys[head].clone(),
                    weight: link.weight,
                };
                match link.kind {
                    // each edge is stored from both ends; keep the copy whose tail comes first
                    LinkKind::Edge if tail <= head => snapshot.edges.push(record),
                    LinkKind::Edge => {}
                    LinkKind::Arrow => snapshot.arrows.push(record),
                }
            }
        }

        snapshot
    }

    /// Populate this store from a snapshot.
    ///
    /// Every link endpoint must be declared in the snapshot's node list and
    /// every weight must be finite; otherwise `MissingNode` or `InvalidWeight`
    /// is returned and the store is left untouched.
    pub fn apply_snapshot(&mut self, snapshot: GraphSnapshot<N>) -> Result<(), GraphError> {
        let declared: FxHashSet<&N> = snapshot.nodes.iter().collect();
        for record in snapshot.edges.iter().chain(snapshot.arrows.iter()) {
            for endpoint in [&record.from, &record.to] {
                if !declared.contains(endpoint) {
                    return Err(GraphError::MissingNode(render(endpoint)));
                }
            }
            check_weight(&record.from, &record.to, record.weight)?;
        }

        debug!(
            "Applying snapshot: {} nodes, {} edges, {} arrows",
            snapshot.nodes.len(),
            snapshot.edges.len(),
            snapshot.arrows.len()
        );

        self.add_nodes(snapshot.nodes);
        for record in &snapshot.edges {
            self.add_edge(&record.from, &record.to, record.weight)?;
        }
        for record in &snapshot.arrows {
            self.add_arrow(&record.from, &record.to, record.weight)?;
        }
        Ok(())
    }

    /// Build a fresh store from a snapshot
    pub fn from_snapshot(snapshot: GraphSnapshot<N>) -> Result<Self, GraphError> {
        let links = snapshot.edges.len() * 2 + snapshot.arrows.len();
        let mut store = GraphStore::with_capacity(snapshot.nodes.len(), links);
        store.apply_snapshot(snapshot)?;
        Ok(store)
    }
}

impl<N: NodeKey + Serialize> GraphStore<N> {
    pub fn to_json(&self) -> SnapshotResult<String> {
        Ok(serde_json::to_string(&self.snapshot())?)
    }

    pub fn to_json_pretty(&self) -> SnapshotResult<String> {
        Ok(serde_json::to_string_pretty(&self.snapshot())?)
    }

    /// Write the snapshot to `path`, replacing any existing file
    pub fn save_snapshot(&self, path: impl AsRef<Path>) -> SnapshotResult<()> {
        let path = path.as_ref();
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, &self.snapshot())?;
        writer.flush()?;
        info!("Saved snapshot of {} nodes to {:?}", self.len(), path);
        Ok(())
    }
}

impl<N: NodeKey + DeserializeOwned> GraphStore<N> {
    /// Parse a JSON snapshot and add its contents to this store
    pub fn read_json(&mut self, input: &str) -> SnapshotResult<()> {
        let snapshot: GraphSnapshot<N> = serde_json::from_str(input)?;
        self.apply_snapshot(snapshot)?;
        Ok(())
    }

    /// Read a snapshot file and add its contents to this store
    pub fn load_snapshot(&mut self, path: impl AsRef<Path>) -> SnapshotResult<()> {
        let path = path.as_ref();
        let reader = BufReader::new(File::open(path)?);
        let snapshot: GraphSnapshot<N> = serde_json::from_reader(reader)?;
        self.apply_snapshot(snapshot)?;
        info!("Loaded snapshot from {:?}, graph now has {} nodes", path, self.len());
        Ok(())
    }
}
