pub mod common;
pub mod error;
pub mod traversal;
pub mod community;
pub mod pathfinding;
pub mod mst;
pub mod topology;

pub use common::{GraphView, NodeIndex};
pub use error::{AlgoError, AlgoResult};
pub use traversal::{breadth_first_search, depth_first_search, BfsResult, DfsResult};
pub use community::{
    accessibility, connected_components, strongly_connected_components, ComponentResult,
    SccResult,
};
pub use pathfinding::{dijkstra, ShortestPathResult};
pub use mst::{prim_spanning_forest, MSTResult};
pub use topology::topological_sort;
