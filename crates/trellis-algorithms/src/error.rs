//! Errors raised by algorithms whose preconditions do not hold on the given view

use super::common::NodeIndex;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AlgoError {
    /// A back-edge reached a node that is still being explored
    #[error("Cycle detected at node index {node}")]
    CycleDetected { node: NodeIndex },

    #[error("Negative weight {weight} on arrow {tail} -> {head}")]
    NegativeWeight {
        tail: NodeIndex,
        head: NodeIndex,
        weight: f64,
    },
}

pub type AlgoResult<T> = Result<T, AlgoError>;
