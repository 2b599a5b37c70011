use crate::node::{NodeId, Region};
use thiserror::Error;

/// Custom error type for the gradstack engine.
///
/// Every variant is a precondition violation on the caller's side. Operations
/// that return one of these have not touched the graph: no node was pushed and
/// no gradient was written.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum AutogradError {
    #[error("Division by zero error")]
    DivisionByZero,

    #[error("Stale node handle {node:?}: arena is at generation {current_generation}")]
    StaleNode {
        node: NodeId,
        current_generation: u32,
    },

    #[error("Node handle {node:?} is out of bounds for an arena of {len} nodes")]
    NodeOutOfBounds { node: NodeId, len: usize },

    #[error("Node handle {node:?} was resolved against the {expected:?} arena")]
    RegionMismatch { node: NodeId, expected: Region },

    #[error("Operation {operation} requires at least one operand")]
    EmptyInput { operation: String },

    #[error("Node {0:?} is not a parameter")]
    NotAParameter(NodeId),

    #[error("Cannot modify parameters while {live_nodes} per-pass nodes are still alive")]
    GraphInUse { live_nodes: usize },
}
