use crate::error::AutogradError;
use crate::graph::Graph;
use crate::node::NodeId;
use crate::ops::arithmetic::add_op;

/// Sums `operands` with a left fold of `add_op`.
///
/// A single operand is returned as-is and no node is created. Otherwise
/// `operands.len() - 1` add nodes are pushed.
///
/// # Errors
/// `EmptyInput` for an empty slice.
pub fn sum_op(graph: &mut Graph, operands: &[NodeId]) -> Result<NodeId, AutogradError> {
    let (&first, rest) = operands.split_first().ok_or_else(|| AutogradError::EmptyInput {
        operation: "sum_op".to_string(),
    })?;
    // Validate up front so a bad handle late in the list leaves no partial chain behind.
    for &operand in operands {
        graph.node(operand)?;
    }
    rest.iter()
        .try_fold(first, |acc, &operand| add_op(graph, acc, operand))
}
