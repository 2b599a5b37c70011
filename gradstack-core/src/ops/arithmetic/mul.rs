use crate::error::AutogradError;
use crate::graph::Graph;
use crate::node::{Node, NodeId, Op};

// --- Backward Operation ---

/// z = a * b: dz/da = b, dz/db = a.
///
/// Both operand values are read before either grad is written, so
/// `mul(x, x)` correctly yields 2x.
pub(crate) fn mul_backward(
    graph: &mut Graph,
    grad_output: f64,
    [a, b]: [NodeId; 2],
) -> Result<(), AutogradError> {
    let a_value = graph.value(a)?;
    let b_value = graph.value(b)?;
    graph.accumulate(a, b_value * grad_output)?;
    graph.accumulate(b, a_value * grad_output)
}

// --- Forward Operation ---

/// Records `a * b` in the pass arena.
pub fn mul_op(graph: &mut Graph, a: NodeId, b: NodeId) -> Result<NodeId, AutogradError> {
    let a_value = graph.value(a)?;
    let b_value = graph.value(b)?;
    Ok(graph.push(Node::new(a_value * b_value, Op::Mul([a, b]))))
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
