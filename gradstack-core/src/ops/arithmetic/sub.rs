use crate::error::AutogradError;
use crate::graph::Graph;
use crate::node::{Node, NodeId, Op};

// --- Backward Operation ---

/// z = a - b: dz/da = 1, dz/db = -1.
pub(crate) fn sub_backward(
    graph: &mut Graph,
    grad_output: f64,
    [a, b]: [NodeId; 2],
) -> Result<(), AutogradError> {
    graph.accumulate(a, grad_output)?;
    graph.accumulate(b, -grad_output)
}

// --- Forward Operation ---

/// Records `a - b` in the pass arena. `a` is the minuend.
pub fn sub_op(graph: &mut Graph, a: NodeId, b: NodeId) -> Result<NodeId, AutogradError> {
    let a_value = graph.value(a)?;
    let b_value = graph.value(b)?;
    Ok(graph.push(Node::new(a_value - b_value, Op::Sub([a, b]))))
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
