use crate::error::AutogradError;
use crate::graph::Graph;
use crate::node::{Node, NodeId, Op};

// --- Backward Operation ---

/// z = max(0, a): dz/da = 1 if a > 0, else 0 (including at a == 0).
pub(crate) fn relu_backward(
    graph: &mut Graph,
    grad_output: f64,
    input: NodeId,
) -> Result<(), AutogradError> {
    if graph.value(input)? > 0.0 {
        graph.accumulate(input, grad_output)?;
    }
    Ok(())
}

// --- Forward Operation ---

/// Records `max(0, a)` in the pass arena.
pub fn relu_op(graph: &mut Graph, a: NodeId) -> Result<NodeId, AutogradError> {
    let a_value = graph.value(a)?;
    let result = if a_value > 0.0 { a_value } else { 0.0 };
    Ok(graph.push(Node::new(result, Op::Relu([a]))))
}

#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;
