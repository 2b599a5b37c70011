use crate::error::AutogradError;
use crate::graph::Graph;
use crate::node::{Node, NodeId, Op};

// --- Backward Operation ---

/// z = e^a: dz/da = e^a, which is the node's own forward value.
pub(crate) fn exp_backward(
    graph: &mut Graph,
    grad_output: f64,
    output_value: f64,
    input: NodeId,
) -> Result<(), AutogradError> {
    graph.accumulate(input, output_value * grad_output)
}

// --- Forward Operation ---

/// Records `e^a` in the pass arena.
pub fn exp_op(graph: &mut Graph, a: NodeId) -> Result<NodeId, AutogradError> {
    let a_value = graph.value(a)?;
    Ok(graph.push(Node::new(a_value.exp(), Op::Exp([a]))))
}
