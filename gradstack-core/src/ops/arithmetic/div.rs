use crate::error::AutogradError;
use crate::graph::Graph;
use crate::node::{Node, NodeId, Op};
use num_traits::Zero;

// --- Backward Operation ---

/// z = a / b: dz/da = 1 / b, dz/db = -a / b^2.
pub(crate) fn div_backward(
    graph: &mut Graph,
    grad_output: f64,
    [a, b]: [NodeId; 2],
) -> Result<(), AutogradError> {
    let a_value = graph.value(a)?;
    let b_value = graph.value(b)?;
    graph.accumulate(a, (1.0 / b_value) * grad_output)?;
    graph.accumulate(b, (-a_value / (b_value * b_value)) * grad_output)
}

// --- Forward Operation ---

/// Records `a / b` in the pass arena. `a` is the dividend.
///
/// # Errors
/// `DivisionByZero` when `b` holds exactly zero; no node is created.
pub fn div_op(graph: &mut Graph, a: NodeId, b: NodeId) -> Result<NodeId, AutogradError> {
    let a_value = graph.value(a)?;
    let divisor = graph.value(b)?;
    if divisor.is_zero() {
        return Err(AutogradError::DivisionByZero);
    }
    Ok(graph.push(Node::new(a_value / divisor, Op::Div([a, b]))))
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
