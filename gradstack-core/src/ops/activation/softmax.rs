use crate::error::AutogradError;
use crate::graph::Graph;
use crate::node::NodeId;
use crate::ops::arithmetic::{div_op, sub_op};
use crate::ops::math_elem::exp_op;
use crate::ops::reduction::sum_op;

/// Softmax over `logits`: `exp(x_i - m) / sum_j exp(x_j - m)`.
///
/// `m` is a constant leaf holding the largest logit. Subtracting it keeps
/// `exp` from overflowing and does not change the result or its gradient.
/// There is no dedicated rule: gradients flow through the primitive ops.
///
/// # Errors
/// `EmptyInput` for an empty slice.
pub fn softmax_op(graph: &mut Graph, logits: &[NodeId]) -> Result<Vec<NodeId>, AutogradError> {
    if logits.is_empty() {
        return Err(AutogradError::EmptyInput {
            operation: "softmax_op".to_string(),
        });
    }

    let mut max_logit = f64::NEG_INFINITY;
    for &logit in logits {
        max_logit = max_logit.max(graph.value(logit)?);
    }
    let shift = graph.leaf(max_logit);

    let mut numerators = Vec::with_capacity(logits.len());
    for &logit in logits {
        let shifted = sub_op(graph, logit, shift)?;
        numerators.push(exp_op(graph, shifted)?);
    }
    // The largest term is exp(0) = 1, so the sum is never zero.
    let denominator = sum_op(graph, &numerators)?;

    numerators
        .into_iter()
        .map(|numerator| div_op(graph, numerator, denominator))
        .collect()
}

#[cfg(test)]
#[path = "softmax_test.rs"]
mod tests;
