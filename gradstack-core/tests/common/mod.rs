#![allow(dead_code)]

use gradstack_core::{AutogradError, Graph, NodeId};

/// Builds `f(w, x, b) = relu(w * x + b) * exp(w) / (x + 2)`, a small graph
/// where `w` feeds three different consumers.
pub fn build_shared_weight_graph(
    graph: &mut Graph,
    w: NodeId,
    x: NodeId,
    b: NodeId,
) -> Result<NodeId, AutogradError> {
    let wx = graph.mul(w, x)?;
    let pre = graph.add(wx, b)?;
    let act = graph.relu(pre)?;
    let ew = graph.exp(w)?;
    let num = graph.mul(act, ew)?;
    let two = graph.leaf(2.0);
    let den = graph.add(x, two)?;
    graph.div(num, den)
}

/// Plain-f64 reference for `build_shared_weight_graph`.
pub fn shared_weight_reference(w: f64, x: f64, b: f64) -> f64 {
    (w * x + b).max(0.0) * w.exp() / (x + 2.0)
}

/// Central finite difference of a plain function.
pub fn central_difference<F: Fn(f64) -> f64>(f: F, x: f64, eps: f64) -> f64 {
    (f(x + eps) - f(x - eps)) / (2.0 * eps)
}
