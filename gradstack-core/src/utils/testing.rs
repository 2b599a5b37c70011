use crate::error::AutogradError;
use crate::graph::Graph;
use crate::node::NodeId;

/// Checks that `actual` is within `tolerance` of `expected`.
/// Panics with both values otherwise.
pub fn check_near(actual: f64, expected: f64, tolerance: f64) {
    let diff = (actual - expected).abs();
    if !(diff <= tolerance) {
        panic!(
            "Value mismatch: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
            actual, expected, diff, tolerance
        );
    }
}

/// Checks the gradient of every listed node against `expected`, in order.
pub fn check_grads_near(
    graph: &Graph,
    nodes: &[NodeId],
    expected: &[f64],
    tolerance: f64,
) -> Result<(), AutogradError> {
    assert_eq!(nodes.len(), expected.len(), "Length mismatch");
    for (i, (&id, &e)) in nodes.iter().zip(expected.iter()).enumerate() {
        let actual = graph.grad(id)?;
        let diff = (actual - e).abs();
        if !(diff <= tolerance) {
            panic!(
                "Grad mismatch at index {} ({}): actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                i, id, actual, e, diff, tolerance
            );
        }
    }
    Ok(())
}
