use crate::autograd::graph::topological_order;
use crate::error::AutogradError;
use crate::graph::Graph;
use crate::node::NodeId;
use crate::ops::apply_backward;
use log::debug;

/// Performs the backward pass starting from `root`.
///
/// Seeds `root.grad = 1.0` (overwriting whatever it held), then applies each
/// node's derivative rule in reverse post-order. By the time a node is
/// reached, every consumer of it has already run, so its grad is final.
///
/// Gradients accumulate: call `Graph::zero_grad` or `Graph::reset_gradients`
/// between two backward passes over the same nodes.
///
/// # Errors
/// Returns an error if `root` does not resolve to a live node. Nodes are not
/// touched in that case.
pub fn backward(graph: &mut Graph, root: NodeId) -> Result<(), AutogradError> {
    let sorted = topological_order(graph, root)?;
    debug!(
        "backward: root {} ({}), {} reachable nodes",
        root,
        graph.node(root)?.op(),
        sorted.len()
    );

    graph.set_grad(root, 1.0)?;
    for &id in sorted.iter().rev() {
        apply_backward(graph, id)?;
    }

    debug!("backward: done from root {}", root);
    Ok(())
}
