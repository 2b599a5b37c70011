use crate::arena::Arena;
use crate::autograd;
use crate::config::GraphConfig;
use crate::error::AutogradError;
use crate::node::{Node, NodeId, Region};
use crate::ops;
use log::debug;

/// A computation graph split over two arenas.
///
/// * `parameters` holds long-lived nodes (weights, biases) shared by every
///   forward pass.
/// * `pass` holds the leaves and intermediates of the current forward pass and
///   is released in bulk between passes.
///
/// Ancestor links may cross from the pass arena into the parameter arena, never
/// the other way round: operations always push into `pass`.
#[derive(Debug)]
pub struct Graph {
    config: GraphConfig,
    parameters: Arena,
    pass: Arena,
}

impl Default for Graph {
    fn default() -> Self {
        Graph::new()
    }
}

impl Graph {
    pub fn new() -> Self {
        Graph::with_config(GraphConfig::default())
    }

    pub fn with_config(config: GraphConfig) -> Self {
        Graph {
            parameters: Arena::with_capacity(Region::Parameters, config.parameter_capacity),
            pass: Arena::with_capacity(Region::Pass, config.pass_capacity),
            config,
        }
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    // --- Node creation ---

    /// Creates a leaf in the per-pass arena (an input or a constant).
    pub fn leaf(&mut self, value: f64) -> NodeId {
        self.pass.push(Node::leaf(value))
    }

    /// Creates a leaf in the parameter arena. It survives `release_pass`.
    pub fn parameter(&mut self, value: f64) -> NodeId {
        self.parameters.push(Node::leaf(value))
    }

    pub(crate) fn push(&mut self, node: Node) -> NodeId {
        self.pass.push(node)
    }

    // --- Access ---

    fn arena(&self, region: Region) -> &Arena {
        match region {
            Region::Parameters => &self.parameters,
            Region::Pass => &self.pass,
        }
    }

    fn arena_mut(&mut self, region: Region) -> &mut Arena {
        match region {
            Region::Parameters => &mut self.parameters,
            Region::Pass => &mut self.pass,
        }
    }

    pub fn node(&self, id: NodeId) -> Result<&Node, AutogradError> {
        self.arena(id.region).get(id)
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> Result<&mut Node, AutogradError> {
        self.arena_mut(id.region).get_mut(id)
    }

    pub fn value(&self, id: NodeId) -> Result<f64, AutogradError> {
        Ok(self.node(id)?.value)
    }

    pub fn grad(&self, id: NodeId) -> Result<f64, AutogradError> {
        Ok(self.node(id)?.grad)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.node(id).is_ok()
    }

    /// Adds `delta` into the gradient of `id`.
    pub(crate) fn accumulate(&mut self, id: NodeId, delta: f64) -> Result<(), AutogradError> {
        self.node_mut(id)?.grad += delta;
        Ok(())
    }

    pub(crate) fn set_grad(&mut self, id: NodeId, grad: f64) -> Result<(), AutogradError> {
        self.node_mut(id)?.grad = grad;
        Ok(())
    }

    pub fn pass_len(&self) -> usize {
        self.pass.len()
    }

    pub fn parameter_len(&self) -> usize {
        self.parameters.len()
    }

    /// Handles of every parameter, in registration order.
    pub fn parameters(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.parameters.ids()
    }

    pub fn pass_arena(&self) -> &Arena {
        &self.pass
    }

    pub fn parameter_arena(&self) -> &Arena {
        &self.parameters
    }

    // --- Operations ---

    pub fn add(&mut self, a: NodeId, b: NodeId) -> Result<NodeId, AutogradError> {
        ops::add_op(self, a, b)
    }

    pub fn sub(&mut self, a: NodeId, b: NodeId) -> Result<NodeId, AutogradError> {
        ops::sub_op(self, a, b)
    }

    pub fn mul(&mut self, a: NodeId, b: NodeId) -> Result<NodeId, AutogradError> {
        ops::mul_op(self, a, b)
    }

    pub fn div(&mut self, a: NodeId, b: NodeId) -> Result<NodeId, AutogradError> {
        ops::div_op(self, a, b)
    }

    pub fn relu(&mut self, a: NodeId) -> Result<NodeId, AutogradError> {
        ops::relu_op(self, a)
    }

    pub fn exp(&mut self, a: NodeId) -> Result<NodeId, AutogradError> {
        ops::exp_op(self, a)
    }

    pub fn sum(&mut self, operands: &[NodeId]) -> Result<NodeId, AutogradError> {
        ops::sum_op(self, operands)
    }

    pub fn softmax(&mut self, logits: &[NodeId]) -> Result<Vec<NodeId>, AutogradError> {
        ops::softmax_op(self, logits)
    }

    // --- Differentiation ---

    /// Runs the backward pass from `root`, accumulating into every ancestor's grad.
    pub fn backward(&mut self, root: NodeId) -> Result<(), AutogradError> {
        autograd::backward(self, root)
    }

    /// Post-order over the nodes reachable from `root` (ancestors first).
    pub fn topological_order(&self, root: NodeId) -> Result<Vec<NodeId>, AutogradError> {
        autograd::topological_order(self, root)
    }

    // --- Lifecycle ---

    /// Zeroes the gradient of each listed node.
    ///
    /// All handles are validated first, so a bad handle leaves every grad as it was.
    pub fn reset_gradients(&mut self, nodes: &[NodeId]) -> Result<(), AutogradError> {
        for &id in nodes {
            self.node(id)?;
        }
        for &id in nodes {
            self.set_grad(id, 0.0)?;
        }
        Ok(())
    }

    /// Zeroes every gradient in both arenas.
    pub fn zero_grad(&mut self) {
        self.parameters.zero_grad();
        self.pass.zero_grad();
    }

    /// Drops every node of the current forward pass. Parameters are kept.
    pub fn release_pass(&mut self) -> usize {
        self.pass.release()
    }

    /// Zeroes the parameter gradients and releases the per-pass arena.
    ///
    /// This is the once-per-training-step reset. Returns the number of
    /// per-pass nodes released.
    pub fn zero_grad_and_release(&mut self) -> usize {
        self.parameters.zero_grad();
        let released = self.pass.release();
        debug!(
            "Graph: zeroed {} parameter grads, released {} pass nodes",
            self.parameters.len(),
            released
        );
        released
    }

    /// Overwrites the value of a parameter, e.g. after an optimizer step.
    ///
    /// Only allowed while the pass arena is empty: live intermediates were
    /// computed from the old value and their derivative rules read it.
    pub fn set_parameter_value(&mut self, id: NodeId, value: f64) -> Result<(), AutogradError> {
        if id.region != Region::Parameters {
            return Err(AutogradError::NotAParameter(id));
        }
        if !self.pass.is_empty() {
            return Err(AutogradError::GraphInUse {
                live_nodes: self.pass.len(),
            });
        }
        self.parameters.get_mut(id)?.value = value;
        Ok(())
    }
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
