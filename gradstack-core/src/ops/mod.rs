//! # Graph Operations Module (`ops`)
//!
//! Every differentiable operation lives in its own file under a category
//! submodule and follows the same layout:
//!
//! - **`xxx_op` function:** validates the operand handles, computes the forward
//!   scalar, and pushes exactly one new node into the graph's pass arena. The
//!   node's [`Op`] tag records which derivative rule applies and which
//!   operands it reads.
//! - **`xxx_backward` function:** the derivative rule. Given the node's own
//!   (already final) gradient, it adds the chain-rule contribution into each
//!   operand's gradient.
//!
//! Composite helpers ([`sum_op`], [`softmax_op`]) only chain primitive
//! operations and have no rule of their own.
//!
//! [`apply_backward`] is the single dispatcher the driver calls for each node.

pub mod activation;
pub mod arithmetic;
pub mod math_elem;
pub mod reduction;

use crate::error::AutogradError;
use crate::graph::Graph;
use crate::node::{NodeId, Op};

pub use activation::{relu_op, softmax_op};
pub use arithmetic::{add_op, div_op, mul_op, sub_op};
pub use math_elem::exp_op;
pub use reduction::sum_op;

/// Runs the derivative rule of node `id`, reading its current gradient.
///
/// The caller must have finished accumulating every downstream contribution
/// into `id` before calling this. Leaves are a no-op.
pub fn apply_backward(graph: &mut Graph, id: NodeId) -> Result<(), AutogradError> {
    let node = graph.node(id)?;
    let (op, value, grad) = (node.op, node.value, node.grad);

    match op {
        Op::Leaf => Ok(()),
        Op::Add(operands) => arithmetic::add::add_backward(graph, grad, operands),
        Op::Sub(operands) => arithmetic::sub::sub_backward(graph, grad, operands),
        Op::Mul(operands) => arithmetic::mul::mul_backward(graph, grad, operands),
        Op::Div(operands) => arithmetic::div::div_backward(graph, grad, operands),
        Op::Relu([input]) => activation::relu::relu_backward(graph, grad, input),
        Op::Exp([input]) => math_elem::exp::exp_backward(graph, grad, value, input),
    }
}
