use super::*;
use crate::autograd::grad_check::check_grad;
use crate::error::AutogradError;
use crate::utils::testing::check_near;

#[test]
fn test_add_forward() -> Result<(), AutogradError> {
    let mut graph = Graph::new();
    let a = graph.leaf(1.5);
    let b = graph.leaf(-4.0);
    let c = add_op(&mut graph, a, b)?;
    assert_eq!(graph.value(c)?, -2.5);
    assert_eq!(graph.grad(c)?, 0.0);
    assert_eq!(graph.node(c)?.ancestors(), &[a, b]);
    assert_eq!(graph.pass_len(), 3);
    Ok(())
}

#[test]
fn test_add_backward_simple() -> Result<(), AutogradError> {
    let mut graph = Graph::new();
    let a = graph.leaf(2.0);
    let b = graph.leaf(3.0);
    let c = add_op(&mut graph, a, b)?;
    graph.backward(c)?;
    check_near(graph.grad(a)?, 1.0, 1e-12);
    check_near(graph.grad(b)?, 1.0, 1e-12);
    Ok(())
}

#[test]
fn test_add_same_operand_twice() -> Result<(), AutogradError> {
    let mut graph = Graph::new();
    let a = graph.leaf(3.0);
    let c = add_op(&mut graph, a, a)?;
    graph.backward(c)?;
    assert_eq!(graph.value(c)?, 6.0);
    assert_eq!(graph.grad(a)?, 2.0);
    Ok(())
}

#[test]
fn test_add_with_parameter_operand() -> Result<(), AutogradError> {
    let mut graph = Graph::new();
    let w = graph.parameter(0.25);
    let x = graph.leaf(4.0);
    let y = add_op(&mut graph, w, x)?;
    graph.backward(y)?;
    assert_eq!(graph.grad(w)?, 1.0);
    // The result always lands in the pass arena.
    assert_eq!(graph.parameter_len(), 1);
    assert_eq!(graph.pass_len(), 2);
    Ok(())
}

#[test]
fn test_add_rejects_stale_operand() {
    let mut graph = Graph::new();
    let a = graph.leaf(1.0);
    graph.release_pass();
    let b = graph.leaf(2.0);
    let result = add_op(&mut graph, a, b);
    assert!(matches!(result, Err(AutogradError::StaleNode { .. })));
    assert_eq!(graph.pass_len(), 1);
}

#[test]
fn test_add_grad_check() {
    let func = |g: &mut Graph, x: &[NodeId]| add_op(g, x[0], x[1]);
    check_grad(func, &[0.3, -1.7], 1e-6, 1e-6).unwrap();
}
