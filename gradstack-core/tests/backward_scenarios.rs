use approx::assert_relative_eq;
use gradstack_core::{AutogradError, Graph};

mod common;
use common::{build_shared_weight_graph, central_difference, shared_weight_reference};

#[test]
fn test_multiply_scenario() -> Result<(), AutogradError> {
    let mut graph = Graph::new();
    let a = graph.leaf(2.0);
    let b = graph.leaf(3.0);
    let c = graph.mul(a, b)?;
    graph.backward(c)?;
    assert_eq!(graph.value(c)?, 6.0);
    assert_eq!(graph.grad(a)?, 3.0);
    assert_eq!(graph.grad(b)?, 2.0);
    Ok(())
}

#[test]
fn test_relu_scenario() -> Result<(), AutogradError> {
    let mut graph = Graph::new();
    let a = graph.leaf(-1.0);
    let r = graph.relu(a)?;
    graph.backward(r)?;
    assert_eq!(graph.value(r)?, 0.0);
    assert_eq!(graph.grad(a)?, 0.0);
    Ok(())
}

#[test]
fn test_square_scenario() -> Result<(), AutogradError> {
    let mut graph = Graph::new();
    let a = graph.leaf(2.0);
    let b = graph.mul(a, a)?;
    graph.backward(b)?;
    assert_eq!(graph.value(b)?, 4.0);
    assert_eq!(graph.grad(a)?, 4.0);
    Ok(())
}

#[test]
fn test_divide_scenario() -> Result<(), AutogradError> {
    let mut graph = Graph::new();
    let a = graph.leaf(4.0);
    let b = graph.leaf(2.0);
    let d = graph.div(a, b)?;
    graph.backward(d)?;
    assert_eq!(graph.value(d)?, 2.0);
    assert_eq!(graph.grad(a)?, 0.5);
    assert_eq!(graph.grad(b)?, -1.0);
    Ok(())
}

#[test]
fn test_divide_by_zero_scenario() {
    let mut graph = Graph::new();
    let a = graph.leaf(4.0);
    let zero = graph.leaf(0.0);
    let before = graph.pass_len();
    assert_eq!(graph.div(a, zero), Err(AutogradError::DivisionByZero));
    assert_eq!(graph.pass_len(), before);
}

#[test]
fn test_shared_ancestor_sums_paths() -> Result<(), AutogradError> {
    // f = w*x + w*y, both products feed the output: df/dw = x + y.
    let mut graph = Graph::new();
    let w = graph.leaf(1.5);
    let x = graph.leaf(2.0);
    let y = graph.leaf(-5.0);
    let wx = graph.mul(w, x)?;
    let wy = graph.mul(w, y)?;
    let f = graph.add(wx, wy)?;
    graph.backward(f)?;
    assert_eq!(graph.grad(w)?, -3.0);
    assert_eq!(graph.grad(x)?, 1.5);
    assert_eq!(graph.grad(y)?, 1.5);
    Ok(())
}

#[test]
fn test_shared_weight_matches_finite_difference() -> Result<(), AutogradError> {
    let (w0, x0, b0) = (0.8, 1.5, -0.2);
    let mut graph = Graph::new();
    let w = graph.leaf(w0);
    let x = graph.leaf(x0);
    let b = graph.leaf(b0);
    let f = build_shared_weight_graph(&mut graph, w, x, b)?;
    assert_relative_eq!(graph.value(f)?, shared_weight_reference(w0, x0, b0), epsilon = 1e-12);

    graph.backward(f)?;
    let eps = 1e-6;
    let dw = central_difference(|v| shared_weight_reference(v, x0, b0), w0, eps);
    let dx = central_difference(|v| shared_weight_reference(w0, v, b0), x0, eps);
    let db = central_difference(|v| shared_weight_reference(w0, x0, v), b0, eps);
    assert_relative_eq!(graph.grad(w)?, dw, epsilon = 1e-6);
    assert_relative_eq!(graph.grad(x)?, dx, epsilon = 1e-6);
    assert_relative_eq!(graph.grad(b)?, db, epsilon = 1e-6);
    Ok(())
}

#[test]
fn test_repeated_passes_are_deterministic() -> Result<(), AutogradError> {
    let mut graph = Graph::new();
    let w = graph.parameter(0.8);
    let b = graph.parameter(-0.2);

    let mut runs = Vec::new();
    for _ in 0..3 {
        let x = graph.leaf(1.5);
        let f = build_shared_weight_graph(&mut graph, w, x, b)?;
        graph.backward(f)?;
        runs.push((graph.value(f)?, graph.grad(w)?, graph.grad(b)?, graph.grad(x)?));
        graph.zero_grad_and_release();
    }
    assert_eq!(runs[0], runs[1]);
    assert_eq!(runs[1], runs[2]);
    Ok(())
}

#[test]
fn test_reset_then_backward_matches_fresh_run() -> Result<(), AutogradError> {
    let mut graph = Graph::new();
    let w = graph.leaf(0.8);
    let x = graph.leaf(1.5);
    let b = graph.leaf(-0.2);
    let f = build_shared_weight_graph(&mut graph, w, x, b)?;

    graph.backward(f)?;
    let fresh = (graph.grad(w)?, graph.grad(x)?, graph.grad(b)?);

    graph.zero_grad();
    for (_, node) in graph.pass_arena().iter() {
        assert_eq!(node.grad(), 0.0);
    }
    graph.backward(f)?;
    assert_eq!((graph.grad(w)?, graph.grad(x)?, graph.grad(b)?), fresh);
    Ok(())
}
