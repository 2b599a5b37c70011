use crate::error::AutogradError;
use crate::graph::Graph;
use crate::node::NodeId;
use approx::relative_eq;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: Analytical grad {analytical_grad:?} != Numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },

    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(AutogradError),

    #[error("Backward pass execution failed during gradient check: {0}")]
    BackwardPassError(AutogradError),

    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNotFinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },

    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNotFinite { input_index: usize, value: f64 },

    #[error("Graph error during gradient check: {0}")]
    GraphError(AutogradError),
}

// Map AutogradError to GradCheckError::GraphError
impl From<AutogradError> for GradCheckError {
    fn from(err: AutogradError) -> Self {
        GradCheckError::GraphError(err)
    }
}

/// Evaluates `func` on a fresh graph whose leaves hold `inputs`.
fn evaluate<F>(func: &F, inputs: &[f64]) -> Result<(Graph, Vec<NodeId>, NodeId), GradCheckError>
where
    F: Fn(&mut Graph, &[NodeId]) -> Result<NodeId, AutogradError>,
{
    let mut graph = Graph::new();
    let leaves: Vec<NodeId> = inputs.iter().map(|&v| graph.leaf(v)).collect();
    let output = func(&mut graph, &leaves).map_err(GradCheckError::ForwardPassError)?;
    Ok((graph, leaves, output))
}

/// Checks analytical gradients against numerical gradients using central finite differences.
///
/// `func` receives a fresh graph and one leaf per entry of `inputs` and must
/// return the scalar output node. For every input `x_i` the analytic
/// `d out / d x_i` is compared with `(f(x_i + eps) - f(x_i - eps)) / 2 eps`.
/// The two agree if they are within `tolerance` in absolute terms or relative
/// to the larger magnitude.
pub fn check_grad<F>(
    func: F,
    inputs: &[f64],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&mut Graph, &[NodeId]) -> Result<NodeId, AutogradError>,
{
    // --- 1. Initial Forward and Backward Pass ---
    let (mut graph, leaves, output) = evaluate(&func, inputs)?;
    graph
        .backward(output)
        .map_err(GradCheckError::BackwardPassError)?;

    // --- 2. Compare per input ---
    for (i, &leaf) in leaves.iter().enumerate() {
        let analytical_grad = graph.grad(leaf)?;
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNotFinite {
                input_index: i,
                value: analytical_grad,
            });
        }

        let loss_plus = {
            let mut perturbed = inputs.to_vec();
            perturbed[i] += epsilon;
            let (g, _, out) = evaluate(&func, &perturbed)?;
            g.value(out)?
        };
        let loss_minus = {
            let mut perturbed = inputs.to_vec();
            perturbed[i] -= epsilon;
            let (g, _, out) = evaluate(&func, &perturbed)?;
            g.value(out)?
        };

        let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);
        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNotFinite {
                input_index: i,
                loss_plus,
                loss_minus,
            });
        }

        if !relative_eq!(
            analytical_grad,
            numerical_grad,
            epsilon = tolerance,
            max_relative = tolerance
        ) {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical_grad,
                numerical_grad,
                difference: (analytical_grad - numerical_grad).abs(),
            });
        }
    }

    Ok(())
}
