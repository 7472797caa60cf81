use crate::autograd::graph::Graph;
use crate::autograd::value::Value;
use crate::config::GraphConfig;
use crate::error::SimplegradError;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: Analytical grad {analytical:?} != Numerical grad {numerical:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical: f64,
        numerical: f64,
        difference: f64,
    },
    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNotFinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },
    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNotFinite { input_index: usize, value: f64 },
    #[error("Gradient check needs a finite positive {name}, got {value}")]
    InvalidStep { name: &'static str, value: f64 },
    #[error("Engine error during gradient check: {0}")]
    Engine(SimplegradError),
}

impl From<SimplegradError> for GradCheckError {
    fn from(err: SimplegradError) -> Self {
        GradCheckError::Engine(err)
    }
}

/// Compares the gradients computed by [`Value::backward`] with central finite
/// differences.
///
/// `func` builds a scalar output from one leaf per entry of `inputs`. It is
/// called on a fresh [`Graph`] for every evaluation, so it must be a pure
/// function of the leaves it receives.
///
/// For each input `x_i` the numerical gradient is
/// `(f(x + e_i * epsilon) - f(x - e_i * epsilon)) / (2 * epsilon)`. The check
/// passes when it is within `tolerance` of the analytical gradient, either
/// absolutely or relative to the larger magnitude.
///
/// ```rust
/// use simplegrad_core::autograd::grad_check::check_grad;
///
/// check_grad(|_, x| x[0] * x[1] + x[0].pow(2.0), &[1.5, -0.5], 1e-6, 1e-6).unwrap();
/// ```
pub fn check_grad<F>(
    func: F,
    inputs: &[f64],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: for<'g> Fn(&'g Graph, &[Value<'g>]) -> Value<'g>,
{
    check_grad_with_config(GraphConfig::default(), func, inputs, epsilon, tolerance)
}

/// [`check_grad`] on graphs built with `config`.
pub fn check_grad_with_config<F>(
    config: GraphConfig,
    func: F,
    inputs: &[f64],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: for<'g> Fn(&'g Graph, &[Value<'g>]) -> Value<'g>,
{
    for (name, value) in [("epsilon", epsilon), ("tolerance", tolerance)] {
        if !(value.is_finite() && value > 0.0) {
            return Err(GradCheckError::InvalidStep { name, value });
        }
    }

    // --- Analytical gradients ---
    let graph = Graph::with_config(config)?;
    let leaves: Vec<Value<'_>> = inputs.iter().map(|&x| graph.value(x)).collect();
    func(&graph, &leaves).backward();
    let analytical: Vec<f64> = leaves.iter().map(|leaf| leaf.grad()).collect();

    let evaluate = |point: &[f64]| -> Result<f64, GradCheckError> {
        let graph = Graph::with_config(config)?;
        let leaves: Vec<Value<'_>> = point.iter().map(|&x| graph.value(x)).collect();
        let out = func(&graph, &leaves).data();
        Ok(out)
    };

    // --- Numerical gradients ---
    let mut point = inputs.to_vec();
    for (input_index, &analytical_grad) in analytical.iter().enumerate() {
        let original = point[input_index];
        point[input_index] = original + epsilon;
        let loss_plus = evaluate(&point)?;
        point[input_index] = original - epsilon;
        let loss_minus = evaluate(&point)?;
        point[input_index] = original;

        let numerical = (loss_plus - loss_minus) / (2.0 * epsilon);
        if !numerical.is_finite() {
            return Err(GradCheckError::NumericalGradNotFinite {
                input_index,
                loss_plus,
                loss_minus,
            });
        }
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNotFinite {
                input_index,
                value: analytical_grad,
            });
        }
        if !approx::relative_eq!(
            analytical_grad,
            numerical,
            epsilon = tolerance,
            max_relative = tolerance
        ) {
            return Err(GradCheckError::GradientMismatch {
                input_index,
                analytical: analytical_grad,
                numerical,
                difference: (analytical_grad - numerical).abs(),
            });
        }
    }
    log::debug!("check_grad: {} inputs within tolerance {}", inputs.len(), tolerance);
    Ok(())
}

#[cfg(test)]
#[path = "grad_check_test.rs"]
mod tests;
