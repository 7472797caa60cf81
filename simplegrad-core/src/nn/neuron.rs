use crate::autograd::graph::Graph;
use crate::autograd::value::Value;
use crate::error::SimplegradError;
use crate::nn::activation::Activation;
use crate::nn::init;
use crate::nn::module::Module;
use rand::Rng;
use std::fmt;

/// A single unit: `activation(sum_i(w_i * x_i) + b)`.
#[derive(Debug, Clone)]
pub struct Neuron<'g> {
    weights: Vec<Value<'g>>,
    bias: Value<'g>,
    activation: Activation,
}

impl<'g> Neuron<'g> {
    /// Creates a neuron with `nin` Xavier-uniform weights and a zero bias.
    pub fn new<R: Rng + ?Sized>(
        graph: &'g Graph,
        nin: usize,
        activation: Activation,
        rng: &mut R,
    ) -> Self {
        let weights = init::xavier_uniform(nin, rng);
        Self::from_parameters(graph, &weights, 0.0, activation)
    }

    /// Creates a neuron with the given initial parameter values.
    pub fn from_parameters(
        graph: &'g Graph,
        weights: &[f64],
        bias: f64,
        activation: Activation,
    ) -> Self {
        Neuron {
            weights: weights.iter().map(|&w| graph.value(w)).collect(),
            bias: graph.value(bias),
            activation,
        }
    }

    pub fn weights(&self) -> &[Value<'g>] {
        &self.weights
    }

    pub fn bias(&self) -> Value<'g> {
        self.bias
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }

    pub fn input_width(&self) -> usize {
        self.weights.len()
    }
}

impl<'g> Module<'g> for Neuron<'g> {
    type Output = Value<'g>;

    fn forward(&self, inputs: &[Value<'g>]) -> Result<Value<'g>, SimplegradError> {
        if inputs.len() != self.weights.len() {
            return Err(SimplegradError::ShapeMismatch {
                expected: self.weights.len(),
                actual: inputs.len(),
                operation: "Neuron::forward".to_string(),
            });
        }
        let weighted = self
            .weights
            .iter()
            .zip(inputs)
            .map(|(&w, &x)| w * x)
            .reduce(|acc, term| acc + term);
        let pre_activation = match weighted {
            Some(sum) => sum + self.bias,
            None => self.bias,
        };
        Ok(self.activation.apply(pre_activation))
    }

    /// Weights in input order, then the bias.
    fn parameters(&self) -> Vec<Value<'g>> {
        let mut params = self.weights.clone();
        params.push(self.bias);
        params
    }
}

impl fmt::Display for Neuron<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Neuron(")?;
        for w in &self.weights {
            write!(f, "{}, ", w.data())?;
        }
        write!(f, "b = {})", self.bias.data())
    }
}

#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests;
