use crate::autograd::graph::Graph;
use crate::autograd::value::Value;
use crate::error::SimplegradError;
use crate::nn::activation::Activation;
use crate::nn::module::Module;
use crate::nn::neuron::Neuron;
use rand::Rng;
use std::fmt;

/// `nout` neurons reading the same `nin` inputs.
#[derive(Debug, Clone)]
pub struct Layer<'g> {
    neurons: Vec<Neuron<'g>>,
    input_width: usize,
}

impl<'g> Layer<'g> {
    pub fn new<R: Rng + ?Sized>(
        graph: &'g Graph,
        nin: usize,
        nout: usize,
        activation: Activation,
        rng: &mut R,
    ) -> Self {
        let neurons = (0..nout)
            .map(|_| Neuron::new(graph, nin, activation, &mut *rng))
            .collect();
        Layer {
            neurons,
            input_width: nin,
        }
    }

    /// Builds a layer from existing neurons.
    ///
    /// # Errors
    /// Every neuron must read `nin` inputs.
    pub fn from_neurons(nin: usize, neurons: Vec<Neuron<'g>>) -> Result<Self, SimplegradError> {
        if let Some(bad) = neurons.iter().find(|n| n.input_width() != nin) {
            return Err(SimplegradError::ShapeMismatch {
                expected: nin,
                actual: bad.input_width(),
                operation: "Layer::from_neurons".to_string(),
            });
        }
        Ok(Layer {
            neurons,
            input_width: nin,
        })
    }

    pub fn neurons(&self) -> &[Neuron<'g>] {
        &self.neurons
    }

    pub fn input_width(&self) -> usize {
        self.input_width
    }

    pub fn output_width(&self) -> usize {
        self.neurons.len()
    }
}

impl<'g> Module<'g> for Layer<'g> {
    type Output = Vec<Value<'g>>;

    /// One output per neuron, in neuron order.
    fn forward(&self, inputs: &[Value<'g>]) -> Result<Vec<Value<'g>>, SimplegradError> {
        if inputs.len() != self.input_width {
            return Err(SimplegradError::ShapeMismatch {
                expected: self.input_width,
                actual: inputs.len(),
                operation: "Layer::forward".to_string(),
            });
        }
        self.neurons.iter().map(|n| n.forward(inputs)).collect()
    }

    fn parameters(&self) -> Vec<Value<'g>> {
        self.neurons.iter().flat_map(|n| n.parameters()).collect()
    }
}

impl fmt::Display for Layer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Layer(")?;
        for neuron in &self.neurons {
            writeln!(f, "  {}", neuron)?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
#[path = "layer_test.rs"]
mod tests;
