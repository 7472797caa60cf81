use crate::autograd::graph::Graph;
use crate::autograd::value::Value;
use crate::error::SimplegradError;
use crate::nn::config::MlpConfig;
use crate::nn::layer::Layer;
use crate::nn::module::Module;
use num_traits::ToPrimitive;
use rand::Rng;
use std::fmt;

/// Multilayer perceptron: layers applied in sequence.
///
/// Parameters are created in `graph` at construction and live as long as the
/// graph. Take a [`Checkpoint`](crate::Checkpoint) right after construction to
/// release each forward pass's transient nodes once it has been consumed.
///
/// ```rust
/// use simplegrad_core::{Graph, Mlp, Module};
///
/// let graph = Graph::new();
/// let mlp = Mlp::new(&graph, 3, &[4, 1]).unwrap();
/// assert_eq!(mlp.num_parameters(), 4 * (3 + 1) + (4 + 1));
///
/// let out = mlp.forward_raw(&[1.0, -2.0, 0.5]).unwrap();
/// assert_eq!(out.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Mlp<'g> {
    graph: &'g Graph,
    layers: Vec<Layer<'g>>,
    config: MlpConfig,
}

impl<'g> Mlp<'g> {
    /// Builds a network with default activations, seeded from the thread RNG.
    pub fn new(graph: &'g Graph, nin: usize, sizes: &[usize]) -> Result<Self, SimplegradError> {
        Self::with_rng(graph, nin, sizes, &mut rand::thread_rng())
    }

    /// Builds a network with default activations drawing weights from `rng`.
    pub fn with_rng<R: Rng + ?Sized>(
        graph: &'g Graph,
        nin: usize,
        sizes: &[usize],
        rng: &mut R,
    ) -> Result<Self, SimplegradError> {
        Self::with_config(graph, MlpConfig::new(nin, sizes), rng)
    }

    pub fn with_config<R: Rng + ?Sized>(
        graph: &'g Graph,
        config: MlpConfig,
        rng: &mut R,
    ) -> Result<Self, SimplegradError> {
        config.validate()?;
        let layers: Vec<Layer<'g>> = config
            .fan_ins()
            .zip(&config.layers)
            .map(|(nin, layer)| {
                Layer::new(graph, nin, layer.width, layer.activation, &mut *rng)
            })
            .collect();
        let mlp = Mlp {
            graph,
            layers,
            config,
        };
        log::debug!(
            "Mlp: built {} layers, {} parameters",
            mlp.layers.len(),
            mlp.num_parameters()
        );
        Ok(mlp)
    }

    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    pub fn layers(&self) -> &[Layer<'g>] {
        &self.layers
    }

    pub fn config(&self) -> &MlpConfig {
        &self.config
    }

    pub fn input_width(&self) -> usize {
        self.config.input_width
    }

    pub fn output_width(&self) -> usize {
        self.layers.last().map_or(0, Layer::output_width)
    }

    /// Forward pass on plain numbers; each becomes a fresh leaf in the graph.
    ///
    /// # Errors
    /// [`SimplegradError::ShapeMismatch`] for a wrong input count,
    /// [`SimplegradError::InvalidInput`] for a number that has no `f64` value.
    pub fn forward_raw<T: ToPrimitive>(
        &self,
        inputs: &[T],
    ) -> Result<Vec<Value<'g>>, SimplegradError> {
        if inputs.len() != self.input_width() {
            return Err(SimplegradError::ShapeMismatch {
                expected: self.input_width(),
                actual: inputs.len(),
                operation: "Mlp::forward_raw".to_string(),
            });
        }
        let leaves = inputs
            .iter()
            .enumerate()
            .map(|(index, x)| match x.to_f64() {
                Some(v) => Ok(self.graph.value(v)),
                None => {
                    log::warn!("Mlp: input {} has no f64 representation", index);
                    Err(SimplegradError::InvalidInput {
                        index,
                        reason: "value is not representable as f64".to_string(),
                    })
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        self.forward(&leaves)
    }

    /// Gradient-descent update `p -= lr * p.grad` on every parameter.
    ///
    /// Gradients are left as they are; call [`Module::zero_grad`] before the
    /// next batch.
    pub fn step(&self, lr: f64) {
        let mut non_finite = 0usize;
        let params = self.parameters();
        for param in &params {
            let grad = param.descend(lr);
            if !grad.is_finite() {
                non_finite += 1;
            }
        }
        if non_finite > 0 {
            log::warn!(
                "Mlp::step: {} of {} parameters had a non-finite gradient",
                non_finite,
                params.len()
            );
        }
        log::debug!("Mlp::step: lr={} over {} parameters", lr, params.len());
    }
}

impl<'g> Module<'g> for Mlp<'g> {
    type Output = Vec<Value<'g>>;

    fn forward(&self, inputs: &[Value<'g>]) -> Result<Vec<Value<'g>>, SimplegradError> {
        if inputs.len() != self.input_width() {
            return Err(SimplegradError::ShapeMismatch {
                expected: self.input_width(),
                actual: inputs.len(),
                operation: "Mlp::forward".to_string(),
            });
        }
        let mut activations = inputs.to_vec();
        for layer in &self.layers {
            activations = layer.forward(&activations)?;
        }
        Ok(activations)
    }

    /// Layer-major, then neuron-major; each neuron's weights then its bias.
    fn parameters(&self) -> Vec<Value<'g>> {
        self.layers.iter().flat_map(|l| l.parameters()).collect()
    }

    fn zero_grad(&self) {
        let params = self.parameters();
        for param in &params {
            param.zero_grad();
        }
        log::debug!("Mlp::zero_grad: reset {} parameters", params.len());
    }
}

impl fmt::Display for Mlp<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Mlp(")?;
        for layer in &self.layers {
            writeln!(f, "{}", layer)?;
        }
        writeln!(f, ")")?;
        write!(f, "Total Parameters: {}", self.num_parameters())
    }
}

#[cfg(test)]
#[path = "mlp_test.rs"]
mod tests;
