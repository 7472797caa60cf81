use crate::error::SimplegradError;
use crate::nn::activation::Activation;

/// Width and activation of one layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerConfig {
    pub width: usize,
    pub activation: Activation,
}

/// Architecture of an [`Mlp`](crate::Mlp): input width plus one entry per
/// layer. Fixed once the network is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MlpConfig {
    pub input_width: usize,
    pub layers: Vec<LayerConfig>,
}

impl MlpConfig {
    /// Hidden layers use [`Activation::Relu`], the last layer
    /// [`Activation::Identity`].
    pub fn new(input_width: usize, sizes: &[usize]) -> Self {
        let last = sizes.len().saturating_sub(1);
        let layers = sizes
            .iter()
            .enumerate()
            .map(|(i, &width)| LayerConfig {
                width,
                activation: if i == last {
                    Activation::Identity
                } else {
                    Activation::Relu
                },
            })
            .collect();
        MlpConfig {
            input_width,
            layers,
        }
    }

    /// Overrides the activation of layer `layer`.
    pub fn with_activation(
        mut self,
        layer: usize,
        activation: Activation,
    ) -> Result<Self, SimplegradError> {
        let count = self.layers.len();
        match self.layers.get_mut(layer) {
            Some(config) => config.activation = activation,
            None => {
                return Err(SimplegradError::InvalidArchitecture(format!(
                    "no layer {} to configure ({} layers)",
                    layer, count
                )))
            }
        }
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), SimplegradError> {
        if self.input_width == 0 {
            return Err(SimplegradError::InvalidArchitecture(
                "input width must be non-zero".to_string(),
            ));
        }
        if self.layers.is_empty() {
            return Err(SimplegradError::InvalidArchitecture(
                "at least one layer is required".to_string(),
            ));
        }
        if let Some(index) = self.layers.iter().position(|l| l.width == 0) {
            return Err(SimplegradError::InvalidArchitecture(format!(
                "layer {} has zero width",
                index
            )));
        }
        Ok(())
    }

    /// Input width of every layer, in order.
    pub(crate) fn fan_ins(&self) -> impl Iterator<Item = usize> + '_ {
        std::iter::once(self.input_width).chain(self.layers.iter().map(|l| l.width))
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
