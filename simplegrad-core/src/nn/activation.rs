use crate::autograd::value::Value;
use std::fmt;

/// Non-linearity applied to a neuron's weighted sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Activation {
    #[default]
    Identity,
    Relu,
}

impl Activation {
    pub fn apply<'g>(self, pre_activation: Value<'g>) -> Value<'g> {
        match self {
            Activation::Identity => pre_activation,
            Activation::Relu => pre_activation.relu(),
        }
    }
}

impl fmt::Display for Activation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Activation::Identity => f.write_str("identity"),
            Activation::Relu => f.write_str("relu"),
        }
    }
}
