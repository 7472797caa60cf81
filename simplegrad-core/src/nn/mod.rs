//! # Neural Network Building Blocks (`nn`)
//!
//! Neurons, layers and a multilayer perceptron whose trainable parameters are
//! ordinary leaves of a [`Graph`](crate::Graph). A forward pass records new
//! nodes on top of the parameters; [`Mlp::step`] is the only operation that
//! rewrites parameter values.

pub mod activation;
pub mod config;
pub mod init;
pub mod layer;
pub mod mlp;
pub mod module;
pub mod neuron;

pub use activation::Activation;
pub use config::{LayerConfig, MlpConfig};
pub use layer::Layer;
pub use mlp::Mlp;
pub use module::Module;
pub use neuron::Neuron;
