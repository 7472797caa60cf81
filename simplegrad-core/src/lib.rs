//! Scalar reverse-mode automatic differentiation.
//!
//! Expressions over [`Value`] handles record a computation graph inside a
//! [`Graph`] arena. Calling [`Value::backward`] on a result walks that graph
//! once, root first, and accumulates the gradient of the root into every node
//! it depends on. The [`nn`] module builds neurons, layers and a multilayer
//! perceptron whose parameters are ordinary graph nodes.
//!
//! ```rust
//! use simplegrad_core::Graph;
//!
//! let graph = Graph::new();
//! let a = graph.value(2.0);
//! let b = graph.value(3.0);
//! let z = a * b + a;
//! z.backward();
//! assert_eq!(z.data(), 8.0);
//! assert_eq!(a.grad(), 4.0);
//! assert_eq!(b.grad(), 2.0);
//! ```

pub mod autograd;
pub mod config;
pub mod error;
pub mod nn;
pub mod ops;
pub mod utils;

pub use autograd::{Checkpoint, Graph, NodeId, Op, Value};
pub use config::{GraphConfig, PowDomain, DIV_EPSILON};
pub use error::SimplegradError;
pub use nn::{Activation, Layer, LayerConfig, Mlp, MlpConfig, Module, Neuron};

// Re-export traits required by public functions
pub use num_traits;
