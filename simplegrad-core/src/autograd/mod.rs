//! # Automatic Differentiation (`autograd`)
//!
//! Scalar reverse-mode differentiation over an arena of nodes.
//!
//! - [`graph`]: the [`Graph`] arena, node identities and checkpoints.
//! - [`value`]: the [`Value`] handle and its operator overloads.
//! - [`backward`]: topological ordering and gradient propagation.
//! - [`grad_check`]: finite-difference verification of gradients.

pub mod backward;
pub mod grad_check;
pub mod graph;
pub mod value;

pub use backward::topological_order;
pub use graph::{Checkpoint, Graph, NodeId, Op};
pub use value::Value;
