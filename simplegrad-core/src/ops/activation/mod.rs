//! # Activation Functions
//!
//! Non-linear scalar activations.
//!
//! ## Currently Implemented:
//! - [`relu_op`]: Rectified Linear Unit.

pub mod relu;

pub use relu::relu_op;
