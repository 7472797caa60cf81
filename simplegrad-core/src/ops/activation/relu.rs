use crate::autograd::graph::Op;
use crate::autograd::value::Value;
use crate::ops;

/// Rectified Linear Unit: `max(0, a)`.
pub fn relu_op(a: Value<'_>) -> Value<'_> {
    ops::unary(Op::Relu, a)
}

pub(crate) fn forward(a: f64) -> f64 {
    if a > 0.0 {
        a
    } else {
        0.0
    }
}

/// Gradient is 1 where the input is strictly positive, 0 elsewhere.
pub(crate) fn backward(a: f64) -> [f64; 2] {
    if a > 0.0 {
        [1.0, 0.0]
    } else {
        [0.0, 0.0]
    }
}

#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;
