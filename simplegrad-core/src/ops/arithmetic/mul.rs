use crate::autograd::graph::Op;
use crate::autograd::value::Value;
use crate::ops;

/// `a * b`, recorded in the graph of `a`.
pub fn mul_op<'g>(a: Value<'g>, b: Value<'g>) -> Value<'g> {
    ops::binary(a.graph(), Op::Mul, a.into(), b.into())
}

pub(crate) fn forward(a: f64, b: f64) -> f64 {
    a * b
}

/// d(a*b)/da = b, d(a*b)/db = a
pub(crate) fn backward(a: f64, b: f64) -> [f64; 2] {
    [b, a]
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
