use crate::autograd::graph::Op;
use crate::autograd::value::Value;
use crate::ops;

/// `-a`.
pub fn neg_op(a: Value<'_>) -> Value<'_> {
    ops::unary(Op::Neg, a)
}

pub(crate) fn forward(a: f64) -> f64 {
    -a
}

pub(crate) fn backward(_a: f64) -> [f64; 2] {
    [-1.0, 0.0]
}

#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;
