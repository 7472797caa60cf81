use crate::autograd::graph::Op;
use crate::autograd::value::Value;
use crate::ops;

/// `a - b`, recorded in the graph of `a`.
pub fn sub_op<'g>(a: Value<'g>, b: Value<'g>) -> Value<'g> {
    ops::binary(a.graph(), Op::Sub, a.into(), b.into())
}

pub(crate) fn forward(a: f64, b: f64) -> f64 {
    a - b
}

pub(crate) fn backward(_a: f64, _b: f64) -> [f64; 2] {
    [1.0, -1.0]
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
