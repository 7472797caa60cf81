use crate::autograd::graph::Op;
use crate::autograd::value::Value;
use crate::config::{clamp_magnitude, DIV_EPSILON};
use crate::ops;

/// `a / b`, recorded in the graph of `a`.
///
/// A divisor with `|b| < DIV_EPSILON` is replaced by `±DIV_EPSILON`, so the
/// result is always finite for finite inputs. This is not IEEE division.
pub fn div_op<'g>(a: Value<'g>, b: Value<'g>) -> Value<'g> {
    ops::binary(a.graph(), Op::Div, a.into(), b.into())
}

pub(crate) fn forward(a: f64, b: f64) -> f64 {
    a / clamp_magnitude(b, DIV_EPSILON)
}

/// d(a/b)/da = 1/b', d(a/b)/db = -a/b'^2, with b' the floored divisor.
pub(crate) fn backward(a: f64, b: f64) -> [f64; 2] {
    let b = clamp_magnitude(b, DIV_EPSILON);
    [1.0 / b, -a / (b * b)]
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
