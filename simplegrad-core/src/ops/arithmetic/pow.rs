use crate::autograd::graph::Op;
use crate::autograd::value::Value;
use crate::config::PowDomain;
use crate::ops::{self, Operand};

/// `base ^ exponent` for a constant exponent.
///
/// The exponent is stored as a constant operand and receives no gradient.
/// Near-zero bases follow the graph's [`PowDomain`] policy.
pub fn pow_op<'g>(base: Value<'g>, exponent: f64) -> Value<'g> {
    ops::binary(base.graph(), Op::Pow, base.into(), Operand::Constant(exponent))
}

pub(crate) fn forward(a: f64, exponent: f64, domain: PowDomain) -> f64 {
    domain.base(a).powf(exponent)
}

/// d(a^c)/da = c * a^(c-1); the exponent slot is a constant.
pub(crate) fn backward(a: f64, exponent: f64, domain: PowDomain) -> [f64; 2] {
    let a = domain.base(a);
    [exponent * a.powf(exponent - 1.0), 0.0]
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
