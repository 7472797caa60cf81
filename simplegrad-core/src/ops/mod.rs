//! # Scalar Operations Module (`ops`)
//!
//! Every differentiable operation lives in its own file and exposes:
//!
//! - an `xxx_op` function that computes the forward value and records the new
//!   node (with its operands) in the graph arena;
//! - a `forward` rule and a `backward` rule returning the local derivatives
//!   with respect to each operand slot.
//!
//! The backward engine never calls operator code directly; it goes through
//! [`local_grads`], which dispatches on the node's [`Op`] tag.
//!
//! ## Submodules:
//!
//! - [`arithmetic`]: add, sub, mul, div, pow, neg.
//! - [`activation`]: relu.

pub mod activation;
pub mod arithmetic;

use crate::autograd::graph::{Graph, Input, Op};
use crate::autograd::value::Value;
use crate::config::GraphConfig;

/// One side of an operation: a node of the graph, or a plain constant that
/// takes part in the forward value but has no gradient slot.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Operand<'g> {
    Tracked(Value<'g>),
    Constant(f64),
}

impl<'g> Operand<'g> {
    fn data(&self) -> f64 {
        match self {
            Operand::Tracked(v) => v.data(),
            Operand::Constant(c) => *c,
        }
    }

    /// Converts to an arena input slot.
    ///
    /// # Panics
    /// Panics if a tracked operand belongs to another graph than `graph`.
    fn input(&self, graph: &Graph) -> Input {
        match self {
            Operand::Tracked(v) => {
                assert!(
                    std::ptr::eq(v.graph(), graph),
                    "operands of one operation must belong to the same Graph"
                );
                Input::Node(v.id().index())
            }
            Operand::Constant(c) => Input::Const(*c),
        }
    }
}

/// Records a two-slot operation in `graph`.
pub(crate) fn binary<'g>(
    graph: &'g Graph,
    op: Op,
    lhs: Operand<'g>,
    rhs: Operand<'g>,
) -> Value<'g> {
    let inputs = [lhs.input(graph), rhs.input(graph)];
    let data = forward(op, lhs.data(), rhs.data(), graph.config());
    Value::from_parts(graph, graph.push(data, op, inputs))
}

/// Records a one-slot operation in `graph`.
pub(crate) fn unary<'g>(op: Op, operand: Value<'g>) -> Value<'g> {
    let graph = operand.graph();
    let data = forward(op, operand.data(), 0.0, graph.config());
    let inputs = [Input::Node(operand.id().index()), Input::Empty];
    Value::from_parts(graph, graph.push(data, op, inputs))
}

/// Forward value of `op` applied to operand values `a` (and `b`).
pub(crate) fn forward(op: Op, a: f64, b: f64, config: &GraphConfig) -> f64 {
    match op {
        Op::Leaf => a,
        Op::Add => arithmetic::add::forward(a, b),
        Op::Sub => arithmetic::sub::forward(a, b),
        Op::Mul => arithmetic::mul::forward(a, b),
        Op::Div => arithmetic::div::forward(a, b),
        Op::Pow => arithmetic::pow::forward(a, b, config.get_pow_domain()),
        Op::Neg => arithmetic::neg::forward(a),
        Op::Relu => activation::relu::forward(a),
    }
}

/// Local derivatives of `op` with respect to each operand slot, evaluated at
/// the operands' current values. Slots that are constants or unused are still
/// filled; the caller ignores them.
pub(crate) fn local_grads(op: Op, a: f64, b: f64, config: &GraphConfig) -> [f64; 2] {
    match op {
        Op::Leaf => [0.0, 0.0],
        Op::Add => arithmetic::add::backward(a, b),
        Op::Sub => arithmetic::sub::backward(a, b),
        Op::Mul => arithmetic::mul::backward(a, b),
        Op::Div => arithmetic::div::backward(a, b),
        Op::Pow => arithmetic::pow::backward(a, b, config.get_pow_domain()),
        Op::Neg => arithmetic::neg::backward(a),
        Op::Relu => activation::relu::backward(a),
    }
}
