use crate::autograd::backward;
use crate::autograd::graph::{Graph, Input, NodeId, Op};
use crate::ops::{self, Operand};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Handle to a scalar node in a [`Graph`].
///
/// A `Value` is two words (graph reference plus node id) and is `Copy`; the
/// node state itself lives in the arena. Equality is node identity, not
/// numeric equality.
#[derive(Clone, Copy)]
pub struct Value<'g> {
    graph: &'g Graph,
    id: NodeId,
}

impl<'g> Value<'g> {
    pub(crate) fn from_parts(graph: &'g Graph, id: NodeId) -> Self {
        Value { graph, id }
    }

    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Returns the forward value.
    ///
    /// # Panics
    /// Panics if the node was dropped by [`Graph::release`].
    pub fn data(&self) -> f64 {
        self.graph.node(self.id).value
    }

    /// Returns the gradient accumulated so far.
    ///
    /// # Panics
    /// Panics if the node was dropped by [`Graph::release`].
    pub fn grad(&self) -> f64 {
        self.graph.node(self.id).grad
    }

    pub fn op(&self) -> Op {
        self.graph.node(self.id).op
    }

    pub fn is_leaf(&self) -> bool {
        self.op() == Op::Leaf
    }

    /// Returns `false` once the node has been dropped by [`Graph::release`].
    pub fn is_live(&self) -> bool {
        self.graph.is_live(self.id)
    }

    /// Nodes this value was computed from, in operand order. Constant operands
    /// are not nodes and are left out.
    pub fn operands(&self) -> Vec<Value<'g>> {
        let node = self.graph.node(self.id);
        node.inputs
            .iter()
            .filter_map(|input| match *input {
                Input::Node(index) => {
                    let epoch = self.graph.node_epoch(index);
                    Some(Value::from_parts(self.graph, NodeId { index, epoch }))
                }
                Input::Const(_) | Input::Empty => None,
            })
            .collect()
    }

    /// Resets the gradient to zero.
    pub fn zero_grad(&self) {
        self.graph.update(self.id, |node| node.grad = 0.0);
    }

    /// Treats this value as a loss: seeds its gradient with 1.0 and propagates
    /// gradients to every node it depends on.
    ///
    /// Gradients are accumulated, never overwritten, so calling `backward` on
    /// several losses that share nodes sums their contributions.
    pub fn backward(&self) {
        backward::backward(*self);
    }

    /// `self ^ exponent` for a constant exponent.
    pub fn pow(self, exponent: f64) -> Value<'g> {
        ops::arithmetic::pow_op(self, exponent)
    }

    /// `max(0, self)`.
    pub fn relu(self) -> Value<'g> {
        ops::activation::relu_op(self)
    }

    /// Gradient-descent update: `value -= lr * grad`.
    pub(crate) fn descend(&self, lr: f64) -> f64 {
        self.graph.update(self.id, |node| {
            node.value -= lr * node.grad;
            node.grad
        })
    }
}

impl PartialEq for Value<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.graph, other.graph) && self.id == other.id
    }
}

impl Eq for Value<'_> {}

impl fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = self.graph.node(self.id);
        f.debug_struct("Value")
            .field("id", &self.id.index)
            .field("data", &node.value)
            .field("grad", &node.grad)
            .field("op", &node.op)
            .finish()
    }
}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = self.graph.node(self.id);
        write!(
            f,
            "Value(data={}, grad={}, op={})",
            node.value, node.grad, node.op
        )
    }
}

impl<'g> From<Value<'g>> for Operand<'g> {
    fn from(value: Value<'g>) -> Self {
        Operand::Tracked(value)
    }
}

// -----------------------------------------------------------------------------
// std::ops sugar over the named operators, with f64 constants on either side
// -----------------------------------------------------------------------------

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $op:expr, $func:path) => {
        impl<'g> $trait<Value<'g>> for Value<'g> {
            type Output = Value<'g>;

            fn $method(self, rhs: Value<'g>) -> Value<'g> {
                $func(self, rhs)
            }
        }

        impl<'g> $trait<f64> for Value<'g> {
            type Output = Value<'g>;

            fn $method(self, rhs: f64) -> Value<'g> {
                ops::binary(self.graph, $op, self.into(), Operand::Constant(rhs))
            }
        }

        impl<'g> $trait<Value<'g>> for f64 {
            type Output = Value<'g>;

            fn $method(self, rhs: Value<'g>) -> Value<'g> {
                ops::binary(rhs.graph, $op, Operand::Constant(self), rhs.into())
            }
        }

        impl<'a, 'g> $trait<&'a Value<'g>> for &'a Value<'g> {
            type Output = Value<'g>;

            fn $method(self, rhs: &'a Value<'g>) -> Value<'g> {
                $func(*self, *rhs)
            }
        }
    };
}

impl_binary_op!(Add, add, Op::Add, ops::arithmetic::add_op);
impl_binary_op!(Sub, sub, Op::Sub, ops::arithmetic::sub_op);
impl_binary_op!(Mul, mul, Op::Mul, ops::arithmetic::mul_op);
impl_binary_op!(Div, div, Op::Div, ops::arithmetic::div_op);

impl<'g> Neg for Value<'g> {
    type Output = Value<'g>;

    fn neg(self) -> Value<'g> {
        ops::arithmetic::neg_op(self)
    }
}

impl<'g> Neg for &Value<'g> {
    type Output = Value<'g>;

    fn neg(self) -> Value<'g> {
        ops::arithmetic::neg_op(*self)
    }
}

#[cfg(test)]
#[path = "value_test.rs"]
mod tests;
