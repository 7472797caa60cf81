use super::*;
use crate::autograd::grad_check::{check_grad, GradCheckError};
use crate::Graph;
use approx::assert_relative_eq;

#[test]
fn test_div_forward_and_backward() {
    let graph = Graph::new();
    let a = graph.value(6.0);
    let b = graph.value(3.0);
    let c = div_op(a, b);
    c.backward();
    assert_eq!(c.data(), 2.0);
    assert_relative_eq!(a.grad(), 1.0 / 3.0, epsilon = 1e-12);
    assert_relative_eq!(b.grad(), -6.0 / 9.0, epsilon = 1e-12);
}

#[test]
fn test_div_by_zero_is_finite() {
    let graph = Graph::new();
    let a = graph.value(5.0);
    let b = graph.value(0.0);
    let c = a / b;
    c.backward();
    assert_relative_eq!(c.data(), 5e9, max_relative = 1e-12);
    assert!(a.grad().is_finite());
    assert!(b.grad().is_finite());
    assert_relative_eq!(a.grad(), 1e9, max_relative = 1e-12);
}

#[test]
fn test_div_by_tiny_negative_keeps_sign() {
    let graph = Graph::new();
    let c = graph.value(1.0) / graph.value(-1e-12);
    assert_relative_eq!(c.data(), -1e9, max_relative = 1e-12);
}

#[test]
fn test_div_by_negative_zero_uses_positive_floor() {
    let graph = Graph::new();
    let c = graph.value(2.0) / graph.value(-0.0);
    assert_relative_eq!(c.data(), 2e9, max_relative = 1e-12);
}

#[test]
fn test_constant_over_value() {
    let graph = Graph::new();
    let a = graph.value(2.0);
    let c = 1.0 / a;
    c.backward();
    assert_eq!(c.data(), 0.5);
    assert_eq!(a.grad(), -0.25);
}

#[test]
fn test_div_backward() -> Result<(), GradCheckError> {
    check_grad(|_, x| div_op(x[0], x[1]), &[1.3, 2.1], 1e-6, 1e-5)
}
