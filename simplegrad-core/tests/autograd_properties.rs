use approx::assert_relative_eq;
use simplegrad_core::autograd::grad_check::{check_grad, GradCheckError};
use simplegrad_core::utils::testing::{check_grads_near, check_values_near};
use rand::rngs::StdRng;
use rand::Rng;
use simplegrad_core::{Graph, DIV_EPSILON};

mod common;

#[test]
fn test_add_property() {
    common::init_logger();
    let graph = Graph::new();
    let a = graph.value(1.25);
    let b = graph.value(-0.5);
    let c = a + b;
    c.backward();
    assert_eq!(c.data(), 1.25 + -0.5);
    check_grads_near(&[a, b], &[1.0, 1.0], 0.0);
}

#[test]
fn test_mul_property() {
    let graph = Graph::new();
    let a = graph.value(3.0);
    let b = graph.value(-7.0);
    let c = a * b;
    c.backward();
    assert_eq!(c.data(), -21.0);
    assert_eq!(a.grad(), b.data());
    assert_eq!(b.grad(), a.data());
}

#[test]
fn test_division_by_zero_floor() {
    let graph = Graph::new();
    let a = graph.value(5.0);
    let b = graph.value(0.0);
    let c = a / b;
    c.backward();
    assert_relative_eq!(c.data(), 5.0 / DIV_EPSILON, max_relative = 1e-12);
    assert!(c.data().is_finite());
    assert!(a.grad().is_finite());
    assert!(b.grad().is_finite());
}

#[test]
fn test_shared_operand() {
    let graph = Graph::new();
    let a = graph.value(2.0);
    let c = a + a;
    c.backward();
    assert_eq!(a.grad(), 2.0);
}

#[test]
fn test_composite_expression() {
    let graph = Graph::new();
    let a = graph.value(2.0);
    let b = graph.value(3.0);
    let z = a * b + a;
    z.backward();
    check_values_near(&[z], &[8.0], 0.0);
    check_grads_near(&[a, b], &[4.0, 2.0], 0.0);
}

#[test]
fn test_relu_property() {
    let graph = Graph::new();
    let neg = graph.value(-5.0);
    let r = neg.relu();
    r.backward();
    assert_eq!(r.data(), 0.0);
    assert_eq!(neg.grad(), 0.0);

    let pos = graph.value(5.0);
    let r = pos.relu();
    r.backward();
    assert_eq!(r.data(), 5.0);
    assert_eq!(pos.grad(), 1.0);
}

#[test]
fn test_negation_property() {
    let graph = Graph::new();
    let a = graph.value(5.0);
    let n = -a;
    n.backward();
    assert_eq!(n.data(), -5.0);
    assert_eq!(a.grad(), -1.0);
}

#[test]
fn test_isolated_leaf_backward() {
    let graph = Graph::new();
    let a = graph.value(42.0);
    let other = graph.value(1.0);
    a.backward();
    assert_eq!(a.grad(), 1.0);
    assert_eq!(other.grad(), 0.0);
    assert_eq!(graph.len(), 2);
}

#[test]
fn test_expression_gradients_match_finite_differences() -> Result<(), GradCheckError> {
    check_grad(
        |_, x| {
            let a = x[0];
            let b = x[1];
            let c = x[2];
            let t = (a * b - c / (b + 2.0)).relu() + (-a).pow(2.0);
            t * 0.5 + 1.0 / (c * c + 1.0)
        },
        &[0.9, 1.7, -0.4],
        1e-6,
        1e-5,
    )
}

const SAMPLES: usize = 500;

fn float_operand(rng: &mut StdRng) -> f64 {
    rng.gen_range(-255.0f64..=255.0)
}

fn int_operand(rng: &mut StdRng) -> f64 {
    rng.gen_range(-10_000i64..=10_000) as f64
}

fn floored(b: f64) -> f64 {
    if b.abs() < DIV_EPSILON {
        if b < 0.0 {
            -DIV_EPSILON
        } else {
            DIV_EPSILON
        }
    } else {
        b
    }
}

/// Checks value and gradients of every binary and unary operator at `(x, y)`.
fn check_elementary_ops(x: f64, y: f64) {
    let graph = Graph::new();

    let (a, b) = (graph.value(x), graph.value(y));
    let c = a + b;
    c.backward();
    assert_eq!(c.data(), x + y, "add at ({x}, {y})");
    assert_eq!((a.grad(), b.grad()), (1.0, 1.0), "add grads at ({x}, {y})");

    let (a, b) = (graph.value(x), graph.value(y));
    let c = a - b;
    c.backward();
    assert_eq!(c.data(), x - y, "sub at ({x}, {y})");
    assert_eq!((a.grad(), b.grad()), (1.0, -1.0), "sub grads at ({x}, {y})");

    let (a, b) = (graph.value(x), graph.value(y));
    let c = a * b;
    c.backward();
    assert_eq!(c.data(), x * y, "mul at ({x}, {y})");
    assert_eq!((a.grad(), b.grad()), (y, x), "mul grads at ({x}, {y})");

    let (a, b) = (graph.value(x), graph.value(y));
    let c = a / b;
    c.backward();
    let d = floored(y);
    assert_eq!(c.data(), x / d, "div at ({x}, {y})");
    assert_eq!(a.grad(), 1.0 / d, "div grad a at ({x}, {y})");
    assert_eq!(b.grad(), -x / (d * d), "div grad b at ({x}, {y})");

    let a = graph.value(x);
    let c = -a;
    c.backward();
    assert_eq!(c.data(), -x, "neg at {x}");
    assert_eq!(a.grad(), -1.0, "neg grad at {x}");

    let a = graph.value(x);
    let c = a.relu();
    c.backward();
    if x > 0.0 {
        assert_eq!(c.data(), x, "relu at {x}");
        assert_eq!(a.grad(), 1.0, "relu grad at {x}");
    } else {
        assert_eq!(c.data(), 0.0, "relu at {x}");
        assert_eq!(a.grad(), 0.0, "relu grad at {x}");
    }
}

#[test]
fn test_elementary_ops_over_float_range() {
    let mut rng = common::seeded_rng(7);
    for _ in 0..SAMPLES {
        let (x, y) = (float_operand(&mut rng), float_operand(&mut rng));
        check_elementary_ops(x, y);
    }
}

#[test]
fn test_elementary_ops_over_integer_range() {
    let mut rng = common::seeded_rng(11);
    for _ in 0..SAMPLES {
        let (x, y) = (int_operand(&mut rng), int_operand(&mut rng));
        check_elementary_ops(x, y);
    }
    // Both sides of the relu split and the zero divisor are always hit.
    check_elementary_ops(0.0, 0.0);
    check_elementary_ops(-1.0, 1.0);
    check_elementary_ops(1.0, -1.0);
}

#[test]
fn test_relu_sign_split_over_samples() {
    let mut rng = common::seeded_rng(13);
    let (mut positive, mut non_positive) = (0, 0);
    for _ in 0..SAMPLES {
        let x = float_operand(&mut rng);
        let graph = Graph::new();
        let a = graph.value(x);
        let c = a.relu();
        c.backward();
        if x > 0.0 {
            positive += 1;
            assert_eq!((c.data(), a.grad()), (x, 1.0));
        } else {
            non_positive += 1;
            assert_eq!((c.data(), a.grad()), (0.0, 0.0));
        }
    }
    assert!(positive > 0 && non_positive > 0);
}

#[test]
fn test_division_outside_floor_is_exact() {
    let mut rng = common::seeded_rng(17);
    for _ in 0..SAMPLES {
        let x = float_operand(&mut rng);
        let y = loop {
            let y = float_operand(&mut rng);
            if y.abs() >= DIV_EPSILON {
                break y;
            }
        };
        let graph = Graph::new();
        let (a, b) = (graph.value(x), graph.value(y));
        let c = a / b;
        c.backward();
        assert_eq!(c.data(), x / y);
        assert_eq!(a.grad(), 1.0 / y);
        assert_eq!(b.grad(), -x / (y * y));
    }
}

#[test]
fn test_division_inside_floor_uses_signed_epsilon() {
    let mut rng = common::seeded_rng(19);
    for _ in 0..SAMPLES {
        let x = float_operand(&mut rng);
        let y = rng.gen_range(-DIV_EPSILON..DIV_EPSILON);
        let d = if y < 0.0 { -DIV_EPSILON } else { DIV_EPSILON };
        let graph = Graph::new();
        let (a, b) = (graph.value(x), graph.value(y));
        let c = a / b;
        c.backward();
        assert_eq!(c.data(), x / d, "div at ({x}, {y})");
        assert_eq!(a.grad(), 1.0 / d);
        assert_eq!(b.grad(), -x / (d * d));
        assert!(c.data().is_finite() && a.grad().is_finite() && b.grad().is_finite());
    }
}
