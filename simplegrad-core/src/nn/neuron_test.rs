use super::*;
use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_forward_identity() -> Result<(), SimplegradError> {
    let graph = Graph::new();
    let neuron = Neuron::from_parameters(&graph, &[0.5, -1.0], 0.25, Activation::Identity);
    let x = [graph.value(2.0), graph.value(3.0)];
    let out = neuron.forward(&x)?;
    // 0.5*2 - 1*3 + 0.25
    assert_relative_eq!(out.data(), -1.75, epsilon = 1e-15);
    Ok(())
}

#[test]
fn test_forward_relu_clamps() -> Result<(), SimplegradError> {
    let graph = Graph::new();
    let neuron = Neuron::from_parameters(&graph, &[0.5, -1.0], 0.25, Activation::Relu);
    let out = neuron.forward(&[graph.value(2.0), graph.value(3.0)])?;
    assert_eq!(out.data(), 0.0);
    Ok(())
}

#[test]
fn test_backward_reaches_parameters() -> Result<(), SimplegradError> {
    let graph = Graph::new();
    let neuron = Neuron::from_parameters(&graph, &[1.0, 2.0], -0.5, Activation::Relu);
    let x = [graph.value(3.0), graph.value(-1.0)];
    neuron.forward(&x)?.backward();
    // pre-activation = 3 - 2 - 0.5 = 0.5 > 0
    assert_eq!(neuron.weights()[0].grad(), 3.0);
    assert_eq!(neuron.weights()[1].grad(), -1.0);
    assert_eq!(neuron.bias().grad(), 1.0);
    assert_eq!(x[0].grad(), 1.0);
    assert_eq!(x[1].grad(), 2.0);
    Ok(())
}

#[test]
fn test_wrong_input_length() {
    let graph = Graph::new();
    let neuron = Neuron::from_parameters(&graph, &[1.0, 2.0], 0.0, Activation::Identity);
    let err = neuron.forward(&[graph.value(1.0)]).unwrap_err();
    assert_eq!(
        err,
        SimplegradError::ShapeMismatch {
            expected: 2,
            actual: 1,
            operation: "Neuron::forward".to_string(),
        }
    );
}

#[test]
fn test_new_initialization() {
    let graph = Graph::new();
    let mut rng = StdRng::seed_from_u64(11);
    let neuron = Neuron::new(&graph, 5, Activation::Relu, &mut rng);
    assert_eq!(neuron.input_width(), 5);
    assert_eq!(neuron.bias().data(), 0.0);
    assert_eq!(neuron.activation(), Activation::Relu);
    assert!(neuron.weights().iter().all(|w| w.data().abs() <= 1.0));
    assert!(neuron.weights().iter().all(|w| w.is_leaf()));
}

#[test]
fn test_parameters_order() {
    let graph = Graph::new();
    let neuron = Neuron::from_parameters(&graph, &[1.0, 2.0, 3.0], 4.0, Activation::Identity);
    let data: Vec<f64> = neuron.parameters().iter().map(|p| p.data()).collect();
    assert_eq!(data, vec![1.0, 2.0, 3.0, 4.0]);
    assert_eq!(neuron.num_parameters(), 4);
}

#[test]
fn test_display() {
    let graph = Graph::new();
    let neuron = Neuron::from_parameters(&graph, &[1.5, -2.0], 0.5, Activation::Identity);
    assert_eq!(neuron.to_string(), "Neuron(1.5, -2, b = 0.5)");
}
