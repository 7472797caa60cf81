use super::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn fixed_layer(graph: &Graph) -> Result<Layer<'_>, SimplegradError> {
    Layer::from_neurons(
        2,
        vec![
            Neuron::from_parameters(graph, &[1.0, 0.0], 0.0, Activation::Identity),
            Neuron::from_parameters(graph, &[0.0, 1.0], 1.0, Activation::Identity),
            Neuron::from_parameters(graph, &[1.0, 1.0], -10.0, Activation::Relu),
        ],
    )
}

#[test]
fn test_forward_in_neuron_order() -> Result<(), SimplegradError> {
    let graph = Graph::new();
    let layer = fixed_layer(&graph)?;
    let out = layer.forward(&[graph.value(2.0), graph.value(3.0)])?;
    let data: Vec<f64> = out.iter().map(|v| v.data()).collect();
    assert_eq!(data, vec![2.0, 4.0, 0.0]);
    Ok(())
}

#[test]
fn test_widths() -> Result<(), SimplegradError> {
    let graph = Graph::new();
    let layer = fixed_layer(&graph)?;
    assert_eq!(layer.input_width(), 2);
    assert_eq!(layer.output_width(), 3);
    assert_eq!(layer.neurons().len(), 3);
    assert_eq!(layer.num_parameters(), 9);
    Ok(())
}

#[test]
fn test_wrong_input_length() -> Result<(), SimplegradError> {
    let graph = Graph::new();
    let layer = fixed_layer(&graph)?;
    match layer.forward(&[graph.value(1.0)]) {
        Err(SimplegradError::ShapeMismatch {
            expected, actual, ..
        }) => {
            assert_eq!(expected, 2);
            assert_eq!(actual, 1);
        }
        other => panic!("Expected ShapeMismatch, got {:?}", other),
    }
    Ok(())
}

#[test]
fn test_from_neurons_rejects_mixed_widths() {
    let graph = Graph::new();
    let result = Layer::from_neurons(
        2,
        vec![Neuron::from_parameters(&graph, &[1.0], 0.0, Activation::Identity)],
    );
    assert!(matches!(
        result,
        Err(SimplegradError::ShapeMismatch { .. })
    ));
}

#[test]
fn test_new_creates_nout_neurons() {
    let graph = Graph::new();
    let mut rng = StdRng::seed_from_u64(1);
    let layer = Layer::new(&graph, 4, 3, Activation::Relu, &mut rng);
    assert_eq!(layer.output_width(), 3);
    assert!(layer.neurons().iter().all(|n| n.input_width() == 4));
    assert_eq!(graph.len(), 3 * 5);
}

#[test]
fn test_display() -> Result<(), SimplegradError> {
    let graph = Graph::new();
    let layer = fixed_layer(&graph)?;
    let expected = "Layer(\n  Neuron(1, 0, b = 0)\n  Neuron(0, 1, b = 1)\n  Neuron(1, 1, b = -10)\n)";
    assert_eq!(layer.to_string(), expected);
    Ok(())
}
