use super::*;

#[test]
fn test_default_activations() {
    let config = MlpConfig::new(3, &[4, 4, 1]);
    let acts: Vec<Activation> = config.layers.iter().map(|l| l.activation).collect();
    assert_eq!(
        acts,
        vec![Activation::Relu, Activation::Relu, Activation::Identity]
    );
    assert!(config.validate().is_ok());
}

#[test]
fn test_single_layer_is_identity() {
    let config = MlpConfig::new(2, &[1]);
    assert_eq!(config.layers[0].activation, Activation::Identity);
}

#[test]
fn test_with_activation_override() -> Result<(), SimplegradError> {
    let config = MlpConfig::new(2, &[3, 1]).with_activation(1, Activation::Relu)?;
    assert_eq!(config.layers[1].activation, Activation::Relu);
    config.validate()
}

#[test]
fn test_with_activation_out_of_range() {
    let result = MlpConfig::new(2, &[3, 1]).with_activation(4, Activation::Relu);
    assert!(matches!(
        result,
        Err(SimplegradError::InvalidArchitecture(_))
    ));
}

#[test]
fn test_invalid_architectures() {
    for config in [
        MlpConfig::new(0, &[2]),
        MlpConfig::new(2, &[]),
        MlpConfig::new(2, &[3, 0, 1]),
    ] {
        assert!(matches!(
            config.validate(),
            Err(SimplegradError::InvalidArchitecture(_))
        ));
    }
}

#[test]
fn test_fan_ins() {
    let config = MlpConfig::new(3, &[4, 2]);
    assert_eq!(config.fan_ins().collect::<Vec<_>>(), vec![3, 4, 2]);
}
