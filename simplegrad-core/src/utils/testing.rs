use crate::autograd::value::Value;

fn check_near(what: &str, actual: &[f64], expected: &[f64], tolerance: f64) {
    assert_eq!(actual.len(), expected.len(), "{} length mismatch", what);
    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        let diff = (a - e).abs();
        if !(diff <= tolerance) {
            panic!(
                "{} mismatch at index {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                what, i, a, e, diff, tolerance
            );
        }
    }
}

/// Checks that the forward values of `actual` are within `tolerance` of
/// `expected`. Panics on a length or value mismatch.
pub fn check_values_near(actual: &[Value<'_>], expected: &[f64], tolerance: f64) {
    let data: Vec<f64> = actual.iter().map(|v| v.data()).collect();
    check_near("Data", &data, expected, tolerance);
}

/// Same as [`check_values_near`] for accumulated gradients.
pub fn check_grads_near(actual: &[Value<'_>], expected: &[f64], tolerance: f64) {
    let grads: Vec<f64> = actual.iter().map(|v| v.grad()).collect();
    check_near("Grad", &grads, expected, tolerance);
}
