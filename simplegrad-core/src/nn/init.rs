//! Parameter initialization.

use rand::distributions::{Distribution, Uniform};
use rand::Rng;

/// Half-width of the Xavier-uniform interval for a neuron with `fan_in`
/// inputs: `sqrt(6 / (fan_in + 1))`.
pub fn xavier_limit(fan_in: usize) -> f64 {
    (6.0 / (fan_in as f64 + 1.0)).sqrt()
}

/// Draws `fan_in` weights from `U(-l, l)` with `l = xavier_limit(fan_in)`.
pub fn xavier_uniform<R: Rng + ?Sized>(fan_in: usize, rng: &mut R) -> Vec<f64> {
    let limit = xavier_limit(fan_in);
    let dist = Uniform::new_inclusive(-limit, limit);
    (0..fan_in).map(|_| dist.sample(&mut *rng)).collect()
}

#[cfg(test)]
#[path = "init_test.rs"]
mod tests;
