//! Engine-wide numeric policies.

use crate::error::SimplegradError;

/// Smallest denominator magnitude used by division.
///
/// Any divisor with `|b| < DIV_EPSILON` is replaced by `±DIV_EPSILON` (sign of
/// `b`, or `+` when `b` is zero) in both the forward value and the derivative,
/// so `x / 0.0` yields a large finite number instead of infinity or NaN.
pub const DIV_EPSILON: f64 = 1e-9;

/// How `pow` treats a base close to zero.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PowDomain {
    /// Plain `f64::powf`. A zero or negative base with a fractional or negative
    /// exponent produces whatever IEEE arithmetic produces (`inf`, `NaN`).
    #[default]
    Ieee,
    /// Bases with `|a| < floor` are replaced by `±floor` (sign of `a`, or `+`
    /// for zero) in both the forward value and the derivative.
    Floor(f64),
}

impl PowDomain {
    /// Applies the policy to a base value.
    pub fn base(self, a: f64) -> f64 {
        match self {
            PowDomain::Ieee => a,
            PowDomain::Floor(floor) => clamp_magnitude(a, floor),
        }
    }
}

/// Replaces `x` by `±floor` when `|x| < floor`; negative zero maps to `+floor`.
pub(crate) fn clamp_magnitude(x: f64, floor: f64) -> f64 {
    if x.abs() < floor {
        if x < 0.0 {
            -floor
        } else {
            floor
        }
    } else {
        x
    }
}

/// Configuration of a [`Graph`](crate::Graph).
///
/// ```rust
/// use simplegrad_core::{Graph, GraphConfig, PowDomain};
///
/// let config = GraphConfig::default().pow_domain(PowDomain::Floor(1e-6));
/// let graph = Graph::with_config(config).unwrap();
/// let z = graph.value(0.0).pow(-1.0);
/// assert!(z.data().is_finite());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GraphConfig {
    pow_domain: PowDomain,
}

impl GraphConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the policy used by `pow` for near-zero bases.
    pub fn pow_domain(mut self, pow_domain: PowDomain) -> Self {
        self.pow_domain = pow_domain;
        self
    }

    pub fn get_pow_domain(&self) -> PowDomain {
        self.pow_domain
    }

    /// Checks that every policy parameter is usable.
    pub fn validate(&self) -> Result<(), SimplegradError> {
        if let PowDomain::Floor(floor) = self.pow_domain {
            if !(floor.is_finite() && floor > 0.0) {
                return Err(SimplegradError::InvalidConfig(format!(
                    "pow floor must be finite and positive, got {}",
                    floor
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
