//! Synthetic two-class data in the manner of scikit-learn's
//! `make_classification`: Gaussian clusters around opposite vertices of a
//! hypercube.

use crate::datasets::vec_dataset::VecDataset;
use crate::error::DataError;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

/// A feature vector with its class label (0.0 or 1.0).
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub features: Vec<f64>,
    pub label: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationConfig {
    pub n_samples: usize,
    pub n_features: usize,
    /// Half the side of the hypercube whose vertices hold the class centers.
    pub class_sep: f64,
    /// Standard deviation of the per-feature Gaussian noise.
    pub noise: f64,
    pub seed: u64,
}

impl Default for ClassificationConfig {
    fn default() -> Self {
        ClassificationConfig {
            n_samples: 100,
            n_features: 10,
            class_sep: 1.0,
            noise: 1.0,
            seed: 42,
        }
    }
}

impl ClassificationConfig {
    pub fn validate(&self) -> Result<(), DataError> {
        if self.n_samples == 0 {
            return Err(DataError::InvalidParameter {
                name: "n_samples",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.n_features == 0 {
            return Err(DataError::InvalidParameter {
                name: "n_features",
                reason: "must be at least 1".to_string(),
            });
        }
        for (name, value) in [("class_sep", self.class_sep), ("noise", self.noise)] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(DataError::InvalidParameter {
                    name,
                    reason: format!("must be finite and non-negative, got {}", value),
                });
            }
        }
        Ok(())
    }
}

/// Generates a balanced, shuffled two-class dataset. Identical configs give
/// identical datasets.
pub fn make_classification(
    config: &ClassificationConfig,
) -> Result<VecDataset<Sample>, DataError> {
    config.validate()?;
    let mut rng = StdRng::seed_from_u64(config.seed);
    let normal = Normal::new(0.0, config.noise).map_err(|e| DataError::InvalidParameter {
        name: "noise",
        reason: e.to_string(),
    })?;

    // Class 1 sits on the vertex opposite class 0.
    let center: Vec<f64> = (0..config.n_features)
        .map(|_| {
            if rng.gen::<bool>() {
                config.class_sep
            } else {
                -config.class_sep
            }
        })
        .collect();

    let mut labels: Vec<f64> = (0..config.n_samples)
        .map(|i| if i < config.n_samples / 2 { 0.0 } else { 1.0 })
        .collect();
    labels.shuffle(&mut rng);

    let samples: Vec<Sample> = labels
        .into_iter()
        .map(|label| {
            let sign = if label == 0.0 { 1.0 } else { -1.0 };
            let features = center
                .iter()
                .map(|&c| sign * c + normal.sample(&mut rng))
                .collect();
            Sample { features, label }
        })
        .collect();

    log::debug!(
        "make_classification: {} samples, {} features",
        samples.len(),
        config.n_features
    );
    Ok(VecDataset::new(samples))
}

#[cfg(test)]
#[path = "classification_test.rs"]
mod tests;
