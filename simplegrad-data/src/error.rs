use thiserror::Error;

/// Errors raised by datasets, samplers and the loader.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DataError {
    #[error("Index {index} out of bounds for dataset of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Batch size must be at least 1, got {0}")]
    InvalidBatchSize(usize),

    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}
