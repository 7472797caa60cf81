use thiserror::Error;

/// Custom error type for the simplegrad engine.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum SimplegradError {
    #[error("Shape mismatch: expected {expected} inputs, got {actual} during operation {operation}")]
    ShapeMismatch {
        expected: usize,
        actual: usize,
        operation: String,
    },

    #[error("Invalid network architecture: {0}")]
    InvalidArchitecture(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid input at position {index}: {reason}")]
    InvalidInput { index: usize, reason: String },
}
