//! Error types for ChromaShift.

use thiserror::Error;

/// A violated precondition at a public API boundary.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvalidInput {
    #[error("{channel} channel out of range [0, 255]: {value}")]
    ChannelOutOfRange { channel: &'static str, value: i64 },

    #[error("non-finite {component} component")]
    NonFinite { component: &'static str },

    #[error("buffer length {len} is not a multiple of 4")]
    BufferLength { len: usize },

    #[error("dimension mismatch: expected {expected} bytes, got {got}")]
    DimensionMismatch { expected: usize, got: usize },
}

/// Main error type for ChromaShift operations.
#[derive(Error, Debug)]
pub enum ChromaShiftError {
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),

    #[error("Unknown color space: {0}")]
    UnknownColorSpace(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for ChromaShift operations.
pub type Result<T> = std::result::Result<T, ChromaShiftError>;

/// Reject NaN and infinities in a named component.
pub(crate) fn ensure_finite(component: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(InvalidInput::NonFinite { component }.into())
    }
}
