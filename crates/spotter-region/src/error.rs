//! Error types for spotter-region

use thiserror::Error;

/// Errors that can occur during region labeling and differencing
#[derive(Debug, Error)]
pub enum RegionError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] spotter_core::Error),

    /// The compared area of the original does not have the sample's size
    #[error("dimension mismatch: expected {}x{}, got {}x{}", expected.0, expected.1, actual.0, actual.1)]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;
