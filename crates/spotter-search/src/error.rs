//! Error types for spotter-search

use thiserror::Error;

/// Errors that can occur while locating samples
///
/// An absent sample is never an error: locators return an empty list.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] spotter_core::Error),

    /// The sample has no pixel outside its mask color
    #[error("sample {name:?} contains only mask-colored pixels")]
    AllMaskedSample { name: String },

    /// Two buffers that must be compared pixel by pixel differ in size
    #[error("dimension mismatch: expected {}x{}, got {}x{}", expected.0, expected.1, actual.0, actual.1)]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for search operations
pub type SearchResult<T> = Result<T, SearchError>;
