//! Error types for spotter-core
//!
//! Provides a unified error type for the buffer and geometry operations in
//! the core crate. Search and region crates wrap it in their own error enums.

use thiserror::Error;

/// Spotter core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid image dimensions
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Pixel coordinates outside of the buffer
    #[error("pixel ({x}, {y}) out of bounds for {width}x{height} image")]
    IndexOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Raw pixel data does not match the declared dimensions
    #[error("pixel data length mismatch: expected {expected}, got {actual}")]
    DataLength { expected: usize, actual: usize },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for spotter core operations
pub type Result<T> = std::result::Result<T, Error>;
