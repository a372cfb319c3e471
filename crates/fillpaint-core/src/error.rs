//! Error types for fillpaint-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.
//!
//! # See also
//!
//! The lenient entry points ([`Pixel::from_color`](crate::Pixel::from_color),
//! the fill itself) never produce these errors; they degrade silently.
//! Only the checked constructors and the strict conversions return them.

use crate::color::ColorModel;
use thiserror::Error;

/// FillPaint core error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid buffer dimensions
    #[error("invalid buffer dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Pixel data does not hold exactly width * height pixels
    #[error("pixel data length mismatch: expected {expected}, got {actual}")]
    DataLengthMismatch { expected: usize, actual: usize },

    /// Index out of bounds
    #[error("index out of bounds: {index} >= {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Buffer dimension mismatch
    #[error("dimension mismatch: expected {}x{}, got {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    /// Color model that cannot be converted to a pixel
    #[error("unsupported color model: {0:?}")]
    UnsupportedColorModel(ColorModel),

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for FillPaint core operations
pub type Result<T> = std::result::Result<T, Error>;
