//! Error types for fillpaint-region

use thiserror::Error;

/// Errors that can occur during fill operations
#[derive(Debug, Error)]
pub enum RegionError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] fillpaint_core::Error),

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for fill operations
pub type RegionResult<T> = Result<T, RegionError>;
