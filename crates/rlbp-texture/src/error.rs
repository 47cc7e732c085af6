//! Error types for rlbp-texture

use thiserror::Error;

/// Errors that can occur while computing a texture descriptor
#[derive(Debug, Error)]
pub enum TextureError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] rlbp_core::Error),
}

/// Result type for texture descriptor operations
pub type TextureResult<T> = Result<T, TextureError>;
