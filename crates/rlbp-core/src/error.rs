//! Error types for rlbp-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Degenerate inputs (empty or undersized grids) are deliberately *not*
//! errors: the descriptor's scanning loops are naturally empty for them.
//! Errors here signal misuse of the API or internal defects.

use thiserror::Error;

/// rlbp-core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Pixel buffer length does not match the stated dimensions
    #[error("buffer size mismatch: expected {expected} bytes, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    /// Coordinates outside the grid
    #[error("index out of bounds: ({x}, {y}) in {width}x{height} grid")]
    IndexOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// An internal invariant was violated. Reserved for defects
    /// (e.g. a pipeline stage invoked out of order), never for
    /// user-facing input validation.
    #[error("invalid internal invariant: {0}")]
    InvariantViolation(String),
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
