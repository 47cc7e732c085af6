//! Error types for the regression test framework

use thiserror::Error;

/// Errors that can occur in the test framework
#[derive(Debug, Error)]
pub enum TestError {
    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for test framework operations
pub type TestResult<T> = Result<T, TestError>;
