//! Error types for the regression test framework

use thiserror::Error;

/// Errors raised by the regression test harness
#[derive(Debug, Error)]
pub enum TestError {
    /// I/O error while writing or reading test artifacts
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to write a grid artifact
    #[error("failed to write grid to {path}: {message}")]
    GridWrite { path: String, message: String },
}

/// Result type for test harness operations
pub type TestResult<T> = Result<T, TestError>;
