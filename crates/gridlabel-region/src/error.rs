//! Error types for gridlabel-region

use thiserror::Error;

/// Errors that can occur during region labeling operations
#[derive(Debug, Error)]
pub enum RegionError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] gridlabel_core::Error),

    /// Invalid seed position
    #[error("invalid seed position: ({row}, {col})")]
    InvalidSeed { row: usize, col: usize },

    /// Label value that would collide with the background or
    /// unlabeled-foreground sentinels
    #[error("invalid label: {0} (labels must be >= 2)")]
    InvalidLabel(u32),
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;
