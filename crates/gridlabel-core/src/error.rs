//! Error types for gridlabel-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.

use thiserror::Error;

/// gridlabel-core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid grid dimensions
    #[error("invalid grid dimensions: {width}x{height}")]
    InvalidDimension { width: usize, height: usize },

    /// Ragged input rows
    #[error("invalid grid shape: row {row} has length {actual}, expected {expected}")]
    InvalidGridShape {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// Cell coordinate out of bounds
    #[error("cell out of bounds: ({row}, {col})")]
    CellOutOfBounds { row: usize, col: usize },
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
