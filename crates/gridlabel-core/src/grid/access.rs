//! Cell access functions
//!
//! Bounds-checked getters and setters for individual cells. Reads
//! return `Option` so scan loops can treat out-of-bounds the same as
//! a failed value test; writes return a `Result` with the offending
//! coordinate.

use super::Grid;
use crate::error::{Error, Result};

impl Grid {
    /// Get the cell value at `(row, col)`.
    ///
    /// Returns `None` if the coordinate is out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<u32> {
        if row >= self.height || col >= self.width {
            return None;
        }
        Some(self.data[row * self.width + col])
    }

    /// Set the cell value at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CellOutOfBounds`] if the coordinate is out of
    /// bounds.
    pub fn set(&mut self, row: usize, col: usize, val: u32) -> Result<()> {
        if row >= self.height || col >= self.width {
            return Err(Error::CellOutOfBounds { row, col });
        }
        self.data[row * self.width + col] = val;
        Ok(())
    }
}
