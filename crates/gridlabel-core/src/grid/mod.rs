//! Grid - the 2D cell container
//!
//! A `Grid` is a rectangular `height x width` array of `u32` cells,
//! stored row-major in a single allocation. Rectangularity is enforced
//! at construction, so every later bounds check is against a single
//! width shared by all rows.
//!
//! # Ownership model
//!
//! A `Grid` is a plain owned value. Labeling operations mutate it in
//! place through `&mut Grid`; there is no separate output object.

mod access;

use crate::error::{Error, Result};
use std::fmt;

/// A rectangular 2D array of cell values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Width in cells (columns per row)
    width: usize,
    /// Height in cells (number of rows)
    height: usize,
    /// Row-major cell data, `width * height` entries
    data: Vec<u32>,
}

impl Grid {
    /// Create a zero-filled grid.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if `width` or `height` is 0.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        Ok(Self {
            width,
            height,
            data: vec![0; width * height],
        })
    }

    /// Create a grid from caller-supplied rows.
    ///
    /// The width is taken from the first row and every subsequent row
    /// must match it. This is the validation boundary for callers that
    /// assemble grids from external data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if there are no rows or the
    /// first row is empty, and [`Error::InvalidGridShape`] if any row
    /// length differs from the first.
    pub fn from_rows(rows: Vec<Vec<u32>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.len());

        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        let mut data = Vec::with_capacity(width * height);
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != width {
                return Err(Error::InvalidGridShape {
                    row,
                    expected: width,
                    actual: cells.len(),
                });
            }
            data.extend_from_slice(cells);
        }

        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Width in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in cells.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Borrow a single row, or `None` if `row` is out of bounds.
    pub fn row(&self, row: usize) -> Option<&[u32]> {
        if row >= self.height {
            return None;
        }
        Some(&self.data[row * self.width..(row + 1) * self.width])
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        self.data.chunks(self.width)
    }

    /// Copy the grid out as nested row vectors.
    pub fn to_rows(&self) -> Vec<Vec<u32>> {
        self.rows().map(|row| row.to_vec()).collect()
    }
}

impl fmt::Display for Grid {
    /// Renders one line per row, cells separated by single spaces.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for (col, cell) in row.iter().enumerate() {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{cell}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
