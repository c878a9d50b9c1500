//! gridlabel-core - Core data structures for grid labeling
//!
//! This crate provides the [`Grid`] container used throughout the
//! gridlabel workspace: a rectangular 2D array of `u32` cells with
//! bounds-checked access and validated construction.
//!
//! # Cell value semantics
//!
//! The labeling crates interpret cell values as:
//!
//! - `0` - background, never touched by labeling
//! - `1` - unlabeled foreground
//! - `>= 2` - a component label
//!
//! The core crate itself attaches no meaning to values; it only stores
//! them.
//!
//! # Example
//!
//! ```
//! use gridlabel_core::Grid;
//!
//! let mut grid = Grid::new(4, 3).unwrap();
//! assert_eq!(grid.width(), 4);
//! assert_eq!(grid.height(), 3);
//!
//! grid.set(2, 3, 1).unwrap();
//! assert_eq!(grid.get(2, 3), Some(1));
//! ```

pub mod error;
pub mod grid;

pub use error::{Error, Result};
pub use grid::Grid;
