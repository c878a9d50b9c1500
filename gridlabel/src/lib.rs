//! gridlabel - Connected component labeling for 2D binary grids
//!
//! Assigns each 4-connected group of foreground cells in a binary grid
//! a unique integer label, counting up from 2. Labeling mutates the
//! grid in place; the value moving from 1 to its label is the visited
//! marker, so no auxiliary structures are needed beyond the flood
//! frontier.
//!
//! # Example
//!
//! ```
//! use gridlabel::{Grid, region::label_grid};
//!
//! let mut grid = Grid::from_rows(vec![
//!     vec![1, 0],
//!     vec![0, 1],
//! ]).unwrap();
//!
//! // Diagonal cells are not 4-connected, so two components.
//! let count = label_grid(&mut grid);
//! assert_eq!(count, 2);
//! assert_eq!(grid.to_rows(), vec![vec![2, 0], vec![0, 3]]);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use gridlabel_core::*;

// Re-export the region crate as a module
pub use gridlabel_region as region;
