//! gridlabel-region - Connected component labeling
//!
//! This crate labels 4-connected groups of foreground cells in a
//! binary [`Grid`](gridlabel_core::Grid), in place:
//!
//! - **Connected component labeling** - [`label_grid`] stamps every
//!   foreground component with a unique label, counting up from
//!   [`FIRST_LABEL`]
//! - **Flood labeling** - [`flood_label`] propagates one label from a
//!   seed coordinate, for callers that stamp components themselves
//! - **Component counting** - [`component_count`] recovers the number
//!   of components from a labeled grid
//!
//! # Examples
//!
//! ## Labeling a grid
//!
//! ```
//! use gridlabel_core::Grid;
//! use gridlabel_region::label_grid;
//!
//! let mut grid = Grid::from_rows(vec![
//!     vec![1, 0, 0, 1, 1],
//!     vec![0, 1, 1, 0, 0],
//!     vec![1, 0, 1, 1, 1],
//!     vec![1, 1, 0, 1, 0],
//! ]).unwrap();
//!
//! let count = label_grid(&mut grid);
//! assert_eq!(count, 4);
//! assert_eq!(grid.to_rows(), vec![
//!     vec![2, 0, 0, 3, 3],
//!     vec![0, 4, 4, 0, 0],
//!     vec![5, 0, 4, 4, 4],
//!     vec![5, 5, 0, 4, 0],
//! ]);
//! ```
//!
//! ## Flooding a single component
//!
//! ```
//! use gridlabel_core::Grid;
//! use gridlabel_region::{flood_label, FIRST_LABEL};
//!
//! let mut grid = Grid::from_rows(vec![
//!     vec![1, 1, 0],
//!     vec![0, 1, 0],
//!     vec![0, 0, 1],
//! ]).unwrap();
//!
//! grid.set(0, 0, FIRST_LABEL).unwrap();
//! let flooded = flood_label(&mut grid, (0, 0), FIRST_LABEL).unwrap();
//! assert_eq!(flooded, 2);
//! ```

pub mod conncomp;
pub mod error;

// Re-export core types
pub use gridlabel_core;

// Re-export error types
pub use error::{RegionError, RegionResult};

// Re-export conncomp constants and functions
pub use conncomp::{
    BACKGROUND, FIRST_LABEL, UNLABELED, component_count, flood_label, label_grid,
};
