//! Connected component labeling
//!
//! This module labels 4-connected groups of foreground cells in a
//! binary grid. Labeling overwrites the grid in place: a cell's value
//! moving from [`UNLABELED`] to its label doubles as the visited
//! marker, so no parallel visited structure is needed. For that scheme
//! to work, label values must never collide with [`BACKGROUND`] or
//! [`UNLABELED`], which is why labels start at [`FIRST_LABEL`].
//!
//! The flood uses an explicit LIFO frontier rather than recursion, so
//! component size never translates into call-stack depth.

use crate::error::{RegionError, RegionResult};
use gridlabel_core::Grid;

/// Cell value for background cells; never touched by labeling.
pub const BACKGROUND: u32 = 0;

/// Cell value for foreground cells that have not been labeled yet.
pub const UNLABELED: u32 = 1;

/// The first label assigned by [`label_grid`]. Labels count up from
/// here so they can never collide with [`BACKGROUND`] or [`UNLABELED`].
pub const FIRST_LABEL: u32 = 2;

/// Neighbor offsets `(d_row, d_col)` in N, S, E, W order. The order
/// does not affect which cells get labeled, but keeping it fixed makes
/// frontier traversal deterministic.
const NEIGHBORS_4: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, 1), (0, -1)];

/// Frontier loop shared by [`flood_label`] and [`label_grid`].
///
/// Assumes `origin` is in bounds and already stamped. Labeling a
/// neighbor before pushing it guarantees each cell enters the frontier
/// at most once: once overwritten it no longer passes the
/// `== UNLABELED` test, even on cyclic shapes like a 2x2 block.
fn flood(grid: &mut Grid, origin: (usize, usize), label: u32) -> u32 {
    let mut flooded = 0u32;
    let mut frontier = vec![origin];

    while let Some((row, col)) = frontier.pop() {
        for (d_row, d_col) in NEIGHBORS_4 {
            let Some(nrow) = row.checked_add_signed(d_row) else {
                continue;
            };
            let Some(ncol) = col.checked_add_signed(d_col) else {
                continue;
            };

            // get() returns None past the far edges, so this covers
            // all four bounds.
            if grid.get(nrow, ncol) == Some(UNLABELED) {
                let _ = grid.set(nrow, ncol, label);
                flooded += 1;
                frontier.push((nrow, ncol));
            }
        }
    }

    flooded
}

/// Flood a label outward from a seed coordinate.
///
/// Every cell 4-connected to `origin` through a chain of [`UNLABELED`]
/// cells is set to `label`. The origin cell itself is expected to have
/// been stamped with `label` by the caller already; the flood never
/// writes it. Cells holding [`BACKGROUND`] or any value `>= 2` block
/// propagation.
///
/// Normal use is through [`label_grid`]; calling this directly is for
/// callers that seed and stamp components themselves.
///
/// # Arguments
///
/// * `grid` - Grid to mutate in place
/// * `origin` - `(row, col)` seed coordinate
/// * `label` - Label value to propagate, at least [`FIRST_LABEL`]
///
/// # Returns
///
/// The number of cells stamped, not counting the origin.
///
/// # Errors
///
/// Returns [`RegionError::InvalidSeed`] if `origin` is out of bounds
/// and [`RegionError::InvalidLabel`] if `label` is below
/// [`FIRST_LABEL`].
///
/// # Example
///
/// ```
/// use gridlabel_core::Grid;
/// use gridlabel_region::{flood_label, FIRST_LABEL};
///
/// let mut grid = Grid::from_rows(vec![
///     vec![1, 1, 0],
///     vec![0, 1, 0],
///     vec![0, 0, 1],
/// ]).unwrap();
///
/// grid.set(0, 0, FIRST_LABEL).unwrap();
/// let flooded = flood_label(&mut grid, (0, 0), FIRST_LABEL).unwrap();
///
/// assert_eq!(flooded, 2);
/// assert_eq!(grid.get(2, 2), Some(1)); // other component untouched
/// ```
pub fn flood_label(grid: &mut Grid, origin: (usize, usize), label: u32) -> RegionResult<u32> {
    let (row, col) = origin;
    if row >= grid.height() || col >= grid.width() {
        return Err(RegionError::InvalidSeed { row, col });
    }
    if label < FIRST_LABEL {
        return Err(RegionError::InvalidLabel(label));
    }

    Ok(flood(grid, origin, label))
}

/// Label every 4-connected foreground component in the grid.
///
/// Scans in row-major order. Each cell still holding [`UNLABELED`]
/// starts a new component: it is stamped with the next label and the
/// label is flooded to everything reachable from it before the scan
/// moves on. The first component found gets label [`FIRST_LABEL`], the
/// second `FIRST_LABEL + 1`, and so on, so discovery order fully
/// determines the label values.
///
/// Precondition (documented, not enforced): cells hold only
/// [`BACKGROUND`] and [`UNLABELED`] before the call. Cells with values
/// `>= 2` are treated as already labeled and skipped, so running this
/// on an already-labeled grid is a no-op.
///
/// # Returns
///
/// The number of components found.
///
/// # Example
///
/// ```
/// use gridlabel_core::Grid;
/// use gridlabel_region::label_grid;
///
/// let mut grid = Grid::from_rows(vec![
///     vec![1, 0, 1],
///     vec![0, 0, 1],
///     vec![1, 0, 1],
/// ]).unwrap();
///
/// assert_eq!(label_grid(&mut grid), 3);
/// assert_eq!(grid.to_rows(), vec![
///     vec![2, 0, 3],
///     vec![0, 0, 3],
///     vec![4, 0, 3],
/// ]);
/// ```
pub fn label_grid(grid: &mut Grid) -> u32 {
    let mut next_label = FIRST_LABEL;

    for row in 0..grid.height() {
        for col in 0..grid.width() {
            if grid.get(row, col) == Some(UNLABELED) {
                let _ = grid.set(row, col, next_label);
                flood(grid, (row, col), next_label);
                next_label += 1;
            }
        }
    }

    next_label - FIRST_LABEL
}

/// Count the components in a labeled grid.
///
/// [`label_grid`] assigns the contiguous range
/// `[FIRST_LABEL, FIRST_LABEL + n - 1]`, so the count is recovered
/// from the maximum cell value. Returns 0 for a grid with no labels.
pub fn component_count(grid: &Grid) -> u32 {
    let max = grid
        .rows()
        .flatten()
        .copied()
        .max()
        .unwrap_or(BACKGROUND);

    if max < FIRST_LABEL {
        0
    } else {
        max - FIRST_LABEL + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, RngExt, SeedableRng};

    fn labeled(rows: Vec<Vec<u32>>) -> (Grid, u32) {
        let mut grid = Grid::from_rows(rows).unwrap();
        let count = label_grid(&mut grid);
        (grid, count)
    }

    #[test]
    fn test_label_grid_reference_scenario() {
        let (grid, count) = labeled(vec![
            vec![1, 0, 0, 1, 1],
            vec![0, 1, 1, 0, 0],
            vec![1, 0, 1, 1, 1],
            vec![1, 1, 0, 1, 0],
        ]);

        assert_eq!(count, 4);
        assert_eq!(
            grid.to_rows(),
            vec![
                vec![2, 0, 0, 3, 3],
                vec![0, 4, 4, 0, 0],
                vec![5, 0, 4, 4, 4],
                vec![5, 5, 0, 4, 0],
            ]
        );
    }

    #[test]
    fn test_label_grid_small_scenario() {
        let (grid, count) = labeled(vec![
            vec![1, 0, 1],
            vec![0, 0, 1],
            vec![1, 0, 1],
        ]);

        assert_eq!(count, 3);
        assert_eq!(
            grid.to_rows(),
            vec![vec![2, 0, 3], vec![0, 0, 3], vec![4, 0, 3]]
        );
    }

    #[test]
    fn test_all_background_unchanged() {
        let (grid, count) = labeled(vec![vec![0; 6]; 4]);

        assert_eq!(count, 0);
        assert_eq!(grid.to_rows(), vec![vec![0; 6]; 4]);
        assert_eq!(component_count(&grid), 0);
    }

    #[test]
    fn test_all_foreground_single_component() {
        let (grid, count) = labeled(vec![vec![1; 5]; 3]);

        assert_eq!(count, 1);
        assert_eq!(grid.to_rows(), vec![vec![FIRST_LABEL; 5]; 3]);
        assert_eq!(component_count(&grid), 1);
    }

    #[test]
    fn test_relabeling_is_noop() {
        let (mut grid, first) = labeled(vec![
            vec![1, 0, 1],
            vec![0, 0, 1],
            vec![1, 0, 1],
        ]);
        let before = grid.clone();

        let second = label_grid(&mut grid);

        assert_eq!(first, 3);
        assert_eq!(second, 0);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_diagonals_are_not_connected() {
        let (grid, count) = labeled(vec![vec![1, 0], vec![0, 1]]);

        assert_eq!(count, 2);
        assert_eq!(grid.to_rows(), vec![vec![2, 0], vec![0, 3]]);
    }

    #[test]
    fn test_single_cell_grid() {
        let (grid, count) = labeled(vec![vec![1]]);
        assert_eq!(count, 1);
        assert_eq!(grid.get(0, 0), Some(FIRST_LABEL));

        let (grid, count) = labeled(vec![vec![0]]);
        assert_eq!(count, 0);
        assert_eq!(grid.get(0, 0), Some(0));
    }

    #[test]
    fn test_flood_label_stops_at_component_edge() {
        // Two components; flooding the first must not leak into the
        // second.
        let mut grid = Grid::from_rows(vec![
            vec![1, 1, 0, 1],
            vec![1, 0, 0, 1],
        ])
        .unwrap();

        grid.set(0, 0, 9).unwrap();
        let flooded = flood_label(&mut grid, (0, 0), 9).unwrap();

        assert_eq!(flooded, 2);
        assert_eq!(
            grid.to_rows(),
            vec![vec![9, 9, 0, 1], vec![9, 0, 0, 1]]
        );
    }

    #[test]
    fn test_flood_label_dense_block() {
        // A 2x2 all-foreground block is the smallest cyclic shape;
        // label-then-push must still visit each cell exactly once.
        let mut grid = Grid::from_rows(vec![vec![1, 1], vec![1, 1]]).unwrap();

        grid.set(0, 0, FIRST_LABEL).unwrap();
        let flooded = flood_label(&mut grid, (0, 0), FIRST_LABEL).unwrap();

        assert_eq!(flooded, 3);
        assert_eq!(grid.to_rows(), vec![vec![2, 2], vec![2, 2]]);
    }

    #[test]
    fn test_flood_label_invalid_seed() {
        let mut grid = Grid::new(3, 3).unwrap();
        let result = flood_label(&mut grid, (3, 0), FIRST_LABEL);
        assert!(matches!(
            result,
            Err(RegionError::InvalidSeed { row: 3, col: 0 })
        ));
    }

    #[test]
    fn test_flood_label_rejects_sentinel_labels() {
        let mut grid = Grid::new(3, 3).unwrap();
        assert!(matches!(
            flood_label(&mut grid, (0, 0), BACKGROUND),
            Err(RegionError::InvalidLabel(0))
        ));
        assert!(matches!(
            flood_label(&mut grid, (0, 0), UNLABELED),
            Err(RegionError::InvalidLabel(1))
        ));
    }

    #[test]
    fn test_component_count_matches_label_grid() {
        let (grid, count) = labeled(vec![
            vec![1, 0, 0, 1, 1],
            vec![0, 1, 1, 0, 0],
            vec![1, 0, 1, 1, 1],
            vec![1, 1, 0, 1, 0],
        ]);

        assert_eq!(component_count(&grid), count);
    }

    /// Collect all cells holding `label` reachable from `start`
    /// through cells holding `label`.
    fn reachable(grid: &Grid, start: (usize, usize), label: u32) -> Vec<(usize, usize)> {
        let mut seen = vec![start];
        let mut frontier = vec![start];

        while let Some((row, col)) = frontier.pop() {
            for (d_row, d_col) in NEIGHBORS_4 {
                let Some(nrow) = row.checked_add_signed(d_row) else {
                    continue;
                };
                let Some(ncol) = col.checked_add_signed(d_col) else {
                    continue;
                };
                if grid.get(nrow, ncol) == Some(label) && !seen.contains(&(nrow, ncol)) {
                    seen.push((nrow, ncol));
                    frontier.push((nrow, ncol));
                }
            }
        }

        seen
    }

    #[test]
    fn test_randomized_grids_satisfy_invariants() {
        let mut rng = StdRng::seed_from_u64(0x9d1f);

        for _ in 0..50 {
            let height = rng.random_range(1..=12);
            let width = rng.random_range(1..=12);
            let rows: Vec<Vec<u32>> = (0..height)
                .map(|_| (0..width).map(|_| rng.random_range(0..2)).collect())
                .collect();

            let original = rows.clone();
            let mut grid = Grid::from_rows(rows).unwrap();
            let count = label_grid(&mut grid);

            // Background invariance and no cell left unlabeled.
            for (row, cells) in grid.rows().enumerate() {
                for (col, &cell) in cells.iter().enumerate() {
                    if original[row][col] == BACKGROUND {
                        assert_eq!(cell, BACKGROUND);
                    } else {
                        assert!(cell >= FIRST_LABEL);
                    }
                }
            }

            // Labels form the contiguous range [2, 2 + count - 1].
            let mut labels: Vec<u32> = grid
                .rows()
                .flatten()
                .copied()
                .filter(|&c| c >= FIRST_LABEL)
                .collect();
            labels.sort_unstable();
            labels.dedup();
            assert_eq!(labels.len() as u32, count);
            let expected: Vec<u32> = (FIRST_LABEL..FIRST_LABEL + count).collect();
            assert_eq!(labels, expected);

            // Separation: 4-adjacent foreground cells share a label.
            for row in 0..grid.height() {
                for col in 0..grid.width() {
                    let cell = grid.get(row, col).unwrap();
                    if cell < FIRST_LABEL {
                        continue;
                    }
                    if let Some(east) = grid.get(row, col + 1) {
                        assert!(east < FIRST_LABEL || east == cell);
                    }
                    if let Some(south) = grid.get(row + 1, col) {
                        assert!(south < FIRST_LABEL || south == cell);
                    }
                }
            }

            // Connectivity: every cell of a label is reachable from
            // the first cell carrying it.
            for &label in &labels {
                let mut cells = Vec::new();
                for (row, line) in grid.rows().enumerate() {
                    for (col, &cell) in line.iter().enumerate() {
                        if cell == label {
                            cells.push((row, col));
                        }
                    }
                }
                let reached = reachable(&grid, cells[0], label);
                assert_eq!(reached.len(), cells.len());
            }
        }
    }
}
