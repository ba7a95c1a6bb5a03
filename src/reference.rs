//! Independent baselines for checking the profile DP.
//!
//! These are far slower than the column sweep and meant for small inputs:
//! the CLI's `--verify` flag and the test suite.

use crate::grid::Grid;
use crate::problems::row_pairs::RowPairsProblem;
use crate::LayerEngine;

/// Exhaustive search over every set of non-overlapping dominoes.
///
/// Cells are visited in row-major order; each uncovered cell is either left
/// empty, paired with its right neighbour, or paired with the cell below.
/// Runs in time proportional to the number of partial tilings.
pub fn brute_force_optimum(grid: &Grid) -> i64 {
    let mut covered = vec![false; grid.cells().len()];
    search(grid, 0, &mut covered)
}

fn search(grid: &Grid, cell: usize, covered: &mut [bool]) -> i64 {
    if cell == covered.len() {
        return 0;
    }
    if covered[cell] {
        return search(grid, cell + 1, covered);
    }
    let cols = grid.cols();
    let (row, col) = (cell / cols, cell % cols);
    let value = grid.get(row, col);

    let mut best = search(grid, cell + 1, covered);
    if col + 1 < cols && !covered[cell + 1] {
        covered[cell + 1] = true;
        let right = value + grid.get(row, col + 1) + search(grid, cell + 1, covered);
        covered[cell + 1] = false;
        best = best.max(right);
    }
    if row + 1 < grid.rows() {
        // Cells after `cell` can only have been covered from the left, and the
        // cell below is reached after its left neighbour, so it is still free.
        let below = cell + cols;
        covered[below] = true;
        let down = value + grid.get(row + 1, col) + search(grid, cell + 1, covered);
        covered[below] = false;
        best = best.max(down);
    }
    best
}

/// Optimum for a single row of values, via the 1-D pair recurrence.
pub fn row_optimum(values: &[i64]) -> i64 {
    LayerEngine::new(RowPairsProblem::new(values.to_vec())).run()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn golden_two_by_two() {
        let grid = Grid::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        assert_eq!(brute_force_optimum(&grid), 10);
    }

    #[test]
    fn empty_and_single_cell() {
        assert_eq!(brute_force_optimum(&Grid::new(0, 0, Vec::new()).unwrap()), 0);
        assert_eq!(brute_force_optimum(&Grid::new(3, 0, Vec::new()).unwrap()), 0);
        assert_eq!(brute_force_optimum(&Grid::new(1, 1, vec![7]).unwrap()), 0);
    }

    #[test]
    fn single_row_agrees_with_recurrence() {
        let values = vec![3, -1, 4, 1, -5, 9, 2, 6];
        let grid = Grid::new(1, values.len(), values.clone()).unwrap();
        assert_eq!(brute_force_optimum(&grid), row_optimum(&values));
    }

    #[test]
    fn three_by_two_prefers_verticals() {
        // Columns [9, 9, 0] and [0, 9, 9]: verticals give 18 + 18.
        let grid = Grid::from_rows(vec![vec![9, 0], vec![9, 9], vec![0, 9]]).unwrap();
        assert_eq!(brute_force_optimum(&grid), 36);
    }
}
