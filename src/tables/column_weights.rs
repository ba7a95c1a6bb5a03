//! Single-column weight table.
//!
//! `get(mask, col)` is the weight of the cells of `mask` in column `col`,
//! i.e. the payoff of vertical dominoes covering exactly those rows. Built
//! once so the vertical phase never re-adds cells per (base, placement).

use crate::grid::Grid;
use crate::utils::{mask_count, Mask, MAX_ROWS};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[derive(Clone, Debug)]
pub struct ColumnWeights {
    masks: usize,
    cols: usize,
    /// Column-major, like [`PairWeights`](crate::tables::PairWeights).
    sums: Vec<i64>,
}

impl ColumnWeights {
    /// Build the table for every mask and every column of `grid`.
    ///
    /// # Panics
    /// Panics if the grid has more than `MAX_ROWS` rows.
    pub fn build(grid: &Grid) -> Self {
        let rows = grid.rows();
        assert!(rows <= MAX_ROWS, "at most {MAX_ROWS} rows are supported");
        let masks = mask_count(rows);
        let cols = grid.cols();
        let mut sums = vec![0i64; masks * cols];

        #[cfg(feature = "parallel")]
        sums.par_chunks_mut(masks)
            .enumerate()
            .for_each(|(col, column)| fill_column(grid, col, column));
        #[cfg(not(feature = "parallel"))]
        for (col, column) in sums.chunks_mut(masks).enumerate() {
            fill_column(grid, col, column);
        }

        Self { masks, cols, sums }
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn get(&self, mask: Mask, col: usize) -> i64 {
        self.column(col)[mask as usize]
    }

    /// Entries for one column, indexed by mask.
    #[inline]
    pub fn column(&self, col: usize) -> &[i64] {
        assert!(col < self.cols, "column {col} out of range");
        &self.sums[col * self.masks..(col + 1) * self.masks]
    }
}

/// Each mask extends the mask without its lowest row by that row's weight.
fn fill_column(grid: &Grid, col: usize, column: &mut [i64]) {
    for mask in 1..column.len() {
        let low = mask.trailing_zeros() as usize;
        column[mask] = column[mask & (mask - 1)] + grid.get(low, col);
    }
}
