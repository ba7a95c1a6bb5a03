//! Column-pair weight table.
//!
//! `get(mask, col)` is the total weight collected by horizontal dominoes
//! placed on the rows of `mask`, each covering column `col` and `col + 1`.
//! There is no entry for the last column.

use crate::grid::Grid;
use crate::utils::{mask_count, row_bit, Mask, MAX_ROWS};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[derive(Clone, Debug)]
pub struct PairWeights {
    masks: usize,
    spans: usize,
    /// Column-major: entries for column `c` occupy `[c * masks, (c + 1) * masks)`.
    sums: Vec<i64>,
}

impl PairWeights {
    /// Build the table for every mask and every adjacent column pair of `grid`.
    ///
    /// # Panics
    /// Panics if the grid has more than `MAX_ROWS` rows.
    pub fn build(grid: &Grid) -> Self {
        let rows = grid.rows();
        assert!(rows <= MAX_ROWS, "at most {MAX_ROWS} rows are supported");
        let masks = mask_count(rows);
        let spans = grid.cols().saturating_sub(1);
        let mut sums = vec![0i64; masks * spans];

        #[cfg(feature = "parallel")]
        sums.par_chunks_mut(masks)
            .enumerate()
            .for_each(|(col, column)| fill_column(grid, col, column));
        #[cfg(not(feature = "parallel"))]
        for (col, column) in sums.chunks_mut(masks).enumerate() {
            fill_column(grid, col, column);
        }

        Self { masks, spans, sums }
    }

    /// Number of column pairs covered, `cols - 1` (or 0).
    #[inline]
    pub fn spans(&self) -> usize {
        self.spans
    }

    /// Weight of horizontal dominoes on the rows of `mask` spanning `col`..=`col + 1`.
    #[inline]
    pub fn get(&self, mask: Mask, col: usize) -> i64 {
        self.column(col)[mask as usize]
    }

    /// Entries for one column pair, indexed by mask.
    #[inline]
    pub fn column(&self, col: usize) -> &[i64] {
        assert!(col < self.spans, "no column pair starts at column {col}");
        &self.sums[col * self.masks..(col + 1) * self.masks]
    }
}

/// Adds each row's pair weight into every mask containing that row.
fn fill_column(grid: &Grid, col: usize, column: &mut [i64]) {
    for row in 0..grid.rows() {
        let pair = grid.get(row, col) + grid.get(row, col + 1);
        let bit = row_bit(row) as usize;
        for (mask, sum) in column.iter_mut().enumerate() {
            if mask & bit != 0 {
                *sum += pair;
            }
        }
    }
}
