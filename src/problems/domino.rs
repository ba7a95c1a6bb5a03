//! Maximum-weight partial domino tiling as a layered DP.
//!
//! Layers are grid columns. The frontier after column `col` holds, for every
//! row mask, the best total weight collected in columns `0..=col` such that
//! exactly the rows of that mask are occupied in column `col` once its
//! vertical dominoes are placed (occupied either by a vertical domino or by
//! a horizontal one arriving from column `col - 1`).
//!
//! Each step runs two phases:
//! 1. *Horizontal* (skipped for column 0): from every settled mask of the
//!    previous column, try every carry of its free rows into this column,
//!    collecting the pair weights of those dominoes.
//! 2. *Vertical*: from every mask reached so far in this column, add every
//!    compatible placement of vertical dominoes in the remaining free rows.
//!
//! The optimum is the best entry of the last frontier.

use crate::grid::Grid;
use crate::tables::{carry_masks, ColumnWeights, PairWeights, VerticalTable};
use crate::traits::LayeredProblem;
use crate::utils::{mask_count, Mask};

/// Domino tiling instance: grid plus its precomputed lookup tables.
#[derive(Clone, Debug)]
pub struct DominoProblem {
    grid: Grid,
    vertical: VerticalTable,
    cells: ColumnWeights,
    weights: PairWeights,
    clamp_gain: bool,
}

/// One column of the DP state table, indexed by row mask.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnProfile {
    pub best: Vec<i64>,
}

impl ColumnProfile {
    fn zeroed(masks: usize) -> Self {
        Self {
            best: vec![0; masks],
        }
    }

    /// Best value over all masks; never below zero.
    pub fn max_value(&self) -> i64 {
        self.best.iter().copied().max().unwrap_or(0).max(0)
    }
}

impl DominoProblem {
    /// Precompute the placement and weight tables for `grid`.
    ///
    /// Negative horizontal gains are clamped to zero, as
    /// [`SolverBuilder`](crate::builder::SolverBuilder) does by default.
    pub fn new(grid: Grid) -> Self {
        Self::with_gain_clamp(grid, true)
    }

    /// Like [`new`](Self::new), choosing whether negative horizontal gains are
    /// clamped to zero. Both settings yield the same optimum, since the empty
    /// carry already offers a gain of zero from every state.
    pub fn with_gain_clamp(grid: Grid, clamp_gain: bool) -> Self {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("precompute", rows = grid.rows(), cols = grid.cols());
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let vertical = VerticalTable::build(grid.rows());
        let cells = ColumnWeights::build(&grid);
        let weights = PairWeights::build(&grid);
        Self {
            grid,
            vertical,
            cells,
            weights,
            clamp_gain,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn vertical_table(&self) -> &VerticalTable {
        &self.vertical
    }

    pub fn column_weights(&self) -> &ColumnWeights {
        &self.cells
    }

    pub fn pair_weights(&self) -> &PairWeights {
        &self.weights
    }

    pub fn clamps_gain(&self) -> bool {
        self.clamp_gain
    }

    #[inline]
    fn masks(&self) -> usize {
        mask_count(self.grid.rows())
    }

    /// Carry every settled mask of column `col` into column `col + 1`.
    fn horizontal_phase(&self, col: usize, settled: &ColumnProfile) -> ColumnProfile {
        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!("horizontal_phase", col);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let rows = self.grid.rows();
        let weights = self.weights.column(col);
        let mut next = ColumnProfile::zeroed(self.masks());
        for (base, &value) in settled.best.iter().enumerate() {
            for carry in carry_masks(base as Mask, rows) {
                let mut gain = weights[carry as usize];
                if self.clamp_gain {
                    gain = gain.max(0);
                }
                let slot = &mut next.best[carry as usize];
                *slot = (*slot).max(value + gain);
            }
        }
        next
    }

    /// Add vertical dominoes to every mask reached in column `col`, in place.
    ///
    /// Masks are visited in increasing order. A placement only ever writes to
    /// a strictly larger mask, so each entry is final by the time it is read.
    fn vertical_phase(&self, col: usize, profile: &mut ColumnProfile) {
        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!("vertical_phase", col);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        // Nothing can arrive from the left of column 0.
        let bases = if col == 0 { 1 } else { self.masks() };
        let cells = self.cells.column(col);
        for base in 0..bases {
            let value = profile.best[base];
            for &placed in self.vertical.placements(base as Mask) {
                if placed == 0 {
                    continue;
                }
                let combined = base | placed as usize;
                let candidate = value + cells[placed as usize];
                if candidate > profile.best[combined] {
                    profile.best[combined] = candidate;
                }
            }
        }
    }
}

impl LayeredProblem for DominoProblem {
    type Frontier = ColumnProfile;
    type Cost = i64;

    fn num_layers(&self) -> usize {
        self.grid.cols()
    }

    fn init_frontier(&self) -> Self::Frontier {
        ColumnProfile::zeroed(self.masks())
    }

    fn forward_step(&self, layer: usize, frontier: &Self::Frontier) -> Self::Frontier {
        let mut profile = if layer == 0 {
            ColumnProfile::zeroed(self.masks())
        } else {
            self.horizontal_phase(layer - 1, frontier)
        };
        self.vertical_phase(layer, &mut profile);
        profile
    }

    fn extract_cost(&self, frontier_t: &Self::Frontier) -> Self::Cost {
        frontier_t.max_value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LayerEngine;

    fn solve(rows: Vec<Vec<i64>>) -> i64 {
        let grid = Grid::from_rows(rows).unwrap();
        LayerEngine::new(DominoProblem::new(grid)).run()
    }

    #[test]
    fn two_by_two_covers_everything() {
        assert_eq!(solve(vec![vec![1, 2], vec![3, 4]]), 10);
    }

    #[test]
    fn single_cell_fits_no_domino() {
        assert_eq!(solve(vec![vec![42]]), 0);
        assert_eq!(solve(vec![vec![-3]]), 0);
    }

    #[test]
    fn vertical_only_column() {
        assert_eq!(solve(vec![vec![5], vec![6], vec![-100], vec![1], vec![2]]), 14);
    }

    #[test]
    fn odd_cell_left_out() {
        // 3x3 of ones: at most 4 dominoes fit.
        assert_eq!(solve(vec![vec![1; 3]; 3]), 8);
    }

    #[test]
    fn avoids_negative_cells() {
        let rows = vec![vec![4, -10, 4], vec![4, -10, 4]];
        assert_eq!(solve(rows), 16);
    }

    #[test]
    fn takes_negative_cell_when_partner_outweighs_it() {
        assert_eq!(solve(vec![vec![-1, 5]]), 4);
        assert_eq!(solve(vec![vec![-5, 1]]), 0);
    }

    #[test]
    fn degenerate_dimensions_yield_zero() {
        let no_cols = Grid::new(4, 0, Vec::new()).unwrap();
        assert_eq!(LayerEngine::new(DominoProblem::new(no_cols)).run(), 0);
        let no_rows = Grid::new(0, 5, Vec::new()).unwrap();
        assert_eq!(LayerEngine::new(DominoProblem::new(no_rows)).run(), 0);
    }

    #[test]
    fn first_column_only_starts_from_empty_mask() {
        let grid = Grid::from_rows(vec![vec![1, 0], vec![1, 0], vec![1, 0]]).unwrap();
        let engine = LayerEngine::new(DominoProblem::new(grid));
        let (_, frontiers) = engine.run_with_frontiers();
        let first = &frontiers[1].best;
        assert_eq!(first[0b011], 2);
        assert_eq!(first[0b110], 2);
        // Rows 0 and 2 cannot be occupied without row 1 in the first column.
        assert_eq!(first[0b101], 0);
        assert_eq!(first[0b111], 0);
    }

    #[test]
    fn clamp_does_not_change_optimum() {
        let rows = vec![vec![-3, 1, -2], vec![2, -7, 5], vec![-1, -1, 4]];
        let grid = Grid::from_rows(rows).unwrap();
        let clamped = LayerEngine::new(DominoProblem::with_gain_clamp(grid.clone(), true)).run();
        let raw = LayerEngine::new(DominoProblem::with_gain_clamp(grid, false)).run();
        assert_eq!(clamped, raw);
    }

    #[test]
    fn profiles_never_negative() {
        let rows = vec![vec![-9, -9, -9], vec![-9, -9, -9]];
        let grid = Grid::from_rows(rows).unwrap();
        let engine = LayerEngine::new(DominoProblem::with_gain_clamp(grid, false));
        let (cost, frontiers) = engine.run_with_frontiers();
        assert_eq!(cost, 0);
        assert!(frontiers.iter().all(|f| f.best.iter().all(|&v| v >= 0)));
    }
}
