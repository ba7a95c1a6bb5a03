use crate::grid::Grid;
use crate::problems::domino::DominoProblem;
use crate::LayerEngine;

/// Configures a domino-tiling solve.
///
/// ```
/// use domino_dp::{Grid, SolverBuilder};
///
/// let grid = Grid::from_rows(vec![vec![1, -5, 1], vec![1, -5, 1]]).unwrap();
/// let engine = SolverBuilder::new(grid).with_gain_clamp(false).build();
/// assert_eq!(engine.run(), 4);
/// ```
pub struct SolverBuilder {
    grid: Grid,
    clamp_gain: bool,
}

impl SolverBuilder {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            clamp_gain: true,
        }
    }
    /// Clamp negative horizontal-carry gains to zero (the default).
    pub fn with_gain_clamp(mut self, clamp_gain: bool) -> Self {
        self.clamp_gain = clamp_gain;
        self
    }
    pub fn build(self) -> LayerEngine<DominoProblem> {
        LayerEngine::new(DominoProblem::with_gain_clamp(self.grid, self.clamp_gain))
    }
}

/// Maximum total weight of non-overlapping dominoes on `grid`.
pub fn max_tiling_weight(grid: &Grid) -> i64 {
    SolverBuilder::new(grid.clone()).build().run()
}
