//! Generic layer-by-layer DP driver.
//!
//! The engine owns a [`LayeredProblem`] and sweeps its layers strictly in
//! order: every step depends on the completed frontier of the previous one,
//! so there is nothing to overlap between layers.

use crate::traits::LayeredProblem;

/// Layer-sweeping engine for a problem instance `P`.
///
/// Typical usage:
/// ```
/// use domino_dp::{Grid, LayerEngine, problems::domino::DominoProblem};
///
/// let grid = Grid::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
/// let engine = LayerEngine::new(DominoProblem::new(grid));
/// assert_eq!(engine.run(), 10);
/// ```
pub struct LayerEngine<P: LayeredProblem> {
    problem: P,
}

impl<P: LayeredProblem> LayerEngine<P> {
    pub fn new(problem: P) -> Self {
        Self { problem }
    }

    /// Expose immutable reference to the underlying problem.
    pub fn problem(&self) -> &P {
        &self.problem
    }

    /// Give the problem back, e.g. to reuse its precomputed tables.
    pub fn into_problem(self) -> P {
        self.problem
    }

    /// Sweep all layers and return the optimum.
    ///
    /// Only the current frontier is kept alive.
    pub fn run(&self) -> P::Cost {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("layer_sweep", layers = self.problem.num_layers());
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let mut frontier = self.problem.init_frontier();
        for layer in 0..self.problem.num_layers() {
            frontier = self.step(layer, &frontier);
        }
        self.problem.extract_cost(&frontier)
    }

    /// Sweep all layers, keeping every frontier.
    ///
    /// Returns `(optimum, frontiers)` where `frontiers[0]` is the initial
    /// frontier and `frontiers[i + 1]` the frontier after layer `i`, so the
    /// vector always has `num_layers() + 1` entries.
    pub fn run_with_frontiers(&self) -> (P::Cost, Vec<P::Frontier>) {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("layer_sweep_recorded", layers = self.problem.num_layers());
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let t = self.problem.num_layers();
        let mut frontiers = Vec::with_capacity(t + 1);
        frontiers.push(self.problem.init_frontier());
        for layer in 0..t {
            let next = self.step(layer, &frontiers[layer]);
            frontiers.push(next);
        }
        let cost = self.problem.extract_cost(&frontiers[t]);
        (cost, frontiers)
    }

    #[inline]
    fn step(&self, layer: usize, frontier: &P::Frontier) -> P::Frontier {
        #[cfg(feature = "tracing")]
        let span = tracing::debug_span!("forward_step", layer);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();
        self.problem.forward_step(layer, frontier)
    }
}
