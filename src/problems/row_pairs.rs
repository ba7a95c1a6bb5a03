//! Single-row special case: choose non-overlapping adjacent pairs.
//!
//! With one row only horizontal dominoes exist, so the tiling problem
//! collapses to a 1-D recurrence over prefix lengths:
//!
//! `best[i + 1] = max(best[i], best[i - 1] + v[i - 1] + v[i])`
//!
//! The frontier carries the last two prefix optima. This is an independent
//! formulation of the same answer the profile DP gives for `rows = 1`.

use crate::traits::LayeredProblem;

#[derive(Clone, Debug)]
pub struct RowPairsProblem {
    values: Vec<i64>,
}

/// Optima of the two most recent prefixes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PairFrontier {
    /// Best over the prefix one shorter than `current`.
    pub previous: i64,
    /// Best over the prefix consumed so far.
    pub current: i64,
}

impl RowPairsProblem {
    pub fn new(values: Vec<i64>) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[i64] {
        &self.values
    }
}

impl LayeredProblem for RowPairsProblem {
    type Frontier = PairFrontier;
    type Cost = i64;

    fn num_layers(&self) -> usize {
        self.values.len()
    }

    fn init_frontier(&self) -> Self::Frontier {
        PairFrontier::default()
    }

    fn forward_step(&self, layer: usize, f: &Self::Frontier) -> Self::Frontier {
        let paired = if layer == 0 {
            0
        } else {
            f.previous + self.values[layer - 1] + self.values[layer]
        };
        PairFrontier {
            previous: f.current,
            current: f.current.max(paired),
        }
    }

    fn extract_cost(&self, frontier_t: &Self::Frontier) -> Self::Cost {
        frontier_t.current
    }
}
