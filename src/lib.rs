//! Maximum-weight partial domino tiling (domino-dp)
//!
//! Given a rectangular grid of signed integer weights, find the largest total
//! weight obtainable by covering cells with non-overlapping 1×2 dominoes,
//! horizontal or vertical. Covered cells contribute their value, uncovered
//! cells contribute nothing, so the answer is never negative.
//!
//! ## Core idea
//! 1. Sweep the grid column by column, keeping one DP value per row mask
//!    (which rows of the current column are occupied).
//! 2. Per column, carry horizontal dominoes in from the previous column, then
//!    add vertical dominoes inside the column.
//! 3. The three lookup structures this needs (vertical placements, horizontal
//!    carries, column-pair weights) live in [`tables`] and are built once.
//!
//! The sweep is phrased as a [`LayeredProblem`] driven by [`LayerEngine`].
//!
//! ## Quick start
//! ```
//! use domino_dp::{max_tiling_weight, Grid};
//!
//! let grid: Grid = "3 2\n1 2 3\n4 5 6\n".parse().unwrap();
//! assert_eq!(max_tiling_weight(&grid), 21);
//! ```
//!
//! ## Cost
//! Memory is `O(2^rows × cols)` for the weight table and the recorded DP
//! table; time is `O(3^rows × cols)`. Grids are limited to
//! [`MAX_ROWS`](utils::MAX_ROWS) rows.

pub mod builder;
pub mod engine;
pub mod grid;
pub mod problems;
pub mod reference;
pub mod tables;
pub mod traits;
pub mod utils;

pub use crate::builder::{max_tiling_weight, SolverBuilder};
pub use crate::engine::LayerEngine;
pub use crate::grid::{Grid, GridError};
pub use crate::traits::LayeredProblem;
