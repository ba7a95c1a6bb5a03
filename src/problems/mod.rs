//! Problem implementations for the layer engine.
//!
//! - [`domino`]    : maximum-weight partial domino tiling, swept column by column.
//! - [`row_pairs`] : the single-row special case as a 1-D pair-selection DP.

pub mod domino;
pub mod row_pairs;
