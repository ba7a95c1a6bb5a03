//! Lookup structures consumed by the column sweep.
//!
//! All of them are pure functions of the grid shape (and, for the weight
//! tables, the grid values). They are built once before the sweep and only
//! read afterwards:
//! - [`vertical`]       : vertical-domino placements inside one column, per base mask.
//! - [`carry`]          : candidate horizontal carries into the next column, per base mask.
//! - [`column_weights`] : payoff of the cells of a mask within one column.
//! - [`pair_weights`]   : payoff of horizontal dominoes between adjacent columns.

pub mod carry;
pub mod column_weights;
pub mod pair_weights;
pub mod vertical;

pub use carry::{carry_masks, Submasks};
pub use column_weights::ColumnWeights;
pub use pair_weights::PairWeights;
pub use vertical::{vertical_placements, VerticalTable};
