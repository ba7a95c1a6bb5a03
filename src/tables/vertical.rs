//! Vertical-domino placements within a single column.

use crate::utils::{mask_count, row_bit, Mask, MAX_ROWS};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Every way to lay non-overlapping vertical dominoes on the rows left free
/// by `base`.
///
/// Each returned mask contains only the newly covered rows, never bits of
/// `base`. The empty placement is always present, and no mask appears twice.
///
/// ```
/// use domino_dp::tables::vertical_placements;
///
/// // Three free rows: nothing, rows {0,1}, or rows {1,2}.
/// let mut found = vertical_placements(0b000, 3);
/// found.sort_unstable();
/// assert_eq!(found, vec![0b000, 0b011, 0b110]);
/// ```
pub fn vertical_placements(base: Mask, rows: usize) -> Vec<Mask> {
    let mut out = Vec::new();
    descend(base, rows, 0, 0, &mut out);
    out
}

fn descend(base: Mask, rows: usize, row: usize, placed: Mask, out: &mut Vec<Mask>) {
    if row + 1 >= rows {
        out.push(placed);
        return;
    }
    let pair = row_bit(row) | row_bit(row + 1);
    descend(base, rows, row + 1, placed, out);
    if base & pair == 0 {
        descend(base, rows, row + 2, placed | pair, out);
    }
}

/// [`vertical_placements`] memoized for every base mask over `rows` rows.
#[derive(Clone, Debug)]
pub struct VerticalTable {
    rows: usize,
    placements: Vec<Vec<Mask>>,
}

impl VerticalTable {
    /// Enumerate placements for all `2^rows` base masks.
    ///
    /// # Panics
    /// Panics if `rows > MAX_ROWS`.
    pub fn build(rows: usize) -> Self {
        assert!(rows <= MAX_ROWS, "at most {MAX_ROWS} rows are supported");
        #[cfg(feature = "parallel")]
        let placements = (0..mask_count(rows))
            .into_par_iter()
            .map(|base| vertical_placements(base as Mask, rows))
            .collect();
        #[cfg(not(feature = "parallel"))]
        let placements = (0..mask_count(rows))
            .map(|base| vertical_placements(base as Mask, rows))
            .collect();
        Self { rows, placements }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Placements compatible with `base`.
    #[inline]
    pub fn placements(&self, base: Mask) -> &[Mask] {
        &self.placements[base as usize]
    }

    /// Total number of (base, placement) pairs stored, summed over all
    /// `2^rows` bases. Never zero: every base admits the empty placement.
    pub fn pair_count(&self) -> usize {
        self.placements.iter().map(Vec::len).sum()
    }
}
