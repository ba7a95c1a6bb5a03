//! Bitmask helpers shared by the placement tables and the column sweep.
//!
//! A [`Mask`] describes one grid column: bit `b` set means row `b` of that
//! column is occupied (or, depending on context, selected for a placement).

/// Row-occupancy mask for a single column.
pub type Mask = u32;

/// Largest row count the mask-indexed tables are built for.
///
/// The DP and weight tables hold `2^rows` entries per column and the
/// horizontal phase visits `3^rows` (state, carry) pairs per column, so this
/// is already far beyond what finishes in practice.
pub const MAX_ROWS: usize = 20;

/// Number of distinct masks over `rows` rows.
#[inline]
pub fn mask_count(rows: usize) -> usize {
    1usize << rows
}

/// Mask with only `row` set.
#[inline]
pub fn row_bit(row: usize) -> Mask {
    1 << row
}

/// Mask with every one of the `rows` rows set.
#[inline]
pub fn full_mask(rows: usize) -> Mask {
    (mask_count(rows) - 1) as Mask
}

/// Iterate the rows set in `mask`, lowest row first.
#[inline]
pub fn set_rows(mask: Mask) -> SetRows {
    SetRows(mask)
}

/// Iterator returned by [`set_rows`].
#[derive(Clone, Copy, Debug)]
pub struct SetRows(Mask);

impl Iterator for SetRows {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        if self.0 == 0 {
            return None;
        }
        let row = self.0.trailing_zeros() as usize;
        self.0 &= self.0 - 1;
        Some(row)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for SetRows {}
