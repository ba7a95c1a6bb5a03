//! Candidate horizontal carries from one column into the next.
//!
//! A carry is any subset of the rows left free by the base mask: each set row
//! starts a horizontal domino that also covers the same row of the next
//! column. Whether a carry pays off is decided by
//! [`PairWeights`](crate::tables::PairWeights), not here.
//!
//! The powerset is produced lazily instead of being stored per base mask:
//! summed over all bases it has `3^rows` elements, while the iterator needs
//! two words of state.

use crate::utils::{full_mask, Mask};

/// All submasks of the rows free in `base`, in increasing numeric order,
/// starting with the empty carry.
///
/// ```
/// use domino_dp::tables::carry_masks;
///
/// let carries: Vec<u32> = carry_masks(0b010, 3).collect();
/// assert_eq!(carries, vec![0b000, 0b001, 0b100, 0b101]);
/// ```
#[inline]
pub fn carry_masks(base: Mask, rows: usize) -> Submasks {
    Submasks::of(!base & full_mask(rows))
}

/// Ascending enumeration of every submask of a fixed mask.
#[derive(Clone, Debug)]
pub struct Submasks {
    free: Mask,
    next: Option<Mask>,
    remaining: usize,
}

impl Submasks {
    /// Enumerate all `2^popcount(free)` submasks of `free`.
    pub fn of(free: Mask) -> Self {
        Self {
            free,
            next: Some(0),
            remaining: 1usize << free.count_ones(),
        }
    }
}

impl Iterator for Submasks {
    type Item = Mask;

    #[inline]
    fn next(&mut self) -> Option<Mask> {
        let current = self.next?;
        // Fill the holes with ones so the increment carries straight into the
        // next free bit.
        let succ = (current | !self.free).wrapping_add(1) & self.free;
        self.next = (succ != 0).then_some(succ);
        self.remaining -= 1;
        Some(current)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Submasks {}
