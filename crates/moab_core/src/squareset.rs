//! Fixed-size set of board squares.
//!
//! A `SquareSet` is a 256-bit set where each bit represents one square of the
//! 16×16 board, stored as four 64-bit words. Bit 0 is square 0 (x = 0, y = 0),
//! bit 255 is square 255 (x = 15, y = 15). Iteration always yields squares in
//! ascending order, which keeps every consumer deterministic.

use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign};

use crate::types::{BOARD_SIZE, NUM_SQUARES, Square};

const WORDS: usize = NUM_SQUARES / 64;

/// A set of squares on the 16×16 board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SquareSet(pub [u64; WORDS]);

impl SquareSet {
    pub const EMPTY: SquareSet = SquareSet([0; WORDS]);

    /// Create a set with a single square.
    #[inline(always)]
    pub const fn from_square(sq: Square) -> Self {
        let mut words = [0u64; WORDS];
        words[sq as usize / 64] = 1u64 << (sq as usize % 64);
        SquareSet(words)
    }

    /// All squares of rank `y`.
    pub const fn rank(y: usize) -> Self {
        let mut words = [0u64; WORDS];
        let first = y * BOARD_SIZE;
        // A rank is 16 bits and never straddles a word boundary.
        words[first / 64] = 0xFFFFu64 << (first % 64);
        SquareSet(words)
    }

    #[inline(always)]
    pub fn is_empty(self) -> bool {
        self.0.iter().all(|&w| w == 0)
    }

    #[inline(always)]
    pub const fn contains(self, sq: Square) -> bool {
        (self.0[sq as usize / 64] >> (sq as usize % 64)) & 1 != 0
    }

    #[inline(always)]
    pub fn insert(&mut self, sq: Square) {
        self.0[sq as usize / 64] |= 1u64 << (sq as usize % 64);
    }

    #[inline(always)]
    pub fn remove(&mut self, sq: Square) {
        self.0[sq as usize / 64] &= !(1u64 << (sq as usize % 64));
    }

    /// Number of squares in the set.
    #[inline(always)]
    pub fn len(self) -> u32 {
        self.0.iter().map(|w| w.count_ones()).sum()
    }

    /// Get and remove the lowest square.
    #[inline(always)]
    pub fn pop_first(&mut self) -> Option<Square> {
        for (i, w) in self.0.iter_mut().enumerate() {
            if *w != 0 {
                let bit = w.trailing_zeros() as usize;
                *w &= *w - 1;
                return Some((i * 64 + bit) as Square);
            }
        }
        None
    }
}

impl FromIterator<Square> for SquareSet {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Self {
        let mut set = SquareSet::EMPTY;
        for sq in iter {
            set.insert(sq);
        }
        set
    }
}

impl BitAnd for SquareSet {
    type Output = Self;
    #[inline(always)]
    fn bitand(mut self, rhs: Self) -> Self::Output {
        self &= rhs;
        self
    }
}

impl BitAndAssign for SquareSet {
    #[inline(always)]
    fn bitand_assign(&mut self, rhs: Self) {
        for (a, b) in self.0.iter_mut().zip(rhs.0) {
            *a &= b;
        }
    }
}

impl BitOr for SquareSet {
    type Output = Self;
    #[inline(always)]
    fn bitor(mut self, rhs: Self) -> Self::Output {
        self |= rhs;
        self
    }
}

impl BitOrAssign for SquareSet {
    #[inline(always)]
    fn bitor_assign(&mut self, rhs: Self) {
        for (a, b) in self.0.iter_mut().zip(rhs.0) {
            *a |= b;
        }
    }
}

/// Iterator over the squares of a set, in ascending order.
impl Iterator for SquareSet {
    type Item = Square;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        self.pop_first()
    }
}

#[cfg(test)]
#[path = "squareset_tests.rs"]
mod squareset_tests;
