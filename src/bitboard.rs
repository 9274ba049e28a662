//! A fixed-capacity cell set packed into an unsigned integer.
//!
//! The board side length is chosen at runtime but `size * size` must fit in
//! the bit width of `T`. The type is `no_std` friendly and never allocates.

use core::{any, fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};

use crate::coordinate::Coordinate;

/// Errors returned by bitboard operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitBoardError {
    /// Requested board size N*N exceeds capacity of `T::BITS`.
    SizeTooLarge { n: usize, capacity: usize },
    /// Row or column index is out of bounds [0..N).
    IndexOutOfBounds { row: i32, col: i32 },
}

impl core::fmt::Display for BitBoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BitBoardError::SizeTooLarge { n, capacity } => {
                write!(
                    f,
                    "SizeTooLarge: N*N={} exceeds T::BITS={}",
                    n * n,
                    capacity
                )
            }
            BitBoardError::IndexOutOfBounds { row, col } => {
                write!(f, "IndexOutOfBounds: row={}, col={}", row, col)
            }
        }
    }
}

/// A set of cells on an N×N grid stored in the unsigned integer `T`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct BitBoard<T>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
    size: usize,
}

impl<T> BitBoard<T>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Number of cells `T` can hold.
    #[inline]
    pub fn capacity() -> usize {
        mem::size_of::<T>() * 8
    }

    /// Empty set for a `size`×`size` grid; `Err(SizeTooLarge)` if the grid
    /// does not fit in `T`.
    pub fn try_new(size: usize) -> Result<Self, BitBoardError> {
        let capacity = Self::capacity();
        if size.saturating_mul(size) > capacity {
            Err(BitBoardError::SizeTooLarge { n: size, capacity })
        } else {
            Ok(BitBoard {
                bits: T::zero(),
                size,
            })
        }
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the number of set bits (occupied cells).
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns true if no bits are set.
    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// `true` if `coord` is in the set. Coordinates off the grid never are.
    pub fn contains(&self, coord: Coordinate) -> bool {
        match coord.index(self.size) {
            Some(idx) => ((self.bits >> idx) & T::one()) != T::zero(),
            None => false,
        }
    }

    /// Adds `coord`, returning `true` if it was not present before.
    pub fn insert(&mut self, coord: Coordinate) -> Result<bool, BitBoardError> {
        let idx = self.check_bounds(coord)?;
        let bit = T::one() << idx;
        let fresh = (self.bits & bit).is_zero();
        self.bits = self.bits | bit;
        Ok(fresh)
    }

    /// Removes `coord`, returning `true` if it was present.
    pub fn remove(&mut self, coord: Coordinate) -> Result<bool, BitBoardError> {
        let idx = self.check_bounds(coord)?;
        let bit = T::one() << idx;
        let present = !(self.bits & bit).is_zero();
        self.bits = self.bits & !bit;
        Ok(present)
    }

    /// Clears all bits to `0`.
    #[inline]
    pub fn clear_all(&mut self) {
        self.bits = T::zero();
    }

    #[inline]
    fn check_bounds(&self, coord: Coordinate) -> Result<usize, BitBoardError> {
        coord.index(self.size).ok_or(BitBoardError::IndexOutOfBounds {
            row: coord.row(),
            col: coord.col(),
        })
    }

    /// Iterator over the set cells in row-major order.
    #[inline]
    pub fn iter(&self) -> SetBits<'_, T> {
        SetBits {
            board: self,
            idx: 0,
        }
    }
}

impl<T> fmt::Debug for BitBoard<T>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BitBoard<{}, {}>:", any::type_name::<T>(), self.size)?;
        for r in 0..self.size {
            for c in 0..self.size {
                let bit = if ((self.bits >> (r * self.size + c)) & T::one()) != T::zero() {
                    '■'
                } else {
                    '□'
                };
                write!(f, "{} ", bit)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Iterator over the set cells of a bitboard.
#[derive(Clone, Copy)]
pub struct SetBits<'a, T>
where
    T: PrimInt + Unsigned + Zero,
{
    board: &'a BitBoard<T>,
    idx: usize,
}

impl<'a, T> Iterator for SetBits<'a, T>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = Coordinate;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let size = self.board.size;
        while self.idx < size * size {
            let idx = self.idx;
            self.idx += 1;
            if ((self.board.bits >> idx) & T::one()) != T::zero() {
                return Some(Coordinate::from_index(idx, size));
            }
        }
        None
    }
}
