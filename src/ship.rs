//! Ship geometry and damage tracking.

use core::fmt;

use crate::common::BoardError;
use crate::coordinate::Coordinate;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Cells extend along the row: (row, col + i).
    Horizontal,
    /// Cells extend down the column: (row + i, col).
    Vertical,
}

impl Orientation {
    /// (row, col) step between consecutive cells.
    fn step(self) -> (i32, i32) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
        }
    }
}

/// A straight ship anchored at its bow.
///
/// Geometry is fixed at construction; the only mutable part is the number of
/// segments still afloat.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    bow: Coordinate,
    length: usize,
    orientation: Orientation,
    remaining: usize,
}

impl Ship {
    /// Build a ship of `length` cells starting at `bow`. Bounds are checked
    /// when the ship is installed on a board, not here.
    pub fn new(bow: Coordinate, length: usize, orientation: Orientation) -> Result<Self, BoardError> {
        if length == 0 {
            return Err(BoardError::InvalidShipLength);
        }
        Ok(Ship {
            bow,
            length,
            orientation,
            remaining: length,
        })
    }

    /// Occupied cells, from the bow outwards.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> {
        let bow = self.bow;
        let (dr, dc) = self.orientation.step();
        (0..self.length as i32).map(move |i| bow.offset(dr * i, dc * i))
    }

    /// `true` if `coord` is one of the ship's cells.
    pub fn is_hit_by(&self, coord: Coordinate) -> bool {
        self.cells().any(|cell| cell == coord)
    }

    /// Take one point of damage. The board calls this at most once per cell;
    /// a sunk ship is left untouched.
    pub fn apply_hit(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
    }

    pub fn is_sunk(&self) -> bool {
        self.remaining == 0
    }

    /// Segments not yet hit.
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn bow(&self) -> Coordinate {
        self.bow
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ bow: ({}, {}), length: {}, orientation: {:?}, remaining: {} }}",
            self.bow.row(),
            self.bow.col(),
            self.length,
            self.orientation,
            self.remaining,
        )
    }
}
