//! Grid coordinates.

use core::fmt;

/// Offsets of a cell's 3×3 neighbourhood, the cell itself included.
const NEIGHBOURHOOD: [(i32, i32); 9] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 0),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A (row, col) position on the grid, 0-based.
///
/// Components are signed so that neighbours of edge cells and user input
/// such as `0 0` (which maps to `(-1, -1)`) can be expressed and then
/// rejected by bounds checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    row: i32,
    col: i32,
}

impl Coordinate {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    pub fn row(&self) -> i32 {
        self.row
    }

    pub fn col(&self) -> i32 {
        self.col
    }

    /// Coordinate shifted by (`d_row`, `d_col`).
    pub fn offset(self, d_row: i32, d_col: i32) -> Self {
        Self::new(self.row + d_row, self.col + d_col)
    }

    /// The cell and its 8 neighbours, in row-major order. May yield
    /// coordinates outside the grid.
    pub fn neighbourhood(self) -> impl Iterator<Item = Coordinate> {
        NEIGHBOURHOOD.into_iter().map(move |(dr, dc)| self.offset(dr, dc))
    }

    /// Row-major index on a `size`×`size` grid, or `None` when outside it.
    pub fn index(self, size: usize) -> Option<usize> {
        let row = usize::try_from(self.row).ok()?;
        let col = usize::try_from(self.col).ok()?;
        if row < size && col < size {
            Some(row * size + col)
        } else {
            None
        }
    }

    /// Inverse of [`Coordinate::index`].
    pub fn from_index(index: usize, size: usize) -> Self {
        Self::new((index / size) as i32, (index % size) as i32)
    }
}

/// Formats as the 1-based `row col` pair players type in.
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.row + 1, self.col + 1)
    }
}
