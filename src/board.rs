//! Game board: ship placement, contour buffers and shot resolution.

use alloc::vec::Vec;
use core::fmt;

use crate::bitboard::BitBoard;
use crate::common::{BoardError, ShotOutcome};
use crate::coordinate::Coordinate;
use crate::ship::Ship;

/// Cell set wide enough for boards up to 11×11.
pub(crate) type Cells = BitBoard<u128>;

/// What a single grid cell shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Ship,
    Miss,
    Hit,
    /// Revealed buffer around a sunk ship.
    Contour,
}

/// One side's grid.
///
/// Two reserved sets are kept apart: `blocked` holds ship cells and their
/// buffers and is only consulted while placing ships; `targeted` holds every
/// cell already shot plus the revealed contour of sunk ships and is only
/// consulted when resolving shots.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    grid: Vec<Cell>,
    blocked: Cells,
    targeted: Cells,
    ships: Vec<Ship>,
    sunk: usize,
}

impl Board {
    /// Create an empty `size`×`size` board.
    pub fn new(size: usize) -> Result<Self, BoardError> {
        let empty = Cells::try_new(size)?;
        Ok(Board {
            size,
            grid: alloc::vec![Cell::Empty; size * size],
            blocked: empty,
            targeted: empty,
            ships: Vec::new(),
            sunk: 0,
        })
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_out_of_bounds(&self, coord: Coordinate) -> bool {
        coord.index(self.size).is_none()
    }

    /// Marker at `coord`, or `None` off the grid.
    pub fn cell(&self, coord: Coordinate) -> Option<Cell> {
        coord.index(self.size).map(|idx| self.grid[idx])
    }

    /// Ships installed on this board, in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Number of ships sunk so far.
    pub fn sunk_count(&self) -> usize {
        self.sunk
    }

    /// Returns `true` when every installed ship is sunk.
    pub fn all_sunk(&self) -> bool {
        !self.ships.is_empty() && self.sunk == self.ships.len()
    }

    /// `true` if another ship may not be placed over `coord`.
    pub fn is_placement_blocked(&self, coord: Coordinate) -> bool {
        self.blocked.contains(coord)
    }

    /// `true` if a shot at `coord` would be rejected as a repeat.
    pub fn is_targeted(&self, coord: Coordinate) -> bool {
        self.targeted.contains(coord)
    }

    /// Read-only snapshot for renderers and target sources.
    pub fn view(&self) -> BoardView<'_> {
        BoardView { board: self }
    }

    /// Reserve every in-bounds cell of `ship` and its 8-neighbourhood.
    ///
    /// Without `reveal` the cells go to the placement buffer. With `reveal`
    /// (a ship was just sunk) they become un-targetable and newly reserved
    /// cells are shown as [`Cell::Contour`].
    pub fn mark_contour(&mut self, ship: &Ship, reveal: bool) {
        for cell in ship.cells() {
            for near in cell.neighbourhood() {
                let Some(idx) = near.index(self.size) else {
                    continue;
                };
                let set = if reveal {
                    &mut self.targeted
                } else {
                    &mut self.blocked
                };
                if set.insert(near).unwrap_or(false) && reveal {
                    self.grid[idx] = Cell::Contour;
                }
            }
        }
    }

    /// Place `ship` on the board.
    ///
    /// Every cell is validated before anything is written, so a rejected ship
    /// leaves the board exactly as it was.
    pub fn install_ship(&mut self, ship: Ship) -> Result<(), BoardError> {
        if let Some(coord) = ship
            .cells()
            .find(|&c| self.is_out_of_bounds(c) || self.blocked.contains(c))
        {
            return Err(BoardError::PositionConflict { coord });
        }
        for cell in ship.cells() {
            if let Some(idx) = cell.index(self.size) {
                self.grid[idx] = Cell::Ship;
                self.blocked.insert(cell)?;
            }
        }
        self.ships.push(ship);
        self.mark_contour(&ship, false);
        log::trace!("installed {:?}", ship);
        Ok(())
    }

    /// Forget every targeted cell. Called once between placement and play.
    pub fn reset_targeting(&mut self) {
        self.targeted.clear_all();
    }

    /// Resolve a shot at `coord`.
    pub fn receive_shot(&mut self, coord: Coordinate) -> Result<ShotOutcome, BoardError> {
        let idx = coord
            .index(self.size)
            .ok_or(BoardError::OutOfBounds { coord })?;
        if self.targeted.contains(coord) {
            return Err(BoardError::RepeatShot { coord });
        }
        self.targeted.insert(coord)?;

        let Some(ship) = self.ships.iter_mut().find(|s| s.is_hit_by(coord)) else {
            self.grid[idx] = Cell::Miss;
            return Ok(ShotOutcome::Miss);
        };
        ship.apply_hit();
        self.grid[idx] = Cell::Hit;
        if !ship.is_sunk() {
            return Ok(ShotOutcome::Hit);
        }

        let sunk = *ship;
        self.sunk += 1;
        self.mark_contour(&sunk, true);
        log::debug!("sunk {:?}, {} of {} down", sunk, self.sunk, self.ships.len());
        Ok(ShotOutcome::Sunk)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  size: {},\n  blocked: {:?},\n  targeted: {:?},\n  ships: {:?},\n  sunk: {}\n}}",
            self.size, self.blocked, self.targeted, self.ships, self.sunk
        )
    }
}

/// Borrowed read-only view of a [`Board`].
#[derive(Clone, Copy)]
pub struct BoardView<'a> {
    board: &'a Board,
}

impl<'a> BoardView<'a> {
    pub fn size(&self) -> usize {
        self.board.size
    }

    pub fn cell(&self, coord: Coordinate) -> Option<Cell> {
        self.board.cell(coord)
    }

    /// Grid rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &'a [Cell]> {
        let board = self.board;
        board.grid.chunks(board.size.max(1))
    }

    pub fn sunk_count(&self) -> usize {
        self.board.sunk
    }

    pub fn is_targeted(&self, coord: Coordinate) -> bool {
        self.board.is_targeted(coord)
    }
}
