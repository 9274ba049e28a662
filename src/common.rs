//! Common types: shot outcomes and board errors.

use core::fmt;

use crate::bitboard::BitBoardError;
use crate::coordinate::Coordinate;

/// Result of a shot that landed on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    /// Shot missed all ships. The turn passes.
    Miss,
    /// Shot damaged a ship without sinking it. The shooter goes again.
    Hit,
    /// Shot destroyed the last segment of a ship. The turn passes.
    Sunk,
}

impl fmt::Display for ShotOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShotOutcome::Miss => write!(f, "Miss!"),
            ShotOutcome::Hit => write!(f, "Ship hit!"),
            ShotOutcome::Sunk => write!(f, "Ship sunk!"),
        }
    }
}

/// Errors returned by board, placement and game operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying bitboard error (board too large for the cell set).
    BitBoardError(BitBoardError),
    /// Shot landed outside the grid.
    OutOfBounds { coord: Coordinate },
    /// Cell was already shot at, or lies in a revealed contour.
    RepeatShot { coord: Coordinate },
    /// Ship would leave the grid, overlap a ship or touch one.
    PositionConflict { coord: Coordinate },
    /// Placement budget ran out; the board must be discarded.
    FleetUnplaceable { attempts: usize },
    /// Ships must have at least one cell.
    InvalidShipLength,
    /// A ship in the fleet is longer than the board side.
    ShipTooLong { length: usize, size: usize },
    /// The fleet has no ships.
    EmptyFleet,
    /// A shot was fired after the game was decided.
    GameOver,
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        BoardError::BitBoardError(err)
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::BitBoardError(e) => write!(f, "BitBoard error: {}", e),
            BoardError::OutOfBounds { .. } => write!(f, "Shot is outside the board"),
            BoardError::RepeatShot { coord } => write!(f, "Cell {} was already targeted", coord),
            BoardError::PositionConflict { coord } => {
                write!(f, "Ship cannot be placed at {}", coord)
            }
            BoardError::FleetUnplaceable { attempts } => {
                write!(f, "Unable to place fleet within {} attempts", attempts)
            }
            BoardError::InvalidShipLength => write!(f, "Ship length must be at least 1"),
            BoardError::ShipTooLong { length, size } => {
                write!(f, "Ship of length {} does not fit a {}x{} board", length, size, size)
            }
            BoardError::EmptyFleet => write!(f, "Fleet must contain at least one ship"),
            BoardError::GameOver => write!(f, "The game is already over"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
