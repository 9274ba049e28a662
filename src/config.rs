use alloc::vec::Vec;

use crate::board::Cells;
use crate::common::BoardError;

pub const BOARD_SIZE: usize = 6;
pub const NUM_SHIPS: usize = 7;
/// Ship lengths of the standard fleet, placed in this order.
pub const FLEET: [usize; NUM_SHIPS] = [3, 2, 2, 1, 1, 1, 1];

/// Placement attempts allowed for one board across the whole fleet.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 2000;
/// Fresh boards tried before giving up on a configuration.
pub const MAX_BOARDS: usize = 1000;

/// Board size, fleet and retry budgets for one game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub board_size: usize,
    pub fleet: Vec<usize>,
    pub max_attempts: usize,
    pub max_boards: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: BOARD_SIZE,
            fleet: FLEET.to_vec(),
            max_attempts: MAX_PLACEMENT_ATTEMPTS,
            max_boards: MAX_BOARDS,
        }
    }
}

impl GameConfig {
    /// Standard fleet on a board of `board_size`.
    pub fn with_size(board_size: usize) -> Self {
        Self {
            board_size,
            ..Self::default()
        }
    }

    /// Number of ships a side has to sink to win.
    pub fn fleet_size(&self) -> usize {
        self.fleet.len()
    }

    /// Total ship segments in the fleet.
    pub fn total_cells(&self) -> usize {
        self.fleet.iter().sum()
    }

    /// Reject configurations no board could ever hold.
    pub fn validate(&self) -> Result<(), BoardError> {
        Cells::try_new(self.board_size)?;
        if self.fleet.is_empty() {
            return Err(BoardError::EmptyFleet);
        }
        for &length in &self.fleet {
            if length == 0 {
                return Err(BoardError::InvalidShipLength);
            }
            if length > self.board_size {
                return Err(BoardError::ShipTooLong {
                    length,
                    size: self.board_size,
                });
            }
        }
        Ok(())
    }
}
