//! Random fleet placement with a bounded retry budget.

use rand::Rng;

use crate::board::Board;
use crate::common::BoardError;
use crate::config::GameConfig;
use crate::coordinate::Coordinate;
use crate::ship::{Orientation, Ship};

/// Random ship of `length` whose cells all lie on a `size`×`size` grid.
///
/// The bow is drawn only from positions where the whole ship fits, so the
/// only reason an install can fail is a collision with another ship's
/// contour.
pub fn random_ship<R: Rng>(rng: &mut R, size: usize, length: usize) -> Result<Ship, BoardError> {
    if length == 0 {
        return Err(BoardError::InvalidShipLength);
    }
    if length > size {
        return Err(BoardError::ShipTooLong { length, size });
    }
    let orientation = if rng.random() {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    };
    let max_r = if orientation == Orientation::Vertical {
        size - length
    } else {
        size - 1
    };
    let max_c = if orientation == Orientation::Horizontal {
        size - length
    } else {
        size - 1
    };
    let r = rng.random_range(0..=max_r);
    let c = rng.random_range(0..=max_c);
    Ship::new(Coordinate::new(r as i32, c as i32), length, orientation)
}

/// Try to place the whole fleet on one fresh board.
///
/// Conflicting placements are redrawn for the same ship. All attempts share
/// one budget of `config.max_attempts`; once it is spent the board is
/// abandoned with [`BoardError::FleetUnplaceable`]. On success the targeting
/// state is reset so the board is ready for play.
pub fn try_place_fleet<R: Rng>(rng: &mut R, config: &GameConfig) -> Result<Board, BoardError> {
    let mut board = Board::new(config.board_size)?;
    let mut attempts = 0;
    for &length in &config.fleet {
        loop {
            attempts += 1;
            if attempts > config.max_attempts {
                return Err(BoardError::FleetUnplaceable {
                    attempts: config.max_attempts,
                });
            }
            let ship = random_ship(rng, config.board_size, length)?;
            match board.install_ship(ship) {
                Ok(()) => break,
                Err(BoardError::PositionConflict { .. }) => continue,
                Err(e) => return Err(e),
            }
        }
    }
    log::trace!("fleet placed in {} attempts", attempts);
    board.reset_targeting();
    Ok(board)
}

/// Place the fleet, starting over on a fresh board whenever the attempt
/// budget runs out. Partial boards are never reused.
///
/// Gives up with [`BoardError::FleetUnplaceable`] after `config.max_boards`
/// boards.
pub fn random_board<R: Rng>(rng: &mut R, config: &GameConfig) -> Result<Board, BoardError> {
    config.validate()?;
    for round in 1..=config.max_boards {
        match try_place_fleet(rng, config) {
            Ok(board) => return Ok(board),
            Err(BoardError::FleetUnplaceable { attempts }) => {
                log::debug!("discarding board {} after {} attempts", round, attempts);
            }
            Err(e) => return Err(e),
        }
    }
    Err(BoardError::FleetUnplaceable {
        attempts: config.max_attempts,
    })
}
