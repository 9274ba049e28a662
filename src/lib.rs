#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;
mod bitboard;
mod board;
mod common;
mod config;
mod coordinate;
mod fleet;
mod game;
mod player;
mod player_ai;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
mod player_cli;
#[cfg(feature = "std")]
pub mod ui;
mod ship;

pub use bitboard::{BitBoard, BitBoardError};
pub use board::*;
pub use common::*;
pub use config::*;
pub use coordinate::*;
pub use fleet::*;
pub use game::*;
pub use player::*;
pub use player_ai::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
#[cfg(feature = "std")]
pub use player_cli::*;
pub use ship::*;
