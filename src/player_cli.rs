#![cfg(feature = "std")]

use std::io::{self, BufRead, StdinLock, Write};
use std::string::{String, ToString};

use crate::{board::BoardView, common::BoardError, coordinate::Coordinate, player::TargetSource};

/// Parse a `row col` pair as typed by a player (1-based) into a 0-based
/// coordinate. Range is not checked here; the board rejects off-grid shots.
pub fn parse_target(input: &str) -> Result<Coordinate, String> {
    let parts: Vec<&str> = input.split_whitespace().collect();
    if parts.len() != 2 {
        return Err("Enter two coordinates: row and column".to_string());
    }
    let number = |s: &str| -> Result<i32, String> {
        if !s.chars().all(|ch| ch.is_ascii_digit()) {
            return Err(format!("'{}' is not a number", s));
        }
        s.parse::<i32>()
            .map_err(|_| format!("'{}' is too large", s))
    };
    let row = number(parts[0])?;
    let col = number(parts[1])?;
    Ok(Coordinate::new(row - 1, col - 1))
}

/// Human player reading targets from a line-oriented input.
pub struct CliTarget<R: BufRead> {
    input: R,
}

impl CliTarget<StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> CliTarget<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }
}

impl<R: BufRead> TargetSource for CliTarget<R> {
    fn next_target(&mut self, _view: &BoardView<'_>) -> Option<Coordinate> {
        loop {
            print!("Your move: ");
            let _ = io::stdout().flush();
            let mut line = String::new();
            match self.input.read_line(&mut line) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(e) => {
                    log::warn!("failed to read input: {}", e);
                    return None;
                }
            }
            match parse_target(&line) {
                Ok(coord) => return Some(coord),
                Err(msg) => println!("{}", msg),
            }
        }
    }

    fn handle_rejected(&mut self, _target: Coordinate, err: &BoardError) {
        println!("{}", err);
    }
}
