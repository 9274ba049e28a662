#![cfg(feature = "std")]

use std::string::String;

use crate::{
    board::{BoardView, Cell},
    game::{MoveReport, Side},
};

const RULE_WIDTH: usize = 65;

fn cell_symbol(cell: Cell, hidden: bool) -> char {
    match cell {
        Cell::Empty => '0',
        Cell::Ship if hidden => '0',
        Cell::Ship => '■',
        Cell::Miss => 'T',
        Cell::Hit => 'X',
        Cell::Contour => '.',
    }
}

/// Render a board as text with 1-based row and column labels. With `hidden`
/// the ships that have not been hit are drawn as water.
pub fn render_board(view: &BoardView<'_>, hidden: bool) -> String {
    let mut out = String::from("  |");
    for c in 0..view.size() {
        out.push_str(&format!(" {} |", c + 1));
    }
    for (r, row) in view.rows().enumerate() {
        out.push_str(&format!("\n{} |", r + 1));
        for &cell in row {
            out.push_str(&format!(" {} |", cell_symbol(cell, hidden)));
        }
    }
    out
}

/// Two rendered boards next to each other, each under its title.
pub fn side_by_side(left_title: &str, left: &str, right_title: &str, right: &str) -> String {
    let width = left
        .lines()
        .chain(std::iter::once(left_title))
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0)
        + 10;
    let mut out = format!("{:<width$}{}", left_title, right_title, width = width);
    for (l, r) in left.lines().zip(right.lines()) {
        out.push('\n');
        out.push_str(&format!("{:<width$}{}", l, r, width = width));
    }
    out
}

pub fn print_welcome() {
    let rule = "_".repeat(RULE_WIDTH);
    println!("{}", rule);
    println!(" Welcome to Sea Battle!");
    println!("{}", rule);
    println!(" input format: row column, e.g. `3 5`");
    println!("{}", rule);
    println!(" legend: X - hit, T - miss, . - contour of a sunk ship");
    println!("{}", rule);
}

/// Print both boards: `own` in full, `enemy` with its ships hidden.
pub fn print_boards(own_title: &str, own: &BoardView<'_>, enemy_title: &str, enemy: &BoardView<'_>) {
    println!();
    println!(
        "{}",
        side_by_side(
            own_title,
            &render_board(own, false),
            enemy_title,
            &render_board(enemy, true)
        )
    );
    println!("{}", "_".repeat(RULE_WIDTH));
}

/// One line describing a resolved shot.
pub fn describe_move(report: &MoveReport, name: impl Fn(Side) -> &'static str) -> String {
    format!(
        "{} fires at {}: {}",
        name(report.shooter),
        report.target,
        report.outcome
    )
}
