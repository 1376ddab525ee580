#![cfg(feature = "std")]

//! Console rendering of boards and match events.

use std::fmt::Write as _;
use std::string::String;

use crate::{
    board::{Board, CellState},
    common::ShotResult,
    coordinate::Coordinate,
    events::{MatchEvent, MatchObserver, Side},
    game::Match,
};

const SEPARATOR: &str = "--------------------";

fn cell_symbol(state: CellState) -> char {
    match state {
        CellState::Empty => '▢',
        CellState::Occupied => '■',
        CellState::Hit => '✖',
        CellState::Miss => 'T',
        CellState::SunkBuffer => '▪',
    }
}

/// Draw a board as text, 1-indexed, hiding vessels when the board is hidden.
pub fn render_board(board: &Board) -> String {
    let size = board.size();
    let mut out = String::from(" ");
    for c in 0..size {
        let _ = write!(out, " | {}", c + 1);
    }
    out.push_str(" |");
    for r in 0..size {
        let _ = write!(out, "\n{} |", r + 1);
        for c in 0..size {
            let state = board
                .visible_cell(Coordinate::new(r as i32, c as i32))
                .unwrap_or(CellState::Empty);
            let _ = write!(out, " {} |", cell_symbol(state));
        }
    }
    out
}

/// Print both boards of a match, the player's first.
pub fn print_boards(game: &Match) {
    std::println!("{}", SEPARATOR);
    std::println!("Player board:");
    std::println!("{}", render_board(game.player_board()));
    std::println!("{}", SEPARATOR);
    std::println!("Computer board:");
    std::println!("{}", render_board(game.computer_board()));
    std::println!("{}", SEPARATOR);
}

/// Welcome banner with the input format.
pub fn greeting() -> &'static str {
    concat!(
        "-------------------\n",
        "     Welcome to    \n",
        "     Sea  Battle   \n",
        "-------------------\n",
        "   Input format:   \n",
        "    ROW space COL  \n",
        " ROW - row number  \n",
        " COL - column number",
    )
}

fn side_name(side: Side) -> &'static str {
    match side {
        Side::Player => "Player",
        Side::Computer => "Computer",
    }
}

/// Prints match events for a human audience.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleObserver;

impl MatchObserver for ConsoleObserver {
    fn notify(&mut self, event: &MatchEvent) {
        match event {
            MatchEvent::Shot {
                attacker,
                target,
                result,
            } => {
                if *attacker == Side::Computer {
                    std::println!("Computer move: {}", target);
                }
                match result {
                    ShotResult::Hit => std::println!("Vessel hit!"),
                    ShotResult::Sunk => std::println!("Vessel destroyed!"),
                    ShotResult::Miss => std::println!("Miss!"),
                }
            }
            MatchEvent::InvalidTarget { attacker, error, .. } => {
                if *attacker == Side::Player {
                    std::println!("{}", error);
                }
            }
            MatchEvent::Victory { winner } => {
                std::println!("{}", SEPARATOR);
                std::println!("{} wins!", side_name(*winner));
            }
        }
    }
}
