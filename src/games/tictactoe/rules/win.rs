//! Win detection logic for tic-tac-toe.

use super::super::{Cell, Marker, Position};
use tracing::instrument;

/// The 8 lines that win the game: 3 rows, 3 columns, 2 diagonals.
pub const WINNING_LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if `marker` holds all three cells of any winning line.
#[instrument(skip(cells))]
pub fn check_winner(cells: &[Cell; 9], marker: Marker) -> bool {
    winning_line(cells, marker).is_some()
}

/// Returns the first winning line completed by `marker`.
#[instrument(skip(cells))]
pub fn winning_line(cells: &[Cell; 9], marker: Marker) -> Option<[Position; 3]> {
    WINNING_LINES.into_iter().find(|line| {
        line.iter()
            .all(|pos| cells[pos.to_index()] == Cell::Marked(marker))
    })
}
