//! Core domain types for tic-tac-toe.

use super::position::Position;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Symbol a player places on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Marker {
    /// Marker of the first player.
    #[display("X")]
    X,
    /// Marker of the second player.
    #[display("O")]
    O,
}

/// A single cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here yet.
    #[default]
    Empty,
    /// Cell holds a marker.
    Marked(Marker),
}

/// 3x3 board, cells in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of all nine cells.
    ///
    /// The copy is detached from the board; writing to it never touches
    /// the board itself.
    pub fn cells(&self) -> [Cell; 9] {
        self.cells
    }

    /// Returns the cell at `pos`.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Checks if the cell at `pos` is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Places `marker` at `pos` if the cell is empty.
    ///
    /// Returns `false` and leaves the board untouched when the cell is
    /// already taken.
    #[instrument(skip(self))]
    pub fn set_cell(&mut self, pos: Position, marker: Marker) -> bool {
        let cell = &mut self.cells[pos.to_index()];
        if *cell != Cell::Empty {
            return false;
        }
        *cell = Cell::Marked(marker);
        true
    }

    /// Clears every cell.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; 9];
    }

    /// Positions that can still be played.
    pub fn open_positions(&self) -> Vec<Position> {
        Position::ALL
            .into_iter()
            .filter(|pos| self.is_empty(*pos))
            .collect()
    }

    /// Formats the board as a human-readable grid.
    ///
    /// Empty cells show their 1-based number, matching the keys used to
    /// play them.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let idx = row * 3 + col;
                match self.cells[idx] {
                    Cell::Empty => result.push_str(&(idx + 1).to_string()),
                    Cell::Marked(marker) => result.push_str(&marker.to_string()),
                }
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert!(board.cells().iter().all(|c| *c == Cell::Empty));
        assert_eq!(board.open_positions().len(), 9);
    }

    #[test]
    fn test_cells_returns_detached_copy() {
        let board = Board::new();
        let mut copy = board.cells();
        copy[4] = Cell::Marked(Marker::X);
        assert_eq!(board.get(Position::Center), Cell::Empty);
    }

    #[test]
    fn test_set_cell_rejects_occupied() {
        let mut board = Board::new();
        assert!(board.set_cell(Position::Center, Marker::X));
        assert!(!board.set_cell(Position::Center, Marker::O));
        assert_eq!(board.get(Position::Center), Cell::Marked(Marker::X));
    }

    #[test]
    fn test_display() {
        let mut board = Board::new();
        board.set_cell(Position::TopLeft, Marker::X);
        board.set_cell(Position::BottomRight, Marker::O);
        assert_eq!(board.display(), "X|2|3\n-+-+-\n4|5|6\n-+-+-\n7|8|O");
    }
}
