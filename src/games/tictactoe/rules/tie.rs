//! Tie detection logic for tic-tac-toe.

use super::super::Cell;
use tracing::instrument;

/// Checks if every cell is taken.
///
/// A full board only means a tie once the last mover has been checked for
/// a win; callers must run [`super::check_winner`] first.
#[instrument(skip(cells))]
pub fn check_tie(cells: &[Cell; 9]) -> bool {
    cells.iter().all(|c| *c != Cell::Empty)
}
