//! Game rules for tic-tac-toe.
//!
//! Pure functions over a board snapshot. Rules are kept apart from the
//! board and the session so they can be checked in isolation.

pub mod tie;
pub mod win;

pub use tie::check_tie;
pub use win::{WINNING_LINES, check_winner, winning_line};
