//! Tic-tac-toe: board, rules and the two-player session controller.

mod events;
mod phases;
mod position;
pub mod rules;
mod session;
mod types;

pub use events::{CELL_TAKEN_STATUS, GameEvent, MoveOutcome, TIE_STATUS};
pub use phases::{Outcome, Phase};
pub use position::{Position, PositionError};
pub use session::{
    DEFAULT_PLAYER1_NAME, DEFAULT_PLAYER2_NAME, GameSession, GameSnapshot, Player,
};
pub use types::{Board, Cell, Marker};
