//! What a session reports back to whoever drives it.
//!
//! The session never calls into the presentation layer. Instead every
//! move returns a [`MoveOutcome`], and status changes are queued as
//! [`GameEvent`]s for the front-end to drain.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// Status shown after a move lands on an occupied cell.
pub const CELL_TAKEN_STATUS: &str = "Cell already taken, try again.";

/// Status shown when the board fills up with no winner.
pub const TIE_STATUS: &str = "It's a tie!";

/// Result of a single `play_round` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// Ignored: no game has been started.
    NotStarted,
    /// Ignored: the game is already over.
    GameOver,
    /// The cell was occupied; the same player must retry.
    CellTaken(Position),
    /// Move applied, turn passed to this player.
    NextTurn(Player),
    /// Move applied and completed a line for this player.
    Won(Player),
    /// Move applied and filled the board with no line.
    Tie,
}

impl MoveOutcome {
    /// Status message for this outcome.
    ///
    /// Ignored moves produce no message.
    pub fn status(&self) -> Option<String> {
        match self {
            MoveOutcome::NotStarted | MoveOutcome::GameOver => None,
            MoveOutcome::CellTaken(_) => Some(CELL_TAKEN_STATUS.to_string()),
            MoveOutcome::NextTurn(player) => Some(turn_status(player)),
            MoveOutcome::Won(player) => Some(format!("{} wins!", player.name())),
            MoveOutcome::Tie => Some(TIE_STATUS.to_string()),
        }
    }

    /// Returns true if the board changed.
    pub fn is_applied(&self) -> bool {
        matches!(
            self,
            MoveOutcome::NextTurn(_) | MoveOutcome::Won(_) | MoveOutcome::Tie
        )
    }
}

/// Notification queued by the session for the front-end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The status line changed.
    StatusChanged(String),
    /// A fresh game started; the whole board should be redrawn.
    RenderRequested,
}

pub(super) fn turn_status(player: &Player) -> String {
    format!("{}'s turn", player.name())
}
