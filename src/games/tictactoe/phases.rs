//! Lifecycle phases of a game session.

use super::Marker;
use serde::{Deserialize, Serialize};

/// Phase of a [`super::GameSession`].
///
/// `NotStarted -> InProgress -> Finished`, and back to a fresh
/// `InProgress` on every start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Phase {
    /// No game has been started yet.
    #[default]
    NotStarted,
    /// Moves are being accepted.
    InProgress,
    /// A terminal condition was reached.
    Finished(Outcome),
}

impl Phase {
    /// Returns true once a terminal condition has been detected.
    pub fn is_finished(&self) -> bool {
        matches!(self, Phase::Finished(_))
    }
}

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The player holding this marker completed a line.
    Winner(Marker),
    /// Board filled with no line.
    Tie,
}

impl Outcome {
    /// Returns the winning marker if there is one.
    pub fn winner(&self) -> Option<Marker> {
        match self {
            Outcome::Winner(marker) => Some(*marker),
            Outcome::Tie => None,
        }
    }
}
