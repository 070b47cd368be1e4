//! Game session: players, turn order and the move loop.

use super::events::{CELL_TAKEN_STATUS, turn_status};
use super::rules::{check_tie, check_winner};
use super::{Board, Cell, GameEvent, Marker, MoveOutcome, Outcome, Phase, Position};
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::collections::vec_deque::Drain;
use tracing::{debug, info, instrument};

/// Name used when the first player leaves the name empty.
pub const DEFAULT_PLAYER1_NAME: &str = "Player 1";

/// Name used when the second player leaves the name empty.
pub const DEFAULT_PLAYER2_NAME: &str = "Player 2";

/// A player in a game session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, new, Serialize, Deserialize)]
pub struct Player {
    /// Display name.
    name: String,
    /// Marker this player places.
    marker: Marker,
}

/// One game of tic-tac-toe between two players.
///
/// Owns the board and all turn state. Front-ends call
/// [`start_game`](Self::start_game) and [`play_round`](Self::play_round),
/// then read state back or drain the queued [`GameEvent`]s.
#[derive(Debug, Clone, Default)]
pub struct GameSession {
    board: Board,
    players: Option<[Player; 2]>,
    active: usize,
    phase: Phase,
    status: Option<String>,
    history: Vec<Position>,
    events: VecDeque<GameEvent>,
}

/// Serializable view of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Both players, first player first.
    pub players: Option<[Player; 2]>,
    /// Player whose turn it is.
    pub active_player: Option<Player>,
    /// Current phase.
    pub phase: Phase,
    /// Cells in row-major order.
    pub board: [Cell; 9],
    /// Latest status message.
    pub status: Option<String>,
    /// Positions played this game, in order.
    pub history: Vec<Position>,
}

impl GameSession {
    /// Creates a session with no game started.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a fresh game, discarding any previous one.
    ///
    /// Empty names fall back to [`DEFAULT_PLAYER1_NAME`] and
    /// [`DEFAULT_PLAYER2_NAME`]; other names are kept as given. The first
    /// player plays `X` and moves first. Events still queued from an earlier
    /// game are dropped.
    #[instrument(skip(self))]
    pub fn start_game(&mut self, name1: &str, name2: &str) {
        let player1 = Player::new(name_or_default(name1, DEFAULT_PLAYER1_NAME), Marker::X);
        let player2 = Player::new(name_or_default(name2, DEFAULT_PLAYER2_NAME), Marker::O);
        info!(player1 = %player1.name, player2 = %player2.name, "Starting game");

        self.players = Some([player1, player2]);
        self.active = 0;
        self.phase = Phase::InProgress;
        self.board.reset();
        self.history.clear();
        self.events.clear();

        let status = self.active_player().map(turn_status);
        if let Some(status) = status {
            self.set_status(status);
        }
        self.events.push_back(GameEvent::RenderRequested);
    }

    /// Plays the active player's marker at `pos`.
    ///
    /// Moves before the first start or after the game ended are ignored and
    /// leave everything untouched.
    #[instrument(skip(self), fields(phase = ?self.phase))]
    pub fn play_round(&mut self, pos: Position) -> MoveOutcome {
        match self.phase {
            Phase::NotStarted => {
                debug!("Ignoring move, no game started");
                return MoveOutcome::NotStarted;
            }
            Phase::Finished(_) => {
                debug!("Ignoring move, game is over");
                return MoveOutcome::GameOver;
            }
            Phase::InProgress => {}
        }

        let Some(player) = self.active_player().cloned() else {
            return MoveOutcome::NotStarted;
        };
        let marker = *player.marker();

        if !self.board.set_cell(pos, marker) {
            debug!(position = %pos, "Cell already taken");
            self.set_status(CELL_TAKEN_STATUS.to_string());
            return MoveOutcome::CellTaken(pos);
        }
        self.history.push(pos);

        // Win must be checked before tie: a full board can still be a win.
        let cells = self.board.cells();
        let outcome = if check_winner(&cells, marker) {
            info!(winner = %player.name, %marker, "Game won");
            self.phase = Phase::Finished(Outcome::Winner(marker));
            MoveOutcome::Won(player)
        } else if check_tie(&cells) {
            info!("Game tied");
            self.phase = Phase::Finished(Outcome::Tie);
            MoveOutcome::Tie
        } else {
            self.active = 1 - self.active;
            let next = self.active_player().cloned().unwrap_or(player);
            debug!(next = %next.name, "Turn passed");
            MoveOutcome::NextTurn(next)
        };

        if let Some(status) = outcome.status() {
            self.set_status(status);
        }
        outcome
    }

    /// Returns the player whose turn it is, or `None` before the first start.
    pub fn active_player(&self) -> Option<&Player> {
        self.players.as_ref().map(|players| &players[self.active])
    }

    /// Returns both players, first player first.
    pub fn players(&self) -> Option<&[Player; 2]> {
        self.players.as_ref()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns a copy of the board cells.
    pub fn cells(&self) -> [Cell; 9] {
        self.board.cells()
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns true once the game has been won or tied.
    pub fn is_game_over(&self) -> bool {
        self.phase.is_finished()
    }

    /// Returns the latest status message.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Returns the positions played this game.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// Removes and yields queued events in the order they were raised.
    pub fn drain_events(&mut self) -> Drain<'_, GameEvent> {
        self.events.drain(..)
    }

    /// Builds a serializable view of the session.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            players: self.players.clone(),
            active_player: self.active_player().cloned(),
            phase: self.phase,
            board: self.board.cells(),
            status: self.status.clone(),
            history: self.history.clone(),
        }
    }

    fn set_status(&mut self, status: String) {
        self.events.push_back(GameEvent::StatusChanged(status.clone()));
        self.status = Some(status);
    }
}

fn name_or_default(name: &str, default: &str) -> String {
    if name.is_empty() {
        default.to_string()
    } else {
        name.to_string()
    }
}
