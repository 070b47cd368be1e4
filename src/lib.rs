//! Two-player tic-tac-toe.
//!
//! The core is a [`GameSession`] that owns a [`Board`] and the turn state.
//! Front-ends drive it with [`GameSession::start_game`] and
//! [`GameSession::play_round`], then read state back or drain the queued
//! [`GameEvent`]s. The session never calls into the front-end.
//!
//! # Architecture
//!
//! - **Games**: board, rules and session controller (`games::tictactoe`)
//! - **TUI**: interactive terminal front-end
//! - **Replay**: headless front-end that plays a fixed list of moves
//! - **Config**: TOML settings for the front-ends
//!
//! # Example
//!
//! ```
//! use tictactoe_session::{GameSession, MoveOutcome, Position};
//!
//! let mut session = GameSession::new();
//! session.start_game("Alice", "Bob");
//! let outcome = session.play_round(Position::Center);
//! assert!(matches!(outcome, MoveOutcome::NextTurn(_)));
//! assert_eq!(session.status(), Some("Bob's turn"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
pub mod games;
mod replay;
pub mod tui;

// Crate-level exports - CLI
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Headless replay
pub use replay::replay;

// Crate-level exports - Game types
pub use games::tictactoe::{
    Board, CELL_TAKEN_STATUS, Cell, DEFAULT_PLAYER1_NAME, DEFAULT_PLAYER2_NAME, GameEvent,
    GameSession, GameSnapshot, Marker, MoveOutcome, Outcome, Phase, Player, Position,
    PositionError, TIE_STATUS, rules,
};
