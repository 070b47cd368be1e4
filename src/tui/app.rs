//! Application state and logic.

use crate::config::GameConfig;
use crate::games::tictactoe::{GameEvent, GameSession, Position};
use crossterm::event::KeyCode;
use tracing::debug;

use super::input::{digit_position, move_cursor};

/// Which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Typing in player names.
    NameEntry,
    /// Playing on the board.
    Board,
}

/// Main application state.
pub struct App {
    session: GameSession,
    screen: Screen,
    names: [String; 2],
    focus: usize,
    cursor: Position,
    status_message: String,
    should_quit: bool,
}

impl App {
    /// Creates a new application with name fields prefilled from `config`.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            session: GameSession::new(),
            screen: Screen::NameEntry,
            names: [config.player1_name().clone(), config.player2_name().clone()],
            focus: 0,
            cursor: Position::Center,
            status_message: "Enter player names, then press Enter to start.".to_string(),
            should_quit: false,
        }
    }

    /// Gets the game session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Gets the active screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Gets the name typed into field `idx` (0 or 1).
    pub fn name(&self, idx: usize) -> &str {
        &self.names[idx]
    }

    /// Index of the focused name field.
    pub fn focus(&self) -> usize {
        self.focus
    }

    /// Gets the board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Returns true once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        match self.screen {
            Screen::NameEntry => self.handle_name_key(key),
            Screen::Board => self.handle_board_key(key),
        }
    }

    fn handle_name_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.focus = 1 - self.focus;
            }
            KeyCode::Enter if self.focus == 0 => self.focus = 1,
            KeyCode::Enter => self.start(),
            KeyCode::Backspace => {
                self.names[self.focus].pop();
            }
            KeyCode::Char(c) => self.names[self.focus].push(c),
            _ => {}
        }
    }

    fn handle_board_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('r') => self.start(),
            KeyCode::Char('n') => {
                debug!("Returning to name entry");
                self.screen = Screen::NameEntry;
                self.focus = 0;
                self.status_message = "Enter player names, then press Enter to start.".to_string();
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor),
            KeyCode::Char(c) => {
                if let Some(pos) = digit_position(c) {
                    self.cursor = pos;
                    self.play(pos);
                }
            }
            code => self.cursor = move_cursor(self.cursor, code),
        }
    }

    /// Starts a fresh game with the names currently entered.
    pub fn start(&mut self) {
        debug!(player1 = %self.names[0], player2 = %self.names[1], "Starting game from UI");
        self.session.start_game(&self.names[0], &self.names[1]);
        self.screen = Screen::Board;
        self.sync();
    }

    fn play(&mut self, pos: Position) {
        let outcome = self.session.play_round(pos);
        if !outcome.is_applied() {
            debug!(position = %pos, ?outcome, "Move not applied");
        }
        self.sync();
    }

    /// Applies queued session events to the UI state.
    fn sync(&mut self) {
        for event in self.session.drain_events() {
            debug!(?event, "Handling game event");
            match event {
                GameEvent::StatusChanged(message) => self.status_message = message,
                GameEvent::RenderRequested => self.cursor = Position::Center,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_with_names(a: &str, b: &str) -> App {
        let config = GameConfig::default().with_names(Some(a.to_string()), Some(b.to_string()));
        App::new(&config)
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            app.handle_key(KeyCode::Char(c));
        }
    }

    #[test]
    fn test_name_entry_then_start() {
        let mut app = app_with_names("", "");
        type_str(&mut app, "Ann");
        app.handle_key(KeyCode::Enter);
        type_str(&mut app, "Bo");
        app.handle_key(KeyCode::Enter);

        assert_eq!(app.screen(), Screen::Board);
        assert_eq!(app.status_message(), "Ann's turn");
        assert_eq!(app.session().active_player().map(|p| p.name().as_str()), Some("Ann"));
    }

    #[test]
    fn test_q_is_typed_in_name_entry() {
        let mut app = app_with_names("", "");
        type_str(&mut app, "q");
        assert!(!app.should_quit());
        assert_eq!(app.name(0), "q");
    }

    #[test]
    fn test_digit_plays_cell() {
        let mut app = app_with_names("Alice", "Bob");
        app.start();
        app.handle_key(KeyCode::Char('1'));
        assert_eq!(app.status_message(), "Bob's turn");
        assert_eq!(app.session().history(), &[Position::TopLeft]);

        app.handle_key(KeyCode::Char('1'));
        assert_eq!(app.status_message(), "Cell already taken, try again.");
    }

    #[test]
    fn test_cursor_and_enter_play() {
        let mut app = app_with_names("Alice", "Bob");
        app.start();
        app.handle_key(KeyCode::Up);
        app.handle_key(KeyCode::Left);
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.session().history(), &[Position::TopLeft]);
    }

    #[test]
    fn test_restart_clears_board() {
        let mut app = app_with_names("Alice", "Bob");
        app.start();
        app.handle_key(KeyCode::Char('5'));
        app.handle_key(KeyCode::Char('r'));
        assert!(app.session().history().is_empty());
        assert_eq!(app.cursor(), Position::Center);
        assert_eq!(app.status_message(), "Alice's turn");
    }

    #[test]
    fn test_n_returns_to_name_entry() {
        let mut app = app_with_names("Alice", "Bob");
        app.start();
        app.handle_key(KeyCode::Char('5'));
        app.handle_key(KeyCode::Char('n'));

        assert_eq!(app.screen(), Screen::NameEntry);
        assert_eq!(app.focus(), 0);
        assert_eq!(app.name(0), "Alice");

        type_str(&mut app, "e");
        app.handle_key(KeyCode::Enter);
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.screen(), Screen::Board);
        assert_eq!(app.status_message(), "Alicee's turn");
        assert!(app.session().history().is_empty());
    }

    #[test]
    fn test_quit_from_board() {
        let mut app = app_with_names("Alice", "Bob");
        app.start();
        app.handle_key(KeyCode::Char('q'));
        assert!(app.should_quit());
    }
}
