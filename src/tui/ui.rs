//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app::{App, Screen};
use crate::games::tictactoe::{Board, Cell, Marker, Phase, Position, rules};

const BOARD_HELP: &str = "Arrows + Enter or 1-9: move | R: restart | N: new players | Q: quit";
const NAMES_HELP: &str = "Tab: switch field | Enter: next / start | Esc: quit";

/// Draws the whole screen for the current app state.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(9),    // Body
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let help = match app.screen() {
        Screen::NameEntry => {
            draw_name_entry(frame, chunks[1], app);
            NAMES_HELP
        }
        Screen::Board => {
            draw_game(frame, chunks[1], app);
            BOARD_HELP
        }
    };

    let status_style = if app.session().is_game_over() {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };
    let status = Paragraph::new(app.status_message())
        .style(status_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn draw_name_entry(frame: &mut Frame, area: Rect, app: &App) {
    let form = center_rect(area, 40, 6);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(3)])
        .split(form);

    for (idx, (label, row)) in [("Player 1 (X)", rows[0]), ("Player 2 (O)", rows[1])]
        .into_iter()
        .enumerate()
    {
        let focused = app.focus() == idx;
        let border_style = if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let mut text = app.name(idx).to_string();
        if focused {
            text.push('_');
        }
        let field = Paragraph::new(text).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(label),
        );
        frame.render_widget(field, row);
    }
}

fn draw_game(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(area);

    if let Some([p1, p2]) = session.players() {
        let matchup = Line::from(vec![
            Span::styled(format!("{} ({})", p1.name(), p1.marker()), marker_style(*p1.marker())),
            Span::raw("  vs  "),
            Span::styled(format!("{} ({})", p2.name(), p2.marker()), marker_style(*p2.marker())),
        ]);
        frame.render_widget(Paragraph::new(matchup).alignment(Alignment::Center), rows[0]);
    }

    let highlight = match session.phase() {
        Phase::Finished(outcome) => outcome
            .winner()
            .and_then(|marker| rules::winning_line(&session.cells(), marker)),
        _ => None,
    };
    let cursor = (!session.is_game_over()).then_some(app.cursor());
    draw_board(frame, rows[1], session.board(), cursor, highlight);
}

fn draw_board(
    frame: &mut Frame,
    area: Rect,
    board: &Board,
    cursor: Option<Position>,
    highlight: Option<[Position; 3]>,
) {
    let board_area = center_rect(area, 38, 11);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for row in 0..3 {
        draw_row(frame, rows[row * 2], board, row, cursor, highlight);
        if row < 2 {
            let sep = Paragraph::new("─".repeat(board_area.width as usize))
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(sep, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(
    frame: &mut Frame,
    area: Rect,
    board: &Board,
    row: usize,
    cursor: Option<Position>,
    highlight: Option<[Position; 3]>,
) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for col in 0..3 {
        if let Some(pos) = Position::from_row_col(row, col) {
            let highlighted = highlight.is_some_and(|line| line.contains(&pos));
            draw_cell(frame, cols[col * 2], board, pos, cursor == Some(pos), highlighted);
        }
        if col < 2 {
            let sep = Paragraph::new("│").style(Style::default().fg(Color::DarkGray));
            frame.render_widget(sep, cols[col * 2 + 1]);
        }
    }
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    board: &Board,
    pos: Position,
    selected: bool,
    highlighted: bool,
) {
    let (symbol, mut style) = match board.get(pos) {
        Cell::Empty => (
            format!("{}", pos.to_index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Cell::Marked(marker) => (marker.to_string(), marker_style(marker)),
    };
    if highlighted {
        style = style.bg(Color::Green).fg(Color::Black);
    } else if selected {
        style = style.bg(Color::White).fg(Color::Black);
    }

    // Vertically center in the 3-line cell.
    let text = vec![Line::raw(""), Line::from(Span::styled(format!(" {} ", symbol), style))];
    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), area);
}

fn marker_style(marker: Marker) -> Style {
    let color = match marker {
        Marker::X => Color::Blue,
        Marker::O => Color::Red,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use ratatui::{Terminal, backend::TestBackend};

    fn rendered(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 24)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_draws_name_entry() {
        let app = App::new(&GameConfig::default());
        let screen = rendered(&app);
        assert!(screen.contains("Player 1 (X)"));
        assert!(screen.contains("Player 2 (O)"));
    }

    #[test]
    fn test_draws_status_and_players() {
        let config = GameConfig::default().with_names(Some("Alice".into()), Some("Bob".into()));
        let mut app = App::new(&config);
        app.start();
        let screen = rendered(&app);
        assert!(screen.contains("Alice's turn"));
        assert!(screen.contains("Alice (X)"));
        assert!(screen.contains("Bob (O)"));
    }
}
