//! Stateless UI rendering for the time-travel board.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use crate::games::tictactoe::{rules, Board, Player, Position, Square};

use super::app::App;
use super::input::Focus;

const HELP: &str =
    "arrows move · enter/space place · 1-9 place · tab history · u/r undo/redo · home start · q quit";

/// Renders the whole screen from the app state.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Min(11),   // Board and history
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Strictly Rewind - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    draw_board(frame, body[0], app);
    draw_history(frame, body[1], app);

    let status = Paragraph::new(app.session().status().to_string())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

/// Per-square emphasis, resolved once per frame.
struct Highlights {
    cursor: Option<Position>,
    last_move: Option<Position>,
    winning: Option<[Position; 3]>,
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let snapshot = app.session().current_snapshot();
    let board = snapshot.board();
    let highlights = Highlights {
        cursor: (app.focus() == Focus::Board).then_some(app.cursor()),
        last_move: snapshot.last_move().filter(|_| app.highlight_last_move()),
        winning: rules::winning_line(board).map(|(_, line)| line),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title("Board")
        .border_style(focus_style(app.focus() == Focus::Board));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let board_area = center_rect(inner, 29, 9);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3); 3])
        .split(board_area);

    for (row, area) in rows.iter().copied().enumerate() {
        draw_row(frame, area, board, row, &highlights);
    }
}

fn draw_row(frame: &mut Frame, area: Rect, board: &Board, row: usize, highlights: &Highlights) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(9),
            Constraint::Length(1),
            Constraint::Length(9),
            Constraint::Length(1),
            Constraint::Length(9),
        ])
        .split(area);

    for (col, area) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
        if let Some(pos) = Position::from_row_col(row, col) {
            draw_cell(frame, area, board, pos, highlights);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, board: &Board, pos: Position, highlights: &Highlights) {
    let (symbol, base_style) = match board.get(pos) {
        Square::Empty => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let mut style = base_style;
    if highlights.winning.is_some_and(|line| line.contains(&pos)) {
        style = style.fg(Color::Green);
    }
    if highlights.last_move == Some(pos) {
        style = style.add_modifier(Modifier::UNDERLINED);
    }
    if highlights.cursor == Some(pos) {
        style = style.bg(Color::White).fg(Color::Black);
    }

    let cell = Paragraph::new(Line::from(Span::styled(symbol, style)))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::DarkGray)));
    frame.render_widget(cell, area);
}

fn draw_history(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.focus() == Focus::History;
    let items: Vec<ListItem> = app
        .session()
        .game()
        .moves()
        .map(|entry| {
            let marker = if entry.is_current { "▶" } else { " " };
            let mut style = Style::default();
            if entry.is_current {
                style = style.add_modifier(Modifier::BOLD);
            }
            if focused && entry.step == app.selected() {
                style = style.bg(Color::White).fg(Color::Black);
            }
            ListItem::new(Line::from(Span::styled(
                format!("{} {}. {}", marker, entry.step, entry.label()),
                style,
            )))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("History")
            .border_style(focus_style(focused)),
    );
    frame.render_widget(list, area);
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
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
    use crate::config::TuiConfig;
    use crossterm::event::KeyCode;
    use ratatui::{Terminal, backend::TestBackend};

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
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
    fn test_renders_status_and_start_entry() {
        let app = App::new(&TuiConfig::default());
        let screen = render(&app);
        assert!(screen.contains("Next player: X"));
        assert!(screen.contains("0. Back to start"));
    }

    #[test]
    fn test_renders_history_and_winner() {
        let mut app = App::new(&TuiConfig::default());
        for key in ['1', '5', '2', '8', '3'] {
            app.handle_key(KeyCode::Char(key));
        }
        let screen = render(&app);
        assert!(screen.contains("Winner: X"));
        assert!(screen.contains("5. Back to move into position: 0-2"));
    }
}
