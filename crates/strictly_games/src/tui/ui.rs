//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use strictly_tictactoe::{Cell, Cells, Outcome, Player, Position};

use super::app::App;

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App, show_hints: bool) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Status
        ])
        .split(area);

    let title = Paragraph::new("Strictly Games - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_board(frame, chunks[1], app.shown(), app.cursor(), show_hints);

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    if let Some(outcome) = app.popup() {
        draw_popup(frame, area, outcome);
    }
}

fn draw_board(frame: &mut Frame, area: Rect, cells: &Cells, cursor: Position, show_hints: bool) {
    let board_area = center_rect(area, 40, 11);

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
        draw_row(frame, rows[row * 2], cells, cursor, row, show_hints);
        if row < 2 {
            let sep = Paragraph::new("─".repeat(board_area.width as usize))
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(sep, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(frame: &mut Frame, area: Rect, cells: &Cells, cursor: Position, row: usize, show_hints: bool) {
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
        let index = row * 3 + col;
        let highlighted = cursor.to_index() == index;
        draw_cell(frame, cols[col * 2], cells[index], index, highlighted, show_hints);
        if col < 2 {
            let sep = Paragraph::new("│\n│\n│").style(Style::default().fg(Color::DarkGray));
            frame.render_widget(sep, cols[col * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, cell: Cell, index: usize, highlighted: bool, show_hints: bool) {
    let (symbol, base_style) = match cell {
        Cell::Empty if show_hints => (format!(" {} ", index + 1), Style::default().fg(Color::DarkGray)),
        Cell::Empty => ("   ".to_string(), Style::default()),
        Cell::Occupied(player) => {
            let color = match player {
                Player::Human => Color::Blue,
                Player::Computer => Color::Red,
            };
            (
                format!(" {} ", player.mark()),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )
        }
    };

    let style = if highlighted {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let paragraph = Paragraph::new(vec![
        Line::default(),
        Line::from(Span::styled(symbol, style)),
    ])
    .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn draw_popup(frame: &mut Frame, area: Rect, outcome: Outcome) {
    let popup_area = center_rect(area, 30, 5);
    frame.render_widget(Clear, popup_area);

    let color = match outcome {
        Outcome::HumanWin => Color::Green,
        Outcome::ComputerWin => Color::Red,
        Outcome::Tie | Outcome::Ongoing => Color::Yellow,
    };
    let popup = Paragraph::new(vec![
        Line::from(Span::styled(
            outcome.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from("Press any key"),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().title("Game over").borders(Borders::ALL));
    frame.render_widget(popup, popup_area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;
    use ratatui::{Terminal, backend::TestBackend};

    fn render(app: &App, show_hints: bool) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal.draw(|f| draw(f, app, show_hints)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_renders_marks_and_hints() {
        let mut app = App::new();
        app.handle_key(KeyCode::Char('5'));
        let screen = render(&app, true);
        assert!(screen.contains('X'));
        assert!(screen.contains('O'));
        assert!(screen.contains('8'));
    }

    #[test]
    fn test_hides_hints() {
        let screen = render(&App::new(), false);
        assert!(!screen.contains('7'));
    }
}
