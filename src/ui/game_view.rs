use crate::game::{Cell, GameState, COLS, ROWS};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::status::StatusPanel;

pub fn render(
    frame: &mut Frame,
    game: &GameState,
    panel: &StatusPanel,
    selected_column: usize,
    message: Option<&str>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Header
            Constraint::Min(ROWS as u16 + 4), // Board
            Constraint::Length(5),            // Status labels
            Constraint::Length(3),            // Message
            Constraint::Length(3),            // Controls
        ])
        .split(frame.area());

    render_header(frame, chunks[0]);
    render_board(frame, game, selected_column, chunks[1]);
    render_status(frame, panel, chunks[2]);
    render_message(frame, message, chunks[3]);
    render_controls(frame, chunks[4]);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new("Connect Four")
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(header, area);
}

fn cell_span(cell: Cell) -> Span<'static> {
    let (symbol, color) = match cell {
        Cell::Empty => (" . ", Color::DarkGray),
        Cell::PlayerOne => (" ● ", Color::White),
        Cell::PlayerTwo => (" ● ", Color::Red),
    };
    Span::styled(symbol, Style::default().fg(color))
}

/// Style of a column number: highlighted when selected, dimmed when the
/// column no longer accepts a move.
fn column_label_style(legal: &[usize], col: usize, selected_column: usize) -> Style {
    if !legal.contains(&col) {
        Style::default().fg(Color::DarkGray)
    } else if col == selected_column {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    } else {
        Style::default()
    }
}

fn render_board(frame: &mut Frame, game: &GameState, selected_column: usize, area: Rect) {
    let board = game.board();
    let legal = game.legal_columns();
    let active = !game.is_terminal();
    let mut lines = Vec::new();
    let border = "═".repeat(COLS * 3 + 1);

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")]; // Padding (3 chars to match "  ║")
    for col in 0..COLS {
        col_line.push(Span::styled(
            format!(" {} ", col + 1),
            column_label_style(&legal, col, selected_column),
        ));
    }
    col_line.push(Span::raw("  ")); // Suffix padding to match " ║"
    lines.push(Line::from(col_line));

    lines.push(Line::from(format!("  ╔{border}╗")));

    // Row 0 is the top of the board
    for row in 0..ROWS {
        let mut row_spans = vec![Span::raw("  ║")];
        for col in 0..COLS {
            let cell = board.get(row, col).unwrap_or(Cell::Empty);
            row_spans.push(cell_span(cell));
        }
        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  ╚{border}╝")));

    // The selector disappears with the input once the game is decided
    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..COLS {
        if active && col == selected_column {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(Line::from(indicator_line));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_status(frame: &mut Frame, panel: &StatusPanel, area: Rect) {
    let labels = panel.labels();
    let status = Paragraph::new(vec![
        Line::from(labels.moves),
        Line::from(labels.player),
        Line::from(labels.status),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));

    frame.render_widget(status, area);
}

fn render_message(frame: &mut Frame, message: Option<&str>, area: Rect) {
    let msg_widget = Paragraph::new(message.unwrap_or(""))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let controls = Paragraph::new("←/→: Move  |  Enter or 1-7: Drop  |  R: New game  |  Q: Quit")
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Controls"),
        );

    frame.render_widget(controls, area);
}
