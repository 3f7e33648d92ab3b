use crate::game::{Board, Cell, GameStatus, Player, WinningLine};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::App;

pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Board
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    let state = app.game_state();
    render_header(frame, app, chunks[0]);
    render_board(
        frame,
        state.board(),
        app.selected_column(),
        state.winning_line().as_ref(),
        chunks[1],
    );
    render_message(frame, app.message(), chunks[2]);
    render_controls(frame, chunks[3]);
}

fn player_color(player: Player) -> Color {
    match player {
        Player::One => Color::Red,
        Player::Two => Color::Yellow,
    }
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let state = app.game_state();
    let (status, color) = match state.status() {
        GameStatus::Finished(winner) => (
            format!("{} wins!", app.player_name(winner)),
            player_color(winner),
        ),
        GameStatus::InProgress if state.is_board_full() => {
            ("Board full, no winner".to_string(), Color::Gray)
        }
        GameStatus::InProgress => {
            let player = state.current_player();
            (
                format!("Current Player: {}", app.player_name(player)),
                player_color(player),
            )
        }
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Connect Four"),
        );

    frame.render_widget(header, area);
}

fn render_board(
    frame: &mut Frame,
    board: &Board,
    selected_column: usize,
    winning_line: Option<&WinningLine>,
    area: Rect,
) {
    let mut lines = Vec::new();
    let border = "═".repeat(board.width() * 3 + 1);

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")]; // Padding (3 chars to match "  ║")
    for col in 0..board.width() {
        if col == selected_column {
            col_line.push(Span::styled(
                format!(" {} ", col + 1),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(format!(" {} ", col + 1)));
        }
    }
    col_line.push(Span::raw("  ")); // Suffix padding to match " ║"
    lines.push(Line::from(col_line));

    lines.push(Line::from(format!("  ╔{border}╗")));

    for row in 0..board.height() {
        let mut row_spans = vec![Span::raw("  ║")];

        for col in 0..board.width() {
            let (symbol, color) = match board.get(row, col) {
                Cell::Empty => (" . ", Color::DarkGray),
                Cell::Player1 => (" ● ", player_color(Player::One)),
                Cell::Player2 => (" ● ", player_color(Player::Two)),
            };
            let mut style = Style::default().fg(color);
            if winning_line.is_some_and(|line| line.contains(row, col)) {
                style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
            }
            row_spans.push(Span::styled(symbol, style));
        }

        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  ╚{border}╝")));

    // Selection indicator
    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..board.width() {
        if col == selected_column {
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

fn render_message(frame: &mut Frame, message: Option<&str>, area: Rect) {
    let msg_widget = Paragraph::new(message.unwrap_or(""))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let line = Line::from("←/→: Move  |  1-7 or Enter: Drop  |  R: Restart  |  Q: Quit");

    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Controls"),
        );

    frame.render_widget(controls, area);
}
