//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line as TextLine, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use tictactoe_engine::{Cell, Coordinate, GameState, Line, PlayAgainPrompt, winning_line};

use crate::app::App;
use crate::config::TuiConfig;

const KEY_HINTS: &str = "Arrows move · Enter/Space or 1-9 play · r restart · q quit";

/// Renders the whole screen from the app's latest snapshot.
pub fn draw(frame: &mut Frame, app: &App, config: &TuiConfig) {
    let area = frame.area();
    let snapshot = app.snapshot();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Status
            Constraint::Length(1), // Key hints
        ])
        .split(area);

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let highlight = if *config.highlight_winning_line() {
        snapshot
            .outcome()
            .winner()
            .and_then(|player| winning_line(snapshot.board(), player))
    } else {
        None
    };
    draw_board(frame, chunks[1], snapshot, app.cursor(), highlight);

    let status = Paragraph::new(snapshot.status_line())
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    if *config.show_key_hints() {
        let hints = Paragraph::new(KEY_HINTS)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(hints, chunks[3]);
    }

    if let Some(prompt) = app.prompt() {
        draw_prompt(frame, area, &prompt);
    }
}

fn draw_board(
    frame: &mut Frame,
    area: Rect,
    snapshot: &GameState,
    cursor: Coordinate,
    highlight: Option<Line>,
) {
    let board_area = center_rect(area, 41, 11);

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
        draw_row(frame, rows[row * 2], snapshot, cursor, highlight, row);
        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(
    frame: &mut Frame,
    area: Rect,
    snapshot: &GameState,
    cursor: Coordinate,
    highlight: Option<Line>,
    row: usize,
) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(13),
            Constraint::Length(1),
            Constraint::Length(13),
            Constraint::Length(1),
            Constraint::Length(13),
        ])
        .split(area);

    for col in 0..3 {
        if let Some(coord) = Coordinate::from_index(row * 3 + col) {
            let highlighted = highlight.is_some_and(|line| line.contains(coord));
            draw_cell(frame, cols[col * 2], snapshot, coord, coord == cursor, highlighted);
        }
        if col < 2 {
            draw_separator_vertical(frame, cols[col * 2 + 1]);
        }
    }
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    snapshot: &GameState,
    coord: Coordinate,
    is_cursor: bool,
    highlighted: bool,
) {
    let (symbol, base_style) = match snapshot.board().cell(coord) {
        Cell::Empty => (
            (coord.index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Cell::X => (
            "X".to_string(),
            Style::default().fg(Color::LightRed).add_modifier(Modifier::BOLD),
        ),
        Cell::O => (
            "O".to_string(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if highlighted {
        base_style.bg(Color::Green).fg(Color::Black)
    } else if is_cursor && !snapshot.is_terminal() {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    // Vertically centre the mark in its three-line cell.
    let text = vec![
        TextLine::from(""),
        TextLine::from(Span::styled(format!("  {symbol}  "), style)),
    ];
    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), area);
}

fn draw_prompt(frame: &mut Frame, area: Rect, prompt: &PlayAgainPrompt) {
    // Pinned to the bottom so the finished board and winning line stay visible.
    let popup = bottom_rect(area, 44, 9);
    frame.render_widget(Clear, popup);

    let text = vec![
        TextLine::from(Span::styled(
            prompt.title.clone(),
            Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
        )),
        TextLine::from(""),
        TextLine::from(prompt.message.clone()),
        TextLine::from(""),
        TextLine::from(Span::styled(
            format!("[ {} ]", prompt.confirm_label),
            Style::default().fg(Color::Black).bg(Color::LightMagenta),
        )),
        TextLine::from(Span::styled(
            "Enter to play again · q to quit",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let dialog = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(dialog, popup);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![TextLine::from("│"); area.height as usize])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn bottom_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + area.height - height,
        width,
        height,
    )
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
    use crossterm::event::KeyCode;
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    fn render_with(app: &App, config: &TuiConfig) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|frame| draw(frame, app, config)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn screen_text(buffer: &Buffer) -> String {
        buffer.content.iter().map(|cell| cell.symbol()).collect()
    }

    fn cells_with_bg(buffer: &Buffer, bg: Color) -> Vec<&str> {
        buffer
            .content
            .iter()
            .filter(|cell| cell.bg == bg)
            .map(|cell| cell.symbol())
            .collect()
    }

    fn config_from(toml: &str) -> TuiConfig {
        toml::from_str(toml).unwrap()
    }

    /// X takes the top row; O answers in the centre and a corner.
    fn x_wins_top_row() -> App {
        let mut app = App::new();
        for c in ['1', '5', '2', '9', '3'] {
            app.handle_key(KeyCode::Char(c));
        }
        app
    }

    #[test]
    fn test_renders_status_line() {
        let app = App::new();
        let screen = screen_text(&render_with(&app, &TuiConfig::default()));
        assert!(screen.contains("Player X's turn"));
    }

    #[test]
    fn test_renders_prompt_after_win() {
        let app = x_wins_top_row();
        let screen = screen_text(&render_with(&app, &TuiConfig::default()));
        assert!(screen.contains("Player X Wins!"));
        assert!(screen.contains("Play Again"));
    }

    #[test]
    fn test_key_hints_follow_config() {
        let app = App::new();

        let shown = screen_text(&render_with(&app, &TuiConfig::default()));
        assert!(shown.contains("r restart"));

        let hidden = screen_text(&render_with(&app, &config_from("show_key_hints = false")));
        assert!(!hidden.contains("r restart"));
        assert!(hidden.contains("Player X's turn"));
    }

    #[test]
    fn test_winning_line_highlighted_when_enabled() {
        let app = x_wins_top_row();
        let buffer = render_with(&app, &TuiConfig::default());

        let marks: Vec<_> = cells_with_bg(&buffer, Color::Green)
            .into_iter()
            .filter(|symbol| !symbol.trim().is_empty())
            .collect();
        assert_eq!(marks, vec!["X", "X", "X"]);
    }

    #[test]
    fn test_winning_line_plain_when_disabled() {
        let app = x_wins_top_row();
        let buffer = render_with(&app, &config_from("highlight_winning_line = false"));

        assert!(cells_with_bg(&buffer, Color::Green).is_empty());
        assert!(screen_text(&buffer).contains("Player X Wins!"));
    }

    #[test]
    fn test_cursor_highlight_only_while_playing() {
        let playing = render_with(&App::new(), &TuiConfig::default());
        // Empty centre cell shows its number under the cursor.
        assert!(cells_with_bg(&playing, Color::White).contains(&"5"));

        let finished = render_with(
            &x_wins_top_row(),
            &config_from("highlight_winning_line = false"),
        );
        assert!(cells_with_bg(&finished, Color::White).is_empty());
    }

    #[test]
    fn test_bottom_rect_clamps_to_area() {
        let area = Rect::new(0, 0, 30, 5);
        assert_eq!(bottom_rect(area, 44, 9), area);
        assert_eq!(bottom_rect(Rect::new(0, 0, 80, 30), 44, 9), Rect::new(18, 21, 44, 9));
    }
}
