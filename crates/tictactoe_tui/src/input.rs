//! Keyboard mapping.

use crossterm::event::KeyCode;
use tictactoe_engine::{BOARD_SIZE, Coordinate};

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor to a new cell.
    MoveCursor(Coordinate),
    /// Play at the given cell.
    Play(Coordinate),
    /// Start a new game.
    Reset,
    /// Leave the application.
    Quit,
    /// Key has no binding.
    None,
}

/// Maps a key press during play. The cursor only matters for arrows and Enter.
pub fn map_board_key(cursor: Coordinate, key: KeyCode) -> Action {
    match key {
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            Action::MoveCursor(move_cursor(cursor, key))
        }
        KeyCode::Enter | KeyCode::Char(' ') => Action::Play(cursor),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|n| Coordinate::from_index(n as usize - 1))
            .map_or(Action::None, Action::Play),
        KeyCode::Char('r') => Action::Reset,
        KeyCode::Char('q') => Action::Quit,
        _ => Action::None,
    }
}

/// Maps a key press while the play-again prompt is open.
pub fn map_prompt_key(key: KeyCode) -> Action {
    match key {
        KeyCode::Enter | KeyCode::Esc | KeyCode::Char('y') | KeyCode::Char('r') => Action::Reset,
        KeyCode::Char('q') | KeyCode::Char('n') => Action::Quit,
        _ => Action::None,
    }
}

/// Moves the cursor one cell, stopping at the board's edges.
pub fn move_cursor(cursor: Coordinate, key: KeyCode) -> Coordinate {
    let (row, col) = (cursor.row(), cursor.col());
    let last = BOARD_SIZE - 1;
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(last), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(last)),
        _ => (row, col),
    };
    Coordinate::new(row, col).unwrap_or(cursor)
}
