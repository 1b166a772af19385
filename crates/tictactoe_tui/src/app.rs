//! Application state and logic.

use crate::input::{self, Action};
use crossterm::event::KeyCode;
use tictactoe_engine::{Coordinate, GameEngine, GameState, PlayAgainPrompt};
use tracing::{debug, error, info, instrument};

/// Main application state.
///
/// Holds the engine plus view-only state (cursor, quit flag). Game state is
/// read back from the engine after every action and never edited here.
#[derive(Debug)]
pub struct App {
    engine: GameEngine,
    snapshot: GameState,
    cursor: Coordinate,
    should_quit: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new() -> Self {
        let engine = GameEngine::new();
        let snapshot = engine.state();
        Self {
            engine,
            snapshot,
            cursor: Coordinate::CENTER,
            should_quit: false,
        }
    }

    /// Latest snapshot from the engine.
    pub fn snapshot(&self) -> &GameState {
        &self.snapshot
    }

    /// Cell under the cursor.
    pub fn cursor(&self) -> Coordinate {
        self.cursor
    }

    /// Prompt to show, if the game has ended.
    pub fn prompt(&self) -> Option<PlayAgainPrompt> {
        self.snapshot.play_again_prompt()
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles one key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) {
        let action = if self.snapshot.is_terminal() {
            input::map_prompt_key(key)
        } else {
            input::map_board_key(self.cursor, key)
        };

        match action {
            Action::MoveCursor(coord) => self.cursor = coord,
            Action::Play(coord) => {
                self.cursor = coord;
                self.play(coord);
            }
            Action::Reset => self.restart(),
            Action::Quit => {
                info!("Quit requested");
                self.should_quit = true;
            }
            Action::None => {}
        }
    }

    /// Forwards a move to the engine and refreshes the snapshot.
    fn play(&mut self, coord: Coordinate) {
        let previous = self.snapshot;
        let next = match self.engine.apply_move(coord.row(), coord.col()) {
            Ok(state) => state,
            Err(e) => {
                error!(error = %e, "Engine rejected cursor coordinate");
                return;
            }
        };

        if next == previous {
            debug!(%coord, "Move ignored by engine");
        } else if !previous.is_terminal() && next.is_terminal() {
            info!(outcome = ?next.outcome(), "Game finished");
        }
        self.snapshot = next;
    }

    /// Restarts the game.
    fn restart(&mut self) {
        debug!("Restarting game");
        self.snapshot = self.engine.reset();
        self.cursor = Coordinate::CENTER;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_engine::{Cell, Outcome, Player};

    fn press_all(app: &mut App, keys: &[char]) {
        for &c in keys {
            app.handle_key(KeyCode::Char(c));
        }
    }

    #[test]
    fn test_digit_keys_play_moves() {
        let mut app = App::new();
        press_all(&mut app, &['1', '5']);
        let board = app.snapshot().board();
        assert_eq!(board.get(0, 0), Some(Cell::X));
        assert_eq!(board.get(1, 1), Some(Cell::O));
        assert_eq!(app.snapshot().current_player(), Player::X);
    }

    #[test]
    fn test_arrows_and_enter_play_cursor_cell() {
        let mut app = App::new();
        app.handle_key(KeyCode::Up);
        app.handle_key(KeyCode::Left);
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.snapshot().board().get(0, 0), Some(Cell::X));
    }

    #[test]
    fn test_occupied_cell_is_ignored() {
        let mut app = App::new();
        press_all(&mut app, &['5']);
        let before = *app.snapshot();
        press_all(&mut app, &['5']);
        assert_eq!(*app.snapshot(), before);
    }

    #[test]
    fn test_prompt_opens_on_win_and_resets() {
        let mut app = App::new();
        press_all(&mut app, &['1', '5', '2', '9', '3']);
        assert_eq!(app.snapshot().outcome(), Outcome::Win(Player::X));
        assert_eq!(app.prompt().unwrap().title, "Player X Wins!");

        // Board keys are ignored while the prompt is open.
        press_all(&mut app, &['4']);
        assert_eq!(app.snapshot().board().get(1, 0), Some(Cell::Empty));

        app.handle_key(KeyCode::Enter);
        assert_eq!(*app.snapshot(), GameState::new());
        assert!(app.prompt().is_none());
        assert_eq!(app.cursor(), Coordinate::CENTER);
    }

    #[test]
    fn test_quit() {
        let mut app = App::new();
        assert!(!app.should_quit());
        app.handle_key(KeyCode::Char('q'));
        assert!(app.should_quit());
    }

    #[test]
    fn test_reset_mid_game() {
        let mut app = App::new();
        press_all(&mut app, &['1', '2', 'r']);
        assert_eq!(*app.snapshot(), GameState::new());
    }
}
