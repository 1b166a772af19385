//! Tic-tac-toe game engine.

use crate::error::EngineError;
use crate::invariants::{GameInvariants, InvariantSet};
use crate::position::Coordinate;
use crate::rules::{check_winner, is_board_full};
use crate::state::GameState;
use crate::types::Outcome;
use tracing::{debug, info, instrument, warn};

/// Owner of the one live [`GameState`].
///
/// All mutation goes through [`apply_move`](Self::apply_move) and
/// [`reset`](Self::reset); callers only ever receive copies of the state.
#[derive(Debug, Clone, Default)]
pub struct GameEngine {
    state: GameState,
}

impl GameEngine {
    /// Creates an engine holding a fresh game.
    #[instrument]
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
        }
    }

    /// Returns a snapshot of the current state.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Places the current player's mark at (row, col).
    ///
    /// Out-of-range coordinates are rejected with
    /// [`EngineError::InvalidCoordinate`] and leave the state untouched.
    /// Moves onto an occupied cell, or made after the game has ended, are
    /// ignored and return the unchanged snapshot.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<GameState, EngineError> {
        let coord = Coordinate::new(row, col).inspect_err(|e| {
            warn!(error = %e, "Rejected move");
        })?;
        Ok(self.apply_move_at(coord))
    }

    /// Places the current player's mark at an already validated coordinate.
    #[instrument(skip_all, fields(coord = %coord))]
    pub fn apply_move_at(&mut self, coord: Coordinate) -> GameState {
        if self.state.is_terminal() {
            debug!(outcome = ?self.state.outcome(), "Ignoring move: game is over");
            return self.state;
        }
        if !self.state.board().cell(coord).is_empty() {
            debug!("Ignoring move: cell is occupied");
            return self.state;
        }

        let player = self.state.current_player();
        self.state.place(coord);

        // Win before draw: the last empty cell can complete a line.
        if check_winner(self.state.board(), player) {
            self.state.set_outcome(Outcome::Win(player));
            info!(%player, board = %self.state.board(), "Game won");
        } else if is_board_full(self.state.board()) {
            self.state.set_outcome(Outcome::Draw);
            info!(board = %self.state.board(), "Game drawn");
        } else {
            self.state.pass_turn();
            debug!(%player, next = %self.state.current_player(), "Move applied");
        }

        debug_assert!(
            GameInvariants::check_all(&self.state).is_ok(),
            "invariants violated after move at {coord}"
        );

        self.state
    }

    /// Discards the current game and starts a fresh one with X to move.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> GameState {
        info!(previous = ?self.state.outcome(), "Resetting game");
        self.state = GameState::new();
        self.state
    }
}
