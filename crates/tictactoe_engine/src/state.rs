//! Game state snapshot.

use crate::position::Coordinate;
use crate::types::{Board, Outcome, Player};
use serde::{Deserialize, Serialize};

/// Complete game state.
///
/// Values of this type handed out by [`GameEngine`](crate::GameEngine) are
/// snapshots: copies that never change underneath the holder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    /// The board.
    board: Board,
    /// Player to move, or the player who made the final move once terminal.
    current_player: Player,
    /// Game outcome.
    outcome: Outcome,
}

impl GameState {
    /// Creates the initial state: empty board, X to move, in progress.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            outcome: Outcome::InProgress,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current player.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Checks if the game has ended.
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_terminal()
    }

    pub(crate) fn place(&mut self, coord: Coordinate) {
        self.board.place(coord, self.current_player);
    }

    pub(crate) fn set_outcome(&mut self, outcome: Outcome) {
        self.outcome = outcome;
    }

    pub(crate) fn pass_turn(&mut self) {
        self.current_player = self.current_player.opponent();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Cell;

    #[test]
    fn test_initial_state() {
        let state = GameState::new();
        assert_eq!(state.current_player(), Player::X);
        assert_eq!(state.outcome(), Outcome::InProgress);
        assert_eq!(state.board().count(Cell::Empty), 9);
        assert_eq!(state, GameState::default());
    }

    #[test]
    fn test_place_uses_current_player() {
        let mut state = GameState::new();
        state.place(Coordinate::CENTER);
        state.pass_turn();
        state.place(Coordinate::new(0, 0).unwrap());

        assert_eq!(state.board().cell(Coordinate::CENTER), Cell::X);
        assert_eq!(state.board().cell(Coordinate::new(0, 0).unwrap()), Cell::O);
        assert_eq!(state.current_player(), Player::O);
    }
}
