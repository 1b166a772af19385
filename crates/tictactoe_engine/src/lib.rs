//! Tic-tac-toe game-state engine.
//!
//! Pure, synchronous game logic with no I/O: a 3x3 board, X and O taking
//! turns, win and draw detection, and reset. A front-end drives the game
//! through [`GameEngine::apply_move`] and [`GameEngine::reset`] and renders
//! the [`GameState`] snapshots those calls return.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{GameEngine, Outcome, Player};
//!
//! let mut engine = GameEngine::new();
//! for (row, col) in [(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)] {
//!     engine.apply_move(row, col)?;
//! }
//! let state = engine.state();
//! assert_eq!(state.outcome(), Outcome::Win(Player::X));
//! assert_eq!(state.status_line(), "Player X wins!");
//! # Ok::<(), tictactoe_engine::EngineError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod error;
pub mod invariants;
mod position;
mod presentation;
pub mod rules;
mod state;
mod types;

pub use engine::GameEngine;
pub use error::EngineError;
pub use position::{BOARD_SIZE, CELL_COUNT, Coordinate};
pub use presentation::PlayAgainPrompt;
pub use rules::{Line, check_winner, is_board_full, winning_line};
pub use state::GameState;
pub use types::{Board, Cell, Outcome, Player};
