//! Error types for the tic-tac-toe engine.

use derive_more::{Display, Error};

/// Errors reported by the engine.
///
/// Occupied cells and moves after the game has ended are not errors: the
/// engine treats them as no-ops. Only contract violations by the caller
/// surface here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum EngineError {
    /// Row or column lies outside the 3x3 board.
    #[display("Invalid coordinate ({row}, {col}): row and column must be in 0..=2")]
    InvalidCoordinate {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
}
