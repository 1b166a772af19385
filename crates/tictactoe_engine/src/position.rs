//! Validated board coordinates.

use crate::error::EngineError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Number of rows and columns on the board.
pub const BOARD_SIZE: usize = 3;

/// Total number of cells on the board.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// A (row, col) pair guaranteed to lie on the 3x3 board.
///
/// Row 0 is the top row, column 0 the left column. The only way to obtain a
/// `Coordinate` is through validating constructors, so indexing the board with
/// one can never go out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "(usize, usize)", into = "(usize, usize)")]
pub struct Coordinate {
    row: usize,
    col: usize,
}

impl Coordinate {
    /// The middle cell, (1, 1).
    pub const CENTER: Coordinate = Coordinate::new_unchecked(1, 1);

    /// Validates a row and column.
    #[instrument]
    pub fn new(row: usize, col: usize) -> Result<Self, EngineError> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(EngineError::InvalidCoordinate { row, col });
        }
        Ok(Self { row, col })
    }

    /// Creates a coordinate from a row-major index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        if index >= CELL_COUNT {
            return None;
        }
        Some(Self {
            row: index / BOARD_SIZE,
            col: index % BOARD_SIZE,
        })
    }

    /// Row-major index (0-8).
    pub fn index(self) -> usize {
        self.row * BOARD_SIZE + self.col
    }

    /// Row (0 is the top).
    pub fn row(self) -> usize {
        self.row
    }

    /// Column (0 is the left).
    pub fn col(self) -> usize {
        self.col
    }

    /// All nine coordinates in row-major order.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..CELL_COUNT).filter_map(Self::from_index)
    }

    // Used by the const line table, where the arguments are known to be in range.
    pub(crate) const fn new_unchecked(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl TryFrom<(usize, usize)> for Coordinate {
    type Error = EngineError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        Self::new(row, col)
    }
}

impl From<Coordinate> for (usize, usize) {
    fn from(coord: Coordinate) -> Self {
        (coord.row, coord.col)
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
