//! Win detection logic for tic-tac-toe.

use crate::position::Coordinate;
use crate::types::{Board, Cell, Player};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// One of the eight triples that wins the game when uniformly occupied.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
    strum::EnumIter, strum::Display,
)]
pub enum Line {
    /// Row 0.
    TopRow,
    /// Row 1.
    MiddleRow,
    /// Row 2.
    BottomRow,
    /// Column 0.
    LeftColumn,
    /// Column 1.
    CenterColumn,
    /// Column 2.
    RightColumn,
    /// (0,0) to (2,2).
    Diagonal,
    /// (0,2) to (2,0).
    AntiDiagonal,
}

const fn at(row: usize, col: usize) -> Coordinate {
    Coordinate::new_unchecked(row, col)
}

impl Line {
    /// The three coordinates making up this line.
    pub const fn coordinates(self) -> [Coordinate; 3] {
        match self {
            Line::TopRow => [at(0, 0), at(0, 1), at(0, 2)],
            Line::MiddleRow => [at(1, 0), at(1, 1), at(1, 2)],
            Line::BottomRow => [at(2, 0), at(2, 1), at(2, 2)],
            Line::LeftColumn => [at(0, 0), at(1, 0), at(2, 0)],
            Line::CenterColumn => [at(0, 1), at(1, 1), at(2, 1)],
            Line::RightColumn => [at(0, 2), at(1, 2), at(2, 2)],
            Line::Diagonal => [at(0, 0), at(1, 1), at(2, 2)],
            Line::AntiDiagonal => [at(0, 2), at(1, 1), at(2, 0)],
        }
    }

    /// Checks whether `coord` is one of this line's cells.
    pub fn contains(self, coord: Coordinate) -> bool {
        self.coordinates().contains(&coord)
    }

    /// Checks whether all three cells hold `player`'s mark.
    pub fn is_held_by(self, board: &Board, player: Player) -> bool {
        let mark = Cell::from(player);
        self.coordinates()
            .iter()
            .all(|&coord| board.cell(coord) == mark)
    }
}

/// Checks whether `player` has three in a row on any of the eight lines.
#[instrument(level = "trace", skip(board))]
pub fn check_winner(board: &Board, player: Player) -> bool {
    winning_line(board, player).is_some()
}

/// Returns a line held entirely by `player`, if any.
///
/// When several lines are complete the first in [`Line`] declaration order is
/// returned.
#[instrument(level = "trace", skip(board))]
pub fn winning_line(board: &Board, player: Player) -> Option<Line> {
    Line::iter().find(|line| line.is_held_by(board, player))
}
