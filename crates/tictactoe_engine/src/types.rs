//! Core domain types for tic-tac-toe.

use crate::position::{BOARD_SIZE, Coordinate};
use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

/// Contents of one board position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// No mark yet.
    #[default]
    Empty,
    /// Marked by X.
    X,
    /// Marked by O.
    O,
}

impl Cell {
    /// Returns the player whose mark occupies this cell.
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
        }
    }

    /// Checks if the cell holds no mark.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Gets the cell at a validated coordinate.
    pub fn cell(&self, coord: Coordinate) -> Cell {
        self.cells[coord.row()][coord.col()]
    }

    /// Gets the cell at (row, col), or `None` when off the board.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Iterates over every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Coordinate, Cell)> + '_ {
        Coordinate::all().map(move |coord| (coord, self.cell(coord)))
    }

    /// Counts the cells holding the given content.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells().filter(|&(_, c)| c == cell).count()
    }

    /// Writes a player's mark. Legality is the engine's job.
    pub(crate) fn place(&mut self, coord: Coordinate, player: Player) {
        self.cells[coord.row()][coord.col()] = Cell::from(player);
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            let symbols: Vec<&str> = cells
                .iter()
                .map(|cell| match cell {
                    Cell::Empty => ".",
                    Cell::X => "X",
                    Cell::O => "O",
                })
                .collect();
            write!(f, "{}", symbols.join("|"))?;
        }
        Ok(())
    }
}

/// Classification of a game instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Moves can still be made.
    InProgress,
    /// A player completed a line.
    Win(Player),
    /// Board filled with no line completed.
    Draw,
}

impl Outcome {
    /// Returns true once the game has ended.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::Win(player) => Some(player),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::O.opponent(), Player::X);
    }

    #[test]
    fn test_cell_owner() {
        assert_eq!(Cell::Empty.owner(), None);
        assert_eq!(Cell::from(Player::X).owner(), Some(Player::X));
        assert_eq!(Cell::from(Player::O).owner(), Some(Player::O));
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.count(Cell::Empty), 9);
        assert!(board.cells().all(|(_, cell)| cell.is_empty()));
    }

    #[test]
    fn test_get_out_of_range() {
        let board = Board::new();
        assert_eq!(board.get(2, 2), Some(Cell::Empty));
        assert_eq!(board.get(3, 0), None);
        assert_eq!(board.get(0, 3), None);
    }

    #[test]
    fn test_place_and_display() {
        let mut board = Board::new();
        board.place(Coordinate::new(0, 0).unwrap(), Player::X);
        board.place(Coordinate::new(1, 1).unwrap(), Player::O);
        assert_eq!(board.to_string(), "X|.|.\n.|O|.\n.|.|.");
        assert_eq!(board.count(Cell::X), 1);
        assert_eq!(board.count(Cell::O), 1);
    }

    #[test]
    fn test_outcome_helpers() {
        assert!(!Outcome::InProgress.is_terminal());
        assert!(Outcome::Draw.is_terminal());
        assert_eq!(Outcome::Win(Player::O).winner(), Some(Player::O));
        assert_eq!(Outcome::Draw.winner(), None);
    }
}
