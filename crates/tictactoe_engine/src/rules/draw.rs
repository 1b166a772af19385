//! Draw detection logic for tic-tac-toe.

use crate::types::Board;
use tracing::instrument;

/// Checks if the board is full (no empty cells).
///
/// A full board is only a draw when the move that filled it did not win, so
/// callers must check for a winner first.
#[instrument(level = "trace", skip(board))]
pub fn is_board_full(board: &Board) -> bool {
    board.cells().all(|(_, cell)| !cell.is_empty())
}

#[cfg(test)]
mod tests {
    use super::super::win::check_winner;
    use super::*;
    use crate::position::Coordinate;
    use crate::types::Player;

    fn fill(board: &mut Board, moves: &[(usize, usize, Player)]) {
        for &(row, col, player) in moves {
            board.place(Coordinate::new(row, col).unwrap(), player);
        }
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_board_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        fill(&mut board, &[(1, 1, Player::X)]);
        assert!(!is_board_full(&board));
    }

    #[test]
    fn test_draw_board_is_full_without_winner() {
        let mut board = Board::new();
        // X O X / X O O / O X X
        fill(
            &mut board,
            &[
                (0, 0, Player::X),
                (0, 1, Player::O),
                (0, 2, Player::X),
                (1, 0, Player::X),
                (1, 1, Player::O),
                (1, 2, Player::O),
                (2, 0, Player::O),
                (2, 1, Player::X),
                (2, 2, Player::X),
            ],
        );
        assert!(is_board_full(&board));
        assert!(!check_winner(&board, Player::X));
        assert!(!check_winner(&board, Player::O));
    }

    #[test]
    fn test_full_board_can_also_be_won() {
        let mut board = Board::new();
        // X X X / O O X / X O O
        fill(
            &mut board,
            &[
                (0, 0, Player::X),
                (0, 1, Player::X),
                (0, 2, Player::X),
                (1, 0, Player::O),
                (1, 1, Player::O),
                (1, 2, Player::X),
                (2, 0, Player::X),
                (2, 1, Player::O),
                (2, 2, Player::O),
            ],
        );
        assert!(is_board_full(&board));
        assert!(check_winner(&board, Player::X));
    }
}
