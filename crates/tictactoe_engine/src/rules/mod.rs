//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). They hold no state, so the
//! engine, the invariants and any view can share them.

pub mod draw;
pub mod win;

pub use draw::is_board_full;
pub use win::{Line, check_winner, winning_line};
