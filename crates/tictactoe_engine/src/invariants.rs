//! Invariants for tic-tac-toe.
//!
//! Invariants are logical properties that must hold for every state the
//! engine can reach. The engine checks them in debug builds after each
//! applied move; tests check them directly.

use crate::rules::{check_winner, is_board_full};
use crate::state::GameState;
use crate::types::{Cell, Outcome, Player};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invariant violated: {}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn into_result(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        into_result(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        check::<S, I3>(state, &mut violations);
        into_result(violations)
    }
}

/// X moves first, so X has as many marks as O or exactly one more.
pub struct MarkBalanceInvariant;

impl Invariant<GameState> for MarkBalanceInvariant {
    fn holds(state: &GameState) -> bool {
        let xs = state.board().count(Cell::X);
        let os = state.board().count(Cell::O);
        xs == os || xs == os + 1
    }

    fn description() -> &'static str {
        "X has as many marks as O, or one more"
    }
}

/// While the game is running, X is to move exactly when the counts are equal.
pub struct TurnParityInvariant;

impl Invariant<GameState> for TurnParityInvariant {
    fn holds(state: &GameState) -> bool {
        if state.is_terminal() {
            return true;
        }
        let balanced = state.board().count(Cell::X) == state.board().count(Cell::O);
        (state.current_player() == Player::X) == balanced
    }

    fn description() -> &'static str {
        "Players alternate turns starting with X"
    }
}

/// The recorded outcome agrees with what the board shows.
pub struct OutcomeConsistentInvariant;

impl Invariant<GameState> for OutcomeConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let board = state.board();
        let anyone_won = check_winner(board, Player::X) || check_winner(board, Player::O);
        match state.outcome() {
            Outcome::Win(player) => check_winner(board, player),
            Outcome::Draw => is_board_full(board) && !anyone_won,
            Outcome::InProgress => !anyone_won && !is_board_full(board),
        }
    }

    fn description() -> &'static str {
        "Outcome matches the board"
    }
}

/// Every tic-tac-toe invariant as one set.
pub type GameInvariants = (
    MarkBalanceInvariant,
    TurnParityInvariant,
    OutcomeConsistentInvariant,
);
