//! Text a view shows for a snapshot.

use crate::state::GameState;
use crate::types::Outcome;
use serde::{Deserialize, Serialize};

/// Prompt offered once a game has ended.
///
/// Confirming or dismissing it should both lead to
/// [`GameEngine::reset`](crate::GameEngine::reset).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayAgainPrompt {
    /// Headline naming the result.
    pub title: String,
    /// Body text.
    pub message: String,
    /// Label of the confirming button.
    pub confirm_label: String,
}

impl GameState {
    /// One-line status: whose turn it is, who won, or that it is a draw.
    pub fn status_line(&self) -> String {
        match self.outcome() {
            Outcome::InProgress => format!("Player {}'s turn", self.current_player()),
            Outcome::Win(player) => format!("Player {} wins!", player),
            Outcome::Draw => "It's a draw!".to_string(),
        }
    }

    /// The play-again prompt, present exactly when the game has ended.
    pub fn play_again_prompt(&self) -> Option<PlayAgainPrompt> {
        let title = match self.outcome() {
            Outcome::InProgress => return None,
            Outcome::Win(player) => format!("Player {} Wins!", player),
            Outcome::Draw => "It's a Draw!".to_string(),
        };
        Some(PlayAgainPrompt {
            title,
            message: "Would you like to play another round?".to_string(),
            confirm_label: "Play Again".to_string(),
        })
    }
}
