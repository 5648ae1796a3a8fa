//! Round status derived from the board.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// Current status of a round.
///
/// Always derived from the board by [`crate::rules::evaluate`]; callers
/// cannot set it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GameStatus {
    /// Round is ongoing.
    #[default]
    InProgress,
    /// Round ended in a win.
    Won {
        /// The player who completed the line.
        winner: Player,
        /// The completed triple, in line order.
        line: [Position; 3],
    },
    /// Round ended with a full board and no line.
    Draw,
}

impl GameStatus {
    /// Returns true once the round has a terminal outcome.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won { winner, .. } => Some(*winner),
            _ => None,
        }
    }

    /// Returns the winning triple if there is one.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        match self {
            GameStatus::Won { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// Returns true if the round was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, GameStatus::Draw)
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Won { winner, .. } => write!(f, "Player {} wins", winner),
            GameStatus::Draw => write!(f, "Draw"),
        }
    }
}
