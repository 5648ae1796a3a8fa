//! The aggregate state owned by the engine.

use super::{Board, GameStatus, Player, Scoreboard};
use serde::{Deserialize, Serialize};

/// Board, turn, status and scores for one running session.
///
/// Presenters only ever see `&Session` or a clone; all writes go through
/// [`crate::GameEngine`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Session {
    pub(crate) board: Board,
    pub(crate) current_player: Player,
    pub(crate) status: GameStatus,
    pub(crate) scoreboard: Scoreboard,
}

impl Session {
    /// Creates a fresh session: empty board, X to move, zeroed scores.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move, or the winner once the round is won.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the round status.
    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    /// Returns the session scores.
    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// Returns true while the round accepts moves.
    pub fn is_active(&self) -> bool {
        !self.status.is_over()
    }

    /// Clears the round, keeping scores.
    pub(crate) fn clear_round(&mut self) {
        self.board = Board::new();
        self.current_player = Player::X;
        self.status = GameStatus::InProgress;
    }
}
