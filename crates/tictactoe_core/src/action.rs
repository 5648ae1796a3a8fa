//! Move results and rejections.
//!
//! A rejected move is ordinary user input, not a failure of the engine: the
//! session is left untouched and the caller decides whether to surface it.

use super::{GameStatus, Player, Position};
use serde::{Deserialize, Serialize};

/// An accepted move and the status it produced.
///
/// Carries enough for a presenter to render the move without re-deriving
/// any rule: the mark placed, where, and the resulting status (including
/// the winning triple when the move won the round).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// The mark that was placed.
    pub mark: Player,
    /// Where it was placed.
    pub position: Position,
    /// Status after the move.
    pub status: GameStatus,
}

impl MoveOutcome {
    /// Returns true if this move ended the round.
    pub fn is_terminal(&self) -> bool {
        self.status.is_over()
    }
}

impl std::fmt::Display for MoveOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {} ({})", self.mark, self.position.label(), self.status)
    }
}

/// Why a move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum MoveError {
    /// The round already has a winner or is drawn.
    #[display("Game is already over")]
    GameOver,

    /// The cell index is outside 0-8.
    #[display("Cell index {} is out of range (must be 0-8)", _0)]
    InvalidIndex(usize),

    /// The target cell already holds a mark.
    #[display("{} is already occupied", _0)]
    CellOccupied(Position),
}

impl std::error::Error for MoveError {}

/// Result of [`crate::GameEngine::apply_move`].
pub type MoveResult = Result<MoveOutcome, MoveError>;
