//! Contract-based validation for moves.
//!
//! Contracts formalize the Hoare-style reasoning `{P} action {Q}`:
//! preconditions decide whether a move is accepted at all, postconditions
//! confirm the session is still coherent afterwards.

use super::invariants::{InvariantSet, InvariantViolation, SessionInvariants};
use super::{MoveError, Position, Session, Square};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// What a passing precondition hands to the transition.
    type Checked;

    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<Self::Checked, MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the round must still accept moves.
pub struct RoundIsActive;

impl RoundIsActive {
    /// Rejects with [`MoveError::GameOver`] once the round has ended.
    pub fn check(session: &Session) -> Result<(), MoveError> {
        if session.is_active() {
            Ok(())
        } else {
            Err(MoveError::GameOver)
        }
    }
}

/// Precondition: the index names a cell.
pub struct IndexInBounds;

impl IndexInBounds {
    /// Resolves the index, rejecting with [`MoveError::InvalidIndex`].
    pub fn check(index: usize) -> Result<Position, MoveError> {
        Position::from_index(index).ok_or(MoveError::InvalidIndex(index))
    }
}

/// Precondition: the cell is empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Rejects with [`MoveError::CellOccupied`] if the cell holds a mark.
    pub fn check(session: &Session, pos: Position) -> Result<(), MoveError> {
        if session.board().is_empty(pos) {
            Ok(())
        } else {
            Err(MoveError::CellOccupied(pos))
        }
    }
}

/// Composite precondition, checked in order: round active, index in bounds,
/// cell empty.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    pub fn check(session: &Session, index: usize) -> Result<Position, MoveError> {
        RoundIsActive::check(session)?;
        let pos = IndexInBounds::check(index)?;
        CellIsEmpty::check(session, pos)?;
        Ok(pos)
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for a move given as a raw cell index.
///
/// Postconditions:
/// - exactly one empty square became occupied and no other square changed
/// - the scoreboard grew by one round iff the move was terminal
/// - every [`SessionInvariants`] member holds
pub struct MoveContract;

impl Contract<Session, usize> for MoveContract {
    type Checked = Position;

    fn pre(session: &Session, index: &usize) -> Result<Position, MoveError> {
        LegalMove::check(session, *index)
    }

    fn post(before: &Session, after: &Session) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = SessionInvariants::check_all(after)
            .err()
            .unwrap_or_default();

        if !board_grew_by_one(before, after) {
            violations.push(InvariantViolation::new(
                "Move must fill exactly one empty square and leave the rest unchanged",
            ));
        }

        let expected_rounds =
            before.scoreboard().rounds_played() + u32::from(after.status().is_over());
        if after.scoreboard().rounds_played() != expected_rounds {
            violations.push(InvariantViolation::new(
                "Scoreboard must count each finished round exactly once",
            ));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

fn board_grew_by_one(before: &Session, after: &Session) -> bool {
    let mut filled = 0;
    for pos in Position::ALL {
        match (before.board().get(pos), after.board().get(pos)) {
            (Square::Empty, Square::Occupied(_)) => filled += 1,
            (old, new) if old == new => {}
            _ => return false,
        }
    }
    filled == 1
}

/// Asserts the move postconditions (debug builds only).
#[instrument(skip_all)]
pub fn assert_postconditions(before: &Session, after: &Session) {
    let result = MoveContract::post(before, after);
    if let Err(violations) = &result {
        let descriptions = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        warn!(%descriptions, "Move postcondition failed");
    }
    debug_assert!(result.is_ok(), "Move postcondition failed");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameEngine, Player};

    #[test]
    fn test_precondition_empty_square() {
        let session = Session::new();
        assert_eq!(MoveContract::pre(&session, &4), Ok(Position::Center));
    }

    #[test]
    fn test_precondition_occupied_square() {
        let mut engine = GameEngine::new();
        engine.apply_move(4).expect("legal move");
        assert_eq!(
            MoveContract::pre(engine.snapshot(), &4),
            Err(MoveError::CellOccupied(Position::Center))
        );
    }

    #[test]
    fn test_precondition_out_of_range() {
        assert_eq!(
            MoveContract::pre(&Session::new(), &9),
            Err(MoveError::InvalidIndex(9))
        );
    }

    #[test]
    fn test_game_over_checked_first() {
        let mut session = Session::new();
        session.status = crate::GameStatus::Draw;
        // Finished rounds report GameOver even for malformed indices.
        assert_eq!(MoveContract::pre(&session, &99), Err(MoveError::GameOver));
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let mut engine = GameEngine::new();
        let before = engine.snapshot().clone();
        engine.apply_move(0).expect("legal move");
        assert!(MoveContract::post(&before, engine.snapshot()).is_ok());
    }

    #[test]
    fn test_postcondition_detects_overwrite() {
        let mut engine = GameEngine::new();
        engine.apply_move(0).expect("legal move");
        let before = engine.snapshot().clone();

        let mut after = before.clone();
        after.board.place(Position::TopLeft, Player::O);
        after.current_player = Player::X;

        let violations = MoveContract::post(&before, &after).unwrap_err();
        assert!(!violations.is_empty());
    }

    #[test]
    fn test_postcondition_detects_missed_score() {
        let before = Session::new();
        let mut after = before.clone();
        after.board.place(Position::Center, Player::X);
        after.current_player = Player::O;
        after.status = crate::GameStatus::Draw;

        let violations = MoveContract::post(&before, &after).unwrap_err();
        assert!(
            violations
                .iter()
                .any(|v| v.description.contains("Scoreboard"))
        );
    }
}
