//! Turn matches board: the player to move follows from the mark counts.

use super::Invariant;
use crate::{Player, Session};

/// Invariant: while the round is active, X is to move exactly when the mark
/// counts are equal.
///
/// After a terminal move the turn is not flipped, so the current player is
/// the one who moved last; the invariant does not constrain it then.
pub struct TurnMatchesBoard;

impl Invariant<Session> for TurnMatchesBoard {
    fn holds(session: &Session) -> bool {
        if !session.is_active() {
            return true;
        }

        let board = session.board();
        let expected = if board.count(Player::X) == board.count(Player::O) {
            Player::X
        } else {
            Player::O
        };
        session.current_player() == expected
    }

    fn description() -> &'static str {
        "Player to move matches the marks on the board"
    }
}
