//! Status matches board: the stored status is the derived one.

use super::Invariant;
use crate::{Session, rules};

/// Invariant: the stored status equals the status re-derived from the board.
pub struct StatusMatchesBoard;

impl Invariant<Session> for StatusMatchesBoard {
    fn holds(session: &Session) -> bool {
        *session.status() == rules::evaluate(session.board())
    }

    fn description() -> &'static str {
        "Status is derived from the board"
    }
}
