//! Balanced marks: X leads O by zero or one.

use super::Invariant;
use crate::{Player, Session};

/// Invariant: X moves first and turns alternate, so the board holds either
/// as many X marks as O marks or exactly one more X.
pub struct BalancedMarks;

impl Invariant<Session> for BalancedMarks {
    fn holds(session: &Session) -> bool {
        let x = session.board().count(Player::X);
        let o = session.board().count(Player::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X marks equal O marks or lead by one"
    }
}
