//! The game engine: the only writer of session state.

use super::contracts::{Contract, MoveContract};
use super::{GameStatus, MoveOutcome, MoveResult, Session, rules};
use tracing::{debug, info, instrument};

/// Tic-tac-toe game engine.
///
/// Owns one [`Session`] and exposes three commands ([`apply_move`],
/// [`reset_round`], [`reset_session`]) and one query ([`snapshot`]).
/// Commands run to completion; the engine is not meant to be shared across
/// threads without a single lock around each command.
///
/// [`apply_move`]: GameEngine::apply_move
/// [`reset_round`]: GameEngine::reset_round
/// [`reset_session`]: GameEngine::reset_session
/// [`snapshot`]: GameEngine::snapshot
#[derive(Debug, Clone, Default)]
pub struct GameEngine {
    session: Session,
}

impl GameEngine {
    /// Creates an engine with a fresh session.
    #[instrument]
    pub fn new() -> Self {
        Self {
            session: Session::new(),
        }
    }

    /// Places the current player's mark at `cell_index` (0-8).
    ///
    /// On acceptance the status is re-derived: a completed line wins, else a
    /// full board draws, else the turn passes to the opponent. Terminal moves
    /// credit the scoreboard once and leave the current player on the mover.
    ///
    /// # Errors
    ///
    /// Rejections leave the session untouched:
    /// - [`crate::MoveError::GameOver`] if the round has ended
    /// - [`crate::MoveError::InvalidIndex`] if `cell_index > 8`
    /// - [`crate::MoveError::CellOccupied`] if the cell holds a mark
    #[instrument(skip(self), fields(player = ?self.session.current_player))]
    pub fn apply_move(&mut self, cell_index: usize) -> MoveResult {
        let position = match MoveContract::pre(&self.session, &cell_index) {
            Ok(position) => position,
            Err(e) => {
                debug!(error = %e, "Move rejected");
                return Err(e);
            }
        };

        #[cfg(debug_assertions)]
        let before = self.session.clone();

        let mark = self.session.current_player;
        self.session.board.place(position, mark);

        let status = rules::evaluate(&self.session.board);
        match status {
            GameStatus::InProgress => self.session.current_player = mark.opponent(),
            GameStatus::Won { .. } | GameStatus::Draw => {
                info!(%status, "Round finished");
                self.session.scoreboard.record(&status);
            }
        }
        self.session.status = status;

        #[cfg(debug_assertions)]
        super::contracts::assert_postconditions(&before, &self.session);

        let outcome = MoveOutcome {
            mark,
            position,
            status,
        };
        debug!(%outcome, "Move applied");
        Ok(outcome)
    }

    /// Clears the board for another round. Scores are kept.
    #[instrument(skip(self))]
    pub fn reset_round(&mut self) {
        self.session.clear_round();
        debug!("Round reset");
    }

    /// Clears the board and zeroes the scoreboard.
    #[instrument(skip(self))]
    pub fn reset_session(&mut self) {
        self.reset_round();
        self.session.scoreboard = Default::default();
        debug!("Session reset");
    }

    /// Read-only view of the session.
    pub fn snapshot(&self) -> &Session {
        &self.session
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MoveError, Player, Position};

    fn play(engine: &mut GameEngine, moves: &[usize]) -> MoveResult {
        let (last, rest) = moves.split_last().expect("at least one move");
        for index in rest {
            engine.apply_move(*index).expect("legal move");
        }
        engine.apply_move(*last)
    }

    #[test]
    fn test_first_move_is_x_then_o() {
        let mut engine = GameEngine::new();
        let first = engine.apply_move(4).unwrap();
        assert_eq!(first.mark, Player::X);
        assert_eq!(first.status, GameStatus::InProgress);
        let second = engine.apply_move(0).unwrap();
        assert_eq!(second.mark, Player::O);
        assert_eq!(engine.snapshot().current_player(), Player::X);
    }

    #[test]
    fn test_win_keeps_winner_as_current_player() {
        let mut engine = GameEngine::new();
        let outcome = play(&mut engine, &[0, 3, 1, 4, 2]).unwrap();
        assert_eq!(
            outcome.status,
            GameStatus::Won {
                winner: Player::X,
                line: [Position::TopLeft, Position::TopCenter, Position::TopRight],
            }
        );
        assert_eq!(engine.snapshot().current_player(), Player::X);
        assert_eq!(engine.snapshot().scoreboard().wins(Player::X), 1);
    }

    #[test]
    fn test_move_closing_two_lines_scores_once() {
        let mut engine = GameEngine::new();
        // X holds 1, 2, 3, 6; the ninth mark at 0 closes the top row and the
        // left column together.
        let outcome = play(&mut engine, &[1, 4, 2, 5, 3, 8, 6, 7, 0]).unwrap();
        assert_eq!(
            outcome.status,
            GameStatus::Won {
                winner: Player::X,
                line: [Position::TopLeft, Position::TopCenter, Position::TopRight],
            }
        );
        let scores = engine.snapshot().scoreboard();
        assert_eq!(scores.wins(Player::X), 1);
        assert_eq!(scores.draws(), 0);
        assert_eq!(scores.rounds_played(), 1);
    }

    #[test]
    fn test_o_can_win() {
        let mut engine = GameEngine::new();
        let outcome = play(&mut engine, &[0, 2, 1, 4, 8, 6]).unwrap();
        assert_eq!(outcome.status.winner(), Some(Player::O));
        assert_eq!(
            outcome.status.winning_line(),
            Some([Position::TopRight, Position::Center, Position::BottomLeft])
        );
        assert_eq!(engine.snapshot().scoreboard().wins(Player::O), 1);
        assert_eq!(engine.snapshot().scoreboard().wins(Player::X), 0);
    }

    #[test]
    fn test_invalid_index_rejected() {
        let mut engine = GameEngine::new();
        assert_eq!(engine.apply_move(9), Err(MoveError::InvalidIndex(9)));
        assert_eq!(
            engine.apply_move(usize::MAX),
            Err(MoveError::InvalidIndex(usize::MAX))
        );
        assert_eq!(engine.snapshot(), &Session::new());
    }

    #[test]
    fn test_reset_session_zeroes_scores() {
        let mut engine = GameEngine::new();
        play(&mut engine, &[0, 3, 1, 4, 2]).unwrap();
        engine.reset_session();
        assert_eq!(engine.snapshot(), &Session::new());
    }
}
