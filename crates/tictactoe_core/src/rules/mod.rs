//! Game rules for tic-tac-toe.
//!
//! Pure functions over [`Board`]. Rules are kept apart from the engine so the
//! contract checks can re-derive status independently of move application.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{WINNING_LINES, WinningLine, check_winner, winning_line};

use super::{Board, GameStatus};
use tracing::instrument;

/// Derives the round status from a board.
///
/// A completed line takes priority over a full board, so a last move that
/// both fills the grid and completes a line is a win.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> GameStatus {
    if let Some(line) = winning_line(board) {
        return GameStatus::Won {
            winner: line.player,
            line: line.positions,
        };
    }

    if is_full(board) {
        return GameStatus::Draw;
    }

    GameStatus::InProgress
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position};

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(evaluate(&Board::new()), GameStatus::InProgress);
    }

    #[test]
    fn test_win_beats_full_board() {
        // X X X / O O X / X O O  - full, and X owns the top row
        use Player::{O, X};
        let board = Board::from_marks(&[
            (Position::TopLeft, X),
            (Position::TopCenter, X),
            (Position::TopRight, X),
            (Position::MiddleLeft, O),
            (Position::Center, O),
            (Position::MiddleRight, X),
            (Position::BottomLeft, X),
            (Position::BottomCenter, O),
            (Position::BottomRight, O),
        ]);
        assert!(board.is_full());
        assert_eq!(
            evaluate(&board),
            GameStatus::Won {
                winner: X,
                line: [Position::TopLeft, Position::TopCenter, Position::TopRight],
            }
        );
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        use Player::{O, X};
        let board = Board::from_marks(&[
            (Position::TopLeft, X),
            (Position::TopCenter, O),
            (Position::TopRight, X),
            (Position::MiddleLeft, O),
            (Position::Center, O),
            (Position::MiddleRight, X),
            (Position::BottomLeft, X),
            (Position::BottomCenter, X),
            (Position::BottomRight, O),
        ]);
        assert_eq!(evaluate(&board), GameStatus::Draw);
    }
}
