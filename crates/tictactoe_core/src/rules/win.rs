//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The eight winning triples: rows, then columns, then diagonals.
pub const WINNING_LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// A uniformly marked triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine {
    /// Owner of all three squares.
    pub player: Player,
    /// The triple, in [`WINNING_LINES`] order.
    pub positions: [Position; 3],
}

impl WinningLine {
    /// Returns true if the position is part of this line.
    pub fn contains(&self, pos: Position) -> bool {
        self.positions.contains(&pos)
    }
}

/// Finds the first uniformly marked triple on the board.
///
/// Only one square changes per move, so at most one player can own lines at
/// a time; scanning order only matters for a move that closes two lines at
/// once, and then the first in [`WINNING_LINES`] order is reported.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<WinningLine> {
    WINNING_LINES.iter().find_map(|&[a, b, c]| {
        let sq = board.get(a);
        match sq {
            Square::Occupied(player) if sq == board.get(b) && sq == board.get(c) => {
                Some(WinningLine {
                    player,
                    positions: [a, b, c],
                })
            }
            _ => None,
        }
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Player> {
    winning_line(board).map(|line| line.player)
}
