//! Keyboard mapping.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tictactoe_core::Position;

/// A key press translated into something the app understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Place a mark at a cell index (0-8).
    Play(usize),
    /// Place a mark under the cursor.
    PlayCursor,
    /// Move the cursor.
    Cursor(KeyCode),
    /// Clear the board, keep scores.
    ResetRound,
    /// Start another round after one has finished.
    PlayAgain,
    /// Clear the board and the scores.
    NewGame,
    /// Leave the program.
    Quit,
}

/// Maps a key press to an action.
///
/// Digits 1-9 address cells row by row, like the number row on the board
/// legend.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Char(c @ '1'..='9') => c.to_digit(10).map(|d| Action::Play(d as usize - 1)),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Action::ResetRound),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(Action::PlayAgain),
        KeyCode::Char('n') | KeyCode::Char('N') => Some(Action::NewGame),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::PlayCursor),
        KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down => {
            Some(Action::Cursor(key.code))
        }
        _ => None,
    }
}

/// Moves cursor based on arrow keys. Stops at the board edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match key {
        KeyCode::Left => col.checked_sub(1).map(|c| (row, c)),
        KeyCode::Right => Some((row, col + 1)),
        KeyCode::Up => row.checked_sub(1).map(|r| (r, col)),
        KeyCode::Down => Some((row + 1, col)),
        _ => None,
    };

    target
        .and_then(|(r, c)| Position::from_row_col(r, c))
        .unwrap_or(cursor)
}
