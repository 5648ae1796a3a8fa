//! Application state and logic.

use crate::input::{self, Action};
use crossterm::event::KeyEvent;
use tictactoe_core::{GameEngine, GameStatus, MoveError, Position, Session};
use tracing::{debug, info, instrument};

/// Main application state.
///
/// Owns the engine; rendering only ever reads [`App::session`].
#[derive(Debug)]
pub struct App {
    engine: GameEngine,
    cursor: Position,
    status_message: String,
    running: bool,
}

impl App {
    /// Creates a new application with a fresh session.
    pub fn new() -> Self {
        let engine = GameEngine::new();
        let status_message = status_line(engine.snapshot());
        Self {
            engine,
            cursor: Position::Center,
            status_message,
            running: true,
        }
    }

    /// Read-only view of the engine's session.
    pub fn session(&self) -> &Session {
        self.engine.snapshot()
    }

    /// Cell under the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// False once the user asked to quit.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        if let Some(action) = input::map_key(key) {
            self.apply(action);
        }
    }

    /// Applies a mapped action to the engine.
    pub fn apply(&mut self, action: Action) {
        debug!(?action, "Handling action");

        match action {
            Action::Play(index) => self.play(index),
            Action::PlayCursor => self.play(self.cursor.to_index()),
            Action::Cursor(code) => {
                self.cursor = input::move_cursor(self.cursor, code);
            }
            Action::ResetRound | Action::PlayAgain => {
                self.engine.reset_round();
                self.status_message = status_line(self.session());
            }
            Action::NewGame => {
                self.engine.reset_session();
                self.status_message = status_line(self.session());
            }
            Action::Quit => {
                info!("User quit");
                self.running = false;
            }
        }
    }

    fn play(&mut self, index: usize) {
        match self.engine.apply_move(index) {
            Ok(outcome) => {
                if let Some(pos) = Position::from_index(index) {
                    self.cursor = pos;
                }
                if outcome.is_terminal() {
                    info!(%outcome, "Round over");
                }
                self.status_message = status_line(self.session());
            }
            Err(e) => {
                debug!(error = %e, "Move ignored");
                self.status_message = rejection_line(&e);
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Headline for the current round.
pub fn status_line(session: &Session) -> String {
    match session.status() {
        GameStatus::InProgress => format!("Player {}'s Turn", session.current_player()),
        GameStatus::Won { winner, .. } => format!("Player {} Wins!", winner),
        GameStatus::Draw => "It's a Draw!".to_string(),
    }
}

fn rejection_line(error: &MoveError) -> String {
    match error {
        MoveError::GameOver => {
            "Round is over. Press 'p' to play again or 'n' for a new game.".to_string()
        }
        MoveError::CellOccupied(pos) => format!("{} is taken, pick another square.", pos),
        MoveError::InvalidIndex(_) => error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};
    use tictactoe_core::Player;

    fn press(app: &mut App, c: char) {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
    }

    #[test]
    fn test_starts_with_x_to_move() {
        let app = App::new();
        assert_eq!(app.status_message(), "Player X's Turn");
        assert!(app.is_running());
    }

    #[test]
    fn test_digit_keys_play_cells() {
        let mut app = App::new();
        press(&mut app, '5');
        assert_eq!(app.session().board().get(Position::Center).player(), Some(Player::X));
        assert_eq!(app.status_message(), "Player O's Turn");
    }

    #[test]
    fn test_occupied_square_message() {
        let mut app = App::new();
        press(&mut app, '1');
        press(&mut app, '1');
        assert_eq!(app.status_message(), "Top-left is taken, pick another square.");
        assert_eq!(app.session().current_player(), Player::O);
    }

    #[test]
    fn test_win_then_play_again_keeps_score() {
        let mut app = App::new();
        for c in ['1', '2', '4', '3', '7'] {
            press(&mut app, c);
        }
        assert_eq!(app.status_message(), "Player X Wins!");

        press(&mut app, '9');
        assert!(app.status_message().starts_with("Round is over"));

        press(&mut app, 'p');
        assert_eq!(app.status_message(), "Player X's Turn");
        assert_eq!(app.session().scoreboard().wins(Player::X), 1);

        press(&mut app, 'n');
        assert_eq!(app.session().scoreboard().rounds_played(), 0);
    }

    #[test]
    fn test_cursor_and_enter() {
        let mut app = App::new();
        app.handle_key(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE));
        app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        assert_eq!(app.cursor(), Position::TopCenter);
        assert_eq!(
            app.session().board().get(Position::TopCenter).player(),
            Some(Player::X)
        );
    }

    #[test]
    fn test_quit() {
        let mut app = App::new();
        press(&mut app, 'q');
        assert!(!app.is_running());
    }
}
