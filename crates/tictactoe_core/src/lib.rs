//! Tic-tac-toe rules, turn lifecycle and scoreboard.
//!
//! The crate is a pure state machine with no rendering or I/O. A presenter
//! constructs a [`GameEngine`], sends it commands and renders whatever it
//! reports.
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{GameEngine, GameStatus, MoveError, Player};
//!
//! let mut engine = GameEngine::new();
//! for index in [0, 1, 3, 2] {
//!     engine.apply_move(index).unwrap();
//! }
//! let outcome = engine.apply_move(6).unwrap();
//! assert_eq!(outcome.status.winner(), Some(Player::X));
//! assert_eq!(engine.apply_move(8), Err(MoveError::GameOver));
//!
//! engine.reset_round();
//! assert_eq!(engine.snapshot().status(), &GameStatus::InProgress);
//! assert_eq!(engine.snapshot().scoreboard().wins(Player::X), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod contracts;
mod engine;
pub mod invariants;
mod position;
pub mod rules;
mod scoreboard;
mod session;
mod status;
mod types;

pub use action::{MoveError, MoveOutcome, MoveResult};
pub use engine::GameEngine;
pub use position::Position;
pub use rules::WinningLine;
pub use scoreboard::Scoreboard;
pub use session::Session;
pub use status::GameStatus;
pub use types::{Board, Player, Square};

/// Alias for clarity where the symbol rather than the participant matters.
pub type Mark = Player;
