//! Cumulative results across rounds.

use super::{GameStatus, Player};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Win and draw counters for one session.
///
/// Counters only go up; [`crate::GameEngine::reset_session`] is the only way
/// back to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Scoreboard {
    wins_x: u32,
    wins_o: u32,
    draws: u32,
}

impl Scoreboard {
    /// Creates a zeroed scoreboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wins credited to the given player.
    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::X => self.wins_x,
            Player::O => self.wins_o,
        }
    }

    /// Drawn rounds.
    pub fn draws(&self) -> u32 {
        self.draws
    }

    /// Rounds that reached a terminal status.
    pub fn rounds_played(&self) -> u32 {
        self.wins_x + self.wins_o + self.draws
    }

    /// Credits a terminal status. In-progress statuses are ignored.
    pub(crate) fn record(&mut self, status: &GameStatus) {
        match status {
            GameStatus::Won { winner: Player::X, .. } => self.wins_x += 1,
            GameStatus::Won { winner: Player::O, .. } => self.wins_o += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::InProgress => return,
        }
        debug!(
            wins_x = self.wins_x,
            wins_o = self.wins_o,
            draws = self.draws,
            "Scoreboard updated"
        );
    }
}
