//! Win and draw tallies across rounds.

use crate::types::Player;
use crate::verdict::Outcome;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Per-session score ledger.
///
/// Created once per session and mutated only when a round ends. Counters
/// never decrease; a board reset between rounds leaves the ledger untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    x_wins: u32,
    o_wins: u32,
    draws: u32,
}

impl Scoreboard {
    /// Creates a scoreboard with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a finished round exactly once.
    pub fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Winner {
                player: Player::X, ..
            } => self.x_wins += 1,
            Outcome::Winner {
                player: Player::O, ..
            } => self.o_wins += 1,
            Outcome::Draw => self.draws += 1,
        }
        info!(
            x_wins = self.x_wins,
            o_wins = self.o_wins,
            draws = self.draws,
            "Recorded round outcome"
        );
    }

    /// Returns the win count for the given player.
    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x_wins,
            Player::O => self.o_wins,
        }
    }

    /// Returns the draw count.
    pub fn draws(&self) -> u32 {
        self.draws
    }

    /// Zeroes all counters. Full-session reset only; never called on a
    /// round reset.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lines::Line;

    #[test]
    fn test_record_win_increments_winner_only() {
        let mut scores = Scoreboard::new();
        scores.record(&Outcome::Winner {
            player: Player::X,
            line: Line::CATALOGUE[0],
        });
        assert_eq!(scores.wins(Player::X), 1);
        assert_eq!(scores.wins(Player::O), 0);
        assert_eq!(scores.draws(), 0);
    }

    #[test]
    fn test_record_draw_increments_draws_only() {
        let mut scores = Scoreboard::new();
        scores.record(&Outcome::Draw);
        assert_eq!(scores.draws(), 1);
        assert_eq!(scores.wins(Player::X), 0);
        assert_eq!(scores.wins(Player::O), 0);
    }

    #[test]
    fn test_counts_accumulate() {
        let mut scores = Scoreboard::new();
        for _ in 0..3 {
            scores.record(&Outcome::Winner {
                player: Player::O,
                line: Line::CATALOGUE[4],
            });
        }
        scores.record(&Outcome::Draw);
        assert_eq!(scores.wins(Player::O), 3);
        assert_eq!(scores.draws(), 1);
    }

    #[test]
    fn test_reset_zeroes_counters() {
        let mut scores = Scoreboard::new();
        scores.record(&Outcome::Draw);
        scores.reset();
        assert_eq!(scores, Scoreboard::new());
    }
}
