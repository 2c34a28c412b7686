//! Outcome classification of a board.

use crate::lines::Line;
use crate::types::Player;
use serde::{Deserialize, Serialize};

/// The authoritative outcome classification of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// Play continues.
    InProgress,
    /// A player completed a line.
    Won {
        /// The winning player.
        player: Player,
        /// The first catalogue line that satisfied the win.
        line: Line,
    },
    /// The board is full with no winner.
    Draw,
}

impl Verdict {
    /// Projects a terminal verdict into an [`Outcome`], `None` for `InProgress`.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            Verdict::InProgress => None,
            Verdict::Won { player, line } => Some(Outcome::Winner {
                player: *player,
                line: *line,
            }),
            Verdict::Draw => Some(Outcome::Draw),
        }
    }
}

/// Outcome of a finished round.
///
/// Unlike [`Verdict`] this type has no in-progress case, so an ended round
/// always carries a real result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Player won the round.
    Winner {
        /// The winning player.
        player: Player,
        /// The line that won the round.
        line: Line,
    },
    /// Round ended in a draw.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner { player, .. } => Some(*player),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the round was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner { player, .. } => write!(f, "{player} wins"),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}
