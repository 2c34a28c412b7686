//! The turn/game state machine.

use crate::error::GameError;
use crate::position::Position;
use crate::rules;
use crate::score::Scoreboard;
use crate::search;
use crate::types::{Board, Player};
use crate::verdict::{Outcome, Verdict};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

/// Phase of the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// The round is accepting moves.
    Active,
    /// The round has ended with an outcome. Terminal until
    /// [`Game::reset_round`].
    Ended(Outcome),
}

/// Opponent configuration, selected once per session by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    /// Both marks are played by humans.
    TwoPlayer,
    /// One mark is played by the optimal-play search engine.
    VsComputer {
        /// The mark the engine plays.
        computer: Player,
    },
}

/// The game engine: authoritative owner of the board, the mover, and the
/// phase for the current round, plus the cross-round score ledger.
///
/// Single-threaded by contract: callers serialize access externally. Every
/// operation runs to completion before returning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    to_move: Player,
    phase: GamePhase,
    mode: GameMode,
    history: Vec<Position>,
    scores: Scoreboard,
}

impl Game {
    /// Creates a new session with an active round. X moves first.
    #[instrument]
    pub fn new(mode: GameMode) -> Self {
        info!(?mode, "Starting new game session");
        Self {
            board: Board::new(),
            to_move: Player::X,
            phase: GamePhase::Active,
            mode,
            history: Vec::new(),
            scores: Scoreboard::new(),
        }
    }

    /// Applies the current mover's mark at the given cell index (0-8).
    ///
    /// On success returns the verdict for the resulting board: the round ends
    /// (and the scoreboard records the outcome) on `Won` or `Draw`, otherwise
    /// the mover flips. This is the only path that mutates the board during
    /// a round.
    ///
    /// # Errors
    ///
    /// - [`GameError::IllegalState`] if the round has already ended.
    /// - [`GameError::IllegalMove`] if the index is out of range or the cell
    ///   is occupied.
    ///
    /// Board, mover, and phase are unchanged when either error is returned.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn apply_move(&mut self, index: usize) -> Result<Verdict, GameError> {
        if let GamePhase::Ended(_) = self.phase {
            warn!(index, "Move rejected: round already ended");
            return Err(GameError::IllegalState);
        }
        let pos = Position::from_index(index).ok_or_else(|| {
            warn!(index, "Move rejected: index out of range");
            GameError::IllegalMove { index }
        })?;

        let player = self.to_move;
        self.board.place(pos, player).inspect_err(|_| {
            warn!(index, "Move rejected: cell occupied");
        })?;
        self.history.push(pos);
        self.check_consistency();

        let verdict = rules::evaluate(&self.board);
        match verdict.outcome() {
            Some(outcome) => {
                info!(%outcome, "Round ended");
                self.scores.record(&outcome);
                self.phase = GamePhase::Ended(outcome);
            }
            None => {
                self.to_move = player.opponent();
            }
        }
        Ok(verdict)
    }

    /// Asks the search engine for the computer's move and applies it.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::IllegalState`] unless the round is active and the
    /// current mover is the configured computer mark.
    #[instrument(skip(self))]
    pub fn request_automated_move(&mut self) -> Result<Verdict, GameError> {
        if self.phase != GamePhase::Active {
            warn!("Automated move rejected: round already ended");
            return Err(GameError::IllegalState);
        }
        match self.mode {
            GameMode::VsComputer { computer } if computer == self.to_move => {
                // Active phase implies a non-terminal board, so the oracle
                // always finds a move.
                let pos =
                    search::best_move(&self.board, computer).ok_or(GameError::IllegalState)?;
                info!(position = %pos, "Computer move selected");
                self.apply_move(pos.index())
            }
            _ => {
                warn!(mode = ?self.mode, to_move = %self.to_move, "Automated move rejected: not the computer's turn");
                Err(GameError::IllegalState)
            }
        }
    }

    /// Starts the next round: clears the board and history, hands the first
    /// move back to X. The scoreboard is untouched.
    #[instrument(skip(self))]
    pub fn reset_round(&mut self) {
        info!("Resetting round");
        self.board.reset();
        self.history.clear();
        self.to_move = Player::X;
        self.phase = GamePhase::Active;
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the phase of the current round.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Returns the opponent configuration.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Returns the score ledger.
    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scores
    }

    /// Returns the positions played this round, in order.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// Debug-build check that the round state stayed legal after a move.
    fn check_consistency(&self) {
        debug_assert!(
            {
                let x = self.board.count(Player::X);
                let o = self.board.count(Player::O);
                x == o || x == o + 1
            },
            "mark counts out of balance"
        );
        debug_assert_eq!(
            self.history.len(),
            9 - Position::valid_moves(&self.board).len(),
            "history diverged from board occupancy"
        );
    }
}
