//! Pure tic-tac-toe game engine.
//!
//! This crate is the game-logic core of a 3x3 align-three game: board
//! representation, win/draw detection, the turn state machine, a score
//! ledger that survives round resets, and an optimal-play search engine
//! driving the automated opponent. Rendering, input translation, and
//! pacing (the artificial "thinking" delay) are presentation concerns
//! left to the caller.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{Game, GameMode, Player, Verdict};
//!
//! # fn main() -> Result<(), tictactoe_engine::GameError> {
//! let mut game = Game::new(GameMode::VsComputer { computer: Player::O });
//!
//! // Human X opens in the center.
//! let verdict = game.apply_move(4)?;
//! assert_eq!(verdict, Verdict::InProgress);
//!
//! // The engine answers for O.
//! game.request_automated_move()?;
//! assert_eq!(game.to_move(), Player::X);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod game;
mod lines;
mod position;
mod rules;
mod score;
pub mod search;
mod types;
mod verdict;

pub use error::GameError;
pub use game::{Game, GameMode, GamePhase};
pub use lines::Line;
pub use position::Position;
pub use rules::evaluate;
pub use score::Scoreboard;
pub use types::{Board, Cell, Player};
pub use verdict::{Outcome, Verdict};
