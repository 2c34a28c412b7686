//! Engine errors.

/// Errors returned by the game engine.
///
/// Both conditions are local and recoverable: engine state (board, mover,
/// phase, scores) is unchanged whenever one is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GameError {
    /// The index is out of the 0-8 range, or the targeted cell is occupied.
    #[display("Illegal move at index {index}: out of range or cell occupied")]
    IllegalMove {
        /// The offending cell index.
        index: usize,
    },

    /// A move (or automated-move request) arrived while the round had already
    /// ended, or an automated move was requested out of the computer's turn.
    #[display("Illegal state: round is not accepting this request")]
    IllegalState,
}
