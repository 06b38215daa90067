//! Errors raised by the board and the match engine.

use super::phases::MatchPhase;
use super::position::Position;

/// Why a placement was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The index does not name a square (valid range is 0-8).
    #[display("Position {} is off the board (expected 0-8)", _0)]
    OutOfRange(usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),
}

impl std::error::Error for MoveError {}

/// Error returned by [`MatchEngine`](super::MatchEngine) operations.
///
/// Every variant leaves the engine exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MatchError {
    /// The move was refused by the board.
    #[display("Invalid move: {}", _0)]
    InvalidMove(MoveError),

    /// The player name was empty or whitespace.
    #[display("Player name must not be empty")]
    InvalidName,

    /// The operation is not allowed in the current phase.
    #[display("Not accepted while {}", _0)]
    NotAccepting(MatchPhase),
}

impl std::error::Error for MatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MatchError::InvalidMove(err) => Some(err),
            MatchError::InvalidName | MatchError::NotAccepting(_) => None,
        }
    }
}

impl From<MoveError> for MatchError {
    fn from(err: MoveError) -> Self {
        MatchError::InvalidMove(err)
    }
}
