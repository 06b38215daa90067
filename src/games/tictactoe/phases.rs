//! Match phases and round outcomes.

use super::position::Position;
use super::types::Mark;
use serde::{Deserialize, Serialize};

/// Phase of the match state machine.
///
/// `AwaitingPlayers → RoundInProgress → RoundResolved → RoundInProgress | MatchComplete`.
/// `RoundResolved` only exists inside a single `play` call; it is reported
/// through events and never observed between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum MatchPhase {
    /// No match yet; waiting for a player name.
    #[display("awaiting players")]
    AwaitingPlayers,
    /// A round is being played.
    #[display("a round is in progress")]
    RoundInProgress,
    /// A round just ended in a win or a tie.
    #[display("a round is being resolved")]
    RoundResolved,
    /// A player reached the winning score.
    #[display("the match is complete")]
    MatchComplete,
}

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// A line of three belongs to this mark.
    Win(Mark, [Position; 3]),
    /// The board is full and nobody has a line.
    Tie,
    /// Empty squares remain and nobody has a line.
    Undecided,
}
