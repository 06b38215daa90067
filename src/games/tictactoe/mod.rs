//! Best-of-N tic-tac-toe: board, rules and the match state machine.

mod engine;
mod error;
mod events;
pub mod invariants;
mod phases;
mod player;
mod position;
pub mod rules;
mod settings;
mod types;

pub use engine::MatchEngine;
pub use error::{MatchError, MoveError};
pub use events::{MatchEvent, Presentation, ResolutionKind, RoundResolution, Scores};
pub use phases::{MatchPhase, RoundOutcome};
pub use player::{Player, PlayerName};
pub use position::Position;
pub use settings::{DEFAULT_OPPONENT_NAME, DEFAULT_WINNING_SCORE, MatchSettings};
pub use types::{Board, Mark, Square};
