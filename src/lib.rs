//! Tic-tac-toe match library - best-of-N rounds between two players
//!
//! # Architecture
//!
//! - **Board**: nine squares, placement and reset, no rules knowledge
//! - **Rules**: win and tie detection over a board
//! - **Match engine**: players, turns, rounds, scores and match termination
//! - **Presenter**: turns engine events into paced terminal output
//!
//! # Example
//!
//! ```
//! use tictactoe_match::{MatchEngine, MatchEvent, MatchPhase};
//!
//! let mut engine = MatchEngine::new();
//! engine.start_match("ann")?;
//! assert_eq!(engine.active_player().map(|p| p.name()), Some("Ann"));
//!
//! // Ann completes the top row; Maynard opens round 2.
//! for index in [0, 3, 1, 4, 2] {
//!     engine.play(index)?;
//! }
//! assert_eq!(engine.round(), Some(2));
//! assert_eq!(engine.phase(), MatchPhase::RoundInProgress);
//! # Ok::<(), tictactoe_match::MatchError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod config;
mod games;
pub mod presenter;

// Crate-level exports - Configuration
pub use config::{AppConfig, CONFIG_ENV_VAR, ConfigError, PacingConfig};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, DEFAULT_OPPONENT_NAME, DEFAULT_WINNING_SCORE, Mark, MatchEngine, MatchError,
    MatchEvent, MatchPhase, MatchSettings, MoveError, Player, PlayerName, Position,
    Presentation, ResolutionKind, RoundOutcome, RoundResolution, Scores, Square,
};

// Crate-level exports - Rules and invariants
pub use games::tictactoe::{invariants, rules};
