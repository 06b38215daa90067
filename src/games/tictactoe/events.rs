//! Events emitted by the match engine.
//!
//! The engine never calls into the user interface. Each accepted operation
//! returns the events it produced, in order; an adapter forwards them to a
//! [`Presentation`] sink with [`MatchEvent::dispatch`].

use super::player::Player;
use super::position::Position;
use super::types::{Board, Mark};
use serde::{Deserialize, Serialize};

/// Round wins of both players, indexed by mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Scores {
    /// Rounds won by X (player A).
    pub x: u32,
    /// Rounds won by O (player B).
    pub o: u32,
}

impl Scores {
    /// Score of the player owning `mark`.
    pub fn of(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.x,
            Mark::O => self.o,
        }
    }

    /// Sum of both scores.
    pub fn total(&self) -> u32 {
        self.x + self.o
    }
}

/// How a round ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResolutionKind {
    /// The mover completed a line.
    Win {
        /// Player who completed the line.
        winner: Player,
        /// The other player; begins the next round.
        loser: Player,
        /// The completed line.
        line: [Position; 3],
    },
    /// The board filled up without a line.
    Tie,
}

/// A resolved, non-final round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResolution {
    /// Win or tie.
    pub kind: ResolutionKind,
    /// Number of the round that just ended.
    pub round: u32,
    /// Number of the round about to start (same as `round` after a tie).
    pub next_round: u32,
    /// Scores after the round.
    pub scores: Scores,
    /// The board as it stood when the round ended.
    pub final_board: Board,
}

/// A state change reported by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchEvent {
    /// Both players are known and round 1 is about to start.
    MatchStarted {
        /// Player A (X) and player B (O).
        players: [Player; 2],
        /// First round number.
        round: u32,
    },
    /// A mark was placed.
    MarkPlaced {
        /// Square that was filled.
        position: Position,
        /// Mark placed there.
        mark: Mark,
    },
    /// A different player (or a fresh round) now awaits a move.
    TurnChanged {
        /// The player to move.
        active: Player,
        /// The round being played.
        round: u32,
    },
    /// A round ended and the next one is ready.
    RoundResolved(RoundResolution),
    /// A player reached the winning score.
    MatchComplete {
        /// Match winner.
        winner: Player,
        /// Final scores.
        scores: Scores,
        /// Round in which the match was decided.
        round: u32,
        /// The board as it stood after the deciding move.
        final_board: Board,
    },
    /// The finished match was closed; the setup screen should be shown.
    MenuRequested,
}

/// Receiver of engine events, implemented by user interfaces.
pub trait Presentation {
    /// A match has started.
    fn on_match_started(&mut self, _players: &[Player; 2], _round: u32) {}

    /// A mark landed on the board.
    fn on_mark_placed(&mut self, _position: Position, _mark: Mark) {}

    /// The player to move changed, or a new round begins.
    fn on_turn_changed(&mut self, active: &Player, round: u32);

    /// A round ended without deciding the match.
    fn on_round_resolved(&mut self, resolution: &RoundResolution);

    /// The match is over.
    fn on_match_complete(&mut self, winner: &Player, scores: Scores, final_board: &Board);

    /// Setup should be shown again.
    fn on_menu_requested(&mut self);
}

impl MatchEvent {
    /// Forwards this event to the matching [`Presentation`] callback.
    pub fn dispatch<P: Presentation + ?Sized>(&self, sink: &mut P) {
        match self {
            MatchEvent::MatchStarted { players, round } => sink.on_match_started(players, *round),
            MatchEvent::MarkPlaced { position, mark } => sink.on_mark_placed(*position, *mark),
            MatchEvent::TurnChanged { active, round } => sink.on_turn_changed(active, *round),
            MatchEvent::RoundResolved(resolution) => sink.on_round_resolved(resolution),
            MatchEvent::MatchComplete {
                winner,
                scores,
                final_board,
                ..
            } => sink.on_match_complete(winner, *scores, final_board),
            MatchEvent::MenuRequested => sink.on_menu_requested(),
        }
    }
}
