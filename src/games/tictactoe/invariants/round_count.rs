//! Round count invariant: one new round per decided, non-final round.

use super::super::{MatchEngine, MatchPhase};
use super::Invariant;

/// Invariant: during play the round number equals one plus all round wins.
///
/// Ties replay the same round number, so only wins advance it.
pub struct RoundCountInvariant;

impl Invariant<MatchEngine> for RoundCountInvariant {
    fn holds(engine: &MatchEngine) -> bool {
        if engine.phase() != MatchPhase::RoundInProgress {
            return true;
        }
        match (engine.round(), engine.scores()) {
            (Some(round), Some(scores)) => round == scores.total() + 1,
            _ => false,
        }
    }

    fn description() -> &'static str {
        "Round number is one more than the rounds won so far"
    }
}
