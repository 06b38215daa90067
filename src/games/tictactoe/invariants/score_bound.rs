//! Score bound invariant: nobody holds the winning score mid-match.

use super::super::{MatchEngine, MatchPhase};
use super::Invariant;

/// Invariant: while a round is in progress both scores are below the threshold.
///
/// Reaching the threshold must end the match in the same move.
pub struct ScoreBoundInvariant;

impl Invariant<MatchEngine> for ScoreBoundInvariant {
    fn holds(engine: &MatchEngine) -> bool {
        if engine.phase() != MatchPhase::RoundInProgress {
            return true;
        }
        let threshold = engine.winning_score();
        engine
            .players()
            .is_some_and(|players| players.iter().all(|p| p.score() < threshold))
    }

    fn description() -> &'static str {
        "Scores stay below the winning score while rounds are played"
    }
}
