//! Mark balance invariant: players alternate within a round.

use super::super::{Mark, MatchEngine};
use super::Invariant;

/// Invariant: the numbers of X and O marks on the board differ by at most one.
///
/// Either player may open a round, so the sign of the difference is free.
pub struct MarkBalanceInvariant;

impl Invariant<MatchEngine> for MarkBalanceInvariant {
    fn holds(engine: &MatchEngine) -> bool {
        let board = engine.board();
        board.count(Mark::X).abs_diff(board.count(Mark::O)) <= 1
    }

    fn description() -> &'static str {
        "X and O marks differ by at most one"
    }
}
