//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board). They compute the outcome
//! from board contents alone and never look at move counts or turn order.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, winning_line};

use super::phases::RoundOutcome;
use super::types::Board;
use tracing::instrument;

/// Evaluates a board: a win takes precedence over a full board.
///
/// A win carries the completed line.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> RoundOutcome {
    if let Some((winner, line)) = winning_line(board) {
        RoundOutcome::Win(winner, line)
    } else if is_full(board) {
        RoundOutcome::Tie
    } else {
        RoundOutcome::Undecided
    }
}
