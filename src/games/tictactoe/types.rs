//! Core domain types for tic-tac-toe.

use super::error::MoveError;
use super::position::Position;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Mark a player places on the board.
///
/// `X` belongs to player A (the named player), `O` to player B.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Mark {
    /// Player A's mark.
    #[display("X")]
    X,
    /// Player B's mark.
    #[display("O")]
    O,
}

impl Mark {
    /// Both marks, in seat order.
    pub const BOTH: [Mark; 2] = [Mark::X, Mark::O];

    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Seat index of the player owning this mark (X = 0, O = 1).
    pub fn seat(self) -> usize {
        match self {
            Mark::X => 0,
            Mark::O => 1,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a mark.
    Occupied(Mark),
}

impl Square {
    /// Returns the mark in this square, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Square::Empty => None,
            Square::Occupied(mark) => Some(mark),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// A square only changes from `Empty` to `Occupied` through [`Board::place`],
/// and only goes back to `Empty` through [`Board::reset`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Clears every square.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!("Resetting board");
        self.squares = [Square::Empty; 9];
    }

    /// Places `mark` at the board index `index` (0-8).
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfRange`] for an index past the board and
    /// [`MoveError::SquareOccupied`] when the square already holds a mark.
    /// The board is untouched on error.
    #[instrument(skip(self))]
    pub fn place(&mut self, index: usize, mark: Mark) -> Result<Position, MoveError> {
        let position = Position::from_index(index).ok_or(MoveError::OutOfRange(index))?;
        if !self.is_empty(position) {
            return Err(MoveError::SquareOccupied(position));
        }
        self.squares[index] = Square::Occupied(mark);
        Ok(position)
    }

    /// Returns a snapshot of all squares in row-major order.
    pub fn cells(&self) -> [Square; 9] {
        self.squares
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Number of squares holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(mark))
            .count()
    }

    /// Number of empty squares.
    pub fn empty_count(&self) -> usize {
        self.squares.iter().filter(|s| **s == Square::Empty).count()
    }
}

impl From<[Square; 9]> for Board {
    fn from(squares: [Square; 9]) -> Self {
        Self { squares }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.empty_count(), 9);
        assert!(board.cells().iter().all(|s| *s == Square::Empty));
    }

    #[test]
    fn test_place_marks_square() {
        let mut board = Board::new();
        let pos = board.place(4, Mark::X).expect("center is free");
        assert_eq!(pos, Position::Center);
        assert_eq!(board.get(Position::Center), Square::Occupied(Mark::X));
        assert_eq!(board.count(Mark::X), 1);
    }

    #[test]
    fn test_place_occupied_is_rejected_without_change() {
        let mut board = Board::new();
        board.place(0, Mark::X).unwrap();
        let before = board.clone();

        assert_eq!(
            board.place(0, Mark::O),
            Err(MoveError::SquareOccupied(Position::TopLeft))
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_place_out_of_range() {
        let mut board = Board::new();
        assert_eq!(board.place(9, Mark::X), Err(MoveError::OutOfRange(9)));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_reset_clears_marks() {
        let mut board = Board::new();
        board.place(0, Mark::X).unwrap();
        board.place(8, Mark::O).unwrap();
        board.reset();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_mark_opponent_and_seat() {
        assert_eq!(Mark::X.opponent(), Mark::O);
        assert_eq!(Mark::O.opponent(), Mark::X);
        assert_eq!(Mark::X.seat(), 0);
        assert_eq!(Mark::O.seat(), 1);
    }
}
