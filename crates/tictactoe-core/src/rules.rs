//! Win and draw evaluation.
//!
//! The evaluator is a pure function over the board and the move that was
//! just made. Only the lines through the last move can have been completed
//! by it, so those are the only lines inspected.

use crate::board::Board;
use crate::grid::Coord;
use crate::player::Mark;
use serde::{Deserialize, Serialize};

/// Outcome of evaluating the board after a move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// No win and empty cells remain; play continues
    Continue,
    /// The move completed a line of three
    Win,
    /// No win and the board is full
    Draw,
}

/// Classify the board after `mark` was placed at `last_move`.
///
/// Checks the row and column through the last move, plus whichever
/// diagonals it lies on. The caller guarantees the cell actually holds
/// `mark`; the evaluator never mutates anything.
pub fn evaluate(board: &Board, last_move: Coord, mark: Mark) -> Outcome {
    for line in last_move.lines_through() {
        if line.iter().all(|&coord| board.get(coord) == Some(mark)) {
            return Outcome::Win;
        }
    }

    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::Continue
    }
}
