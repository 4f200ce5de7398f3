//! Game board representation.
//!
//! This module contains:
//! - The 3x3 grid of cell marks
//! - Placement and query methods used by the state machine
//! - A JSON-friendly projection for the rendering layer
//!
//! The board itself enforces no turn order; it only guarantees that a
//! marked cell is never overwritten except through [`Board::clear`].

use crate::grid::{Coord, CELL_COUNT};
use crate::player::Mark;
use serde::{Deserialize, Serialize};

/// The 3x3 board of cell marks.
///
/// Cells are stored row-major; `None` is an empty cell. The grid always
/// has exactly 9 cells and never resizes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [Option<Mark>; CELL_COUNT],
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Self {
            cells: [None; CELL_COUNT],
        }
    }

    /// Get the mark at a cell, `None` if the cell is empty
    pub fn get(&self, coord: Coord) -> Option<Mark> {
        self.cells[coord.index()]
    }

    /// Whether a cell is empty
    pub fn is_empty_cell(&self, coord: Coord) -> bool {
        self.get(coord).is_none()
    }

    /// Whether every cell is marked
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    /// Number of marks currently on the board
    pub fn mark_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Place a mark at a cell.
    ///
    /// Returns `false` (leaving the board unchanged) if the cell is
    /// already marked. Turn order and terminal-state checks belong to the
    /// caller.
    pub fn place(&mut self, coord: Coord, mark: Mark) -> bool {
        let cell = &mut self.cells[coord.index()];
        if cell.is_some() {
            return false;
        }
        *cell = Some(mark);
        true
    }

    /// Remove all marks
    pub fn clear(&mut self) {
        self.cells = [None; CELL_COUNT];
    }

    /// All cells in row-major order
    pub fn cells(&self) -> &[Option<Mark>; CELL_COUNT] {
        &self.cells
    }

    /// All empty cells in row-major order
    pub fn empty_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        Coord::all().filter(|coord| self.is_empty_cell(*coord))
    }

    /// Convert to a JSON-friendly representation listing only marked cells
    pub fn to_json_friendly(&self) -> BoardJson {
        BoardJson {
            cells: Coord::all()
                .filter_map(|coord| {
                    self.get(coord).map(|mark| CellJson {
                        row: coord.row(),
                        col: coord.col(),
                        mark,
                    })
                })
                .collect(),
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// JSON-friendly board representation for the rendering layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardJson {
    pub cells: Vec<CellJson>,
}

/// A single marked cell in the JSON projection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CellJson {
    pub row: u8,
    pub col: u8,
    pub mark: Mark,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.mark_count(), 0);
        assert!(!board.is_full());
        for coord in Coord::all() {
            assert!(board.is_empty_cell(coord));
        }
    }

    #[test]
    fn test_place_and_get() {
        let mut board = Board::new();
        let coord = Coord::new(1, 2);

        assert!(board.place(coord, Mark::X));
        assert_eq!(board.get(coord), Some(Mark::X));
        assert_eq!(board.mark_count(), 1);
    }

    #[test]
    fn test_place_rejects_occupied_cell() {
        let mut board = Board::new();
        let coord = Coord::new(0, 0);

        assert!(board.place(coord, Mark::X));
        assert!(!board.place(coord, Mark::O));

        // Original mark is untouched
        assert_eq!(board.get(coord), Some(Mark::X));
    }

    #[test]
    fn test_is_full() {
        let mut board = Board::new();
        let mut mark = Mark::X;
        for coord in Coord::all() {
            assert!(!board.is_full());
            board.place(coord, mark);
            mark = mark.opponent();
        }
        assert!(board.is_full());
        assert_eq!(board.empty_cells().count(), 0);
    }

    #[test]
    fn test_clear_empties_every_cell() {
        let mut board = Board::new();
        board.place(Coord::new(0, 0), Mark::X);
        board.place(Coord::new(2, 2), Mark::O);

        board.clear();
        assert_eq!(board.mark_count(), 0);
    }

    #[test]
    fn test_json_projection_lists_only_marked_cells() {
        let mut board = Board::new();
        board.place(Coord::new(0, 1), Mark::X);
        board.place(Coord::new(2, 0), Mark::O);

        let json = board.to_json_friendly();
        assert_eq!(json.cells.len(), 2);
        assert!(json
            .cells
            .iter()
            .any(|c| c.row == 0 && c.col == 1 && c.mark == Mark::X));
        assert!(json
            .cells
            .iter()
            .any(|c| c.row == 2 && c.col == 0 && c.mark == Mark::O));
    }
}
