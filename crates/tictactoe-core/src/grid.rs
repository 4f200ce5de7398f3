//! Grid coordinate system for the 3x3 board.
//!
//! This module provides the foundational coordinate types for the board:
//! - `Coord`: Identifies an individual cell by (row, col)
//! - `Line`: A row, column, or diagonal of three cells checked for a win
//!
//! Coordinates are row-major: `(0, 0)` is the top-left cell and `(2, 2)`
//! the bottom-right, matching how the renderer lays out its touch targets.

use serde::{Deserialize, Serialize};

/// Number of rows (and columns) on the board
pub const GRID_SIZE: u8 = 3;

/// Total number of cells on the board
pub const CELL_COUNT: usize = (GRID_SIZE * GRID_SIZE) as usize;

/// A row, column, or diagonal of three cells
pub type Line = [Coord; 3];

/// Cell coordinate on the 3x3 board.
///
/// Both components are always in `0..3`; construction through
/// [`Coord::new`] or [`Coord::from_indices`] enforces the bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Coord {
    /// Row (increases going down)
    row: u8,
    /// Column (increases going right)
    col: u8,
}

impl Coord {
    /// Create a new coordinate.
    ///
    /// # Panics
    ///
    /// Panics if either component is out of range. Use
    /// [`Coord::from_indices`] for untrusted input.
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < GRID_SIZE && col < GRID_SIZE);
        Self { row, col }
    }

    /// Create a coordinate from untrusted indices, `None` if out of range
    pub fn from_indices(row: usize, col: usize) -> Option<Self> {
        if row < GRID_SIZE as usize && col < GRID_SIZE as usize {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Row component (0-2)
    pub const fn row(&self) -> u8 {
        self.row
    }

    /// Column component (0-2)
    pub const fn col(&self) -> u8 {
        self.col
    }

    /// Row-major index into a flat 9-cell array
    pub const fn index(&self) -> usize {
        (self.row * GRID_SIZE + self.col) as usize
    }

    /// Whether this cell lies on the main diagonal (top-left to bottom-right)
    pub const fn on_main_diagonal(&self) -> bool {
        self.row == self.col
    }

    /// Whether this cell lies on the anti-diagonal (top-right to bottom-left)
    pub const fn on_anti_diagonal(&self) -> bool {
        self.row + self.col == GRID_SIZE - 1
    }

    /// All lines that pass through this cell.
    ///
    /// Every cell yields its row and its column; diagonal cells add the
    /// diagonal(s) they lie on. The center yields all four.
    pub fn lines_through(&self) -> Vec<Line> {
        let mut lines = vec![row_line(self.row), col_line(self.col)];

        if self.on_main_diagonal() {
            lines.push(MAIN_DIAGONAL);
        }
        if self.on_anti_diagonal() {
            lines.push(ANTI_DIAGONAL);
        }

        lines
    }

    /// All cells in row-major order
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..GRID_SIZE).flat_map(|row| (0..GRID_SIZE).map(move |col| Coord::new(row, col)))
    }
}

/// The three cells of a row
pub const fn row_line(row: u8) -> Line {
    [
        Coord::new(row, 0),
        Coord::new(row, 1),
        Coord::new(row, 2),
    ]
}

/// The three cells of a column
pub const fn col_line(col: u8) -> Line {
    [
        Coord::new(0, col),
        Coord::new(1, col),
        Coord::new(2, col),
    ]
}

/// The main diagonal (top-left to bottom-right)
pub const MAIN_DIAGONAL: Line = [Coord::new(0, 0), Coord::new(1, 1), Coord::new(2, 2)];

/// The anti-diagonal (top-right to bottom-left)
pub const ANTI_DIAGONAL: Line = [Coord::new(0, 2), Coord::new(1, 1), Coord::new(2, 0)];

/// All eight winning lines: 3 rows, 3 columns, 2 diagonals
pub const ALL_LINES: [Line; 8] = [
    row_line(0),
    row_line(1),
    row_line(2),
    col_line(0),
    col_line(1),
    col_line(2),
    MAIN_DIAGONAL,
    ANTI_DIAGONAL,
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_all_coords_are_unique() {
        let coords: HashSet<_> = Coord::all().collect();
        assert_eq!(coords.len(), CELL_COUNT);
    }

    #[test]
    fn test_index_is_row_major() {
        assert_eq!(Coord::new(0, 0).index(), 0);
        assert_eq!(Coord::new(0, 2).index(), 2);
        assert_eq!(Coord::new(1, 0).index(), 3);
        assert_eq!(Coord::new(2, 2).index(), 8);
    }

    #[test]
    fn test_from_indices_bounds() {
        assert_eq!(Coord::from_indices(2, 1), Some(Coord::new(2, 1)));
        assert_eq!(Coord::from_indices(3, 0), None);
        assert_eq!(Coord::from_indices(0, 3), None);
        assert_eq!(Coord::from_indices(usize::MAX, 0), None);
    }

    #[test]
    fn test_lines_through_counts() {
        // Corners sit on a row, a column, and one diagonal
        assert_eq!(Coord::new(0, 0).lines_through().len(), 3);
        assert_eq!(Coord::new(0, 2).lines_through().len(), 3);
        assert_eq!(Coord::new(2, 0).lines_through().len(), 3);
        assert_eq!(Coord::new(2, 2).lines_through().len(), 3);

        // The center sits on all four line kinds
        assert_eq!(Coord::new(1, 1).lines_through().len(), 4);

        // Edge-center cells sit only on their row and column
        assert_eq!(Coord::new(0, 1).lines_through().len(), 2);
        assert_eq!(Coord::new(1, 0).lines_through().len(), 2);
    }

    #[test]
    fn test_lines_through_contain_the_cell() {
        for coord in Coord::all() {
            for line in coord.lines_through() {
                assert!(line.contains(&coord));
            }
        }
    }

    #[test]
    fn test_all_lines_cover_every_cell() {
        let covered: HashSet<_> = ALL_LINES.iter().flatten().collect();
        assert_eq!(covered.len(), CELL_COUNT);
    }

    #[test]
    fn test_diagonal_membership() {
        assert!(Coord::new(1, 1).on_main_diagonal());
        assert!(Coord::new(1, 1).on_anti_diagonal());
        assert!(Coord::new(2, 0).on_anti_diagonal());
        assert!(!Coord::new(0, 1).on_main_diagonal());
        assert!(!Coord::new(0, 1).on_anti_diagonal());
    }
}
