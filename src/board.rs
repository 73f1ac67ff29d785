//! Game board state: a 3x3 grid of optional marks.

use crate::common::{BoardError, Mark};
use crate::config::BOARD_SIZE;

/// Grid of cells in row-major order; `None` is an empty cell.
pub type Cells = [[Option<Mark>; BOARD_SIZE]; BOARD_SIZE];

/// Main board state. `Copy`, so the search can branch on cheap snapshots
/// while the live board stays untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    cells: Cells,
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Self {
        Board {
            cells: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Place `mark` at (row, col). Fails if the coordinate is out of bounds
    /// or the cell is taken; the board is unchanged on failure.
    pub fn place(&mut self, row: usize, col: usize, mark: Mark) -> Result<(), BoardError> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(BoardError::OutOfBounds);
        }
        if self.cells[row][col].is_some() {
            return Err(BoardError::CellOccupied);
        }
        self.cells[row][col] = Some(mark);
        Ok(())
    }

    /// Checked read of a single cell.
    pub fn cell(&self, row: usize, col: usize) -> Result<Option<Mark>, BoardError> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(BoardError::OutOfBounds);
        }
        Ok(self.cells[row][col])
    }

    /// Immutable view of the whole grid, for rendering.
    pub fn cells(&self) -> &Cells {
        &self.cells
    }

    /// Returns `true` when no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|cell| cell.is_some())
    }

    /// Clear all cells.
    pub fn reset(&mut self) {
        self.cells = [[None; BOARD_SIZE]; BOARD_SIZE];
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| **cell == Some(mark))
            .count()
    }
}
