//! The 3x3 grid.

use crate::error::MoveError;
use crate::position::Position;
use crate::symbol::{Cell, Symbol};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// Number of cells on the board.
pub const BOARD_SIZE: usize = 9;

/// Fewest marks a single symbol needs before it can own a line.
const MARKS_PER_LINE: usize = 3;

/// 3x3 tic-tac-toe board.
///
/// Cells are stored in row-major order (0-8). The only mutation is
/// [`Board::mark_cell`], which never overwrites a marked cell.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; BOARD_SIZE],
        }
    }

    /// Returns all cells in index order.
    pub fn cells(&self) -> &[Cell; BOARD_SIZE] {
        &self.cells
    }

    /// Gets the cell at the given index, or `None` if it is off the board.
    pub fn get(&self, position: usize) -> Option<Cell> {
        self.cells.get(position).copied()
    }

    /// Checks if the cell at the given index exists and is empty.
    pub fn is_empty(&self, position: usize) -> bool {
        matches!(self.get(position), Some(Cell::Empty))
    }

    /// Returns true once every cell holds a symbol.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Places `symbol` in an empty cell.
    ///
    /// # Errors
    ///
    /// - [`MoveError::InvalidPosition`] if `position` is not 0-8
    /// - [`MoveError::AlreadyMarked`] if the cell already holds a symbol;
    ///   the cell keeps its original value
    #[instrument(skip(self))]
    pub fn mark_cell(&mut self, position: usize, symbol: Symbol) -> Result<(), MoveError> {
        let cell = self
            .cells
            .get_mut(position)
            .ok_or(MoveError::InvalidPosition(position))?;

        if let Cell::Marked(existing) = *cell {
            return Err(MoveError::AlreadyMarked {
                position,
                symbol: existing,
            });
        }

        *cell = Cell::Marked(symbol);
        debug!(position, %symbol, "Cell marked");
        Ok(())
    }

    /// Counts the cells holding `symbol`.
    pub fn count(&self, symbol: Symbol) -> usize {
        self.cells
            .iter()
            .filter(|cell| **cell == Cell::Marked(symbol))
            .count()
    }

    /// Returns true once some symbol has enough marks to complete a line.
    ///
    /// Until then no line can be won, so callers may skip the victory check.
    pub fn can_check_victory(&self) -> bool {
        Symbol::iter().any(|symbol| self.count(symbol) >= MARKS_PER_LINE)
    }

    /// Returns the positions that can still be marked.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::valid_moves(self)
    }
}

/// Renders the grid with empty cells numbered 1-9.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                match self.cells[pos] {
                    Cell::Empty => write!(f, "{}", pos + 1)?,
                    Cell::Marked(symbol) => write!(f, "{symbol}")?,
                }
                if col < 2 {
                    f.write_str("|")?;
                }
            }
            if row < 2 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}
