//! Win detection.

use crate::board::Board;
use crate::position::Position;
use crate::symbol::{Cell, Symbol};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Three cells that win the match when they hold the same symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line(pub [Position; 3]);

impl Line {
    /// Board indices of the line's cells.
    pub fn indices(&self) -> [usize; 3] {
        self.0.map(Position::to_index)
    }

    /// The symbol owning every cell of the line, if one does.
    pub fn owner(&self, board: &Board) -> Option<Symbol> {
        let [a, b, c] = self.indices().map(|i| board.get(i));
        match a {
            Some(Cell::Marked(symbol)) if a == b && a == c => Some(symbol),
            _ => None,
        }
    }
}

/// The eight winning lines: rows, then columns, then diagonals.
pub const LINES: [Line; 8] = [
    // Rows
    Line([Position::TopLeft, Position::TopCenter, Position::TopRight]),
    Line([Position::MiddleLeft, Position::Center, Position::MiddleRight]),
    Line([Position::BottomLeft, Position::BottomCenter, Position::BottomRight]),
    // Columns
    Line([Position::TopLeft, Position::MiddleLeft, Position::BottomLeft]),
    Line([Position::TopCenter, Position::Center, Position::BottomCenter]),
    Line([Position::TopRight, Position::MiddleRight, Position::BottomRight]),
    // Diagonals
    Line([Position::TopLeft, Position::Center, Position::BottomRight]),
    Line([Position::TopRight, Position::Center, Position::BottomLeft]),
];

/// Returns the first completed line, checking in [`LINES`] order.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<Line> {
    LINES.into_iter().find(|line| line.owner(board).is_some())
}

/// Returns the symbol that completed a line, if any.
#[instrument(skip(board))]
pub fn winner(board: &Board) -> Option<Symbol> {
    LINES.iter().find_map(|line| line.owner(board))
}

/// True iff some line holds three identical symbols.
pub fn has_victory(board: &Board) -> bool {
    winning_line(board).is_some()
}
