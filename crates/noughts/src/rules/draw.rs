//! Draw detection.

use super::win::has_victory;
use crate::board::Board;
use tracing::instrument;

/// A full board with no completed line.
///
/// Victory is checked first: a full board that holds a winning line is a
/// win, never a draw.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    !has_victory(board) && board.is_full()
}
