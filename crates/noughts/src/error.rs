//! Errors raised when a move or a match setup is rejected.

use crate::game::GameStatus;
use crate::symbol::Symbol;

/// Reason a move (or match setup) was rejected.
///
/// None of these are fatal: the match is left exactly as it was and
/// play continues with a new input.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The target cell already holds a symbol.
    #[display("The position {position} is already marked with {symbol}")]
    AlreadyMarked {
        /// Index of the occupied cell.
        position: usize,
        /// Symbol found in the cell.
        symbol: Symbol,
    },

    /// The index does not name a cell (valid range is 0-8).
    #[display("Position {_0} is outside the board (must be 0-8)")]
    InvalidPosition(usize),

    /// The match already reached a terminal state.
    #[display("The match is already over ({_0})")]
    MatchOver(GameStatus),

    /// The player holding the turn already made the previous move.
    #[display("It's not {_0}'s turn")]
    WrongPlayer(Symbol),

    /// Both players were given the same symbol.
    #[display("Both players cannot use symbol {_0}")]
    DuplicateSymbol(Symbol),
}

impl std::error::Error for MoveError {}

/// A serialized match that cannot be a real match state.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Invalid match snapshot: {message}")]
pub struct SnapshotError {
    /// What was wrong with the snapshot.
    pub message: String,
}

impl SnapshotError {
    /// Creates a new snapshot error.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
