//! Moves recorded in a match history.

use crate::position::Position;
use crate::symbol::Symbol;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A symbol placed at a position.
///
/// The match appends one of these for every successful mark, so the
/// history can be replayed onto an empty board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Move {
    /// The symbol that was placed.
    pub symbol: Symbol,
    /// Where it was placed.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.symbol, self.position.label())
    }
}
