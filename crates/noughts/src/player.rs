//! Match participants.

use crate::symbol::Symbol;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A named participant and the symbol they place.
///
/// Immutable once created; a match owns exactly two.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
pub struct Player {
    /// Display name.
    name: String,
    /// Mark placed by this player.
    symbol: Symbol,
}

impl Player {
    /// Creates a player.
    pub fn new(name: impl Into<String>, symbol: Symbol) -> Self {
        Self {
            name: name.into(),
            symbol,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.symbol)
    }
}
