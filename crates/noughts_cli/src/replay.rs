//! Non-interactive play from a fixed list of cell indices.

use noughts::{Game, GameStatus, MoveError};
use tracing::{info, instrument};

/// Result of replaying a move list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replay {
    /// Status after the last move.
    pub status: GameStatus,
    /// Moves the match refused, with the reason.
    pub rejected: Vec<(usize, MoveError)>,
}

/// Plays `moves` in order, one turn each.
///
/// A refused move is recorded and skipped, exactly as an interactive
/// player would have to enter another cell; later moves are still tried.
#[instrument(skip(game))]
pub fn replay(game: &mut Game, moves: &[usize]) -> Replay {
    let rejected: Vec<_> = moves
        .iter()
        .filter_map(|&position| game.play_turn(position).err().map(|e| (position, e)))
        .collect();

    info!(status = %game.status(), rejected = rejected.len(), "Replay finished");
    Replay {
        status: *game.status(),
        rejected,
    }
}
