//! Properties every match must satisfy after every move.
//!
//! [`Game`] checks [`MatchInvariants`] in debug builds after each
//! successful mark, and deserializing a [`Game`] fails unless they hold.

use crate::board::Board;
use crate::game::{Game, GameStatus};
use crate::symbol::Symbol;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants checked together, implemented for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = match <(I1, I2) as InvariantSet<S>>::check_all(state) {
            Ok(()) => Vec::new(),
            Err(violations) => violations,
        };

        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Match invariants
// ─────────────────────────────────────────────────────────────

/// Marked cells are never overwritten: replaying the history onto an
/// empty board marks each cell at most once and reproduces the board.
pub struct MonotonicBoard;

impl Invariant<Game> for MonotonicBoard {
    fn holds(game: &Game) -> bool {
        let mut replayed = Board::new();
        let replays = game
            .history()
            .iter()
            .all(|mov| replayed.mark_cell(mov.position.to_index(), mov.symbol).is_ok());

        replays && &replayed == game.board()
    }

    fn description() -> &'static str {
        "Board differs from its move history"
    }
}

/// Players alternate: the two symbols' mark counts differ by at most one.
pub struct BalancedMarks;

impl Invariant<Game> for BalancedMarks {
    fn holds(game: &Game) -> bool {
        let board = game.board();
        board.count(Symbol::X).abs_diff(board.count(Symbol::O)) <= 1
    }

    fn description() -> &'static str {
        "One symbol has moved more than once in a row"
    }
}

/// The recorded status agrees with the rules applied to the board.
pub struct StatusConsistent;

impl Invariant<Game> for StatusConsistent {
    fn holds(game: &Game) -> bool {
        let board = game.board();
        match game.status() {
            GameStatus::Won(symbol) => crate::rules::winner(board) == Some(*symbol),
            GameStatus::Drawn => crate::rules::is_draw(board),
            GameStatus::InProgress => !crate::rules::has_victory(board) && !board.is_full(),
        }
    }

    fn description() -> &'static str {
        "Status disagrees with the board"
    }
}

/// All match invariants as a composable set.
pub type MatchInvariants = (MonotonicBoard, BalancedMarks, StatusConsistent);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Position, Symbol};

    fn played(moves: &[usize]) -> Game {
        let mut game = Game::with_names("Linus", "Emily");
        for &position in moves {
            game.play_turn(position).unwrap();
        }
        game
    }

    #[test]
    fn test_invariants_hold_for_new_match() {
        assert!(MatchInvariants::check_all(&played(&[])).is_ok());
    }

    #[test]
    fn test_invariants_hold_through_a_draw() {
        let game = played(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert_eq!(game.status(), &GameStatus::Drawn);
        assert!(MatchInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_overwritten_cell_detected() {
        let mut game = played(&[4]);
        game.board = Board::new();
        game.board.mark_cell(4, Symbol::O).unwrap();

        let violations = MatchInvariants::check_all(&game).unwrap_err();
        assert_eq!(
            violations,
            vec![InvariantViolation::new(MonotonicBoard::description())]
        );
    }

    #[test]
    fn test_missing_history_detected() {
        let mut game = played(&[4, 0]);
        game.history.pop();

        let violations = MatchInvariants::check_all(&game).unwrap_err();
        assert_eq!(
            violations,
            vec![InvariantViolation::new(MonotonicBoard::description())]
        );
    }

    #[test]
    fn test_repeated_mover_detected() {
        let mut game = played(&[]);
        for position in [Position::TopLeft, Position::TopCenter, Position::TopRight] {
            game.board.mark_cell(position.to_index(), Symbol::X).unwrap();
            game.history.push(crate::Move::new(Symbol::X, position));
        }
        game.status = GameStatus::Won(Symbol::X);

        let violations = MatchInvariants::check_all(&game).unwrap_err();
        assert_eq!(
            violations,
            vec![InvariantViolation::new(BalancedMarks::description())]
        );
    }

    #[test]
    fn test_stale_status_detected() {
        let mut game = played(&[0, 3, 1, 4, 2]);
        game.status = GameStatus::InProgress;
        assert!(!StatusConsistent::holds(&game));

        type Pair = (MonotonicBoard, BalancedMarks);
        assert!(Pair::check_all(&game).is_ok());
        assert_eq!(game.history().last().map(|m| m.position), Some(Position::TopRight));
    }
}
