//! Match orchestration: turn order and terminal-state evaluation.

use crate::action::Move;
use crate::board::Board;
use crate::error::{MoveError, SnapshotError};
use crate::invariants::{InvariantSet, MatchInvariants};
use crate::player::Player;
use crate::position::Position;
use crate::rules::{self, Line};
use crate::symbol::Symbol;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Where a match stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are still accepted.
    InProgress,
    /// The symbol completed a line.
    Won(Symbol),
    /// The board filled up without a completed line.
    Drawn,
}

impl GameStatus {
    /// Returns true for `Won` and `Drawn`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Evaluates a board: victory first, then fullness.
    fn of(board: &Board) -> Self {
        if let Some(symbol) = rules::winner(board) {
            GameStatus::Won(symbol)
        } else if board.is_full() {
            GameStatus::Drawn
        } else {
            GameStatus::InProgress
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Won(symbol) => write!(f, "{symbol} wins"),
            GameStatus::Drawn => write!(f, "Draw"),
        }
    }
}

/// One match between two players.
///
/// Owns its board, so any number of matches can exist side by side.
/// The first player moves first. [`Game::make_move`] marks the board for
/// the current player without passing the turn; [`Game::play_turn`] does
/// both, which is what a frontend normally wants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GameSnapshot")]
pub struct Game {
    pub(crate) players: [Player; 2],
    pub(crate) board: Board,
    pub(crate) current: usize,
    pub(crate) status: GameStatus,
    pub(crate) history: Vec<Move>,
}

/// Unchecked wire form of a [`Game`]; only reachable through `TryFrom`.
#[derive(Deserialize)]
struct GameSnapshot {
    players: [Player; 2],
    board: Board,
    current: usize,
    status: GameStatus,
    history: Vec<Move>,
}

impl TryFrom<GameSnapshot> for Game {
    type Error = SnapshotError;

    fn try_from(snapshot: GameSnapshot) -> Result<Self, Self::Error> {
        let [first, second] = &snapshot.players;
        if *second.symbol() != first.symbol().opponent() {
            return Err(SnapshotError::new(format!(
                "both players use symbol {}",
                first.symbol()
            )));
        }
        if snapshot.current > 1 {
            return Err(SnapshotError::new(format!(
                "current player index {} is not 0 or 1",
                snapshot.current
            )));
        }

        let game = Game {
            players: snapshot.players,
            board: snapshot.board,
            current: snapshot.current,
            status: snapshot.status,
            history: snapshot.history,
        };
        MatchInvariants::check_all(&game).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            SnapshotError::new(descriptions)
        })?;
        Ok(game)
    }
}

impl Game {
    /// Starts a match; `first` moves first.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::DuplicateSymbol`] if both players use the same symbol.
    #[instrument(skip_all, fields(first = %first, second = %second))]
    pub fn new(first: Player, second: Player) -> Result<Self, MoveError> {
        if *second.symbol() != first.symbol().opponent() {
            warn!("Players share a symbol");
            return Err(MoveError::DuplicateSymbol(*first.symbol()));
        }

        info!("Starting match");
        Ok(Self::start([first, second]))
    }

    /// Starts a match where `first` plays X and `second` plays O.
    pub fn with_names(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self::start([Player::new(first, Symbol::X), Player::new(second, Symbol::O)])
    }

    fn start(players: [Player; 2]) -> Self {
        Self {
            players,
            board: Board::new(),
            current: 0,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// The player whose symbol the next move places.
    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    /// Passes the turn to the other player.
    #[instrument(skip(self))]
    pub fn switch_current_player(&mut self) {
        self.current = 1 - self.current;
        debug!(current = %self.current_player(), "Turn switched");
    }

    /// Marks `position` with the current player's symbol.
    ///
    /// The turn is not passed; call [`Game::switch_current_player`] or use
    /// [`Game::play_turn`]. A rejected move is logged and leaves the match
    /// untouched.
    ///
    /// # Errors
    ///
    /// - [`MoveError::MatchOver`] once the match is won or drawn
    /// - [`MoveError::WrongPlayer`] if the previous mover still holds the
    ///   turn (the turn was not switched after the last move)
    /// - [`MoveError::InvalidPosition`] for an index outside 0-8
    /// - [`MoveError::AlreadyMarked`] for an occupied cell
    #[instrument(skip(self), fields(player = %self.current_player()))]
    pub fn make_move(&mut self, position: usize) -> Result<(), MoveError> {
        self.try_mark(position)
            .inspect_err(|error| warn!(position, %error, "Move rejected"))
    }

    fn try_mark(&mut self, position: usize) -> Result<(), MoveError> {
        if self.status.is_terminal() {
            return Err(MoveError::MatchOver(self.status));
        }

        let symbol = *self.current_player().symbol();
        let expected = self.players[self.history.len() % 2].symbol();
        if symbol != *expected {
            return Err(MoveError::WrongPlayer(symbol));
        }

        self.board.mark_cell(position, symbol)?;
        let position = Position::try_from(position)?;
        self.history.push(Move::new(symbol, position));
        self.status = GameStatus::of(&self.board);

        debug_assert!(
            MatchInvariants::check_all(&*self).is_ok(),
            "match invariants violated after {position}"
        );

        match self.status {
            GameStatus::InProgress => debug!(%position, %symbol, "Move applied"),
            status => info!(%position, %symbol, %status, "Match finished"),
        }
        Ok(())
    }

    /// Makes a move and, if the match goes on, passes the turn.
    ///
    /// After a finishing move the current player stays on the mover, so
    /// [`Game::current_player`] names the winner.
    #[instrument(skip(self))]
    pub fn play_turn(&mut self, position: usize) -> Result<GameStatus, MoveError> {
        self.make_move(position)?;
        if !self.status.is_terminal() {
            self.switch_current_player();
        }
        Ok(self.status)
    }

    /// True iff some line holds three identical symbols.
    pub fn has_victory(&self) -> bool {
        rules::has_victory(&self.board)
    }

    /// True iff the board is full and no line was completed.
    pub fn has_draw(&self) -> bool {
        rules::is_draw(&self.board)
    }

    /// Current status of the match.
    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    /// Returns true once the match is won or drawn.
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// The winning player, if the match was won.
    pub fn winner(&self) -> Option<&Player> {
        match self.status {
            GameStatus::Won(symbol) => self.player_for(symbol),
            _ => None,
        }
    }

    /// The completed line, if any.
    pub fn winning_line(&self) -> Option<Line> {
        rules::winning_line(&self.board)
    }

    /// The player who places `symbol`.
    pub fn player_for(&self, symbol: Symbol) -> Option<&Player> {
        self.players.iter().find(|player| *player.symbol() == symbol)
    }

    /// Both players, first mover first.
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Successful moves in the order they were made.
    pub fn history(&self) -> &[Move] {
        &self.history
    }
}
