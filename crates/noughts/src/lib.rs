//! Noughts - tic-tac-toe match logic
//!
//! Pure game state for a two-player match on a 3x3 grid. Rendering and
//! input handling live in the presentation layer, which drives a [`Game`]
//! through its query and command methods.
//!
//! # Architecture
//!
//! - **Board**: the 9-cell grid and its single validated mutation
//! - **Rules**: the eight winning lines, victory and draw evaluation
//! - **Game**: players, turn order, explicit match status
//! - **Invariants**: properties checked after every move in debug builds
//!
//! # Example
//!
//! ```
//! use noughts::{Game, GameStatus, Player, Symbol};
//!
//! # fn example() -> Result<(), noughts::MoveError> {
//! let mut game = Game::new(Player::new("Linus", Symbol::X), Player::new("Emily", Symbol::O))?;
//! for position in [0, 3, 1, 4, 2] {
//!     game.play_turn(position)?;
//! }
//! assert_eq!(game.status(), &GameStatus::Won(Symbol::X));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod error;
mod game;
pub mod invariants;
mod player;
mod position;
pub mod rules;
mod symbol;

pub use action::Move;
pub use board::{BOARD_SIZE, Board};
pub use error::{MoveError, SnapshotError};
pub use game::{Game, GameStatus};
pub use player::Player;
pub use position::Position;
pub use rules::Line;
pub use symbol::{Cell, Symbol};
