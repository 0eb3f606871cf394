//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart
//! from the board storage so the match and the invariant checks share
//! one definition of a win.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::{LINES, Line, has_victory, winner, winning_line};
