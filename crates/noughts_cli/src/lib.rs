//! Terminal frontend for noughts matches.
//!
//! Everything here is presentation: it turns typed input into cell
//! indices, drives a [`noughts::Game`], and renders what the match
//! reports back. No game rule lives in this crate.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod console;
pub mod logging;
mod replay;

pub use config::{ConfigError, MatchConfig};
pub use console::{Console, Finish, Input, outcome_message};
pub use replay::{Replay, replay};
