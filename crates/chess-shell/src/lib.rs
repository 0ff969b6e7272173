//! Interactive shell for the chess rule engine.
//!
//! # Commands
//!
//! - `MOVE <start> <end>` - Move a piece, printing the board and `Moved The Piece`
//! - `SHOW` - Print the board
//! - `GET <square>` - List the destinations of the piece on a square
//! - `EXIT` - Leave the session
//!
//! Anything else is answered with `Invalid Command`.

mod command;
pub mod config;
mod controller;
mod session;

pub use command::{Command, CommandError};
pub use config::{ConfigError, ShellConfig};
pub use controller::{Controller, ShellError};
pub use session::Session;
