//! Shell command parsing.

use thiserror::Error;

/// Errors for lines that are not a valid command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command: {0}")]
    Unknown(String),
    #[error("{command} expects {expected} argument(s), got {got}")]
    MissingArgument {
        command: &'static str,
        expected: usize,
        got: usize,
    },
}

/// Commands read from the session input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Move the piece on `start` to `end`.
    Move { start: String, end: String },
    /// Print the board.
    Show,
    /// List the destinations of the piece on `square`.
    Get { square: String },
    /// Leave the session.
    Exit,
}

impl Command {
    /// Parse a command line.
    ///
    /// Keywords are case-sensitive. Arguments beyond those a command takes
    /// are ignored; coordinates are validated by the board, not here.
    pub fn parse(input: &str) -> Result<Self, CommandError> {
        let parts: Vec<&str> = input.split_whitespace().collect();

        match parts.as_slice() {
            [] => Err(CommandError::Empty),
            ["MOVE", start, end, ..] => Ok(Command::Move {
                start: start.to_string(),
                end: end.to_string(),
            }),
            ["MOVE", rest @ ..] => Err(CommandError::MissingArgument {
                command: "MOVE",
                expected: 2,
                got: rest.len(),
            }),
            ["SHOW", ..] => Ok(Command::Show),
            ["GET", square, ..] => Ok(Command::Get {
                square: square.to_string(),
            }),
            ["GET"] => Err(CommandError::MissingArgument {
                command: "GET",
                expected: 1,
                got: 0,
            }),
            ["EXIT", ..] => Ok(Command::Exit),
            [other, ..] => Err(CommandError::Unknown(other.to_string())),
        }
    }
}
