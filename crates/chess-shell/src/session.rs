//! The read-evaluate-print loop.

use std::io::{BufRead, Write};

use chess_engine::Board;
use tracing::{debug, info, warn};

use crate::{Command, Controller, ShellError};

const MOVED: &str = "Moved The Piece";
const NO_PIECE: &str = "No Piece in the position";
const INVALID: &str = "Invalid Command";
const EXITED: &str = "Exited";

/// Whether the loop keeps reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// One game session reading commands from `R` and printing to `W`.
pub struct Session<R: BufRead, W: Write> {
    reader: R,
    controller: Controller<W>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(reader: R, controller: Controller<W>) -> Self {
        Self { reader, controller }
    }

    /// Creates a session over a fresh board.
    pub fn with_board(reader: R, writer: W, board: Board) -> Self {
        Self::new(reader, Controller::new(board, writer))
    }

    /// Runs until `EXIT` or end of input.
    ///
    /// Bad commands, undecodable lines, and refused moves never end the loop;
    /// only I/O failures are returned.
    pub fn run(&mut self) -> Result<(), ShellError> {
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if self.reader.read_until(b'\n', &mut buf)? == 0 {
                info!("end of input");
                return Ok(());
            }
            let line = match std::str::from_utf8(&buf) {
                Ok(line) => line,
                Err(e) => {
                    warn!(error = %e, "input line is not valid UTF-8");
                    self.print(INVALID)?;
                    continue;
                }
            };
            if self.handle(line)? == Flow::Exit {
                return Ok(());
            }
        }
    }

    fn handle(&mut self, line: &str) -> Result<Flow, ShellError> {
        let command = match Command::parse(line) {
            Ok(command) => command,
            Err(e) => {
                warn!(error = %e, line = line.trim_end(), "invalid command");
                self.print(INVALID)?;
                return Ok(Flow::Continue);
            }
        };

        match command {
            Command::Move { start, end } => match self.controller.move_piece(&start, &end) {
                Ok(()) => self.print(MOVED)?,
                Err(ShellError::Move(e)) => debug!(error = %e, "move refused"),
                Err(e) => return Err(e),
            },
            Command::Show => self.controller.render()?,
            Command::Get { square } => match self.controller.available_moves(&square) {
                Ok(moves) => self.print(&format!("Available Moves: {}", moves))?,
                Err(e) => {
                    debug!(error = %e, "no moves to list");
                    self.print(NO_PIECE)?;
                }
            },
            Command::Exit => {
                self.print(EXITED)?;
                return Ok(Flow::Exit);
            }
        }

        Ok(Flow::Continue)
    }

    fn print(&mut self, message: &str) -> Result<(), ShellError> {
        let writer = self.controller.writer_mut();
        writeln!(writer, "{}", message)?;
        writer.flush()?;
        Ok(())
    }

    pub fn controller(&self) -> &Controller<W> {
        &self.controller
    }

    pub fn into_controller(self) -> Controller<W> {
        self.controller
    }
}
