//! Facade over the board for the interactive shell.

use std::io::{self, Write};

use chess_engine::{Board, MoveError, MoveSet};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShellError {
    #[error("Move error: {0}")]
    Move(#[from] MoveError),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Forwards requests to a [`Board`] and prints the board after every
/// successful move.
pub struct Controller<W: Write> {
    board: Board,
    writer: W,
    show_after_move: bool,
}

impl<W: Write> Controller<W> {
    pub fn new(board: Board, writer: W) -> Self {
        Self {
            board,
            writer,
            show_after_move: true,
        }
    }

    /// Sets whether a successful move prints the board.
    pub fn with_show_after_move(mut self, show: bool) -> Self {
        self.show_after_move = show;
        self
    }

    /// Moves a piece, then prints the board if enabled.
    pub fn move_piece(&mut self, start: &str, end: &str) -> Result<(), ShellError> {
        self.board.move_piece(start, end)?;
        if self.show_after_move {
            self.render()?;
        }
        Ok(())
    }

    /// Returns the destinations of the piece on `start`.
    pub fn available_moves(&self, start: &str) -> Result<MoveSet, MoveError> {
        self.board.available_moves(start)
    }

    /// Print the board.
    pub fn render(&mut self) -> io::Result<()> {
        write!(self.writer, "{}", self.board)?;
        self.writer.flush()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::Color;

    fn output(controller: Controller<Vec<u8>>) -> String {
        String::from_utf8(controller.into_writer()).unwrap()
    }

    #[test]
    fn successful_move_renders_board() {
        let mut controller = Controller::new(Board::new(), Vec::new());
        controller.move_piece("e2", "e4").unwrap();
        assert_eq!(controller.board().side_to_move(), Color::Black);
        let text = output(controller);
        assert!(text.starts_with("   a  b  c"));
        assert!(text.contains("4 -- -- -- -- WP -- -- -- 4"));
    }

    #[test]
    fn failed_move_prints_nothing() {
        let mut controller = Controller::new(Board::new(), Vec::new());
        assert!(matches!(
            controller.move_piece("e2", "e5"),
            Err(ShellError::Move(MoveError::IllegalDestination { .. }))
        ));
        assert!(output(controller).is_empty());
    }

    #[test]
    fn render_can_be_disabled_after_moves() {
        let mut controller = Controller::new(Board::new(), Vec::new()).with_show_after_move(false);
        controller.move_piece("e2", "e4").unwrap();
        assert!(output(controller).is_empty());
    }

    #[test]
    fn available_moves_forwards() {
        let controller = Controller::new(Board::new(), Vec::new());
        assert_eq!(controller.available_moves("g1").unwrap().len(), 2);
        assert!(controller.available_moves("g4").is_err());
    }
}
