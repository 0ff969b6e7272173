//! Error type for board operations.

use chess_core::{Color, Square, SquareError};
use thiserror::Error;

/// Reasons a move or query against the board is refused.
///
/// Every variant leaves the board unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// A coordinate was not valid algebraic notation.
    #[error(transparent)]
    InvalidSquare(#[from] SquareError),

    /// The start square holds no piece.
    #[error("no piece on {0}")]
    EmptySquare(Square),

    /// The destination is not among the piece's reachable squares.
    #[error("piece on {from} cannot move to {to}")]
    IllegalDestination { from: Square, to: Square },

    /// The piece does not belong to the side to move.
    #[error("{piece} piece cannot move while {side} is to move")]
    OutOfTurn { piece: Color, side: Color },
}
