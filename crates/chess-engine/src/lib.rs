//! Turn-based chess rule engine.
//!
//! This crate provides:
//! - [`Board`] - the 8x8 grid, the side to move, and move execution
//! - [`Piece`] - one occupant of a square, computing its own destinations
//! - [`MoveSet`] - the squares a piece can reach in the current position
//! - [`TurnOrder`] - how strictly the board enforces alternating turns
//!
//! # Scope
//!
//! The engine decides whether a requested move is legal for the piece on the
//! start square and, if it is, applies it and flips the side to move. Check,
//! castling, en passant, promotion, and draw rules are not modelled.
//!
//! # Example
//!
//! ```
//! use chess_engine::Board;
//!
//! let mut board = Board::new();
//! let moves = board.available_moves("e2").unwrap();
//! assert_eq!(moves.to_algebraic(), vec!["e4", "e3"]);
//!
//! board.move_piece("e2", "e4").unwrap();
//! board.move_piece("e7", "e5").unwrap();
//! println!("{}", board);
//! ```

mod board;
mod error;
pub mod movegen;
mod piece;
mod turn;

pub use board::Board;
pub use error::MoveError;
pub use movegen::MoveSet;
pub use piece::Piece;
pub use turn::TurnOrder;
