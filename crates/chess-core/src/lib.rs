//! Core types for chess.
//!
//! This crate provides the fundamental types used across the rule engine:
//! - [`Color`] and [`PieceKind`] for piece identity
//! - [`Square`] for board coordinates and algebraic notation
//! - [`Layout`] for describing a piece placement to set a board up from

mod color;
mod layout;
mod piece;
mod square;

pub use color::Color;
pub use layout::{Layout, LayoutError};
pub use piece::PieceKind;
pub use square::{format_square, Square, SquareError, BOARD_SIZE};
