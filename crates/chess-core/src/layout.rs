//! Piece-placement text used to set a board up.
//!
//! A layout lists the ranks from rank 8 down to rank 1, separated by '/'.
//! Within a rank, uppercase letters are White pieces, lowercase letters are
//! Black pieces, and a digit 1-8 skips that many empty squares.

use crate::{Color, PieceKind, Square, BOARD_SIZE};
use thiserror::Error;

/// Errors that can occur when parsing a layout.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("invalid layout: expected 8 ranks, got {0}")]
    RankCount(usize),

    #[error("invalid character '{ch}' in rank {rank}")]
    InvalidCharacter { ch: char, rank: u8 },

    #[error("rank {rank} has {width} squares, expected 8")]
    RankWidth { rank: u8, width: usize },
}

/// A parsed piece placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    placements: Vec<(Square, PieceKind, Color)>,
}

impl Layout {
    /// The standard starting placement.
    pub const STARTING: &'static str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

    /// A placement with no pieces.
    pub const EMPTY: &'static str = "8/8/8/8/8/8/8/8";

    /// Parses a layout string.
    pub fn parse(text: &str) -> Result<Self, LayoutError> {
        let ranks: Vec<&str> = text.trim().split('/').collect();
        if ranks.len() != BOARD_SIZE as usize {
            return Err(LayoutError::RankCount(ranks.len()));
        }

        let mut placements = Vec::new();
        for (row, rank_text) in ranks.iter().enumerate() {
            let rank = BOARD_SIZE - row as u8;
            let mut width = 0usize;

            for ch in rank_text.chars() {
                if let Some(run) = ch.to_digit(10).filter(|d| (1..=8).contains(d)) {
                    width += run as usize;
                } else if let Some((kind, color)) = PieceKind::from_layout_char(ch) {
                    if let Some(square) = Square::new(row as u8, width as u8) {
                        placements.push((square, kind, color));
                    }
                    width += 1;
                } else {
                    return Err(LayoutError::InvalidCharacter { ch, rank });
                }
            }

            if width != BOARD_SIZE as usize {
                return Err(LayoutError::RankWidth { rank, width });
            }
        }

        Ok(Layout { placements })
    }

    /// Returns the standard starting layout.
    pub fn starting() -> Self {
        let mut placements = Vec::with_capacity(32);
        for (col, kind) in PieceKind::BACK_RANK.iter().enumerate() {
            let col = col as u8;
            placements.extend(Square::new(0, col).map(|sq| (sq, *kind, Color::Black)));
            placements.extend(Square::new(1, col).map(|sq| (sq, PieceKind::Pawn, Color::Black)));
            placements.extend(Square::new(6, col).map(|sq| (sq, PieceKind::Pawn, Color::White)));
            placements.extend(Square::new(7, col).map(|sq| (sq, *kind, Color::White)));
        }
        Layout { placements }
    }

    /// Returns every placed piece.
    pub fn placements(&self) -> &[(Square, PieceKind, Color)] {
        &self.placements
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::starting()
    }
}
