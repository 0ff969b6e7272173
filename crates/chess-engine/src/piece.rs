//! A single occupant of a board square.

use chess_core::{Color, PieceKind, Square};

use crate::movegen::{piece_moves, MoveSet};
use crate::Board;

/// One piece on the board.
///
/// A piece does not hold a reference to its board; the board is passed in
/// whenever the piece needs to look at occupancy. The stored square always
/// matches the grid slot the board keeps it in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    color: Color,
    square: Square,
    move_count: u32,
}

impl Piece {
    pub(crate) const fn new(kind: PieceKind, color: Color, square: Square) -> Self {
        Piece {
            kind,
            color,
            square,
            move_count: 0,
        }
    }

    #[inline]
    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    #[inline]
    pub const fn color(&self) -> Color {
        self.color
    }

    /// Returns the square this piece stands on.
    #[inline]
    pub const fn square(&self) -> Square {
        self.square
    }

    /// Returns how many times this piece has moved.
    #[inline]
    pub const fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Returns the two-character tag, color prefix then kind letter (e.g. `WP`).
    pub fn display_code(&self) -> String {
        let mut code = String::with_capacity(2);
        code.push(self.color.prefix());
        code.push(self.kind.letter());
        code
    }

    /// Returns every square this piece can reach on `board`.
    pub fn possible_moves(&self, board: &Board) -> MoveSet {
        piece_moves(board, self)
    }

    /// Returns true if `destination` is one of [`possible_moves`](Self::possible_moves).
    ///
    /// Algebraic text is parsed into a [`Square`] at the board boundary, in
    /// [`Board::move_piece`], before it reaches here.
    pub fn validate_move(&self, board: &Board, destination: Square) -> bool {
        self.possible_moves(board).contains(destination)
    }

    /// Records a move to `destination`.
    pub(crate) fn advance_to(&mut self, destination: Square) {
        self.square = destination;
        self.move_count += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn display_codes() {
        let codes: Vec<String> = PieceKind::ALL
            .iter()
            .map(|&kind| Piece::new(kind, Color::White, sq("a1")).display_code())
            .collect();
        assert_eq!(codes, vec!["WP", "WN", "WB", "WR", "WQ", "WK"]);
        assert_eq!(
            Piece::new(PieceKind::Queen, Color::Black, sq("d8")).display_code(),
            "BQ"
        );
    }

    #[test]
    fn advance_updates_square_and_count() {
        let mut piece = Piece::new(PieceKind::Rook, Color::White, sq("a1"));
        assert_eq!(piece.move_count(), 0);
        piece.advance_to(sq("a5"));
        assert_eq!(piece.square(), sq("a5"));
        assert_eq!(piece.move_count(), 1);
    }

    #[test]
    fn validate_move_uses_current_board() {
        let board = Board::new();
        let knight = board.piece_at(sq("g1")).copied().unwrap();
        assert!(knight.validate_move(&board, sq("f3")));
        assert!(knight.validate_move(&board, sq("h3")));
        assert!(!knight.validate_move(&board, sq("e2")));
        assert!(!knight.validate_move(&board, sq("g3")));
    }
}
