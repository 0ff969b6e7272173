//! Board state and move execution.

use std::fmt;

use chess_core::{Color, Layout, Square, BOARD_SIZE};
use tracing::debug;

use crate::{MoveError, MoveSet, Piece, TurnOrder};

const EMPTY_SQUARE: &str = "--";

/// The 8x8 grid, the side to move, and per-side move counters.
///
/// The board owns every piece placed on it. A capture drops the captured
/// piece from the grid; it is not tracked afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Occupants indexed `[row][col]`, row 0 being rank 8.
    squares: [[Option<Piece>; BOARD_SIZE as usize]; BOARD_SIZE as usize],
    side_to_move: Color,
    /// Successful moves made by each color, indexed by [`Color::index`].
    moves_made: [u32; 2],
    turn_order: TurnOrder,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Creates a board in the standard starting position with White to move.
    pub fn new() -> Self {
        Self::from_layout(&Layout::starting(), Color::White)
    }

    /// Creates a board from a piece placement.
    pub fn from_layout(layout: &Layout, side_to_move: Color) -> Self {
        let mut board = Board {
            squares: [[None; BOARD_SIZE as usize]; BOARD_SIZE as usize],
            side_to_move,
            moves_made: [0; 2],
            turn_order: TurnOrder::default(),
        };
        for &(square, kind, color) in layout.placements() {
            *board.slot_mut(square) = Some(Piece::new(kind, color, square));
        }
        board
    }

    /// Sets the turn enforcement policy.
    pub fn with_turn_order(mut self, turn_order: TurnOrder) -> Self {
        self.turn_order = turn_order;
        self
    }

    #[inline]
    pub fn turn_order(&self) -> TurnOrder {
        self.turn_order
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Returns how many successful moves pieces of `color` have made.
    #[inline]
    pub fn moves_made(&self, color: Color) -> u32 {
        self.moves_made[color.index()]
    }

    /// Returns the piece on `square`, if any.
    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<&Piece> {
        self.squares[square.row() as usize][square.col() as usize].as_ref()
    }

    /// Iterates every piece on the board, rank 8 first.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.squares.iter().flatten().flatten()
    }

    #[inline]
    fn slot_mut(&mut self, square: Square) -> &mut Option<Piece> {
        &mut self.squares[square.row() as usize][square.col() as usize]
    }

    /// Moves the piece on `start` to `end`, given in algebraic notation.
    ///
    /// On success the side to move flips. On any error the board is left
    /// untouched.
    ///
    /// Under [`TurnOrder::PawnOnly`] only pawns are held to the side to move,
    /// so other pieces of either color may be moved at any time.
    pub fn move_piece(&mut self, start: &str, end: &str) -> Result<(), MoveError> {
        let from = Square::from_algebraic(start)?;
        let piece = *self.piece_at(from).ok_or(MoveError::EmptySquare(from))?;

        if self.turn_order == TurnOrder::Strict && piece.color() != self.side_to_move {
            debug!(%from, piece = %piece.display_code(), side = %self.side_to_move, "move out of turn");
            return Err(MoveError::OutOfTurn {
                piece: piece.color(),
                side: self.side_to_move,
            });
        }

        let to = Square::from_algebraic(end)?;
        if !self.relocate(from, to) {
            debug!(%from, %to, piece = %piece.display_code(), "illegal destination");
            return Err(MoveError::IllegalDestination { from, to });
        }

        self.moves_made[piece.color().index()] += 1;
        self.side_to_move = self.side_to_move.opposite();
        debug!(
            %from,
            %to,
            piece = %piece.display_code(),
            next = %self.side_to_move,
            "move applied"
        );
        Ok(())
    }

    /// Returns the destinations of the piece on `start`.
    pub fn available_moves(&self, start: &str) -> Result<MoveSet, MoveError> {
        let from = Square::from_algebraic(start)?;
        let piece = self.piece_at(from).ok_or(MoveError::EmptySquare(from))?;
        Ok(piece.possible_moves(self))
    }

    /// Re-validates and moves the occupant of `from` to `to`, dropping any
    /// piece standing on `to`. Returns false without touching the grid when
    /// the move is not legal.
    fn relocate(&mut self, from: Square, to: Square) -> bool {
        let legal = self
            .piece_at(from)
            .is_some_and(|piece| piece.validate_move(self, to));
        if !legal {
            return false;
        }

        let Some(mut piece) = self.slot_mut(from).take() else {
            return false;
        };
        piece.advance_to(to);
        *self.slot_mut(to) = Some(piece);
        true
    }

    /// Renders the grid with file letters and rank numbers on the borders.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let files: Vec<String> = (b'a'..b'a' + BOARD_SIZE)
            .map(|file| format!("{} ", file as char))
            .collect();
        let files = files.join(" ");

        writeln!(f, "   {}", files)?;
        for (row, cells) in self.squares.iter().enumerate() {
            let rank = BOARD_SIZE as usize - row;
            let cells: Vec<String> = cells
                .iter()
                .map(|cell| match cell {
                    Some(piece) => piece.display_code(),
                    None => EMPTY_SQUARE.to_string(),
                })
                .collect();
            writeln!(f, "{} {} {}", rank, cells.join(" "), rank)?;
        }
        writeln!(f, "   {}", files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::{PieceKind, SquareError};

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    fn board(layout: &str, side: Color) -> Board {
        Board::from_layout(&Layout::parse(layout).unwrap(), side)
    }

    #[test]
    fn starting_position() {
        let board = Board::new();
        assert_eq!(board.pieces().count(), 32);
        assert_eq!(board.side_to_move(), Color::White);
        assert_eq!(board.turn_order(), TurnOrder::PawnOnly);

        let e1 = board.piece_at(sq("e1")).unwrap();
        assert_eq!((e1.kind(), e1.color()), (PieceKind::King, Color::White));
        let d8 = board.piece_at(sq("d8")).unwrap();
        assert_eq!((d8.kind(), d8.color()), (PieceKind::Queen, Color::Black));
        assert!(board.piece_at(sq("e4")).is_none());

        for piece in board.pieces() {
            assert_eq!(board.piece_at(piece.square()), Some(piece));
            assert_eq!(piece.move_count(), 0);
        }
    }

    #[test]
    fn move_flips_side_and_counts() {
        let mut board = Board::new();
        board.move_piece("e2", "e4").unwrap();
        assert_eq!(board.side_to_move(), Color::Black);
        assert_eq!(board.moves_made(Color::White), 1);
        assert_eq!(board.moves_made(Color::Black), 0);

        let pawn = board.piece_at(sq("e4")).unwrap();
        assert_eq!(pawn.square(), sq("e4"));
        assert_eq!(pawn.move_count(), 1);
        assert!(board.piece_at(sq("e2")).is_none());
    }

    #[test]
    fn move_rejects_malformed_coordinates() {
        let mut board = Board::new();
        let before = board.clone();
        assert_eq!(
            board.move_piece("z9", "e4"),
            Err(MoveError::InvalidSquare(SquareError::InvalidFile('z')))
        );
        assert_eq!(
            board.move_piece("e2", "e"),
            Err(MoveError::InvalidSquare(SquareError::InvalidLength(1)))
        );
        assert_eq!(board, before);
    }

    #[test]
    fn move_rejects_empty_square() {
        let mut board = Board::new();
        assert_eq!(
            board.move_piece("e4", "e5"),
            Err(MoveError::EmptySquare(sq("e4")))
        );
        assert_eq!(board.side_to_move(), Color::White);
    }

    #[test]
    fn illegal_move_leaves_board_unchanged() {
        let mut board = Board::new();
        let before = board.clone();
        assert_eq!(
            board.move_piece("e2", "e5"),
            Err(MoveError::IllegalDestination {
                from: sq("e2"),
                to: sq("e5")
            })
        );
        assert_eq!(board, before);
    }

    #[test]
    fn capture_removes_occupant() {
        let mut board = board("8/8/8/3p4/8/8/8/3R4", Color::White);
        board.move_piece("d1", "d5").unwrap();
        assert_eq!(board.pieces().count(), 1);
        let rook = board.piece_at(sq("d5")).unwrap();
        assert_eq!((rook.kind(), rook.color()), (PieceKind::Rook, Color::White));
    }

    #[test]
    fn cannot_capture_own_piece() {
        let mut board = Board::new();
        assert!(board.move_piece("a1", "a2").is_err());
    }

    #[test]
    fn pawn_only_allows_other_kinds_out_of_turn() {
        let mut board = Board::new();
        board.move_piece("b8", "c6").unwrap();
        assert_eq!(board.side_to_move(), Color::Black);
        assert_eq!(board.moves_made(Color::Black), 1);
    }

    #[test]
    fn strict_rejects_out_of_turn() {
        let mut board = Board::new().with_turn_order(TurnOrder::Strict);
        assert_eq!(
            board.move_piece("b8", "c6"),
            Err(MoveError::OutOfTurn {
                piece: Color::Black,
                side: Color::White
            })
        );
        board.move_piece("g1", "f3").unwrap();
        board.move_piece("b8", "c6").unwrap();
        assert_eq!(board.side_to_move(), Color::White);
    }

    #[test]
    fn available_moves_queries() {
        let board = Board::new();
        assert_eq!(board.available_moves("b1").unwrap().to_algebraic(), vec!["a3", "c3"]);
        assert_eq!(board.available_moves("e5"), Err(MoveError::EmptySquare(sq("e5"))));
        assert!(matches!(
            board.available_moves("e22"),
            Err(MoveError::InvalidSquare(_))
        ));
    }

    #[test]
    fn render_starting_position() {
        let expected = "   a  b  c  d  e  f  g  h 
8 BR BN BB BQ BK BB BN BR 8
7 BP BP BP BP BP BP BP BP 7
6 -- -- -- -- -- -- -- -- 6
5 -- -- -- -- -- -- -- -- 5
4 -- -- -- -- -- -- -- -- 4
3 -- -- -- -- -- -- -- -- 3
2 WP WP WP WP WP WP WP WP 2
1 WR WN WB WQ WK WB WN WR 1
   a  b  c  d  e  f  g  h 
";
        assert_eq!(Board::new().render(), expected);
    }
}
