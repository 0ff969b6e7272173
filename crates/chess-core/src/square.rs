//! Board square representation and algebraic notation.
//!
//! Squares are addressed by `(row, col)`, where row 0 is rank 8 (the far
//! rank from White's side) and col 0 is file 'a'.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of rows and columns on the board.
pub const BOARD_SIZE: u8 = 8;

/// Errors that can occur when parsing algebraic notation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SquareError {
    #[error("invalid square: expected 2 characters, got {0}")]
    InvalidLength(usize),

    #[error("invalid file '{0}': expected 'a'-'h'")]
    InvalidFile(char),

    #[error("invalid rank '{0}': expected '1'-'8'")]
    InvalidRank(char),
}

/// A square on the board, indexed 0-63.
///
/// Squares are indexed row-major from the far rank:
/// - a8 = 0, b8 = 1, ..., h8 = 7
/// - a7 = 8, ..., h1 = 63
///
/// Ordering follows the index, so sets of squares iterate rank 8 first.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    /// Creates a square from a zero-based row and column.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Square(row * BOARD_SIZE + col))
        } else {
            None
        }
    }

    /// Creates a square from index (0-63).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < BOARD_SIZE * BOARD_SIZE {
            Some(Square(index))
        } else {
            None
        }
    }

    /// Parses a square from algebraic notation (e.g., "e4").
    ///
    /// The file letter is case-insensitive.
    pub fn from_algebraic(s: &str) -> Result<Self, SquareError> {
        let mut chars = s.chars();
        let (file, rank) = match (chars.next(), chars.next(), chars.next()) {
            (Some(file), Some(rank), None) => (file, rank),
            _ => return Err(SquareError::InvalidLength(s.chars().count())),
        };

        let file_lower = file.to_ascii_lowercase();
        if !('a'..='h').contains(&file_lower) {
            return Err(SquareError::InvalidFile(file));
        }
        if !('1'..='8').contains(&rank) {
            return Err(SquareError::InvalidRank(rank));
        }

        let col = file_lower as u8 - b'a';
        let row = BOARD_SIZE - (rank as u8 - b'0');
        Ok(Square(row * BOARD_SIZE + col))
    }

    /// Returns the index (0-63).
    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Returns the zero-based row (0 is rank 8).
    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / BOARD_SIZE
    }

    /// Returns the zero-based column (0 is file 'a').
    #[inline]
    pub const fn col(self) -> u8 {
        self.0 % BOARD_SIZE
    }

    /// Returns the file letter ('a'-'h').
    #[inline]
    pub const fn file_char(self) -> char {
        (b'a' + self.col()) as char
    }

    /// Returns the rank digit ('1'-'8').
    #[inline]
    pub const fn rank_char(self) -> char {
        (b'0' + BOARD_SIZE - self.row()) as char
    }

    /// Returns the algebraic notation for this square.
    pub fn to_algebraic(self) -> String {
        format!("{}{}", self.file_char(), self.rank_char())
    }

    /// Returns the square displaced by the given row and column deltas,
    /// or `None` if that leaves the board.
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = self.row() as i8 + d_row;
        let col = self.col() as i8 + d_col;
        if (0..BOARD_SIZE as i8).contains(&row) && (0..BOARD_SIZE as i8).contains(&col) {
            Square::new(row as u8, col as u8)
        } else {
            None
        }
    }

    /// Iterates every square, a8 first.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE * BOARD_SIZE).map(Square)
    }
}

/// Formats a zero-based `(row, col)` pair as algebraic notation.
///
/// Returns `None` when either index is outside 0-7.
pub fn format_square(row: u8, col: u8) -> Option<String> {
    Square::new(row, col).map(Square::to_algebraic)
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Square::from_algebraic(s)
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self.to_algebraic())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn square_new() {
        let e4 = Square::new(4, 4).unwrap();
        assert_eq!(e4.row(), 4);
        assert_eq!(e4.col(), 4);
        assert_eq!(e4.index(), 36);
        assert_eq!(Square::new(8, 0), None);
        assert_eq!(Square::new(0, 8), None);
    }

    #[test]
    fn square_from_algebraic() {
        assert_eq!(Square::from_algebraic("a8"), Ok(Square::new(0, 0).unwrap()));
        assert_eq!(Square::from_algebraic("h1"), Ok(Square::new(7, 7).unwrap()));
        assert_eq!(Square::from_algebraic("e2"), Ok(Square::new(6, 4).unwrap()));
        assert_eq!(Square::from_algebraic("E2"), Square::from_algebraic("e2"));
    }

    #[test]
    fn square_from_algebraic_rejects_malformed_text() {
        assert_eq!(Square::from_algebraic(""), Err(SquareError::InvalidLength(0)));
        assert_eq!(Square::from_algebraic("e"), Err(SquareError::InvalidLength(1)));
        assert_eq!(Square::from_algebraic("e22"), Err(SquareError::InvalidLength(3)));
        assert_eq!(Square::from_algebraic("i1"), Err(SquareError::InvalidFile('i')));
        assert_eq!(Square::from_algebraic("a9"), Err(SquareError::InvalidRank('9')));
        assert_eq!(Square::from_algebraic("a0"), Err(SquareError::InvalidRank('0')));
        assert_eq!(Square::from_algebraic("4e"), Err(SquareError::InvalidFile('4')));
        assert_eq!(Square::from_algebraic("é4"), Err(SquareError::InvalidFile('é')));
    }

    #[test]
    fn square_to_algebraic() {
        assert_eq!(Square::new(0, 0).unwrap().to_algebraic(), "a8");
        assert_eq!(Square::new(7, 7).unwrap().to_algebraic(), "h1");
        assert_eq!(Square::new(4, 4).unwrap().to_algebraic(), "e4");
    }

    #[test]
    fn format_square_rejects_out_of_range() {
        assert_eq!(format_square(7, 0).as_deref(), Some("a1"));
        assert_eq!(format_square(8, 0), None);
        assert_eq!(format_square(0, 200), None);
    }

    #[test]
    fn offset_stays_on_board() {
        let a8 = Square::new(0, 0).unwrap();
        assert_eq!(a8.offset(-1, 0), None);
        assert_eq!(a8.offset(0, -1), None);
        assert_eq!(a8.offset(1, 1), Square::new(1, 1));
        let h1 = Square::new(7, 7).unwrap();
        assert_eq!(h1.offset(1, 0), None);
        assert_eq!(h1.offset(-2, -1), Square::new(5, 6));
    }

    #[test]
    fn display_and_debug() {
        let e4: Square = "e4".parse().unwrap();
        assert_eq!(format!("{}", e4), "e4");
        assert_eq!(format!("{:?}", e4), "Square(e4)");
    }

    #[test]
    fn all_squares() {
        let squares: Vec<Square> = Square::all().collect();
        assert_eq!(squares.len(), 64);
        assert_eq!(squares[0].to_algebraic(), "a8");
        assert_eq!(squares[63].to_algebraic(), "h1");
    }

    proptest! {
        #[test]
        fn index_pair_round_trips(row in 0u8..8, col in 0u8..8) {
            let text = format_square(row, col).unwrap();
            let square = Square::from_algebraic(&text).unwrap();
            prop_assert_eq!((square.row(), square.col()), (row, col));
        }

        #[test]
        fn algebraic_text_round_trips(s in "[a-h][1-8]") {
            let square = Square::from_algebraic(&s).unwrap();
            prop_assert_eq!(square.to_algebraic(), s);
        }

        #[test]
        fn arbitrary_text_never_panics(s in "\\PC{0,4}") {
            let _ = Square::from_algebraic(&s);
        }
    }
}
